use crate::models::Marker;

/// Slice the flattened text into one raw span per marker.
///
/// A span starts just past its marker's own text and runs to the next
/// marker's position, exclusive. The last marker has no closing boundary, so
/// its span is capped at `tail_window` bytes past the marker. Output depends
/// only on the sorted marker list and the text; no further searching happens
/// here.
pub fn segment<'a>(markers: &[Marker], full_text: &'a str, tail_window: usize) -> Vec<&'a str> {
    markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let start = marker.span_end.min(full_text.len());
            let end = match markers.get(i + 1) {
                Some(next) => next.pos,
                None => full_text.len().min(start.saturating_add(tail_window)),
            };
            // Overlapping markers can put the boundary before the span start
            let end = end.clamp(start, full_text.len());
            let end = floor_char_boundary(full_text, end);
            let start = floor_char_boundary(full_text, start);
            &full_text[start..end]
        })
        .collect()
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
