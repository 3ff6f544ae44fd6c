pub mod marker;
pub mod metadata;
pub mod speech;

pub use marker::*;
pub use metadata::*;
pub use speech::*;
