/// Image collection and the collage entry point
pub mod builder;
/// Canvas creation and painting
pub mod compose;

pub use builder::CollageBuilder;
pub use compose::Canvas;
