pub mod applier;
pub mod bindings;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod parallax;
pub mod scroll;
pub mod tilt;
pub mod toggle;
pub mod transform;

pub use applier::*;
pub use bindings::*;
pub use constants::*;
pub use error::*;
pub use geometry::*;
pub use parallax::*;
pub use scroll::*;
pub use tilt::*;
pub use toggle::*;
pub use transform::*;
