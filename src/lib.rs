//! 2d vector value type
//!
//! Build a vector from a number, a pair or a sequence
//!
//! ```
//! let v1 = gaze::vector((3, 5)).unwrap();
//! let v2 = gaze::vector(3).unwrap();
//! let v3 = gaze::vector([3, 5]).unwrap();
//!
//! assert_eq!(v1.y(), v3.y());
//! assert_eq!(v1.x(), v2.x());
//! assert_ne!(v1.y(), v2.y());
//! assert_eq!(v1.add(5.0).x(), 8.0);
//! ```

#[macro_use]
pub mod gaze_error;
pub mod gaze_model;
mod gaze_parser;

pub use gaze_error::GazeError;
pub use gaze_model::{Vector, VectorArgs, DEFAULT_Y};

/// crate version, filled in from Cargo.toml at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// build a vector from a number, a pair, or a 1 or 2 element sequence
pub fn vector<A: Into<VectorArgs>>(args: A) -> Result<Vector, GazeError> {
    Vector::from_args(args)
}

/// parse a vector from text, e.g. `3`, `3, 5`, `[3]` or `[3, 5]`
pub fn parse_vector(input: &str) -> Result<Vector, GazeError> {
    input.parse()
}
