mod vector;
mod vector_args;

pub use self::vector::*;
pub use self::vector_args::*;
