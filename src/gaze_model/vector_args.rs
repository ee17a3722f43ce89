use serde::Deserialize;

use super::*;
use crate::gaze_error::GazeError;

/// Shape of the input a `Vector` is built from
///
/// `gaze::vector(3)`, `gaze::vector((3, 5))` and `gaze::vector([3, 5])` all
/// land here first, then go through one normalization step.
///
/// deserializes from `3`, `[3]` or `[3, 5]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VectorArgs {
    /// bare number, `y` falls back to `DEFAULT_Y`
    Scalar(f64),
    /// two positional numbers
    Pair(f64, f64),
    /// ordered sequence, only length 1 or 2 is valid
    Sequence(Vec<f64>),
}

impl VectorArgs {
    /// Normalize to `(x, y)`.
    pub fn into_components(self) -> Result<(f64, f64), GazeError> {
        let (x, y) = match self {
            VectorArgs::Scalar(n) => (n, DEFAULT_Y),
            VectorArgs::Pair(x, y) => (x, y),
            VectorArgs::Sequence(seq) => match seq[..] {
                [x] => (x, DEFAULT_Y),
                [x, y] => (x, y),
                _ => {
                    log::debug!("reject vector sequence of length {}", seq.len());
                    return Err(gaze_err!(&format!(
                        "vector sequence must have 1 or 2 elements, got {}",
                        seq.len()
                    )));
                }
            },
        };
        if !x.is_finite() || !y.is_finite() {
            log::debug!("reject non-finite vector component ({}, {})", x, y);
            return Err(gaze_err!(&format!(
                "vector component is not a finite number: ({}, {})",
                x, y
            )));
        }
        Ok((x, y))
    }
}

macro_rules! impl_from_numeric {
    ( $( $t:ty ),* ) => {
        $(
            impl From<$t> for VectorArgs {
                fn from(n: $t) -> Self {
                    VectorArgs::Scalar(n as f64)
                }
            }

            impl From<($t, $t)> for VectorArgs {
                fn from((x, y): ($t, $t)) -> Self {
                    VectorArgs::Pair(x as f64, y as f64)
                }
            }

            impl From<[$t; 1]> for VectorArgs {
                fn from(seq: [$t; 1]) -> Self {
                    VectorArgs::Sequence(vec![seq[0] as f64])
                }
            }

            impl From<[$t; 2]> for VectorArgs {
                fn from(seq: [$t; 2]) -> Self {
                    VectorArgs::Sequence(vec![seq[0] as f64, seq[1] as f64])
                }
            }
        )*
    };
}

// every value of these converts to f64 exactly
impl_from_numeric!(f64, f32, i32, u32);

impl From<&[f64]> for VectorArgs {
    fn from(seq: &[f64]) -> Self {
        VectorArgs::Sequence(seq.to_vec())
    }
}

impl From<Vec<f64>> for VectorArgs {
    fn from(seq: Vec<f64>) -> Self {
        VectorArgs::Sequence(seq)
    }
}
