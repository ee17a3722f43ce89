use std::fmt::{Display, Formatter};
use std::ops::Add;

use float_cmp::{ApproxEq, F64Margin};
use serde::ser::{self, SerializeTuple};
use serde::{Deserialize, Serialize, Serializer};

use super::*;
use crate::gaze_error::GazeError;

/// `y` of a vector built from a single number
pub const DEFAULT_Y: f64 = 0.0;

/// mathematical vector, a point or offset in 2d space
///
/// immutable once built, every combinator returns a new value
#[derive(Default, Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "VectorArgs")]
pub struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    /// unchecked, components are stored as given
    ///
    /// use `gaze::vector((x, y))` to reject NaN and infinite components
    pub const fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    /// build from any constructor shape, see `VectorArgs`
    pub fn from_args<A: Into<VectorArgs>>(args: A) -> Result<Self, GazeError> {
        let (x, y) = args.into().into_components()?;
        Ok(Vector { x, y })
    }

    /// `x = n`, `y = DEFAULT_Y`
    pub fn from_scalar(n: f64) -> Result<Self, GazeError> {
        Self::from_args(n)
    }

    /// first element is `x`, second (if any) is `y`
    pub fn from_slice(seq: &[f64]) -> Result<Self, GazeError> {
        Self::from_args(seq)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// new vector with `c` added to `x`, `y` is kept
    pub fn add(self, c: f64) -> Self {
        Vector::new(self.x + c, self.y)
    }

    /// same as `add`, but the sum must stay finite
    pub fn try_add(self, c: f64) -> Result<Self, GazeError> {
        if !c.is_finite() {
            return Err(gaze_err!(&format!("add operand {} is not a finite number", c)));
        }
        let sum = self.add(c);
        Vector::from_args((sum.x, sum.y))
    }

    /// componentwise sum
    pub fn add_vector(self, other: Vector) -> Self {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        self.add_vector(rhs)
    }
}

impl ApproxEq for Vector {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin)
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Vector> for [f64; 2] {
    fn from(v: Vector) -> Self {
        [v.x, v.y]
    }
}

// json has no NaN or infinity, fail instead of writing null
impl Serialize for Vector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ser::Error::custom(format!(
                "can not serialize non-finite vector {}",
                self
            )));
        }
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.x)?;
        tup.serialize_element(&self.y)?;
        tup.end()
    }
}

impl TryFrom<VectorArgs> for Vector {
    type Error = GazeError;
    fn try_from(args: VectorArgs) -> Result<Self, Self::Error> {
        Vector::from_args(args)
    }
}
