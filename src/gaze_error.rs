//! gaze error type

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GazeError {
    #[error("[GazeError] invalid argument: {0}")]
    InvalidArgument(String),
}

impl GazeError {
    pub fn invalid_argument(err: &str) -> GazeError {
        GazeError::InvalidArgument(err.to_string())
    }
}

/// build a `GazeError::InvalidArgument` tagged with the caller location
#[macro_export]
macro_rules! gaze_err {
    ( $x:expr ) => {{
        $crate::gaze_error::GazeError::invalid_argument(
            format!("{}:{} : {}", file!(), line!(), $x).as_str(),
        )
    }};
}
