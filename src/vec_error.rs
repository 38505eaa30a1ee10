//! vector error type

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub struct VecError {
    err: String,
}

impl VecError {
    pub fn new(err: &str) -> VecError {
        VecError {
            err: err.to_string(),
        }
    }

    /// error message without the `[VecError]` prefix
    pub fn message(&self) -> &str {
        &self.err
    }
}

impl Display for VecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[VecError]: {}", self.err)
    }
}

impl Error for VecError {}

#[macro_export]
macro_rules! vec_err {
    ( $x:expr ) => {{
        $crate::vec_error::VecError::new(format!("{}:{} : {}", file!(), line!(), $x).as_str())
    }};
}
