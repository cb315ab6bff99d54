use std::error::Error;
use std::fmt::{Display, Formatter};

/// Common arclib error type.
///
/// Failures carry a human readable message plus, optionally, the text
/// of the lower level error that triggered them.
#[derive(Debug)]
pub struct ArcError {
    message: String,
    cause: Option<String>,
}

impl Display for ArcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}\n   cause: {}", self.message, cause),
            None => write!(f, "{}", self.message),
        }
    }
}

impl Error for ArcError {}

impl From<&str> for ArcError {
    fn from(s: &str) -> ArcError {
        ArcError {
            message: s.to_string(),
            cause: None,
        }
    }
}

impl From<String> for ArcError {
    fn from(s: String) -> ArcError {
        ArcError {
            message: s,
            cause: None,
        }
    }
}

impl ArcError {
    pub fn add_cause(mut self, cause: &str) -> ArcError {
        self.cause = Some(cause.into());
        self
    }
}

// Generic Result type for the arclib tools.
pub type ArcResult<T> = Result<T, ArcError>;
