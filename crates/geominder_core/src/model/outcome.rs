//! Success/error outcome returned by data-access operations.
//!
//! # Invariants
//! - Exactly one variant is populated.
//! - There is no implicit conversion between variants; callers match first.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Outcome of a repository call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum DataResult<T> {
    Success(T),
    Error {
        message: String,
        code: Option<i32>,
    },
}

impl<T> DataResult<T> {
    /// Builds an error outcome without a status code.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            code: None,
        }
    }

    /// Builds an error outcome carrying a status code.
    pub fn error_with_code(message: impl Into<String>, code: i32) -> Self {
        Self::Error {
            message: message.into(),
            code: Some(code),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Returns the payload, discarding any error.
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Error { .. } => None,
        }
    }

    /// Returns the error message when this is an error outcome.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error { message, .. } => Some(message.as_str()),
        }
    }

    /// Maps the success payload, keeping errors untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DataResult<U> {
        match self {
            Self::Success(data) => DataResult::Success(f(data)),
            Self::Error { message, code } => DataResult::Error { message, code },
        }
    }

    /// Converts into a std `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<T, DataError> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Error { message, code } => Err(DataError { message, code }),
        }
    }
}

/// Error half of [`DataResult`] as a standalone error value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataError {
    pub message: String,
    pub code: Option<i32>,
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (code {code})", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl Error for DataError {}

#[cfg(test)]
mod tests {
    use super::DataResult;

    #[test]
    fn map_only_touches_success() {
        let ok: DataResult<i32> = DataResult::Success(2);
        assert_eq!(ok.map(|value| value * 2), DataResult::Success(4));

        let err: DataResult<i32> = DataResult::error_with_code("boom", 7);
        let mapped = err.map(|value| value * 2);
        assert_eq!(mapped.error_message(), Some("boom"));
        assert!(matches!(mapped, DataResult::Error { code: Some(7), .. }));
    }

    #[test]
    fn into_result_carries_message_and_code() {
        let err: DataResult<()> = DataResult::error_with_code("missing", 404);
        let converted = err.into_result().unwrap_err();
        assert_eq!(converted.to_string(), "missing (code 404)");

        let ok: DataResult<&str> = DataResult::Success("x");
        assert_eq!(ok.into_result().unwrap(), "x");
    }
}
