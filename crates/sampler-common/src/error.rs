//! Error types and error codes for Sampler
//!
//! This module defines:
//! - `SamplerError`: Application-specific error enum
//! - `ErrorCode`: Structured error codes for API responses

use serde::{Deserialize, Serialize};

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum SamplerError {
    #[error("caused: {0}")]
    IllegalArgument(String),

    #[error("item '{0}' not exist!")]
    ItemNotExist(u64),

    #[error("invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("upload size {0} is over limit {1}")]
    OverMaxSize(usize, usize),

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("demonstration failure requested by client")]
    DemonstrationError,

    #[error("internal error: {0}")]
    InternalError(String),
}

/// Error code structure for API responses
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorCode<'a> {
    pub code: i32,
    pub message: &'a str,
}

// General success and error codes
pub const SUCCESS: ErrorCode<'static> = ErrorCode {
    code: 0,
    message: "success",
};

pub const PARAMETER_MISSING: ErrorCode<'static> = ErrorCode {
    code: 10000,
    message: "parameter missing",
};

pub const PARAMETER_VALIDATE_ERROR: ErrorCode<'static> = ErrorCode {
    code: 20002,
    message: "parameter validate error",
};

pub const RESOURCE_NOT_FOUND: ErrorCode<'static> = ErrorCode {
    code: 20004,
    message: "resource not found",
};

pub const OVER_MAX_SIZE: ErrorCode<'static> = ErrorCode {
    code: 5034,
    message: "upload size is over limit",
};

pub const SERVER_ERROR: ErrorCode<'static> = ErrorCode {
    code: 30000,
    message: "server error",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampler_error_display() {
        let err = SamplerError::IllegalArgument("invalid param".to_string());
        assert_eq!(format!("{}", err), "caused: invalid param");

        let err = SamplerError::ItemNotExist(42);
        assert_eq!(format!("{}", err), "item '42' not exist!");

        let err = SamplerError::InvalidNumber("abc".to_string());
        assert_eq!(format!("{}", err), "invalid number: 'abc'");

        let err = SamplerError::OverMaxSize(2048, 1024);
        assert_eq!(format!("{}", err), "upload size 2048 is over limit 1024");
    }

    #[test]
    fn test_error_code_constants() {
        assert_eq!(SUCCESS.code, 0);
        assert_eq!(SUCCESS.message, "success");
        assert_eq!(PARAMETER_MISSING.code, 10000);
        assert_eq!(RESOURCE_NOT_FOUND.code, 20004);
        assert_eq!(SERVER_ERROR.code, 30000);
    }
}
