//! Error codes following a structured numbering system
//!
//! Error code ranges:
//! - IL0001-IL0099: Parse errors (raw expression structure)
//! - IL0100-IL0199: Evaluation errors (runtime)
//! - IL0200-IL0299: Configuration errors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a parse error (0001-0099)
    pub const fn is_parse_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is an evaluation error (0100-0199)
    pub const fn is_evaluation_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a configuration error (0200-0299)
    pub const fn is_configuration_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IL{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Parse errors (0001-0099)
    map.insert(1, ErrorInfo::new("Unexpected input"));
    map.insert(2, ErrorInfo::new("Undefined operand")
        .with_help("Operands and collections must not be empty"));
    map.insert(3, ErrorInfo::new("Unknown operator"));
    map.insert(4, ErrorInfo::new("Invalid operand")
        .with_help("Operands must be scalars, references or arrays"));
    map.insert(5, ErrorInfo::new("Invalid operand count"));
    map.insert(6, ErrorInfo::new("Unsupported type casting")
        .with_help("Supported casts are Number, Integer, Float, String and Boolean"));
    map.insert(7, ErrorInfo::new("Nesting limit exceeded"));

    // Evaluation errors (0100-0199)
    map.insert(100, ErrorInfo::new("Non-boolean logical operand"));
    map.insert(101, ErrorInfo::new("Invalid conversion"));
    map.insert(102, ErrorInfo::new("Interpolation limit exceeded"));
    map.insert(103, ErrorInfo::new("Evaluation depth limit exceeded"));

    // Configuration errors (0200-0299)
    map.insert(200, ErrorInfo::new("Unknown operator name"));
    map.insert(201, ErrorInfo::new("Invalid ignored path pattern"));

    map
});

// Parse errors
pub const IL0001: ErrorCode = ErrorCode::new(1);
pub const IL0002: ErrorCode = ErrorCode::new(2);
pub const IL0003: ErrorCode = ErrorCode::new(3);
pub const IL0004: ErrorCode = ErrorCode::new(4);
pub const IL0005: ErrorCode = ErrorCode::new(5);
pub const IL0006: ErrorCode = ErrorCode::new(6);
pub const IL0007: ErrorCode = ErrorCode::new(7);

// Evaluation errors
pub const IL0100: ErrorCode = ErrorCode::new(100);
pub const IL0101: ErrorCode = ErrorCode::new(101);
pub const IL0102: ErrorCode = ErrorCode::new(102);
pub const IL0103: ErrorCode = ErrorCode::new(103);

// Configuration errors
pub const IL0200: ErrorCode = ErrorCode::new(200);
pub const IL0201: ErrorCode = ErrorCode::new(201);
