//! illogical error types

use crate::ErrorCode;
use thiserror::Error;

/// Main illogical error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllogicalError {
    /// Raw expression could not be turned into a node tree
    #[error("{code}: {message}")]
    Parse {
        code: ErrorCode,
        message: String,
        /// Raw input (JSON text) the error was raised for
        expression: String,
        /// Additional diagnostic context, e.g. a suppressed earlier error
        context: Option<String>,
    },

    /// Evaluation of a parsed tree failed
    #[error("{code}: {message}")]
    Evaluation {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// Engine options are invalid
    #[error("{code}: {message}")]
    Configuration { code: ErrorCode, message: String },
}

impl IllogicalError {
    /// Create a parse error
    pub fn parse(
        code: ErrorCode,
        message: impl Into<String>,
        expression: impl Into<String>,
    ) -> Self {
        debug_assert!(code.is_parse_error(), "{code} is not a parse error code");
        Self::Parse {
            code,
            message: message.into(),
            expression: expression.into(),
            context: None,
        }
    }

    /// Create an evaluation error
    pub fn evaluation(code: ErrorCode, message: impl Into<String>) -> Self {
        debug_assert!(code.is_evaluation_error(), "{code} is not an evaluation error code");
        Self::Evaluation {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error
    pub fn configuration(code: ErrorCode, message: impl Into<String>) -> Self {
        debug_assert!(code.is_configuration_error(), "{code} is not a configuration error code");
        Self::Configuration {
            code,
            message: message.into(),
        }
    }

    /// Attach context information. Configuration errors carry none.
    pub fn with_context(mut self, value: impl Into<String>) -> Self {
        match &mut self {
            Self::Parse { context, .. } | Self::Evaluation { context, .. } => {
                *context = Some(value.into());
            }
            Self::Configuration { .. } => {}
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Parse { code, .. } => *code,
            Self::Evaluation { code, .. } => *code,
            Self::Configuration { code, .. } => *code,
        }
    }

    /// Get the human-readable message without the code prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Parse { message, .. } => message,
            Self::Evaluation { message, .. } => message,
            Self::Configuration { message, .. } => message,
        }
    }

    /// Get the context if available
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Parse { context, .. } | Self::Evaluation { context, .. } => context.as_deref(),
            Self::Configuration { .. } => None,
        }
    }

    /// Help text registered for the error code
    pub fn help(&self) -> Option<&'static str> {
        self.code().info().help
    }

    /// Render the error with its code description, context and help
    pub fn report(&self) -> String {
        let mut report = format!("{} ({})", self, self.code().info().description);
        if let Some(context) = self.context() {
            report.push_str(&format!("\n  context: {context}"));
        }
        if let Some(help) = self.help() {
            report.push_str(&format!("\n  help: {help}"));
        }
        report
    }
}
