//! # Application Error Type
//!
//! Unified error type for menu commands and startup.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Menu choice "4. Record sale"                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  AppResult<Outcome>                                              │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad input? ──── ValidationError ───────────────┐               │  │
//! │  │         │                                        │               │  │
//! │  │         ▼                                        ▼               │  │
//! │  │  Rule broken? ── CoreError::InsufficientStock ── AppError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Session prints "Error: Insufficient stock for Rice: ..." and shows    │
//! │  the menu again. Only InputClosed and Io end the loop.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::CoreError;
use stockroom_store::StoreError;

use crate::config::ConfigError;

/// Error returned from menu commands and startup steps.
///
/// Carries a machine-readable `code` (used by the session to decide whether to
/// continue) and the human-readable `message` that gets printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// No item with the given name
    NotFound,

    /// Typed input failed parsing or validation
    ValidationError,

    /// Item name already taken
    DuplicateItem,

    /// Sale larger than the stock on hand
    InsufficientStock,

    /// Loading or saving the inventory file failed
    StorageError,

    /// The config file is unreadable or invalid
    ConfigError,

    /// Input reached end-of-file in the middle of the session
    InputClosed,

    /// Writing to the terminal failed
    Io,
}

impl AppError {
    /// Creates a new application error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Input ended while a prompt was waiting for an answer.
    pub fn input_closed() -> Self {
        AppError::new(ErrorCode::InputClosed, "Input closed")
    }

    /// True for errors after which the menu loop cannot continue.
    pub fn is_fatal(&self) -> bool {
        matches!(self.code, ErrorCode::InputClosed | ErrorCode::Io)
    }
}

/// Converts core errors to application errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(name) => {
                AppError::new(ErrorCode::NotFound, format!("Item not found: {}", name))
            }
            CoreError::DuplicateItem {
                requested,
                existing,
            } => {
                let message = if requested == existing {
                    format!("Item '{}' already exists", existing)
                } else {
                    format!("Item '{}' already exists as '{}'", requested, existing)
                };
                AppError::new(ErrorCode::DuplicateItem, message)
            }
            CoreError::InsufficientStock {
                name,
                available,
                requested,
            } => AppError::new(
                ErrorCode::InsufficientStock,
                format!(
                    "Insufficient stock for {}: {} available, {} requested",
                    name, available, requested
                ),
            ),
            CoreError::Validation(e) => AppError::validation(e.to_string()),
        }
    }
}

impl From<stockroom_core::ValidationError> for AppError {
    fn from(err: stockroom_core::ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Converts store errors to application errors.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::Io { path, source } => {
                tracing::error!(path = %path.display(), error = %source, "Inventory file I/O failed");
            }
            StoreError::Serialize(reason) => {
                tracing::error!(%reason, "Inventory serialization failed");
            }
            _ => {}
        }
        AppError::new(ErrorCode::StorageError, err.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

/// Terminal read/write failures.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::new(ErrorCode::Io, format!("Terminal I/O failed: {}", err))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
