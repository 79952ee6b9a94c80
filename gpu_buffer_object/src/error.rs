//! Error types for GPU buffer objects
//!
//! This module defines the error type returned by the fallible buffer object
//! operations and by graphics context backends.

use std::fmt;

use crate::buffer_object::Category;

/// Result type for buffer object operations
pub type Result<T> = std::result::Result<T, Error>;

/// Buffer object errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Upload rejected: the buffer already exists under a fixed category
    IncompatibleBuffer {
        /// Category the caller asked to upload as
        requested: Category,
        /// Category the existing buffer was allocated as
        fixed: Category,
    },

    /// The backend could not create a buffer resource
    AllocationFailed(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Backend-specific error (OpenGL, poisoned context lock, etc.)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IncompatibleBuffer { requested, fixed } => write!(
                f,
                "Trying to upload array buffer to incompatible buffer. (requested {}, allocated as {})",
                requested, fixed
            ),
            Error::AllocationFailed(msg) => write!(f, "Buffer allocation failed: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an error and build an `Error::BackendError` from it
///
/// # Example
///
/// ```no_run
/// # use gpu_buffer_object::gbo_err;
/// let err = gbo_err!("gbo::GlContext", "glGenBuffers returned {}", 0);
/// ```
#[macro_export]
macro_rules! gbo_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::gbo_error!($source, "{}", message);
        $crate::gbo::Error::BackendError(message)
    }};
}

/// Log an error and return early with an `Error::BackendError`
///
/// # Example
///
/// ```no_run
/// # use gpu_buffer_object::gbo_bail;
/// fn check(name: u32) -> gpu_buffer_object::gbo::Result<()> {
///     if name == 0 {
///         gbo_bail!("gbo::GlContext", "glGenBuffers returned 0");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! gbo_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::gbo_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
