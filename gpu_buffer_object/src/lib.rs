/*!
# GPU Buffer Object

Lifecycle management for a single GPU buffer resource.

A [`BufferObject`](gbo::BufferObject) owns one backend buffer handle and
negotiates its category (vertex array, element array or texture backing)
with the backend. Allocation is deferred until first use, the backend
target is locked in at allocation time, and conflicting requests are
reported as recoverable errors.

## Architecture

- **GraphicsContext**: Backend capability trait (create/bind/upload/delete)
- **BufferObject**: The buffer lifecycle state machine
- **BufferObjectConfig**: Construction-time initial values
- **UploadPolicy**: Re-upload rules for already allocated buffers
- **Diagnostics**: Global logger configuration

Backend implementations (e.g. `gpu_buffer_object_backend_gl`) provide
concrete types that implement `GraphicsContext`.
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod graphics_context;
pub mod buffer_object;

// Main gbo namespace module
pub mod gbo {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger configuration
    pub use crate::diagnostics::Diagnostics;

    // Backend contract
    pub use crate::graphics_context::{
        BackendTarget, BufferHandle, GraphicsContext, TargetSymbols, UsageHint,
    };

    // Buffer lifecycle
    pub use crate::buffer_object::{
        Allocation, BoundBuffer, BufferObject, BufferObjectConfig, Category, UploadPolicy,
    };

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }
}

// Re-export math library at crate root
pub use glam;
