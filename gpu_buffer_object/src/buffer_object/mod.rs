/// Buffer object module - the buffer lifecycle state machine

// Module declarations
pub mod category;
pub mod config;
pub mod buffer_object;
pub mod scoped;

// Re-export everything
pub use category::*;
pub use config::*;
pub use buffer_object::*;
pub use scoped::*;
