/// Graphics context module - the backend capability contract

// Module declarations
pub mod graphics_context;

// Re-export everything from graphics_context.rs
pub use graphics_context::*;

// Mock graphics context for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_context;
