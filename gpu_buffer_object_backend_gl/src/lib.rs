/*!
# GPU Buffer Object - OpenGL Backend

OpenGL implementation of the `gpu_buffer_object` graphics context.

This crate maps the `GraphicsContext` capability contract onto OpenGL
buffer object calls using the `gl` function-pointer bindings. The caller
owns the OpenGL context: it must be current on the calling thread and the
function pointers must be loaded before a `GlGraphicsContext` is created.
*/

// OpenGL implementation modules
mod gl_context;
mod gl_format;

pub use gl_context::GlGraphicsContext;
pub use gl_format::{gl_error_name, gl_usage};
