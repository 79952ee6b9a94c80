/// Conversions between gpu_buffer_object types and OpenGL enums

use gl::types::GLenum;
use gpu_buffer_object::gbo::{BackendTarget, TargetSymbols, UsageHint};

/// OpenGL usage enum for a usage hint
pub fn gl_usage(usage: UsageHint) -> GLenum {
    match usage {
        UsageHint::StaticDraw => gl::STATIC_DRAW,
        UsageHint::DynamicDraw => gl::DYNAMIC_DRAW,
        UsageHint::StreamDraw => gl::STREAM_DRAW,
    }
}

/// Human-readable name of a `glGetError` code
pub fn gl_error_name(code: GLenum) -> &'static str {
    match code {
        gl::NO_ERROR => "GL_NO_ERROR",
        gl::INVALID_ENUM => "GL_INVALID_ENUM",
        gl::INVALID_VALUE => "GL_INVALID_VALUE",
        gl::INVALID_OPERATION => "GL_INVALID_OPERATION",
        gl::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        gl::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        _ => "unknown GL error",
    }
}

/// Binding targets of an OpenGL context
///
/// `GL_TEXTURE_BUFFER` is only advertised when the context provides
/// buffer textures (OpenGL 3.1+).
pub(crate) fn target_symbols(texture_buffers: bool) -> TargetSymbols {
    TargetSymbols {
        array_buffer: BackendTarget(gl::ARRAY_BUFFER),
        element_array_buffer: BackendTarget(gl::ELEMENT_ARRAY_BUFFER),
        texture_buffer: texture_buffers.then_some(BackendTarget(gl::TEXTURE_BUFFER)),
    }
}

#[cfg(test)]
#[path = "gl_format_tests.rs"]
mod tests;
