/// GlGraphicsContext - OpenGL implementation of the GraphicsContext trait

use std::ffi::c_void;

use gl::types::{GLenum, GLsizeiptr, GLuint};
use gpu_buffer_object::gbo::{
    BackendTarget, BufferHandle, Error, GraphicsContext, Result, TargetSymbols, UsageHint,
};
use gpu_buffer_object::{gbo_bail, gbo_error, gbo_info};

use crate::gl_format::{gl_error_name, gl_usage, target_symbols};

const SOURCE: &str = "gbo::gl";

/// Upper bound on stale errors drained before an upload
const MAX_PENDING_ERRORS: usize = 16;

/// OpenGL graphics context
///
/// Holds no GL state of its own; every call goes straight to the loaded
/// function pointers. Not `Send`: OpenGL contexts are bound to a thread.
pub struct GlGraphicsContext {
    symbols: TargetSymbols,
    _not_send: std::marker::PhantomData<*const ()>,
}

impl GlGraphicsContext {
    /// Wrap the OpenGL context that is current on this thread
    ///
    /// # Errors
    ///
    /// Returns `Error::BackendError` if the buffer entry points have not
    /// been loaded.
    pub fn new() -> Result<Self> {
        let loaded = gl::GenBuffers::is_loaded()
            && gl::BindBuffer::is_loaded()
            && gl::BufferData::is_loaded()
            && gl::DeleteBuffers::is_loaded();
        if !loaded {
            gbo_bail!(SOURCE, "OpenGL buffer functions are not loaded; call gl::load_with first");
        }

        let texture_buffers = gl::TexBuffer::is_loaded();
        gbo_info!(SOURCE, "texture buffers {}", if texture_buffers { "available" } else { "unavailable" });

        Ok(Self {
            symbols: target_symbols(texture_buffers),
            _not_send: std::marker::PhantomData,
        })
    }

    /// Load the OpenGL function pointers with `loader`, then wrap the context
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gpu_buffer_object_backend_gl::GlGraphicsContext;
    ///
    /// # fn get_proc_address(_: &str) -> *const std::ffi::c_void { std::ptr::null() }
    /// let context = GlGraphicsContext::load_with(|symbol| get_proc_address(symbol))?;
    /// # Ok::<(), gpu_buffer_object::gbo::Error>(())
    /// ```
    pub fn load_with<F>(loader: F) -> Result<Self>
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);
        Self::new()
    }

    fn take_error() -> GLenum {
        unsafe { gl::GetError() }
    }

    fn clear_errors() {
        for _ in 0..MAX_PENDING_ERRORS {
            if Self::take_error() == gl::NO_ERROR {
                break;
            }
        }
    }
}

impl GraphicsContext for GlGraphicsContext {
    fn target_symbols(&self) -> TargetSymbols {
        self.symbols
    }

    fn create_buffer(&mut self) -> Result<BufferHandle> {
        let mut name: GLuint = 0;
        unsafe {
            gl::GenBuffers(1, &mut name);
        }

        BufferHandle::new(name).ok_or_else(|| {
            let code = Self::take_error();
            gbo_error!(SOURCE, "glGenBuffers returned 0 ({})", gl_error_name(code));
            Error::AllocationFailed(format!("glGenBuffers returned 0 ({})", gl_error_name(code)))
        })
    }

    fn bind_buffer(&mut self, target: BackendTarget, handle: Option<BufferHandle>) {
        let name = handle.map_or(0, |handle| handle.raw());
        unsafe { gl::BindBuffer(target.0, name) }
    }

    fn buffer_data(&mut self, target: BackendTarget, data: &[u8], usage: UsageHint) -> Result<()> {
        Self::clear_errors();

        unsafe {
            gl::BufferData(
                target.0,
                data.len() as GLsizeiptr,
                data.as_ptr() as *const c_void,
                gl_usage(usage),
            );
        }

        match Self::take_error() {
            gl::NO_ERROR => Ok(()),
            gl::OUT_OF_MEMORY => {
                gbo_error!(SOURCE, "glBufferData: out of memory uploading {} bytes", data.len());
                Err(Error::OutOfMemory)
            }
            code => Err(gpu_buffer_object::gbo_err!(
                SOURCE,
                "glBufferData on target {} failed: {}",
                target,
                gl_error_name(code)
            )),
        }
    }

    fn delete_buffer(&mut self, handle: BufferHandle) {
        let name = handle.raw();
        unsafe { gl::DeleteBuffers(1, &name) }
    }
}
