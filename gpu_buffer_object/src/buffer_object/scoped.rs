/// Scoped acquisition helpers
///
/// Buffer objects never release backend resources on their own. These
/// helpers put the release at the call site in a form that cannot be
/// forgotten: a bind guard that unbinds on drop, and a closure scope that
/// deletes the backend buffer when it ends (also when the closure panics).

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex};

use crate::buffer_object::{BufferObject, BufferObjectConfig};
use crate::error::Result;
use crate::graphics_context::{BufferHandle, GraphicsContext};

/// A buffer object bound to its target for the lifetime of the guard
#[derive(Debug)]
pub struct BoundBuffer<'a> {
    buffer: &'a mut BufferObject,
    handle: BufferHandle,
}

impl BoundBuffer<'_> {
    /// Handle that was bound when the guard was created
    pub fn handle(&self) -> BufferHandle {
        self.handle
    }
}

impl Deref for BoundBuffer<'_> {
    type Target = BufferObject;

    fn deref(&self) -> &BufferObject {
        self.buffer
    }
}

impl DerefMut for BoundBuffer<'_> {
    fn deref_mut(&mut self) -> &mut BufferObject {
        self.buffer
    }
}

impl Drop for BoundBuffer<'_> {
    fn drop(&mut self) {
        self.buffer.release();
    }
}

/// Owns a buffer object and deletes its backend buffer when dropped
struct ReleaseOnDrop(BufferObject);

impl Drop for ReleaseOnDrop {
    fn drop(&mut self) {
        self.0.release_graphics_resources();
    }
}

impl BufferObject {
    /// Bind the buffer and return a guard that unbinds it when dropped
    ///
    /// Returns `None` when nothing is allocated yet.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use gpu_buffer_object::gbo::{BufferObject, Category};
    /// # fn draw(buffer: &mut BufferObject) {
    /// if let Some(_bound) = buffer.bind_scoped() {
    ///     // issue draw calls against the bound buffer
    /// } // unbound here
    /// # }
    /// ```
    pub fn bind_scoped(&mut self) -> Option<BoundBuffer<'_>> {
        let handle = self.handle()?;
        if !self.bind() {
            return None;
        }
        Some(BoundBuffer { buffer: self, handle })
    }

    /// Run `f` with a fresh buffer object, then delete its backend buffer
    ///
    /// The backend buffer is released when `f` returns or unwinds.
    ///
    /// # Errors
    ///
    /// Returns `Error::BackendError` if the context lock is poisoned when the
    /// buffer object is created.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use std::sync::{Arc, Mutex};
    /// # use gpu_buffer_object::gbo::{BufferObject, BufferObjectConfig, Category, GraphicsContext};
    /// # fn demo(context: Arc<Mutex<dyn GraphicsContext>>) -> gpu_buffer_object::gbo::Result<()> {
    /// let uploaded = BufferObject::scope(context, BufferObjectConfig::default(), |buffer| {
    ///     buffer.upload(&[0.0f32, 1.0, 2.0], Category::VertexArray)
    /// })?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn scope<R>(
        context: Arc<Mutex<dyn GraphicsContext>>,
        config: BufferObjectConfig,
        f: impl FnOnce(&mut BufferObject) -> R,
    ) -> Result<R> {
        let mut guard = ReleaseOnDrop(BufferObject::with_config(context, config)?);
        Ok(f(&mut guard.0))
    }
}

#[cfg(test)]
#[path = "scoped_tests.rs"]
mod tests;
