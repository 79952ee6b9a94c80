/// BufferObject - lifecycle of one backend buffer resource
///
/// A buffer object owns at most one backend handle at a time. The handle is
/// created lazily by the first upload (or an explicit allocation) and its
/// binding target is fixed at that moment: later requests for a different
/// category are reported, never silently retargeted.
///
/// Failures are reported the way draw-loop code wants them: a `false`
/// return plus an advisory message readable through [`last_error`].
/// The `try_*`/[`allocate`] variants return the same outcome as a
/// [`Result`] for callers that prefer `?`.
///
/// Release is explicit. Dropping a buffer object that still holds a handle
/// leaks the backend resource and logs a warning; use
/// [`release_graphics_resources`] or [`BufferObject::scope`].
///
/// [`last_error`]: BufferObject::last_error
/// [`allocate`]: BufferObject::allocate
/// [`release_graphics_resources`]: BufferObject::release_graphics_resources

use std::sync::{Arc, Mutex, MutexGuard};

use bytemuck::Pod;

use crate::buffer_object::{Allocation, BufferObjectConfig, Category, UploadPolicy};
use crate::error::{Error, Result};
use crate::graphics_context::{
    BackendTarget, BufferHandle, GraphicsContext, TargetSymbols, UsageHint,
};
use crate::{gbo_debug, gbo_error, gbo_trace, gbo_warn};

// ===== STATE =====

/// Coarse allocation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AllocationState {
    Unallocated,
    Allocated {
        handle: BufferHandle,
        /// Target fixed at allocation time
        target: BackendTarget,
        /// Most recent upload into `handle` succeeded
        has_data: bool,
    },
}

fn lock_context<'a>(
    context: &'a Arc<Mutex<dyn GraphicsContext + 'static>>,
) -> Result<MutexGuard<'a, dyn GraphicsContext + 'static>> {
    context
        .lock()
        .map_err(|_| Error::BackendError("Graphics context lock poisoned".to_string()))
}

// ===== BUFFER OBJECT =====

pub struct BufferObject {
    context: Arc<Mutex<dyn GraphicsContext>>,
    symbols: TargetSymbols,
    /// Target used by the next allocation
    candidate: BackendTarget,
    state: AllocationState,
    usage_hint: UsageHint,
    upload_policy: UploadPolicy,
    label: String,
    source: String,
    last_error: String,
}

impl BufferObject {
    /// Create an unallocated buffer object with the default configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::BackendError` if the context lock is poisoned.
    pub fn new(context: Arc<Mutex<dyn GraphicsContext>>) -> Result<Self> {
        Self::with_config(context, BufferObjectConfig::default())
    }

    /// Create an unallocated buffer object from caller-supplied initial values
    pub fn with_config(
        context: Arc<Mutex<dyn GraphicsContext>>,
        config: BufferObjectConfig,
    ) -> Result<Self> {
        let symbols = lock_context(&context)?.target_symbols();
        let source = format!("gbo::BufferObject[{}]", config.label);

        Ok(Self {
            context,
            symbols,
            candidate: config.category.to_backend(&symbols),
            state: AllocationState::Unallocated,
            usage_hint: config.usage_hint,
            upload_policy: config.upload_policy,
            label: config.label,
            source,
            last_error: String::new(),
        })
    }

    // ===== ACCESSORS =====

    /// Semantic category of the current target
    ///
    /// This is the fixed target while a handle exists, otherwise the
    /// candidate recorded by [`set_category`](Self::set_category).
    pub fn category(&self) -> Category {
        Category::from_backend(self.backend_target(), &self.symbols)
    }

    /// Record the category to use for the next allocation
    ///
    /// Has no effect on an already allocated handle.
    pub fn set_category(&mut self, category: Category) {
        self.candidate = category.to_backend(&self.symbols);
    }

    /// Backend target of the current handle, or the candidate target
    pub fn backend_target(&self) -> BackendTarget {
        match self.state {
            AllocationState::Allocated { target, .. } => target,
            AllocationState::Unallocated => self.candidate,
        }
    }

    pub fn handle(&self) -> Option<BufferHandle> {
        match self.state {
            AllocationState::Allocated { handle, .. } => Some(handle),
            AllocationState::Unallocated => None,
        }
    }

    pub fn is_allocated(&self) -> bool {
        matches!(self.state, AllocationState::Allocated { .. })
    }

    /// True once an upload into the current handle has succeeded
    pub fn is_ready(&self) -> bool {
        matches!(self.state, AllocationState::Allocated { has_data: true, .. })
    }

    /// Most recent error message, empty if no operation has failed yet
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn usage_hint(&self) -> UsageHint {
        self.usage_hint
    }

    pub fn upload_policy(&self) -> UploadPolicy {
        self.upload_policy
    }

    pub fn set_upload_policy(&mut self, policy: UploadPolicy) {
        self.upload_policy = policy;
    }

    // ===== ALLOCATION =====

    /// Allocate the backend buffer for `category` if none exists yet
    ///
    /// An existing handle is never replaced; the result reports whether its
    /// fixed target matches the one `category` translates to.
    pub fn allocate(&mut self, category: Category) -> Result<Allocation> {
        self.ensure_allocated(category).map(|(allocation, _, _)| allocation)
    }

    /// Allocation step with the historical boolean result
    ///
    /// Returns `false` when a buffer was just created (or creation failed),
    /// `true` when a buffer already exists under the same target, and
    /// `false` when one exists under a different target.
    pub fn generate_buffer(&mut self, category: Category) -> bool {
        match self.allocate(category) {
            Ok(Allocation::Fresh) => false,
            Ok(Allocation::Existing { compatible }) => compatible,
            Err(err) => {
                self.record(err);
                false
            }
        }
    }

    fn ensure_allocated(
        &mut self,
        category: Category,
    ) -> Result<(Allocation, BufferHandle, BackendTarget)> {
        let requested = category.to_backend(&self.symbols);

        match self.state {
            AllocationState::Allocated { handle, target, .. } => Ok((
                Allocation::Existing { compatible: target == requested },
                handle,
                target,
            )),
            AllocationState::Unallocated => {
                let handle = lock_context(&self.context)?.create_buffer()?;
                self.state = AllocationState::Allocated {
                    handle,
                    target: requested,
                    has_data: false,
                };
                self.candidate = requested;
                gbo_debug!(&self.source, "allocated {} as {} ({})", handle, category, requested);
                Ok((Allocation::Fresh, handle, requested))
            }
        }
    }

    // ===== UPLOAD =====

    /// Upload `data` as `category`, allocating the buffer on first use
    ///
    /// Returns `false` and records the reason in [`last_error`](Self::last_error)
    /// when the upload policy rejects the existing buffer or the backend fails.
    pub fn upload<T: Pod>(&mut self, data: &[T], category: Category) -> bool {
        match self.try_upload(data, category) {
            Ok(()) => true,
            Err(err) => {
                self.record(err);
                false
            }
        }
    }

    /// [`upload`](Self::upload) returning the failure as an [`Error`]
    ///
    /// A rejected upload leaves the buffer untouched. A backend failure
    /// during the data transfer marks the buffer as not ready.
    pub fn try_upload<T: Pod>(&mut self, data: &[T], category: Category) -> Result<()> {
        let (allocation, handle, target) = self.ensure_allocated(category)?;

        if !self.upload_policy.permits(allocation) {
            return Err(Error::IncompatibleBuffer {
                requested: category,
                fixed: Category::from_backend(target, &self.symbols),
            });
        }

        let bytes: &[u8] = bytemuck::cast_slice(data);
        let transfer = {
            let mut context = lock_context(&self.context)?;
            context.bind_buffer(target, Some(handle));
            context.buffer_data(target, bytes, self.usage_hint)
        };

        let uploaded = transfer.is_ok();
        self.state = AllocationState::Allocated { handle, target, has_data: uploaded };
        transfer?;

        gbo_trace!(&self.source, "uploaded {} bytes into {}", bytes.len(), handle);
        Ok(())
    }

    // ===== BINDING =====

    /// Bind the buffer to its fixed target
    ///
    /// Returns `false` without touching the backend when nothing is
    /// allocated yet.
    pub fn bind(&mut self) -> bool {
        self.bind_to(true)
    }

    /// Clear the binding of the fixed target; the handle stays allocated
    ///
    /// Returns `false` when nothing is allocated yet.
    pub fn release(&mut self) -> bool {
        self.bind_to(false)
    }

    fn bind_to(&mut self, bound: bool) -> bool {
        let AllocationState::Allocated { handle, target, .. } = self.state else {
            return false;
        };

        let result = lock_context(&self.context)
            .map(|mut context| context.bind_buffer(target, bound.then_some(handle)));
        if let Err(err) = result {
            self.record(err);
            return false;
        }

        gbo_trace!(&self.source, "{} {}", if bound { "bound" } else { "unbound" }, handle);
        true
    }

    // ===== TEARDOWN =====

    /// Unbind and delete the backend buffer
    ///
    /// Afterwards the object is unallocated again and reports the category
    /// last recorded by [`set_category`](Self::set_category) or by the
    /// allocation; the next upload allocates a fresh handle. Calling this on
    /// an unallocated object does nothing.
    pub fn release_graphics_resources(&mut self) {
        let AllocationState::Allocated { handle, target, .. } = self.state else {
            return;
        };

        let result = lock_context(&self.context).map(|mut context| {
            context.bind_buffer(target, None);
            context.delete_buffer(handle);
        });
        if let Err(err) = result {
            // Handle stays recorded so a later call can retry.
            self.record(err);
            return;
        }

        self.state = AllocationState::Unallocated;
        gbo_debug!(&self.source, "deleted {}", handle);
    }

    fn record(&mut self, err: Error) {
        match &err {
            Error::IncompatibleBuffer { .. } => gbo_warn!(&self.source, "{}", err),
            _ => gbo_error!(&self.source, "{}", err),
        }
        self.last_error = err.to_string();
    }
}

impl std::fmt::Debug for BufferObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferObject")
            .field("label", &self.label)
            .field("state", &self.state)
            .field("candidate", &self.candidate)
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl Drop for BufferObject {
    fn drop(&mut self) {
        if let Some(handle) = self.handle() {
            gbo_warn!(
                &self.source,
                "dropped while still holding {}; call release_graphics_resources() first",
                handle
            );
        }
    }
}

#[cfg(test)]
#[path = "buffer_object_tests.rs"]
mod tests;
