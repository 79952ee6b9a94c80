/// GraphicsContext trait and the handle/target/usage types it speaks
///
/// A graphics context is the backend a buffer object allocates through.
/// It is owned by the application and shared with every buffer object
/// as `Arc<Mutex<dyn GraphicsContext>>`; buffer objects never create or
/// destroy it.

use std::fmt;
use std::num::NonZeroU32;

use crate::error::Result;

/// Opaque backend buffer identifier
///
/// Backends hand out non-zero names (OpenGL buffer names start at 1), so
/// zero is never a valid handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferHandle(NonZeroU32);

impl BufferHandle {
    /// Wrap a raw backend name, `None` for zero
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// Raw backend name
    pub fn raw(&self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for BufferHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Backend-specific buffer binding target symbol (e.g. `GL_ARRAY_BUFFER`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackendTarget(pub u32);

impl fmt::Display for BackendTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

/// The binding targets a backend exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSymbols {
    /// Vertex attribute data
    pub array_buffer: BackendTarget,
    /// Index data
    pub element_array_buffer: BackendTarget,
    /// Texture-backing store, `None` when the backend has no such target
    pub texture_buffer: Option<BackendTarget>,
}

/// How often the buffer contents are expected to be rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsageHint {
    /// Uploaded once, drawn many times
    #[default]
    StaticDraw,
    /// Rewritten occasionally, drawn many times
    DynamicDraw,
    /// Rewritten every frame, drawn a few times
    StreamDraw,
}

/// Backend capability contract consumed by [`BufferObject`](crate::gbo::BufferObject)
///
/// Every call completes immediately; there is no queuing. Implementations
/// are expected to be used from the thread that owns the underlying API
/// context.
pub trait GraphicsContext {
    /// Binding target symbols supported by this backend
    fn target_symbols(&self) -> TargetSymbols;

    /// Allocate a new, empty buffer resource
    fn create_buffer(&mut self) -> Result<BufferHandle>;

    /// Bind `handle` to `target`, or clear the binding with `None`
    fn bind_buffer(&mut self, target: BackendTarget, handle: Option<BufferHandle>);

    /// Upload `data` into the buffer currently bound to `target`
    fn buffer_data(&mut self, target: BackendTarget, data: &[u8], usage: UsageHint) -> Result<()>;

    /// Delete a buffer resource
    fn delete_buffer(&mut self, handle: BufferHandle);
}
