/// Construction-time configuration and the upload policy

use crate::buffer_object::Category;
use crate::graphics_context::UsageHint;

/// Outcome of the allocation step that precedes every upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allocation {
    /// A backend buffer was created by this call
    Fresh,
    /// The buffer already existed; `compatible` tells whether its fixed
    /// target matches the requested one
    Existing { compatible: bool },
}

/// Whether an upload may go into a buffer that existed before the call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPolicy {
    /// Only upload into a buffer allocated by the same call. Re-uploading
    /// into an existing buffer is rejected even when the category matches.
    #[default]
    RejectExisting,
    /// Re-upload into an existing buffer of the same target; reject only
    /// a real category mismatch.
    ReuseCompatible,
}

impl UploadPolicy {
    pub fn permits(&self, allocation: Allocation) -> bool {
        match (self, allocation) {
            (_, Allocation::Fresh) => true,
            (UploadPolicy::RejectExisting, Allocation::Existing { .. }) => false,
            (UploadPolicy::ReuseCompatible, Allocation::Existing { compatible }) => compatible,
        }
    }
}

/// Initial values for a [`BufferObject`](crate::gbo::BufferObject)
///
/// Override individual fields with struct update syntax:
///
/// ```
/// use gpu_buffer_object::gbo::{BufferObjectConfig, Category};
///
/// let config = BufferObjectConfig {
///     category: Category::ElementArray,
///     label: "indices".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(config.category, Category::ElementArray);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferObjectConfig {
    /// Category used until the first allocation
    pub category: Category,
    /// Usage hint passed to every upload
    pub usage_hint: UsageHint,
    /// Re-upload behaviour
    pub upload_policy: UploadPolicy,
    /// Name shown in log sources
    pub label: String,
}

impl Default for BufferObjectConfig {
    fn default() -> Self {
        Self {
            category: Category::VertexArray,
            usage_hint: UsageHint::StaticDraw,
            upload_policy: UploadPolicy::RejectExisting,
            label: "buffer_object".to_string(),
        }
    }
}
