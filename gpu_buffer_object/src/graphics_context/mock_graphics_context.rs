/// Mock GraphicsContext for unit tests (no GPU required)
///
/// Records every call in order, hands out sequential handles and tracks
/// which handles are alive and what is bound to each target. Failure
/// injection flags let tests drive the error paths.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{Error, Result};
use crate::graphics_context::{
    BackendTarget, BufferHandle, GraphicsContext, TargetSymbols, UsageHint,
};

/// GL_ARRAY_BUFFER
pub const MOCK_ARRAY_BUFFER: BackendTarget = BackendTarget(0x8892);
/// GL_ELEMENT_ARRAY_BUFFER
pub const MOCK_ELEMENT_ARRAY_BUFFER: BackendTarget = BackendTarget(0x8893);
/// GL_TEXTURE_BUFFER
pub const MOCK_TEXTURE_BUFFER: BackendTarget = BackendTarget(0x8C2A);

// ============================================================================
// Recorded calls
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Create(BufferHandle),
    Bind(BackendTarget, Option<BufferHandle>),
    Data(BackendTarget, Vec<u8>, UsageHint),
    Delete(BufferHandle),
}

// ============================================================================
// Mock GraphicsContext
// ============================================================================

#[derive(Debug)]
pub struct MockGraphicsContext {
    pub symbols: TargetSymbols,
    pub calls: Vec<MockCall>,
    pub live: FxHashSet<BufferHandle>,
    pub bound: FxHashMap<BackendTarget, BufferHandle>,
    pub fail_create: bool,
    pub fail_data: bool,
    next_name: u32,
}

impl MockGraphicsContext {
    /// Context exposing array, element array and texture buffer targets
    pub fn new() -> Self {
        Self::with_symbols(TargetSymbols {
            array_buffer: MOCK_ARRAY_BUFFER,
            element_array_buffer: MOCK_ELEMENT_ARRAY_BUFFER,
            texture_buffer: Some(MOCK_TEXTURE_BUFFER),
        })
    }

    /// Context without a texture buffer target (WebGL / GLES2 style)
    pub fn without_texture_buffer() -> Self {
        Self::with_symbols(TargetSymbols {
            array_buffer: MOCK_ARRAY_BUFFER,
            element_array_buffer: MOCK_ELEMENT_ARRAY_BUFFER,
            texture_buffer: None,
        })
    }

    pub fn with_symbols(symbols: TargetSymbols) -> Self {
        Self {
            symbols,
            calls: Vec::new(),
            live: FxHashSet::default(),
            bound: FxHashMap::default(),
            fail_create: false,
            fail_data: false,
            next_name: 1,
        }
    }

    /// Number of create_buffer calls that succeeded
    pub fn created_count(&self) -> usize {
        self.calls.iter().filter(|call| matches!(call, MockCall::Create(_))).count()
    }

    /// Number of buffer_data calls that reached the mock
    pub fn upload_count(&self) -> usize {
        self.calls.iter().filter(|call| matches!(call, MockCall::Data(..))).count()
    }

    /// Handle currently bound to `target`
    pub fn bound_to(&self, target: BackendTarget) -> Option<BufferHandle> {
        self.bound.get(&target).copied()
    }

    /// Last recorded upload
    pub fn last_upload(&self) -> Option<(BackendTarget, Vec<u8>, UsageHint)> {
        self.calls.iter().rev().find_map(|call| match call {
            MockCall::Data(target, data, usage) => Some((*target, data.clone(), *usage)),
            _ => None,
        })
    }
}

impl GraphicsContext for MockGraphicsContext {
    fn target_symbols(&self) -> TargetSymbols {
        self.symbols
    }

    fn create_buffer(&mut self) -> Result<BufferHandle> {
        if self.fail_create {
            return Err(Error::AllocationFailed("mock allocation disabled".to_string()));
        }
        let handle = BufferHandle::new(self.next_name)
            .ok_or_else(|| Error::AllocationFailed("mock name space exhausted".to_string()))?;
        self.next_name += 1;
        self.live.insert(handle);
        self.calls.push(MockCall::Create(handle));
        Ok(handle)
    }

    fn bind_buffer(&mut self, target: BackendTarget, handle: Option<BufferHandle>) {
        match handle {
            Some(handle) => {
                self.bound.insert(target, handle);
            }
            None => {
                self.bound.remove(&target);
            }
        }
        self.calls.push(MockCall::Bind(target, handle));
    }

    fn buffer_data(&mut self, target: BackendTarget, data: &[u8], usage: UsageHint) -> Result<()> {
        if self.fail_data {
            return Err(Error::OutOfMemory);
        }
        if !self.bound.contains_key(&target) {
            return Err(Error::BackendError(format!("no buffer bound to {}", target)));
        }
        self.calls.push(MockCall::Data(target, data.to_vec(), usage));
        Ok(())
    }

    fn delete_buffer(&mut self, handle: BufferHandle) {
        self.live.remove(&handle);
        self.bound.retain(|_, bound| *bound != handle);
        self.calls.push(MockCall::Delete(handle));
    }
}

#[cfg(test)]
#[path = "mock_graphics_context_tests.rs"]
mod tests;
