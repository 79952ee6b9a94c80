/// Semantic buffer categories and their translation to backend targets

use std::fmt;

use crate::graphics_context::{BackendTarget, TargetSymbols};

/// Semantic role of a buffer resource, independent of backend symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Vertex attribute data
    #[default]
    VertexArray,
    /// Index data
    ElementArray,
    /// Storage backing a buffer texture
    TextureBacking,
}

impl Category {
    /// All categories, in declaration order
    pub const ALL: [Category; 3] = [
        Category::VertexArray,
        Category::ElementArray,
        Category::TextureBacking,
    ];

    /// Translate to the backend target this category binds to
    ///
    /// Texture backing falls back to the array target on backends without
    /// a texture buffer target.
    pub fn to_backend(self, symbols: &TargetSymbols) -> BackendTarget {
        match self {
            Category::ElementArray => symbols.element_array_buffer,
            Category::TextureBacking => symbols.texture_buffer.unwrap_or(symbols.array_buffer),
            Category::VertexArray => symbols.array_buffer,
        }
    }

    /// Translate a backend target back to a category
    ///
    /// Targets that are neither the array nor the element array target are
    /// reported as texture backing.
    pub fn from_backend(target: BackendTarget, symbols: &TargetSymbols) -> Category {
        if target == symbols.array_buffer {
            Category::VertexArray
        } else if target == symbols.element_array_buffer {
            Category::ElementArray
        } else {
            Category::TextureBacking
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::VertexArray => "vertex array",
            Category::ElementArray => "element array",
            Category::TextureBacking => "texture backing",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
