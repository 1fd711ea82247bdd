// A corpus document: where it came from and what it says.

/// One loaded text document.
#[derive(Debug, Clone)]
pub struct Document {
    /// Display identifier, normally the path the file was read from.
    pub id: String,
    /// Raw text content.
    pub content: String,
}

impl Document {
    pub fn new(id: String, content: String) -> Self {
        Self { id, content }
    }
}
