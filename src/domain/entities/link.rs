//! Link entry entity representing a persisted code → link mapping.

/// A stored short code and the original link it resolves to.
///
/// Entries are write-once: created by a successful shorten and never
/// updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct LinkEntry {
    pub code: String,
    pub link: String,
}

impl LinkEntry {
    /// Creates a new LinkEntry instance.
    pub fn new(code: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            link: link.into(),
        }
    }
}
