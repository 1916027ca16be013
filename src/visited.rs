use std::collections::HashSet;

use crate::board::Signature;

/// Boards are added when they are expanded, not when they are discovered,
/// so the frontier may still hold unexpanded duplicates.
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<Signature>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, signature: &Signature) -> bool {
        self.seen.contains(signature)
    }

    /// Returns `false` if the signature was already present.
    pub fn add(&mut self, signature: Signature) -> bool {
        self.seen.insert(signature)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
