//! Registry of mounted message cards, keyed by global position.
//!
//! Cards register when they mount and deregister when they unmount.
//! Readers must treat a missing key as normal: the causing message may live
//! in a stream that is not displayed, or may not have been fetched yet.

use std::collections::HashMap;

use crate::geometry::Rect;

/// Something whose on-screen box can be queried.
pub trait AnchorGeometry {
    /// Current box, or `None` when the element is gone.
    fn rect(&self) -> Option<Rect>;
}

/// Proof of one registration. Deregistering with a stale token is a no-op,
/// so an old card unmounting late cannot remove its replacement's anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorToken(u64);

#[derive(Debug)]
pub struct AnchorRegistry<H> {
    entries: HashMap<i64, (AnchorToken, H)>,
    next_token: u64,
}

impl<H> Default for AnchorRegistry<H> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            next_token: 0,
        }
    }
}

impl<H> AnchorRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, global_position: i64, handle: H) -> AnchorToken {
        self.next_token += 1;
        let token = AnchorToken(self.next_token);
        if self
            .entries
            .insert(global_position, (token, handle))
            .is_some()
        {
            tracing::debug!(global_position, "anchor re-registered by a newer card");
        }
        token
    }

    /// Returns whether the anchor was removed.
    pub fn deregister(&mut self, global_position: i64, token: AnchorToken) -> bool {
        match self.entries.get(&global_position) {
            Some((current, _)) if *current == token => {
                self.entries.remove(&global_position);
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, global_position: i64) -> Option<&H> {
        self.entries.get(&global_position).map(|(_, handle)| handle)
    }

    pub fn contains(&self, global_position: i64) -> bool {
        self.entries.contains_key(&global_position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H: AnchorGeometry> AnchorRegistry<H> {
    /// Box of a mounted, laid-out anchor.
    pub fn rect(&self, global_position: i64) -> Option<Rect> {
        self.get(global_position)?
            .rect()
            .filter(Rect::is_laid_out)
    }
}
