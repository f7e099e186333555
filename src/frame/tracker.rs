use crate::model::LinkStatus;
use ahash::AHashMap;

/// Accumulates link highlight states across the frames of one trace.
///
/// Links are rebuilt from scratch for every frame, so anything that should
/// stay highlighted has to be remembered here. A tracker is never cleared on
/// its own; each trace creates a fresh one. Frames read it at build time and
/// own the result, so later updates never reach frames already emitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkTracker {
    statuses: AHashMap<(String, String), LinkStatus>,
}

impl LinkTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `status` for `u -> v`, and for `v -> u` as well when the
    /// relationship is undirected.
    pub fn set(&mut self, u: &str, v: &str, status: LinkStatus, directed: bool) {
        self.statuses
            .insert((u.to_string(), v.to_string()), status);
        if !directed {
            self.statuses
                .insert((v.to_string(), u.to_string()), status);
        }
    }

    pub fn get(&self, source_id: &str, target_id: &str) -> Option<LinkStatus> {
        // Tuple keys of owned strings cannot be borrowed as (&str, &str).
        self.statuses
            .get(&(source_id.to_string(), target_id.to_string()))
            .copied()
    }

    /// Forgets the status of `u -> v` (and `v -> u` when undirected).
    pub fn unset(&mut self, u: &str, v: &str, directed: bool) {
        self.statuses.remove(&(u.to_string(), v.to_string()));
        if !directed {
            self.statuses.remove(&(v.to_string(), u.to_string()));
        }
    }
}
