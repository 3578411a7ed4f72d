use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of a connected player.
///
/// Ids are issued by [`ClientIdGenerator`] and never reused within the
/// lifetime of the process, which is what makes room keys derived from two
/// ids unique forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClientId(u64);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ClientId {
    #[cfg(test)]
    pub fn from_raw(raw: u64) -> Self {
        ClientId(raw)
    }
}

/// Process-wide source of monotonically increasing client ids.
#[derive(Debug, Default)]
pub struct ClientIdGenerator {
    next: AtomicU64,
}

impl ClientIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> ClientId {
        ClientId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
