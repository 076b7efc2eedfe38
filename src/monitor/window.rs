use crate::error::WatchError;

/// Backward-looking range of block heights `[current - size + 1, current]`,
/// inspected newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockWindow {
    size: u64,
}

impl BlockWindow {
    pub const DEFAULT_SIZE: u64 = 10;

    pub fn new(size: u64) -> Result<Self, WatchError> {
        if size == 0 {
            return Err(WatchError::Config(
                "block window must cover at least one block".into(),
            ));
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Whether predicate calls are pinned to explicit historical heights.
    pub fn is_pinned(&self) -> bool {
        self.size > 1
    }

    /// Call targets for a scan starting at `current`, newest first.
    ///
    /// `None` means "latest state". Pinned scans never go below block 0, so a
    /// window wider than the chain yields `current + 1` targets.
    pub fn targets(&self, current: u64) -> impl Iterator<Item = Option<u64>> + use<> {
        let pinned = self.is_pinned();
        let count = if pinned {
            self.size.min(current.saturating_add(1))
        } else {
            1
        };
        (0..count).map(move |offset| pinned.then(|| current - offset))
    }
}

impl Default for BlockWindow {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
        }
    }
}
