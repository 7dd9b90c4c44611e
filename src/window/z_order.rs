use crate::constants::BASE_Z_INDEX;

/// Hands out stacking values for windows.
///
/// The counter only ever grows, so every value returned by [`next_z`] is
/// strictly greater than any value returned before it. Two windows can never
/// tie.
///
/// [`next_z`]: ZOrderAllocator::next_z
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZOrderAllocator {
    highest: u32,
}

impl Default for ZOrderAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ZOrderAllocator {
    pub const fn new() -> Self {
        Self::starting_at(BASE_Z_INDEX)
    }

    pub const fn starting_at(base: u32) -> Self {
        Self { highest: base }
    }

    /// Highest value handed out so far (the base if nothing was allocated).
    pub const fn highest(&self) -> u32 {
        self.highest
    }

    pub fn next_z(&mut self) -> u32 {
        // saturates rather than wrapping so the counter never decreases
        self.highest = self.highest.saturating_add(1);
        self.highest
    }
}
