// SPDX-License-Identifier: MPL-2.0
//! The notification badge cell.

/// Number of unread notifications a fresh session starts with.
pub const SEED_UNREAD: u32 = 2;

/// Unread notification counter backing the badge numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    unread: u32,
}

impl Default for Badge {
    fn default() -> Self {
        Self {
            unread: SEED_UNREAD,
        }
    }
}

impl Badge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a badge with an arbitrary unread count.
    #[must_use]
    pub fn with_unread(unread: u32) -> Self {
        Self { unread }
    }

    /// Clears the unread count. Safe to call repeatedly.
    pub fn acknowledge(&mut self) {
        self.unread = 0;
    }

    #[must_use]
    pub fn unread(&self) -> u32 {
        self.unread
    }

    /// The badge numeral, or `None` when there is nothing unread. A zero
    /// count omits the badge entirely rather than rendering "0".
    #[must_use]
    pub fn label(&self) -> Option<String> {
        (self.unread > 0).then(|| self.unread.to_string())
    }
}
