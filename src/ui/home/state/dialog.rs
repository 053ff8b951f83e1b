// SPDX-License-Identifier: MPL-2.0
//! The modal dialog cell.
//!
//! A single dialog instance serves every informational surface on the home
//! screen: the notification acknowledgement, the dashboard welcome, and load
//! failures all write here. When two opens race within one update cycle the
//! last writer wins; there is no message queue.

/// Open/closed state and body text for the information dialog.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dialog {
    open: bool,
    body: String,
}

impl Dialog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the dialog with the given body. Body and open flag change
    /// together; no intermediate state is observable.
    pub fn open(&mut self, body: impl Into<String>) {
        self.body = body.into();
        self.open = true;
    }

    /// Closes the dialog. The body is retained until the next `open`; it is
    /// not visible while closed. A second close is a no-op.
    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
