//! Type-to-confirm gate in front of the bulk delete submission.
//!
//! The confirmation token is a speed bump for the user, not a credential:
//! any non-empty text arms the submit button and the server decides whether
//! the delete is allowed.

use crate::shared::error::{TableError, TableResult};

/// Hidden form field carrying the typed confirmation to the delete route
pub const CONFIRMATION_FIELD: &str = "confirmation_password_bulk";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkDeleteState {
    Idle,
    AwaitingSelection,
    Armed { count: usize },
    Submitting,
}

/// What the form submission needs once the user confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteSubmission {
    pub count: usize,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkDeleteGate {
    state: BulkDeleteState,
    token: String,
}

impl Default for BulkDeleteGate {
    fn default() -> Self {
        Self::new()
    }
}

impl BulkDeleteGate {
    pub fn new() -> Self {
        Self {
            state: BulkDeleteState::Idle,
            token: String::new(),
        }
    }

    pub fn state(&self) -> BulkDeleteState {
        self.state
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Controller is wired up and waiting for the user to pick rows
    pub fn activate(&mut self) {
        if self.state == BulkDeleteState::Idle {
            self.state = BulkDeleteState::AwaitingSelection;
        }
    }

    /// The "delete selected" control only depends on the selection
    pub fn can_open(selected: usize) -> bool {
        selected > 0
    }

    pub fn is_open(&self) -> bool {
        matches!(
            self.state,
            BulkDeleteState::Armed { .. } | BulkDeleteState::Submitting
        )
    }

    /// Open the confirmation step for `selected` rows.
    ///
    /// Any previously typed token is discarded.
    pub fn open(&mut self, selected: usize) -> TableResult<usize> {
        match self.state {
            BulkDeleteState::AwaitingSelection | BulkDeleteState::Armed { .. } => {}
            BulkDeleteState::Idle | BulkDeleteState::Submitting => {
                return Err(TableError::config("bulk delete is not available"));
            }
        }
        if !Self::can_open(selected) {
            return Err(TableError::no_selection());
        }

        self.token.clear();
        self.state = BulkDeleteState::Armed { count: selected };
        Ok(selected)
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }

    pub fn can_confirm(&self) -> bool {
        matches!(self.state, BulkDeleteState::Armed { .. }) && !self.token.trim().is_empty()
    }

    pub fn confirm(&mut self) -> TableResult<DeleteSubmission> {
        let BulkDeleteState::Armed { count } = self.state else {
            return Err(TableError::config("bulk delete is not armed"));
        };
        if self.token.trim().is_empty() {
            return Err(TableError::empty_token());
        }

        self.state = BulkDeleteState::Submitting;
        Ok(DeleteSubmission {
            count,
            token: self.token.clone(),
        })
    }

    /// Close, cancel, overlay click or Escape
    pub fn dismiss(&mut self) {
        if self.state != BulkDeleteState::Idle {
            self.state = BulkDeleteState::AwaitingSelection;
        }
        self.token.clear();
    }
}
