//! Domain-level error type used across the session orchestrator.
//!
//! Every variant is recoverable and local to the offending message: the
//! transport layer reports it back to the sender and nothing else changes.
//! Capacity is the one kind that also terminates the connection.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Join rejected: every seat is taken.
    #[error("{0}")]
    Capacity(String),
    /// A turn-gated action arrived from a player who does not hold the turn.
    #[error("{0}")]
    TurnViolation(String),
    /// A die index that does not address an existing pending die.
    #[error("{0}")]
    InvalidSelection(String),
    /// Rolling with nothing to roll, or while a roll is already open.
    #[error("{0}")]
    EmptyAction(String),
}

impl DomainError {
    pub fn capacity(detail: impl Into<String>) -> Self {
        Self::Capacity(detail.into())
    }
    pub fn turn_violation(detail: impl Into<String>) -> Self {
        Self::TurnViolation(detail.into())
    }
    pub fn invalid_selection(detail: impl Into<String>) -> Self {
        Self::InvalidSelection(detail.into())
    }
    pub fn empty_action(detail: impl Into<String>) -> Self {
        Self::EmptyAction(detail.into())
    }
}
