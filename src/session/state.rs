//! Session lifecycle states

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a training session
///
/// Transitions: Idle -> Training and Training -> Idle via start/pause,
/// Training -> Completed automatically when the epoch counter reaches the
/// configured total. Completed is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Not training; progress is retained for resumption
    Idle,
    /// Actively training; ticks advance the epoch counter
    Training,
    /// All configured epochs finished; no further lifecycle transitions
    Completed,
}

impl SessionState {
    /// Whether the session accepts no further lifecycle transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Completed)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::Idle => "idle",
            SessionState::Training => "training",
            SessionState::Completed => "completed",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_state() {
        assert!(!SessionState::Idle.is_terminal());
        assert!(!SessionState::Training.is_terminal());
        assert!(SessionState::Completed.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(SessionState::Idle.to_string(), "idle");
        assert_eq!(SessionState::Training.to_string(), "training");
        assert_eq!(SessionState::Completed.to_string(), "completed");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SessionState::Training).unwrap();
        assert_eq!(json, "\"training\"");
    }
}
