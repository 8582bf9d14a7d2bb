//! Per-conversation state owned by the session controller.

use chrono::{DateTime, Utc};
use fera_types::chat::Turn;
use fera_types::llm::Usage;
use uuid::Uuid;

use crate::history::RollingHistory;

/// Mutable state of a single conversation.
///
/// Lives in memory for the lifetime of the process; nothing is persisted.
#[derive(Debug, Clone)]
pub struct SessionState {
    id: Uuid,
    started_at: DateTime<Utc>,
    history: RollingHistory,
    /// User turns accepted so far. Never decremented.
    interaction_count: u32,
    total_usage: Usage,
    last_usage: Option<Usage>,
}

impl SessionState {
    pub fn new(window_pairs: usize) -> Self {
        Self {
            id: Uuid::now_v7(),
            started_at: Utc::now(),
            history: RollingHistory::new(window_pairs),
            interaction_count: 0,
            total_usage: Usage::default(),
            last_usage: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn history(&self) -> &RollingHistory {
        &self.history
    }

    pub fn interaction_count(&self) -> u32 {
        self.interaction_count
    }

    /// Token usage summed over every successful backend call.
    pub fn total_usage(&self) -> Usage {
        self.total_usage
    }

    /// Usage reported by the most recent successful backend call.
    pub fn last_usage(&self) -> Option<Usage> {
        self.last_usage
    }

    /// Record a user turn and bump the interaction counter.
    pub(crate) fn record_user_turn(&mut self, text: &str) {
        self.history.append(Turn::user(text));
        self.interaction_count = self.interaction_count.saturating_add(1);
    }

    /// Record the assistant reply and the usage the backend reported for it.
    pub(crate) fn record_assistant_turn(&mut self, text: &str, usage: Usage) {
        self.history.append(Turn::assistant(text));
        self.total_usage.input_tokens =
            self.total_usage.input_tokens.saturating_add(usage.input_tokens);
        self.total_usage.output_tokens =
            self.total_usage.output_tokens.saturating_add(usage.output_tokens);
        self.last_usage = Some(usage);
    }
}
