//! Rolling conversation history.
//!
//! `RollingHistory` keeps the most recent `k` user+assistant pairs (at most
//! `2k` turns) in conversational order. Appending past capacity discards the
//! oldest turns first; nothing is summarized.

use std::collections::VecDeque;
use std::collections::vec_deque;

use fera_types::chat::Turn;

/// Default number of user+assistant pairs kept in the window.
pub const DEFAULT_WINDOW_PAIRS: usize = 5;

/// Bounded FIFO log of conversation turns.
#[derive(Debug, Clone)]
pub struct RollingHistory {
    turns: VecDeque<Turn>,
    window_pairs: usize,
}

impl RollingHistory {
    /// Create an empty history holding at most `window_pairs` exchanges.
    pub fn new(window_pairs: usize) -> Self {
        Self {
            turns: VecDeque::with_capacity(window_pairs * 2),
            window_pairs,
        }
    }

    /// Add a turn at the end, evicting from the front until within capacity.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push_back(turn);
        while self.turns.len() > self.capacity() {
            self.turns.pop_front();
        }
    }

    /// Turns from oldest to newest.
    pub fn as_sequence(&self) -> vec_deque::Iter<'_, Turn> {
        self.turns.iter()
    }

    /// Most recently appended turn, if any.
    pub fn last(&self) -> Option<&Turn> {
        self.turns.back()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Maximum number of turns retained (two per exchange).
    pub fn capacity(&self) -> usize {
        self.window_pairs * 2
    }

    pub fn window_pairs(&self) -> usize {
        self.window_pairs
    }
}

impl Default for RollingHistory {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_PAIRS)
    }
}
