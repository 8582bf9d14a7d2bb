//! Call-to-action trigger policy.

/// Decides when the call-to-action is due.
///
/// Level-triggered: once the user has sent `threshold` messages, the
/// call-to-action stays due for every later turn of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToActionPolicy {
    threshold: u32,
}

impl CallToActionPolicy {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn should_trigger(&self, interaction_count: u32) -> bool {
        interaction_count >= self.threshold
    }

    /// User turns left before the call-to-action is due (0 once it is).
    pub fn remaining(&self, interaction_count: u32) -> u32 {
        self.threshold.saturating_sub(interaction_count)
    }
}

impl Default for CallToActionPolicy {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triggers_at_threshold() {
        let policy = CallToActionPolicy::new(5);
        assert!(!policy.should_trigger(0));
        assert!(!policy.should_trigger(4));
        assert!(policy.should_trigger(5));
    }

    #[test]
    fn test_stays_triggered_after_threshold() {
        let policy = CallToActionPolicy::default();
        for count in 5..50 {
            assert!(policy.should_trigger(count), "count={count}");
        }
    }

    #[test]
    fn test_remaining() {
        let policy = CallToActionPolicy::new(3);
        assert_eq!(policy.remaining(0), 3);
        assert_eq!(policy.remaining(2), 1);
        assert_eq!(policy.remaining(3), 0);
        assert_eq!(policy.remaining(10), 0);
    }
}
