//! Card Model
//!
//! Per-card transient state. The only state a card has is its "copied"
//! acknowledgment, shown for a fixed window after the copy that raised it.

use std::collections::HashMap;
use std::time::Instant;

use crate::logic;
use crate::quotes::QuoteId;

/// Copy acknowledgments keyed by quotation id
#[derive(Clone, Debug, Default)]
pub struct CopyAcks {
    copied_at: HashMap<QuoteId, Instant>,
}

impl CopyAcks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a copy of card `id` at `now`
    ///
    /// A copy while the acknowledgment is still showing keeps the original
    /// instant; the window is fixed from the first copy.
    pub fn mark(&mut self, id: QuoteId, now: Instant) {
        if !self.is_copied(id, now) {
            self.copied_at.insert(id, now);
        }
    }

    /// Whether card `id` shows the acknowledgment at `now`
    pub fn is_copied(&self, id: QuoteId, now: Instant) -> bool {
        self.copied_at
            .get(&id)
            .map(|at| !logic::ui::copy_ack_expired(now.saturating_duration_since(*at)))
            .unwrap_or(false)
    }

    /// Drop every acknowledgment whose window has elapsed
    ///
    /// Returns the ids that reverted. Each acknowledgment reverts once.
    pub fn expire(&mut self, now: Instant) -> Vec<QuoteId> {
        let mut reverted = Vec::new();
        self.copied_at.retain(|id, at| {
            if logic::ui::copy_ack_expired(now.saturating_duration_since(*at)) {
                reverted.push(*id);
                false
            } else {
                true
            }
        });
        reverted.sort_unstable();
        reverted
    }

    pub fn is_empty(&self) -> bool {
        self.copied_at.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_not_copied_by_default() {
        let acks = CopyAcks::new();
        assert!(!acks.is_copied(1, Instant::now()));
    }

    #[test]
    fn test_ack_visible_inside_window() {
        let t0 = Instant::now();
        let mut acks = CopyAcks::new();
        acks.mark(1, t0);
        assert!(acks.is_copied(1, t0 + Duration::from_millis(1999)));
        assert!(!acks.is_copied(1, t0 + Duration::from_secs(2)));
        assert!(!acks.is_copied(2, t0));
    }

    #[test]
    fn test_second_copy_keeps_first_deadline() {
        let t0 = Instant::now();
        let mut acks = CopyAcks::new();
        acks.mark(1, t0);
        acks.mark(1, t0 + Duration::from_millis(1500));
        assert!(acks.is_copied(1, t0 + Duration::from_millis(1500)));

        // Reverts 2s after the first copy regardless of the second
        let t1 = t0 + Duration::from_millis(2500);
        assert!(!acks.is_copied(1, t1));
        assert_eq!(acks.expire(t1), vec![1]);
        assert!(acks.expire(t1).is_empty());
    }

    #[test]
    fn test_copy_after_revert_starts_new_window() {
        let t0 = Instant::now();
        let mut acks = CopyAcks::new();
        acks.mark(1, t0);

        // The old entry has not been swept yet but has expired
        let t1 = t0 + Duration::from_secs(3);
        acks.mark(1, t1);
        assert!(acks.is_copied(1, t1 + Duration::from_millis(1999)));
        assert!(!acks.is_copied(1, t1 + Duration::from_secs(2)));
    }

    #[test]
    fn test_expire_reverts_exactly_once() {
        let t0 = Instant::now();
        let mut acks = CopyAcks::new();
        acks.mark(1, t0);
        acks.mark(2, t0 + Duration::from_secs(1));

        let t1 = t0 + Duration::from_millis(2100);
        assert_eq!(acks.expire(t1), vec![1]);
        assert_eq!(acks.expire(t1), Vec::<QuoteId>::new());

        let t2 = t0 + Duration::from_secs(5);
        assert_eq!(acks.expire(t2), vec![2]);
        assert!(acks.expire(t2).is_empty());
        assert!(acks.is_empty());
    }
}
