//! Load sequencing
//!
//! Catalog loads may overlap (a refresh after one mutation can still be in
//! flight when the next one starts). Each load takes a ticket when issued, and
//! a response is applied only if no later-issued load has been applied yet.

/// Ticket for one issued load
pub type LoadSeq = u64;

#[derive(Debug, Default, Clone)]
pub struct LoadSequencer {
    issued: LoadSeq,
    applied: LoadSeq,
}

impl LoadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the ticket for a new load
    pub fn issue(&mut self) -> LoadSeq {
        self.issued += 1;
        self.issued
    }

    /// Claim the view for the response of load `seq`.
    ///
    /// Returns false when a newer load already rendered; the caller must
    /// drop its response.
    pub fn try_apply(&mut self, seq: LoadSeq) -> bool {
        if seq <= self.applied {
            return false;
        }
        self.applied = seq;
        true
    }

    /// Most recently issued ticket
    pub fn latest_issued(&self) -> LoadSeq {
        self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_responses_apply() {
        let mut seq = LoadSequencer::new();
        let a = seq.issue();
        assert!(seq.try_apply(a));
        let b = seq.issue();
        assert!(seq.try_apply(b));
        assert_eq!(seq.latest_issued(), 2);
    }

    #[test]
    fn test_late_older_response_is_dropped() {
        let mut seq = LoadSequencer::new();
        let older = seq.issue();
        let newer = seq.issue();

        assert!(seq.try_apply(newer));
        assert!(!seq.try_apply(older));
    }

    #[test]
    fn test_older_applies_if_first_then_newer_overrides() {
        let mut seq = LoadSequencer::new();
        let older = seq.issue();
        let newer = seq.issue();

        assert!(seq.try_apply(older));
        assert!(seq.try_apply(newer));
    }
}
