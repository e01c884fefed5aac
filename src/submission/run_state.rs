/// Bookkeeping for the single submission a form may have in flight.
#[derive(Debug, Clone, Default)]
pub struct SubmissionRunState {
    in_flight: Option<u64>,
    sequence: u64,
}

impl SubmissionRunState {
    pub fn is_running(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// Allocates a run id and marks it in flight. `None` while another run is
    /// still pending.
    pub fn start(&mut self) -> Option<u64> {
        if self.in_flight.is_some() {
            return None;
        }
        self.sequence = self.sequence.saturating_add(1);
        self.in_flight = Some(self.sequence);
        self.in_flight
    }

    /// Returns `false` for a completion that does not belong to the current run.
    pub fn finish(&mut self, run_id: u64) -> bool {
        if self.in_flight != Some(run_id) {
            return false;
        }
        self.in_flight = None;
        true
    }

    /// Forgets the pending run; its completion will be treated as stale. Ids
    /// keep increasing so an old completion never matches a new run.
    pub fn abandon(&mut self) {
        self.in_flight = None;
    }
}

#[cfg(test)]
mod tests {
    use super::SubmissionRunState;

    #[test]
    fn only_one_run_at_a_time() {
        let mut runs = SubmissionRunState::default();
        let first = runs.start().expect("first run");
        assert!(runs.start().is_none());
        assert!(runs.finish(first));
        assert!(runs.start().is_some_and(|second| second > first));
    }

    #[test]
    fn stale_completions_are_refused() {
        let mut runs = SubmissionRunState::default();
        let first = runs.start().expect("first run");
        runs.abandon();
        let second = runs.start().expect("second run");
        assert!(!runs.finish(first));
        assert!(runs.is_running());
        assert!(runs.finish(second));
        assert!(!runs.is_running());
    }
}
