use crate::submission::channel::SubmissionChannel;
use crate::submission::outcome::SubmissionOutcome;
use crate::submission::payload::SubmissionPayload;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionCompletion {
    pub run_id: u64,
    pub outcome: SubmissionOutcome,
}

/// Runs channel calls off the event loop and hands completions back in order
/// of arrival.
pub struct SubmissionExecutor {
    completion_tx: Sender<SubmissionCompletion>,
    completion_rx: Receiver<SubmissionCompletion>,
}

impl SubmissionExecutor {
    pub fn new() -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<SubmissionCompletion>();
        Self {
            completion_tx,
            completion_rx,
        }
    }

    pub fn spawn<C>(&self, channel: Arc<C>, run_id: u64, payload: SubmissionPayload)
    where
        C: SubmissionChannel + ?Sized + 'static,
    {
        let completion_tx = self.completion_tx.clone();
        std::thread::spawn(move || {
            let outcome = channel.submit(&payload);
            // The receiver is gone only if the executor was dropped.
            let _ = completion_tx.send(SubmissionCompletion { run_id, outcome });
        });
    }

    pub fn drain_ready(&self) -> Vec<SubmissionCompletion> {
        let mut out = Vec::<SubmissionCompletion>::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(completion) => out.push(completion),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }

    /// Blocks until one completion arrives or `timeout` elapses.
    pub fn wait_ready(&self, timeout: Duration) -> Option<SubmissionCompletion> {
        match self.completion_rx.recv_timeout(timeout) {
            Ok(completion) => Some(completion),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

impl Default for SubmissionExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::SubmissionExecutor;
    use crate::submission::outcome::SubmissionOutcome;
    use crate::submission::payload::SubmissionPayload;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn completion_carries_run_id() {
        let executor = SubmissionExecutor::new();
        let channel = Arc::new(|payload: &SubmissionPayload| {
            SubmissionOutcome::success(format!("{} fields", payload.len()))
        });
        executor.spawn(channel, 7, SubmissionPayload::default());

        let completion = executor
            .wait_ready(Duration::from_secs(5))
            .expect("completion");
        assert_eq!(completion.run_id, 7);
        assert_eq!(completion.outcome.message(), "0 fields");
        assert!(executor.drain_ready().is_empty());
    }

    #[test]
    fn drain_is_empty_without_work() {
        let executor = SubmissionExecutor::new();
        assert!(executor.drain_ready().is_empty());
        assert!(executor.wait_ready(Duration::from_millis(10)).is_none());
    }
}
