use crate::submission::outcome::SubmissionOutcome;
use crate::submission::payload::SubmissionPayload;
use std::fmt::Display;

/// Delivers a form payload to the remote handler.
///
/// Implementations always resolve to an outcome. Transport faults, timeouts
/// and malformed replies have to be turned into [`SubmissionOutcome::Error`]
/// here; the form has no fallback for a channel that does not answer.
pub trait SubmissionChannel: Send + Sync {
    fn submit(&self, payload: &SubmissionPayload) -> SubmissionOutcome;
}

impl<F> SubmissionChannel for F
where
    F: Fn(&SubmissionPayload) -> SubmissionOutcome + Send + Sync,
{
    fn submit(&self, payload: &SubmissionPayload) -> SubmissionOutcome {
        self(payload)
    }
}

/// Adapts a transport that exchanges JSON text.
pub struct JsonChannel<F> {
    transport: F,
    fault_message: String,
}

impl<F, E> JsonChannel<F>
where
    F: Fn(&str) -> Result<String, E> + Send + Sync,
    E: Display,
{
    pub fn new(transport: F) -> Self {
        Self {
            transport,
            fault_message: "Submission failed".to_string(),
        }
    }

    /// Banner text used when the transport fails or the reply is unreadable.
    pub fn with_fault_message(mut self, message: impl Into<String>) -> Self {
        self.fault_message = message.into();
        self
    }

    fn fault(&self, detail: impl Display) -> SubmissionOutcome {
        tracing::warn!(detail = %detail, "submission transport fault");
        SubmissionOutcome::error(self.fault_message.clone(), Vec::new())
    }
}

impl<F, E> SubmissionChannel for JsonChannel<F>
where
    F: Fn(&str) -> Result<String, E> + Send + Sync,
    E: Display,
{
    fn submit(&self, payload: &SubmissionPayload) -> SubmissionOutcome {
        let body = match payload.to_json() {
            Ok(body) => body,
            Err(err) => return self.fault(err),
        };

        match (self.transport)(&body) {
            Ok(reply) => {
                SubmissionOutcome::from_json(&reply).unwrap_or_else(|err| self.fault(err))
            }
            Err(err) => self.fault(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonChannel, SubmissionChannel};
    use crate::submission::outcome::SubmissionOutcome;
    use crate::submission::payload::SubmissionPayload;
    use std::sync::Mutex;

    #[test]
    fn closures_are_channels() {
        let channel = |_: &SubmissionPayload| SubmissionOutcome::success("Thanks!");
        let outcome = channel.submit(&SubmissionPayload::default());
        assert_eq!(outcome.message(), "Thanks!");
    }

    #[test]
    fn json_channel_sends_payload_and_decodes_reply() {
        let seen = Mutex::new(String::new());
        let channel = JsonChannel::new(|body: &str| -> Result<String, String> {
            *seen.lock().expect("lock") = body.to_string();
            Ok(r#"{"status":"error","message":"Bad","errors":[{"path":"email","message":"X"}]}"#
                .to_string())
        });

        let outcome = channel.submit(&SubmissionPayload::default());
        assert_eq!(outcome.message(), "Bad");
        assert_eq!(outcome.errors()[0].path, "email");
        assert_eq!(*seen.lock().expect("lock"), "{}");
    }

    #[test]
    fn transport_faults_become_error_outcomes() {
        let channel = JsonChannel::new(|_: &str| -> Result<String, String> {
            Err("connection refused".to_string())
        })
        .with_fault_message("Try again later");

        let outcome = channel.submit(&SubmissionPayload::default());
        assert_eq!(outcome, SubmissionOutcome::error("Try again later", Vec::new()));
    }

    #[test]
    fn unreadable_replies_become_error_outcomes() {
        let channel = JsonChannel::new(|_: &str| -> Result<String, String> {
            Ok("<html>502</html>".to_string())
        });
        assert!(!channel.submit(&SubmissionPayload::default()).is_success());
    }
}
