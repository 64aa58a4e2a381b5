use thiserror::Error;

use crate::relay::DeliveryError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed(DeliveryError),
}

/// Reasons a submit never leaves the page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("a message is already being sent")]
    AlreadySending,
}

/// Contact form contents and the lifecycle of its one outstanding submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    message: String,
    state: SubmitState,
}

impl ContactForm {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == SubmitState::Sending
    }

    pub fn is_success(&self) -> bool {
        self.state == SubmitState::Succeeded
    }

    /// Editing after a finished submission clears its status. An in-flight
    /// submission is left alone.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        if matches!(self.state, SubmitState::Succeeded | SubmitState::Failed(_)) {
            self.state = SubmitState::Idle;
        }
    }

    /// Moves to `Sending` and hands back the text to deliver.
    pub fn begin_submit(&mut self) -> Result<String, SubmitError> {
        if self.is_sending() {
            return Err(SubmitError::AlreadySending);
        }
        if self.message.trim().is_empty() {
            return Err(SubmitError::EmptyMessage);
        }
        self.state = SubmitState::Sending;
        Ok(self.message.clone())
    }

    /// Applies the relay outcome. Ignored unless a submission is in flight.
    pub fn finish(&mut self, outcome: Result<(), DeliveryError>) {
        if !self.is_sending() {
            return;
        }
        self.state = match outcome {
            Ok(()) => {
                self.message.clear();
                SubmitState::Succeeded
            }
            Err(e) => SubmitState::Failed(e),
        };
    }

    pub fn status(&self) -> Option<&'static str> {
        match &self.state {
            SubmitState::Idle => None,
            SubmitState::Sending => Some("Sending..."),
            SubmitState::Succeeded => Some("Message sent successfully!"),
            SubmitState::Failed(e) => Some(e.status_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    fn form_with(message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.set_message(message);
        form
    }

    fn failed_form() -> ContactForm {
        let mut form = form_with("hello");
        form.begin_submit().unwrap();
        form.finish(Err(DeliveryError::Rejected(StatusCode::BAD_GATEWAY)));
        form
    }

    #[test]
    fn test_empty_rejected_without_state_change() {
        let mut form = ContactForm::default();
        assert_eq!(form.begin_submit(), Err(SubmitError::EmptyMessage));
        assert_eq!(*form.state(), SubmitState::Idle);
        assert_eq!(form.status(), None);
    }

    #[test]
    fn test_one_submission_at_a_time() {
        let mut form = form_with("hello");
        assert_eq!(form.begin_submit(), Ok("hello".to_string()));
        assert_eq!(form.status(), Some("Sending..."));
        assert_eq!(form.begin_submit(), Err(SubmitError::AlreadySending));
        assert!(form.is_sending());
    }

    #[test]
    fn test_edit_while_sending_then_success_clears() {
        let mut form = form_with("hello");
        form.begin_submit().unwrap();
        form.set_message("hello again");
        assert!(form.is_sending());

        form.finish(Ok(()));
        assert!(form.is_success());
        assert_eq!(form.message(), "");
    }

    #[test]
    fn test_failures_have_distinct_status() {
        let rejected = failed_form();

        let mut transport = form_with("hello");
        transport.begin_submit().unwrap();
        transport.finish(Err(DeliveryError::Transport("offline".to_string())));

        assert_ne!(rejected.status(), transport.status());
        assert_eq!(rejected.message(), "hello");
        assert_eq!(transport.message(), "hello");
    }

    #[test]
    fn test_editing_clears_stale_status() {
        let mut form = failed_form();
        assert!(form.status().is_some());

        // whitespace passes the browser's required check but is not sent
        form.set_message("   ");
        assert_eq!(form.status(), None);
        assert_eq!(form.begin_submit(), Err(SubmitError::EmptyMessage));
        assert_eq!(form.status(), None);

        let mut sent = form_with("hello");
        sent.begin_submit().unwrap();
        sent.finish(Ok(()));
        sent.set_message("h");
        assert_eq!(*sent.state(), SubmitState::Idle);
    }

    #[test]
    fn test_finish_without_submission_ignored() {
        let mut form = form_with("hello");
        form.finish(Ok(()));
        assert_eq!(*form.state(), SubmitState::Idle);
        assert_eq!(form.message(), "hello");
    }

    #[test]
    fn test_resubmit_from_terminal_states() {
        let mut form = failed_form();
        assert!(form.begin_submit().is_ok());
        assert!(form.is_sending());

        form.finish(Ok(()));
        form.set_message("second");
        assert!(form.begin_submit().is_ok());
        assert!(form.is_sending());
    }
}
