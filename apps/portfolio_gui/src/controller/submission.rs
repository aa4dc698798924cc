//! Contact-form draft plus the submission lifecycle state machine.

use shared::domain::ContactMessage;

pub const SUCCESS_BANNER: &str = "Message sent successfully! I will get back to you soon.";
pub const FAILURE_BANNER: &str =
    "Failed to send message. Please try again or contact me directly via email.";
pub const VALIDATION_BANNER: &str =
    "Please fill in your name, email, and message before sending.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Failure(String),
}

/// Outcome of a submit request. Only `Dispatch` reaches the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    Dispatch(ContactMessage),
    /// A submission is already in flight; the request is dropped, not queued.
    AlreadySubmitting,
    /// Local validation failed; no relay call is made.
    Invalid,
}

#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
    status: SubmissionStatus,
}

impl ContactFormState {
    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// A resolved banner persists until the user edits a field or resubmits.
    pub fn note_field_edited(&mut self) {
        if matches!(
            self.status,
            SubmissionStatus::Success(_) | SubmissionStatus::Failure(_)
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Begin a submission attempt. Re-entry while `Submitting` is refused
    /// without touching state; any prior banner is cleared at the start of a
    /// new attempt.
    pub fn begin_submit(&mut self) -> SubmitDecision {
        if self.is_submitting() {
            return SubmitDecision::AlreadySubmitting;
        }

        self.status = SubmissionStatus::Idle;

        let draft = ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        };
        if !draft.has_all_fields() {
            self.status = SubmissionStatus::Failure(VALIDATION_BANNER.to_string());
            return SubmitDecision::Invalid;
        }

        self.status = SubmissionStatus::Submitting;
        SubmitDecision::Dispatch(draft)
    }

    /// Relay accepted the message: fields reset to empty, success banner set.
    /// A resolution arriving outside `Submitting` is stale and ignored.
    pub fn resolve_success(&mut self) {
        if !self.is_submitting() {
            return;
        }
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.status = SubmissionStatus::Success(SUCCESS_BANNER.to_string());
    }

    /// Relay failed: fields are preserved so the user can retry without
    /// retyping.
    pub fn resolve_failure(&mut self) {
        if !self.is_submitting() {
            return;
        }
        self.status = SubmissionStatus::Failure(FAILURE_BANNER.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactFormState {
        ContactFormState {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello!".to_string(),
            ..ContactFormState::default()
        }
    }

    #[test]
    fn submit_with_all_fields_transitions_to_submitting() {
        let mut form = filled_form();
        let decision = form.begin_submit();
        assert!(matches!(decision, SubmitDecision::Dispatch(message)
            if message.name == "Ada Lovelace" && message.message == "Hello!"));
        assert!(form.is_submitting());
    }

    #[test]
    fn second_submit_while_submitting_is_dropped() {
        let mut form = filled_form();
        assert!(matches!(form.begin_submit(), SubmitDecision::Dispatch(_)));
        assert_eq!(form.begin_submit(), SubmitDecision::AlreadySubmitting);
        assert!(form.is_submitting());
    }

    #[test]
    fn success_clears_fields_and_sets_the_fixed_banner() {
        let mut form = filled_form();
        form.begin_submit();
        form.resolve_success();

        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
        assert_eq!(
            *form.status(),
            SubmissionStatus::Success(
                "Message sent successfully! I will get back to you soon.".to_string()
            )
        );
    }

    #[test]
    fn failure_preserves_fields_and_sets_the_fixed_banner() {
        let mut form = filled_form();
        form.begin_submit();
        form.resolve_failure();

        assert_eq!(form.name, "Ada Lovelace");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.message, "Hello!");
        assert_eq!(
            *form.status(),
            SubmissionStatus::Failure(
                "Failed to send message. Please try again or contact me directly via email."
                    .to_string()
            )
        );
    }

    #[test]
    fn empty_message_field_is_rejected_before_any_relay_call() {
        let mut form = filled_form();
        form.message = "   ".to_string();

        assert_eq!(form.begin_submit(), SubmitDecision::Invalid);
        assert!(!form.is_submitting());
        assert_eq!(
            *form.status(),
            SubmissionStatus::Failure(VALIDATION_BANNER.to_string())
        );
    }

    #[test]
    fn resubmitting_clears_the_previous_banner_first() {
        let mut form = filled_form();
        form.begin_submit();
        form.resolve_failure();

        assert!(matches!(form.begin_submit(), SubmitDecision::Dispatch(_)));
        assert_eq!(*form.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn editing_a_field_clears_a_resolved_banner() {
        let mut form = filled_form();
        form.begin_submit();
        form.resolve_success();

        form.name.push_str("Grace");
        form.note_field_edited();
        assert_eq!(*form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn stale_resolutions_outside_submitting_are_ignored() {
        let mut form = filled_form();
        form.resolve_success();
        assert_eq!(*form.status(), SubmissionStatus::Idle);
        assert_eq!(form.name, "Ada Lovelace");

        form.resolve_failure();
        assert_eq!(*form.status(), SubmissionStatus::Idle);
    }
}
