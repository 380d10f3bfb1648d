// SPDX-License-Identifier: MPL-2.0
//! Client-side status of the contact form.
//!
//! The network call itself belongs to the caller: a successful `submit`
//! yields the JSON body to send, and the caller reports the endpoint's
//! answer back through `resolve`. There are no retries.

use crate::config::DEFAULT_ERROR_RESET_MS;
use crate::error::{Error, Result};
use crate::timer::OneShot;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

const MISSING_FIELDS: &str = "Name, email, and message are required.";
const GENERIC_FAILURE: &str = "Something went wrong";

/// Payload accepted by the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Name, email and message must be non-blank.
    pub fn validate(&self) -> Result<()> {
        let blank = [&self.name, &self.email, &self.message]
            .iter()
            .any(|field| field.trim().is_empty());
        if blank {
            return Err(Error::Submission(MISSING_FIELDS.to_string()));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Raw answer from the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Deserialize)]
struct Accepted {
    success: bool,
    id: String,
}

#[derive(Deserialize)]
struct Rejected {
    error: Option<String>,
}

impl SubmitResponse {
    /// The stored submission id, or the endpoint's error message.
    pub fn outcome(&self) -> Result<String> {
        if (200..300).contains(&self.status) {
            let accepted: Accepted = serde_json::from_str(&self.body)?;
            if accepted.success {
                return Ok(accepted.id);
            }
            return Err(Error::Submission(GENERIC_FAILURE.to_string()));
        }

        let message = serde_json::from_str::<Rejected>(&self.body)
            .ok()
            .and_then(|rejected| rejected.error)
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        Err(Error::Submission(message))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Send this JSON body to the endpoint.
    Send(String),
    Succeeded { id: String },
    Failed(String),
    /// The failure message expired; the form is idle again.
    Reset,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    status: FormStatus,
    reset_timer: OneShot,
    error_reset: Duration,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_ERROR_RESET_MS))
    }
}

impl ContactForm {
    #[must_use]
    pub fn new(error_reset: Duration) -> Self {
        Self {
            status: FormStatus::Idle,
            reset_timer: OneShot::default(),
            error_reset,
        }
    }

    #[must_use]
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Whether the submit button accepts clicks.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !matches!(self.status, FormStatus::Submitting | FormStatus::Succeeded)
    }

    /// Starts a submission. Ignored while one is in flight or after success.
    pub fn submit(&mut self, submission: &ContactSubmission, now: Instant) -> Effect {
        if !self.can_submit() {
            return Effect::None;
        }

        match submission.validate().and_then(|()| submission.to_json()) {
            Ok(body) => {
                self.reset_timer.cancel();
                self.status = FormStatus::Submitting;
                Effect::Send(body)
            }
            Err(err) => self.fail(&err, now),
        }
    }

    /// Applies the endpoint's answer to an in-flight submission.
    pub fn resolve(&mut self, response: &SubmitResponse, now: Instant) -> Effect {
        if self.status != FormStatus::Submitting {
            return Effect::None;
        }

        match response.outcome() {
            Ok(id) => {
                self.status = FormStatus::Succeeded;
                tracing::debug!(%id, "contact submission stored");
                Effect::Succeeded { id }
            }
            Err(err) => self.fail(&err, now),
        }
    }

    /// Reports a transport failure for the in-flight submission.
    pub fn transport_failed(&mut self, err: &Error, now: Instant) -> Effect {
        if self.status != FormStatus::Submitting {
            return Effect::None;
        }
        self.fail(err, now)
    }

    pub fn tick(&mut self, now: Instant) -> Effect {
        if !self.reset_timer.fire(now) {
            return Effect::None;
        }
        self.status = FormStatus::Idle;
        Effect::Reset
    }

    pub fn teardown(&mut self) {
        self.reset_timer.cancel();
    }

    fn fail(&mut self, err: &Error, now: Instant) -> Effect {
        let message = match err {
            Error::Submission(message) if message.trim().is_empty() => {
                GENERIC_FAILURE.to_string()
            }
            Error::Submission(message) => message.clone(),
            other => other.to_string(),
        };
        tracing::warn!(error = %message, "contact submission failed");
        self.status = FormStatus::Failed(message.clone());
        self.reset_timer.arm(now, self.error_reset);
        Effect::Failed(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::Clock;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: None,
            message: "Hello".to_string(),
        }
    }

    fn response(status: u16, body: &str) -> SubmitResponse {
        SubmitResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn submit_serializes_without_empty_subject() {
        let mut form = ContactForm::default();
        let clock = Clock::new();

        match form.submit(&submission(), clock.now()) {
            Effect::Send(body) => {
                assert!(!body.contains("subject"));
                assert!(body.contains("\"name\":\"Ada\""));
            }
            other => panic!("expected send, got {other:?}"),
        }
        assert_eq!(form.status(), &FormStatus::Submitting);
    }

    #[test]
    fn submit_is_ignored_while_in_flight() {
        let mut form = ContactForm::default();
        let clock = Clock::new();
        form.submit(&submission(), clock.now());
        assert_eq!(form.submit(&submission(), clock.now()), Effect::None);
    }

    #[test]
    fn created_response_succeeds_and_locks_the_form() {
        let mut form = ContactForm::default();
        let clock = Clock::new();
        form.submit(&submission(), clock.now());

        let effect = form.resolve(&response(201, r#"{"success":true,"id":"abc"}"#), clock.now());
        assert_eq!(effect, Effect::Succeeded { id: "abc".to_string() });
        assert!(!form.can_submit());
        assert_eq!(form.submit(&submission(), clock.now()), Effect::None);
    }

    #[test]
    fn error_response_shows_message_then_resets() {
        let mut form = ContactForm::default();
        let mut clock = Clock::new();
        form.submit(&submission(), clock.now());

        let effect = form.resolve(
            &response(500, r#"{"error":"Failed to submit. Please try again."}"#),
            clock.now(),
        );
        assert_eq!(
            effect,
            Effect::Failed("Failed to submit. Please try again.".to_string())
        );

        assert_eq!(form.tick(clock.advance(3_999)), Effect::None);
        assert_eq!(form.tick(clock.advance(1)), Effect::Reset);
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn transport_failure_applies_only_to_in_flight_submission() {
        let mut form = ContactForm::default();
        let mut clock = Clock::new();
        let offline = Error::Submission(String::new());

        assert_eq!(form.transport_failed(&offline, clock.now()), Effect::None);
        assert_eq!(form.status(), &FormStatus::Idle);

        form.submit(&submission(), clock.now());
        assert_eq!(
            form.transport_failed(&offline, clock.now()),
            Effect::Failed(GENERIC_FAILURE.to_string())
        );
        assert_eq!(form.tick(clock.advance(DEFAULT_ERROR_RESET_MS)), Effect::Reset);
        assert!(form.can_submit());
    }

    #[test]
    fn unparseable_error_body_uses_generic_message() {
        let outcome = response(502, "<html>bad gateway</html>").outcome();
        assert!(matches!(outcome, Err(Error::Submission(message)) if message == GENERIC_FAILURE));
    }

    #[test]
    fn blank_fields_fail_locally() {
        let mut form = ContactForm::default();
        let clock = Clock::new();
        let invalid = ContactSubmission {
            message: "   ".to_string(),
            ..submission()
        };

        assert_eq!(
            form.submit(&invalid, clock.now()),
            Effect::Failed(MISSING_FIELDS.to_string())
        );
    }

    #[test]
    fn late_response_after_teardown_is_ignored() {
        let mut form = ContactForm::default();
        let clock = Clock::new();
        assert_eq!(
            form.resolve(&response(201, r#"{"success":true,"id":"x"}"#), clock.now()),
            Effect::None
        );
        form.teardown();
        form.teardown();
    }
}
