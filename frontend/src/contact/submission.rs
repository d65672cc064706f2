use async_trait::async_trait;
use gloo_net::http::Request;
use log::{info, warn};
use web_sys::{FormData, HtmlFormElement};

use crate::contact::validation::{self, FieldValues};
use crate::page::effects::{Effect, Surface, Target};

pub const SUBMIT_FAILURE_ALERT: &str = "Oops! There was a problem submitting your form";

/// What happened to a contact submission, independent of how it is shown.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Success,
    HttpError(u16),
    NetworkError(String),
}

/// Sends the contact form somewhere. The browser implementation posts the
/// form's fields to its action URL; tests swap in a canned one.
#[async_trait(?Send)]
pub trait FormTransport {
    async fn post(&self, action: &str) -> SubmissionOutcome;
}

pub struct HttpFormTransport {
    form: HtmlFormElement,
}

impl HttpFormTransport {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }
}

#[async_trait(?Send)]
impl FormTransport for HttpFormTransport {
    async fn post(&self, action: &str) -> SubmissionOutcome {
        let body = match FormData::new_with_form(&self.form) {
            Ok(body) => body,
            Err(e) => return SubmissionOutcome::NetworkError(format!("{:?}", e)),
        };

        // Only the status matters; the body is never read.
        match Request::post(action)
            .header("Accept", "application/json")
            .body(body)
            .send()
            .await
        {
            Ok(response) if response.ok() => SubmissionOutcome::Success,
            Ok(response) => SubmissionOutcome::HttpError(response.status()),
            Err(e) => SubmissionOutcome::NetworkError(e.to_string()),
        }
    }
}

/// Turns an outcome into what the visitor sees. Both failure kinds collapse
/// into the same alert.
pub fn present(outcome: &SubmissionOutcome, success_hide_ms: u32) -> Vec<Effect> {
    match outcome {
        SubmissionOutcome::Success => {
            info!("Contact form submitted");
            vec![
                Effect::style(Target::SuccessMessage, "display", "block"),
                Effect::ResetForm,
                Effect::HideAfter {
                    target: Target::SuccessMessage,
                    delay_ms: success_hide_ms,
                },
            ]
        }
        SubmissionOutcome::HttpError(status) => {
            warn!("Contact form rejected with status {}", status);
            vec![Effect::Alert(SUBMIT_FAILURE_ALERT.to_string())]
        }
        SubmissionOutcome::NetworkError(reason) => {
            warn!("Contact form request failed: {}", reason);
            vec![Effect::Alert(SUBMIT_FAILURE_ALERT.to_string())]
        }
    }
}

/// Sends an already validated form once. No retry.
pub async fn deliver<T>(transport: &T, action: &str, success_hide_ms: u32) -> Vec<Effect>
where
    T: FormTransport + ?Sized,
{
    let outcome = transport.post(action).await;
    present(&outcome, success_hide_ms)
}

/// Submit handler body: shows every field's feedback, then sends the form
/// only when all three fields pass. Returns whether a request went out.
pub async fn submit_contact<T, S>(
    transport: &T,
    surface: &S,
    action: &str,
    values: &FieldValues,
    success_hide_ms: u32,
) -> bool
where
    T: FormTransport + ?Sized,
    S: Surface + ?Sized,
{
    let (valid, effects) = validation::validate_form(values);
    surface.apply_all(&effects);
    if !valid {
        return false;
    }
    surface.apply_all(&deliver(transport, action, success_hide_ms).await);
    true
}
