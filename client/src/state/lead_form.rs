//! Contact form values and submission lifecycle.
//!
//! DESIGN
//! ======
//! `LeadFormState` is a plain struct with synchronous transitions
//! (`begin_submit`, `finish_submit`, `clear_loading`). The async driver
//! [`submit`] sequences them around the single network call and is generic
//! over where the state lives (`FormStore`) and how the request is sent
//! (`LeadTransport`), so the page passes an `RwSignal` and the browser
//! transport while tests pass a `RefCell` and a fake.
//!
//! At most one request is in flight: the button is disabled while loading,
//! and `begin_submit` refuses to start unless the form is idle.

#[cfg(test)]
#[path = "lead_form_test.rs"]
mod lead_form_test;

use std::cell::RefCell;

use leptos::prelude::*;
use serde::Serialize;

use crate::net::api::{self, LeadTransport, SubmitError};
use crate::net::types::LeadPayload;
use crate::util::utm::UtmParams;

/// Selectable values for the interest field as `(value, label)`.
pub const INTEREST_OPTIONS: [(&str, &str); 5] = [
    ("", "Select one"),
    ("demo", "Product demo"),
    ("pricing", "Pricing"),
    ("partnership", "Partnership"),
    ("other", "Other"),
];

/// Visitor-entered contact form values.
///
/// `website` is the honeypot: hidden from people, filled in by bots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub interest: String,
    pub notes: String,
    pub website: String,
}

/// Names each input so components bind through one setter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Company,
    Phone,
    Interest,
    Notes,
    Website,
}

impl FormField {
    /// Input `name` attribute and JSON key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Phone => "phone",
            Self::Interest => "interest",
            Self::Notes => "notes",
            Self::Website => "website",
        }
    }
}

impl FormValues {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Phone => &self.phone,
            FormField::Interest => &self.interest,
            FormField::Notes => &self.notes,
            FormField::Website => &self.website,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::Phone => &mut self.phone,
            FormField::Interest => &mut self.interest,
            FormField::Notes => &mut self.notes,
            FormField::Website => &mut self.website,
        };
        *slot = value;
    }

    /// Honeypot filled in.
    pub fn is_spam(&self) -> bool {
        !self.website.is_empty()
    }

    /// Name and email both present.
    pub fn has_required(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

/// Where the form is in its submit lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    /// Terminal for the page view; the form is replaced by a confirmation.
    Submitted,
}

/// Why a submit attempt never reached the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitSkip {
    /// A request is already in flight or the form was already submitted.
    Busy,
    /// Honeypot filled in; dropped without feedback.
    Spam,
    /// Name or email missing.
    Incomplete,
    /// The backing state was disposed (page unmounted).
    Detached,
}

/// Result of one call to [`submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    Skipped(SubmitSkip),
    Delivered,
    Failed(SubmitError),
}

impl SubmitAttempt {
    /// Write the attempt to the browser console.
    pub fn log(&self) {
        match self {
            Self::Skipped(SubmitSkip::Spam) => leptos::logging::log!("lead submit dropped: honeypot filled"),
            Self::Skipped(reason) => leptos::logging::log!("lead submit skipped: {reason:?}"),
            Self::Delivered => leptos::logging::log!("lead submitted"),
            Self::Failed(e) => leptos::logging::warn!("lead submit failed: {e}"),
        }
    }
}

/// Full form state owned by the landing page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFormState {
    pub values: FormValues,
    pub status: SubmissionStatus,
    pub error: Option<String>,
}

impl LeadFormState {
    pub fn is_loading(&self) -> bool {
        self.status == SubmissionStatus::Loading
    }

    pub fn is_submitted(&self) -> bool {
        self.status == SubmissionStatus::Submitted
    }

    /// Submit button is disabled while loading or while name/email is empty.
    pub fn submit_disabled(&self) -> bool {
        self.is_loading() || self.values.email.is_empty() || self.values.name.is_empty()
    }

    /// Start a submission: clear the previous error, drop spam, and move to
    /// `Loading`. Returns the values to send.
    ///
    /// # Errors
    ///
    /// Returns the reason no request should be made. A spam drop leaves the
    /// status untouched.
    pub fn begin_submit(&mut self) -> Result<FormValues, SubmitSkip> {
        if self.status != SubmissionStatus::Idle {
            return Err(SubmitSkip::Busy);
        }
        self.error = None;
        if self.values.is_spam() {
            return Err(SubmitSkip::Spam);
        }
        if !self.values.has_required() {
            return Err(SubmitSkip::Incomplete);
        }
        self.status = SubmissionStatus::Loading;
        Ok(self.values.clone())
    }

    /// Apply the outcome of the network call.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Submitted;
                self.values = FormValues::default();
            }
            Err(e) => {
                self.status = SubmissionStatus::Idle;
                self.error = Some(e.user_message());
            }
        }
    }

    /// Drop back to `Idle` if still loading. No-op in any other status.
    pub fn clear_loading(&mut self) {
        if self.is_loading() {
            self.status = SubmissionStatus::Idle;
        }
    }
}

/// Mutable home of a [`LeadFormState`].
pub trait FormStore {
    /// Run `f` against the state. `None` when the state is gone.
    fn with_form<R>(&self, f: impl FnOnce(&mut LeadFormState) -> R) -> Option<R>;
}

impl FormStore for RwSignal<LeadFormState> {
    fn with_form<R>(&self, f: impl FnOnce(&mut LeadFormState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FormStore for RefCell<LeadFormState> {
    fn with_form<R>(&self, f: impl FnOnce(&mut LeadFormState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Clears `Loading` when dropped, whether the submit future completed,
/// failed, or was dropped mid-flight.
struct LoadingGuard<'a, S: FormStore>(&'a S);

impl<S: FormStore> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        let _ = self.0.with_form(LeadFormState::clear_loading);
    }
}

/// Run one submission against `store`: begin, POST once, apply the outcome.
pub async fn submit<S, T>(store: &S, utm: &UtmParams, transport: &T) -> SubmitAttempt
where
    S: FormStore,
    T: LeadTransport,
{
    let values = match store.with_form(LeadFormState::begin_submit) {
        Some(Ok(values)) => values,
        Some(Err(skip)) => return SubmitAttempt::Skipped(skip),
        None => return SubmitAttempt::Skipped(SubmitSkip::Detached),
    };
    let _loading = LoadingGuard(store);

    let payload = LeadPayload::new(values, utm.clone());
    let outcome = api::submit_lead(transport, &payload).await;
    let _ = store.with_form(|s| s.finish_submit(outcome.clone()));

    match outcome {
        Ok(()) => SubmitAttempt::Delivered,
        Err(e) => SubmitAttempt::Failed(e),
    }
}
