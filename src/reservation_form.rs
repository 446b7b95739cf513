use std::fmt::{Debug, Formatter};

use actix_web::http::StatusCode;
use actix_web::ResponseError;

use crate::domain::{NewReservation, SubmissionStatus};
use crate::error_handling::error_chain_fmt;
use crate::routes::ReservationFormData;
use crate::sheet_client::SheetClient;

/// The two timer-based deferrals in the submission flow: a short pause before the
/// transport dispatch, and a settling delay before success is declared.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryPacing {
    pub dispatch_delay: std::time::Duration,
    pub settle_delay: std::time::Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationField {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

/// Owns the draft reservation fields and drives the submission state machine.
///
/// Success is optimistic: the endpoint's response cannot be trusted (the
/// fire-and-forget hop never inspects it at all), so once a transport attempt
/// completes the controller waits out the settling delay and declares success.
/// Actual server-side acceptance is unobservable from here.
pub struct ReservationForm {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    message: String,
    status: SubmissionStatus,
    is_submitting: bool,
    error_message: Option<String>,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationForm {
    pub fn new() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            message: String::new(),
            status: SubmissionStatus::Idle,
            is_submitting: false,
            error_message: None,
        }
    }

    pub fn from_data(data: ReservationFormData) -> Self {
        let mut form = Self::new();
        form.first_name = data.first_name;
        form.last_name = data.last_name;
        form.email = data.email;
        form.phone = data.phone;
        form.message = data.message;
        form
    }

    /// Overwrites a single draft field. Never fails and never changes the
    /// submission status.
    pub fn update_field(&mut self, field: ReservationField, value: String) {
        match field {
            ReservationField::FirstName => self.first_name = value,
            ReservationField::LastName => self.last_name = value,
            ReservationField::Email => self.email = value,
            ReservationField::Phone => self.phone = value,
            ReservationField::Message => self.message = value,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Snapshot of the current draft, in form-data shape.
    pub fn fields(&self) -> ReservationFormData {
        ReservationFormData {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        }
    }

    /// Validates the draft and delivers it through the full strategy chain.
    ///
    /// On validation failure no transport is attempted. On delivery failure the
    /// draft is kept so the user can retry without retyping. On success the draft
    /// is cleared after the settling delay.
    #[tracing::instrument(name = "Submitting a reservation", skip(self, sheet_client, pacing))]
    pub async fn submit(
        &mut self,
        sheet_client: &SheetClient,
        pacing: &DeliveryPacing,
    ) -> Result<(), SubmitError> {
        // the submit control is disabled while a submission is in flight
        if self.is_submitting {
            return Ok(());
        }
        let reservation = self.validate()?;
        self.begin_submission();
        tokio::time::sleep(pacing.dispatch_delay).await;
        match sheet_client.deliver(&reservation).await {
            Ok(strategy) => {
                tracing::info!("Reservation dispatched via {:?}", strategy);
                self.settle(pacing.settle_delay).await;
                Ok(())
            }
            Err(error) => Err(self.fail(SubmitError::Delivery(error))),
        }
    }

    /// Manual escape hatch: re-validates, then performs only the fire-and-forget
    /// transport, independent of any earlier submit attempt.
    #[tracing::instrument(
        name = "Submitting a reservation via the alternate path",
        skip(self, sheet_client, pacing)
    )]
    pub async fn submit_alternate(
        &mut self,
        sheet_client: &SheetClient,
        pacing: &DeliveryPacing,
    ) -> Result<(), SubmitError> {
        if self.is_submitting {
            return Ok(());
        }
        let reservation = self.validate()?;
        self.begin_submission();
        tokio::time::sleep(pacing.dispatch_delay).await;
        match sheet_client.deliver_opaque(&reservation).await {
            Ok(()) => {
                tracing::info!("Reservation dispatched via the fire-and-forget path");
                self.settle(pacing.settle_delay).await;
                Ok(())
            }
            Err(error) => Err(self.fail(SubmitError::Delivery(error))),
        }
    }

    fn validate(&mut self) -> Result<NewReservation, SubmitError> {
        match NewReservation::try_from(self.fields()) {
            Ok(reservation) => Ok(reservation),
            Err(detail) => {
                tracing::warn!("Reservation validation failed: {}", detail);
                Err(self.fail(SubmitError::Validation(detail)))
            }
        }
    }

    fn begin_submission(&mut self) {
        self.status = SubmissionStatus::Submitting;
        self.is_submitting = true;
        self.error_message = None;
    }

    /// Waits out the settling delay, then declares success and resets the draft.
    async fn settle(&mut self, settle_delay: std::time::Duration) {
        tokio::time::sleep(settle_delay).await;
        self.status = SubmissionStatus::Success;
        self.first_name.clear();
        self.last_name.clear();
        self.email.clear();
        self.phone.clear();
        self.message.clear();
        self.is_submitting = false;
    }

    fn fail(&mut self, error: SubmitError) -> SubmitError {
        self.status = SubmissionStatus::Error;
        self.is_submitting = false;
        self.error_message = Some(error.to_string());
        error
    }
}

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("Please fill in all required fields.")]
    Validation(String),
    #[error(
        "There was a problem submitting your reservation. Please try again or contact us directly."
    )]
    Delivery(#[source] reqwest::Error),
}

impl Debug for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubmitError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmitError::Validation(_) => StatusCode::BAD_REQUEST,
            SubmitError::Delivery(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
