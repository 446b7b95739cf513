use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::reservation_form::{DeliveryPacing, ReservationForm, SubmitError};
use crate::sheet_client::SheetClient;

#[derive(serde::Deserialize, Clone)]
pub struct ReservationFormData {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

#[tracing::instrument(
    name = "Handling a reservation request",
    skip(form, sheet_client, pacing),
    fields(
        submission_id = %Uuid::new_v4(),
        reservation_email = %form.email
    )
)]
pub async fn submit_reservation(
    form: web::Form<ReservationFormData>,
    sheet_client: web::Data<SheetClient>,
    pacing: web::Data<DeliveryPacing>,
) -> Result<HttpResponse, SubmitError> {
    let mut reservation_form = ReservationForm::from_data(form.0);
    reservation_form.submit(&sheet_client, &pacing).await?;
    Ok(confirmation_page())
}

#[tracing::instrument(
    name = "Handling a reservation request (alternate path)",
    skip(form, sheet_client, pacing),
    fields(
        submission_id = %Uuid::new_v4(),
        reservation_email = %form.email
    )
)]
pub async fn submit_reservation_alternate(
    form: web::Form<ReservationFormData>,
    sheet_client: web::Data<SheetClient>,
    pacing: web::Data<DeliveryPacing>,
) -> Result<HttpResponse, SubmitError> {
    let mut reservation_form = ReservationForm::from_data(form.0);
    reservation_form
        .submit_alternate(&sheet_client, &pacing)
        .await?;
    Ok(confirmation_page())
}

fn confirmation_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>Reservation Submitted | La Música Une</title>
</head>
<body>
    <p>Thank you! Your reservation has been submitted successfully.</p>
    <p>&iexcl;Gracias! Su reservaci&oacute;n ha sido enviada.</p>
    <p><a href="/">Back to the concert page / Volver</a></p>
</body>
</html>"#,
        )
}
