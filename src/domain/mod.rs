mod new_reservation;
mod submission_status;

pub use new_reservation::{NewReservation, RequiredField};
pub use submission_status::SubmissionStatus;
