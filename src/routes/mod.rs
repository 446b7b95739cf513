mod health_check;
mod home;
mod reservations;

pub use health_check::health_check;
pub use home::home;
pub use reservations::{submit_reservation, submit_reservation_alternate, ReservationFormData};
