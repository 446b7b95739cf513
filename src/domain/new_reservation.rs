use crate::routes::ReservationFormData;

/// A field whose only validity requirement is presence. The endpoint performs no
/// format checks of its own, so neither do we: an email is "valid" here as long as
/// it is non-empty, and whitespace-only input counts as present.
#[derive(Debug, Clone)]
pub struct RequiredField(String);

impl RequiredField {
    pub fn parse(value: String, field_name: &str) -> Result<RequiredField, String> {
        if value.is_empty() {
            Err(format!("{} is required but was empty.", field_name))
        } else {
            Ok(Self(value))
        }
    }
}

impl AsRef<str> for RequiredField {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A reservation that has passed validation. Constructing one is the only way to
/// reach the transport layer, so invalid input can never be delivered.
#[derive(Debug)]
pub struct NewReservation {
    pub first_name: RequiredField,
    pub last_name: RequiredField,
    pub email: RequiredField,
    pub phone: String,
    pub message: String,
}

impl TryFrom<ReservationFormData> for NewReservation {
    type Error = String;

    fn try_from(form: ReservationFormData) -> Result<Self, Self::Error> {
        let first_name = RequiredField::parse(form.first_name, "firstName")?;
        let last_name = RequiredField::parse(form.last_name, "lastName")?;
        let email = RequiredField::parse(form.email, "email")?;
        Ok(NewReservation {
            first_name,
            last_name,
            email,
            phone: form.phone,
            message: form.message,
        })
    }
}
