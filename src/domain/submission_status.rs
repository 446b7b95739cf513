/// Lifecycle of a single reservation submission.
///
/// Created as `Idle`; moves to `Submitting` on a valid submit, to `Success` once a
/// transport attempt completes without failing, and to `Error` on validation failure
/// or when every transport strategy fails. `Error` is resettable: a fresh submit
/// attempt is always allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error,
}
