use store::StoreError;
use thiserror::Error;

/// Why a submission did not go through. `Display` is the text shown under the form.
#[derive(Debug, Error)]
pub enum SignupError {
    #[error("Provided email is invalid.")]
    InvalidEmail,

    #[error("Initials must be 2-3 characters in length.")]
    InvalidInitials,

    #[error("There are no more spots available.")]
    CapacityExceeded,

    /// Any failure of the append itself. The cause is logged, never shown.
    #[error("Something went wrong, please contact the maintainer to fix this.")]
    RemoteWriteFailure(#[source] StoreError),
}
