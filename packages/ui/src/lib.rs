//! This crate contains all shared UI for the workspace.

pub mod signup;
pub use signup::{FormCell, FormState, Phase, Signup, SignupError, SignupForm};

mod confetti;
pub use confetti::Confetti;

mod spinner;
pub use spinner::Spinner;
