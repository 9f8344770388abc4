//! The sign-up card: state machine, controller, and component.

mod component;
mod controller;
mod error;
mod state;

pub use component::SignupForm;
pub use controller::Signup;
pub use error::SignupError;
pub use state::{FormCell, FormState, Phase};
