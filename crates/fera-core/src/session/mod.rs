//! Conversation session: state, call-to-action policy, and the controller
//! that drives one exchange at a time.

pub mod controller;
pub mod state;
pub mod trigger;

pub use controller::SessionController;
pub use state::SessionState;
pub use trigger::CallToActionPolicy;
