//! Session state and the transitions that drive it

mod command;
mod reducer;
mod runtime;
mod state;

pub use command::{Command, Effect};
pub use reducer::reduce;
pub use runtime::Session;
pub use state::{CaptureState, EncounterState, SessionState};
