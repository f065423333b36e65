//! Live call session simulator for the `CallSense` engine
//!
//! Replays a canned call script on a fixed cadence while maintaining a
//! running clock and a derived overall sentiment, driving the dashboard's
//! "live call" view without a real telephony feed.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod error;
pub mod script;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use script::{LiveScript, ScriptLine};
pub use session::{LiveSession, SessionPhase};
