//! Terminal implementations of the host-side enrollment ports.

pub mod alert;
pub mod form_engine;
pub mod renderer;
pub mod terminal;

pub use alert::TerminalAlertSink;
pub use form_engine::TerminalFormEngine;
pub use renderer::{render_state, TerminalRenderer};
pub use terminal::TerminalIo;
