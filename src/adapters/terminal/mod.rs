//! Terminal Adapters - The Client's User Interface
//!
//! Stands in for the browser page: notices are printed as blocking
//! alerts, the marketplace is rendered as text, and the interactive
//! shell keeps one session alive across commands.

pub mod notifier;
pub mod render;
pub mod shell;

pub use notifier::TerminalNotifier;
pub use render::render_view;
pub use shell::{ShellCommand, run_shell};
