//! Handlers installed in the chain: interaction logging and menu dispatch.

mod logging;
mod menu_handler;

pub use logging::LoggingHandler;
pub use menu_handler::MenuHandler;
