//! Command implementations

mod config_cmd;
mod digits;
mod format;
mod validate;
mod watch;

pub use config_cmd::config_cmd;
pub use digits::digits;
pub use format::format;
pub use validate::validate;
pub use watch::watch;
