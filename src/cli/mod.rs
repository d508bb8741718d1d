mod commands;

pub use commands::{execute_command, failure_headline, Args, Commands};
