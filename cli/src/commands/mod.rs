//! CLI command implementations

pub mod check;
pub mod run;
pub mod stages;

pub use check::check_command;
pub use run::run_command;
pub use stages::stages_command;
