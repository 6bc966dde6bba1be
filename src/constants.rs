//! Application-wide constants.

/// The binary name of the application (used as the clap command name and in
/// command examples).
pub const APP_BINARY_NAME: &str = "padseq";
