//! Local state: the editor settings file, the running environment, and the
//! editor CLI used to enumerate and install extensions.

pub mod editor_cli;
pub mod environment;
pub mod settings;

pub use editor_cli::EditorCli;
pub use environment::EnvironmentInfo;
pub use settings::{read_settings, write_settings, Settings};
