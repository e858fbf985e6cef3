pub mod credentials;
pub mod error;
pub mod error_help;
pub mod path;
pub mod platform;

pub use credentials::CredentialStore;
pub use error::{CodesyncError, CodesyncResult};
pub use error_help::{format_error_with_help, ErrorHelp};
pub use platform::{EditorVariant, Platform};
