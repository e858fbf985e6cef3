pub mod configure;
pub mod link;
pub mod prompt;
pub mod status;
pub mod sync;
