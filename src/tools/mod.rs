/// User-facing habit operations
///
/// Each operation is a free function generic over the storage backend, so
/// the CLI and the tests drive exactly the same code paths.

pub mod create;
pub mod log;
pub mod list;
pub mod status;
pub mod seed;

// Re-export tool functions for easy access
pub use create::*;
pub use log::*;
pub use list::*;
pub use status::*;
pub use seed::*;
