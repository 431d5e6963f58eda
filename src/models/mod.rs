//! Data types shared by the backend, the cache and the attributor.
//!
//! - `blame`: BlameHunk, one attributed line range
//! - `commit`: CommitRecord, AuthorInfo
//! - `context`: LineContext, ContextKeys for the host's per-line input
//! - `attribution`: Attribution, the rendered mail-to annotation

pub mod attribution;
pub mod blame;
pub mod commit;
pub mod context;

pub use attribution::*;
pub use blame::*;
pub use commit::*;
pub use context::*;
