pub mod backend;
pub mod cache;
pub mod repository;

pub use backend::HistoryBackend;
pub use cache::{CacheStats, HistoryCache};
pub use repository::GitRepository;
