//! Persisted best score.

pub mod best_score;

pub use best_score::{BestScoreStore, FileBestScore, MemoryBestScore, StoreError};
