//! Compression sessions and batch orchestration for metaxml.

pub mod batch;
pub mod session;

pub use batch::{compress_paths, BatchSummary, CompressStatus};
pub use session::{CompressorSession, InputSource, SessionConfig};
