pub mod builder;
pub mod config;
pub mod error;
pub mod loader;
pub mod reader;
pub mod writer;

pub use builder::{build, build_at, SitemapEntry, SitemapIndex};
pub use config::SitemapConfig;
pub use error::SitemapError;
pub use writer::SitemapWriter;
