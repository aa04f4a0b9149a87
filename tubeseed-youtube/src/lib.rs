//! YouTube Data API v3 search integration used by the `tubeseed` binary.
//!
//! Submodules provide the seed token model, the `search.list` client wrapper,
//! strongly typed response models, and the per-kind grouping of results.
//! Only the first result page is ever requested.
pub mod client;
pub mod groups;
pub mod seed;
pub mod types;

pub use client::{SearchOptions, SearchRequest, VideoSearch, YouTubeApi, YOUTUBE_API_BASE};
pub use groups::{ResultGroup, ResultGroups};
pub use seed::SeedToken;
pub use types::{ResultKind, SearchListResponse, SearchResult};
