//! Query result containers shared by the read model and the order service

pub mod search_result;

pub use search_result::{SearchResult, SingleSearchResult};
