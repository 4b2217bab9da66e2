pub mod fetcher;
pub mod http;

pub use fetcher::{FetchFailure, FetchResult, TextFetcher};
pub use http::HttpFetcher;
