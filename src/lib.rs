pub mod catalog;
pub mod client;
pub mod error;
pub mod leetcode;
pub mod normalize;
pub mod render;

pub use client::{LeetCodeClient, ProblemSource};
pub use error::ScrapeError;
pub use leetcode::{Ids, LeetcodeScraper, LeetcodeScraperBuilder, ProblemRecord, ScrapeReport};
