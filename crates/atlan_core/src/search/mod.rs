//! Lazy traversal of index-search results.

pub mod pager;

pub use pager::AssetPager;
