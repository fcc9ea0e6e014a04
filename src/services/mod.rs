pub mod classifier;
pub mod favorites;
pub mod media_links;
pub mod providers;
pub mod search;
pub mod title_search;
