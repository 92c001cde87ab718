pub mod duckduckgo;
pub mod extract;
pub mod fetch;
pub mod rank;

pub use duckduckgo::DuckDuckGoProvider;
