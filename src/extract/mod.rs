//! Field extractors: pure, total functions deriving output cells from raw
//! event values. Absence of a pattern yields a sentinel, never an error.

pub mod timestamp;
pub mod url;
pub mod user_agent;

pub use timestamp::convert_timestamp;
pub use url::shorten_url;
pub use user_agent::extract_browser_and_os;
