//! Static content and rendering for the Foodgram informational pages.

mod catalog;
mod page;

pub use catalog::*;
pub use page::*;
