mod chrome;
mod github;
mod render;
mod seo;
mod technologies;

pub use github::github_stars_partial_handler;
pub use seo::robots_txt_handler;
pub use seo::sitemap_xml_handler;
pub use technologies::root_handler;
pub use technologies::technologies_handler;
