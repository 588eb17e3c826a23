use axum_extra::routing::TypedPath;

use foodgram_pages::{NavLinks, SiteChrome};

use crate::public_url;
use crate::routes;

pub const BACKEND_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const REPOSITORY_URL: &str = env!("CARGO_PKG_REPOSITORY");
pub const CONTACT_EMAIL: &str = match option_env!("FOODGRAM_CONTACT_EMAIL") {
    Some(email) => email,
    None => "team@foodgram.example",
};

/// Layout values shared by every page: versions, links and the canonical URL
/// for the page being rendered.
pub fn site_chrome(page_path: &str) -> SiteChrome {
    SiteChrome {
        version: BACKEND_VERSION,
        repository_url: REPOSITORY_URL,
        contact_email: CONTACT_EMAIL,
        canonical_url: public_url::page_url(page_path),
        links: NavLinks {
            home: routes::IndexRoot.to_uri().to_string(),
            technologies: routes::TechnologiesPath.to_uri().to_string(),
            github_stars: routes::GithubStarsPartial.to_uri().to_string(),
        },
    }
}
