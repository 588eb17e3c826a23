use axum::response::{IntoResponse, Redirect};
use axum_extra::routing::TypedPath;

use foodgram_pages::TechnologiesPage;

use super::chrome::site_chrome;
use super::render::HtmlTemplate;
use crate::routes;

pub async fn root_handler() -> Redirect {
    Redirect::permanent(routes::TechnologiesPath::PATH)
}

pub async fn technologies_handler() -> impl IntoResponse {
    let chrome = site_chrome(routes::TechnologiesPath::PATH);
    HtmlTemplate(TechnologiesPage::new(chrome))
}
