use axum::response::Json;

use foodgram_pages::Category;

use crate::api_models::*;

pub async fn get_version() -> Json<VersionInfo> {
    Json(VersionInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn get_technologies() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        backend: category_infos(Category::Backend),
        frontend: category_infos(Category::Frontend),
        devops: category_infos(Category::Devops),
    })
}

fn category_infos(category: Category) -> Vec<TechnologyInfo> {
    category
        .entries()
        .iter()
        .map(|tech| TechnologyInfo {
            name: tech.name,
            description: tech.description,
            icon: tech.icon,
            version: tech.version,
        })
        .collect()
}
