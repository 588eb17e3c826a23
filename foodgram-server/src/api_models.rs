use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VersionInfo {
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct TechnologyInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub version: &'static str,
}

/// Catalog grouped the way the page groups it.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub backend: Vec<TechnologyInfo>,
    pub frontend: Vec<TechnologyInfo>,
    pub devops: Vec<TechnologyInfo>,
}
