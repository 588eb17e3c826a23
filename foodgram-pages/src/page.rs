use askama::Template;

use crate::catalog::{Category, Technology};

pub const PAGE_TITLE: &str = "Технологии - Фудграм";
pub const PAGE_DESCRIPTION: &str = "Фудграм - Технологии, используемые в проекте";

/// Values for the `<head>` metadata block.
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct NavLinks {
    pub home: String,
    pub technologies: String,
    pub github_stars: String,
}

/// Everything the shared layout (header, footer, `<head>`) needs.
///
/// The server fills this in from its own environment so that the templates
/// stay free of any runtime lookups.
pub struct SiteChrome {
    pub version: &'static str,
    pub repository_url: &'static str,
    pub contact_email: &'static str,
    pub canonical_url: String,
    pub links: NavLinks,
}

/// One titled section of the technologies page with its card entries.
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub technologies: &'static [Technology],
}

/// Page sections in display order, one per catalog category.
pub fn sections() -> Vec<Section> {
    Category::ALL
        .iter()
        .map(|&category| Section {
            id: category.id(),
            title: category.title(),
            intro: category.intro(),
            technologies: category.entries(),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "pages/technologies.html.j2")]
pub struct TechnologiesPage {
    pub meta: PageMeta,
    pub chrome: SiteChrome,
    pub sections: Vec<Section>,
}

impl TechnologiesPage {
    pub fn new(chrome: SiteChrome) -> Self {
        Self {
            meta: PageMeta {
                title: PAGE_TITLE,
                description: PAGE_DESCRIPTION,
            },
            chrome,
            sections: sections(),
        }
    }
}
