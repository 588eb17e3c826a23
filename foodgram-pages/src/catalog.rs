/// One technology used by the project, as shown on the technologies page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub version: &'static str,
}

/// The page groups technologies into three fixed categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Backend,
    Frontend,
    Devops,
}

impl Category {
    /// Categories in the order they appear on the page.
    pub const ALL: [Category; 3] = [Category::Backend, Category::Frontend, Category::Devops];

    pub fn id(self) -> &'static str {
        match self {
            Category::Backend => "backend",
            Category::Frontend => "frontend",
            Category::Devops => "devops",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Backend => "Backend разработка",
            Category::Frontend => "Frontend разработка",
            Category::Devops => "DevOps и развертывание",
        }
    }

    pub fn intro(self) -> &'static str {
        match self {
            Category::Backend => {
                "Серверная часть приложения построена на современном стеке Python-технологий:"
            }
            Category::Frontend => {
                "Пользовательский интерфейс создан с использованием современных веб-технологий:"
            }
            Category::Devops => "Для развертывания и управления приложением используются:",
        }
    }

    pub fn entries(self) -> &'static [Technology] {
        match self {
            Category::Backend => BACKEND,
            Category::Frontend => FRONTEND,
            Category::Devops => DEVOPS,
        }
    }
}

// Entry order is display order within a section.
static BACKEND: &[Technology] = &[
    Technology {
        name: "Python",
        description: "Высокоуровневый язык программирования общего назначения с акцентом на читаемость кода",
        icon: "https://img.shields.io/badge/Python-3776AB?style=for-the-badge&logo=python&logoColor=white",
        version: "3.9+",
    },
    Technology {
        name: "Django",
        description: "Высокоуровневый веб-фреймворк для Python, следующий принципу DRY (Don't Repeat Yourself)",
        icon: "https://img.shields.io/badge/Django-092E20?style=for-the-badge&logo=django&logoColor=green",
        version: "3.2",
    },
    Technology {
        name: "Django REST Framework",
        description: "Мощный и гибкий инструмент для создания веб-API на основе Django",
        icon: "https://img.shields.io/badge/DRF-ff1709?style=for-the-badge&logo=django&logoColor=white",
        version: "Latest",
    },
    Technology {
        name: "PostgreSQL",
        description: "Объектно-реляционная система управления базами данных с открытым исходным кодом",
        icon: "https://img.shields.io/badge/postgresql-4169e1?style=for-the-badge&logo=postgresql&logoColor=white",
        version: "13+",
    },
];

static FRONTEND: &[Technology] = &[
    Technology {
        name: "React",
        description: "JavaScript библиотека для создания пользовательских интерфейсов",
        icon: "https://img.shields.io/badge/-ReactJs-61DAFB?style=for-the-badge&logo=react&logoColor=white",
        version: "17+",
    },
    Technology {
        name: "JavaScript",
        description: "Высокоуровневый язык программирования для создания интерактивных веб-страниц",
        icon: "https://img.shields.io/badge/JavaScript-F7DF1E?style=for-the-badge&logo=javascript&logoColor=black",
        version: "ES6+",
    },
    Technology {
        name: "HTML5",
        description: "Язык гипертекстовой разметки для создания структуры веб-страниц",
        icon: "https://img.shields.io/badge/HTML5-E34F26?style=for-the-badge&logo=html5&logoColor=white",
        version: "5",
    },
    Technology {
        name: "CSS3",
        description: "Каскадные таблицы стилей для описания внешнего вида документа",
        icon: "https://img.shields.io/badge/CSS3-1572B6?style=for-the-badge&logo=css3&logoColor=white",
        version: "3",
    },
];

static DEVOPS: &[Technology] = &[
    Technology {
        name: "Docker",
        description: "Платформа для разработки, доставки и запуска приложений в контейнерах",
        icon: "https://img.shields.io/badge/docker-257bd6?style=for-the-badge&logo=docker&logoColor=white",
        version: "Latest",
    },
    Technology {
        name: "Docker Compose",
        description: "Инструмент для определения и запуска многоконтейнерных Docker приложений",
        icon: "https://img.shields.io/badge/Docker_Compose-2496ED?style=for-the-badge&logo=docker&logoColor=white",
        version: "v2+",
    },
    Technology {
        name: "Nginx",
        description: "Веб-сервер и обратный прокси-сервер для обслуживания статических файлов",
        icon: "https://img.shields.io/badge/nginx-009639?style=for-the-badge&logo=nginx&logoColor=white",
        version: "Latest",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_keep_display_order() {
        assert_eq!(
            Category::ALL,
            [Category::Backend, Category::Frontend, Category::Devops]
        );
    }

    #[test]
    fn backend_catalog_matches_project_stack() {
        let names: Vec<_> = Category::Backend.entries().iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            ["Python", "Django", "Django REST Framework", "PostgreSQL"]
        );
        assert_eq!(Category::Backend.entries()[0].version, "3.9+");
    }

    #[test]
    fn frontend_catalog_matches_project_stack() {
        let names: Vec<_> = Category::Frontend
            .entries()
            .iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, ["React", "JavaScript", "HTML5", "CSS3"]);
    }

    #[test]
    fn devops_catalog_matches_project_stack() {
        let names: Vec<_> = Category::Devops.entries().iter().map(|t| t.name).collect();
        assert_eq!(names, ["Docker", "Docker Compose", "Nginx"]);
    }

    #[test]
    fn every_entry_is_fully_populated() {
        for category in Category::ALL {
            for tech in category.entries() {
                assert!(!tech.name.is_empty());
                assert!(!tech.description.is_empty());
                assert!(tech.icon.starts_with("https://img.shields.io/badge/"));
                assert!(!tech.version.is_empty());
            }
        }
    }
}
