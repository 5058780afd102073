//! Project model with tech stacks, tags and contributors.

use serde::{Deserialize, Serialize};

use super::{HasImages, Image, TagRef};

/// A selectable technology label offered by the project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechStackOption {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

/// Labels offered by the tech stack picker. Free-text labels are allowed too.
pub const TECH_STACK_CATALOG: &[TechStackOption] = &[
    TechStackOption {
        id: "react",
        name: "React",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg",
    },
    TechStackOption {
        id: "vue",
        name: "Vue.js",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/vuejs/vuejs-original.svg",
    },
    TechStackOption {
        id: "angular",
        name: "Angular",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/angularjs/angularjs-original.svg",
    },
    TechStackOption {
        id: "nodejs",
        name: "Node.js",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg",
    },
    TechStackOption {
        id: "django",
        name: "Django",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/django/django-plain.svg",
    },
    TechStackOption {
        id: "flask",
        name: "Flask",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/flask/flask-original.svg",
    },
];

/// Look up a catalog entry by its display name, case-insensitively.
pub fn find_tech_stack(name: &str) -> Option<&'static TechStackOption> {
    TECH_STACK_CATALOG
        .iter()
        .find(|option| option.name.eq_ignore_ascii_case(name.trim()))
}

/// Someone credited on a project. Managed outside the project editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub github_username: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// A project as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Serialized block document, or legacy plain text
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub github_link: String,
    #[serde(default)]
    pub demo_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(default)]
    pub tech_stacks: Vec<String>,
    #[serde(default)]
    pub tags: Vec<TagRef>,
    #[serde(default)]
    pub contributors: Vec<Contributor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Project {
    pub fn tag_ids(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.id().to_string()).collect()
    }

    pub fn has_tag_named(&self, name: &str) -> bool {
        self.tags
            .iter()
            .filter_map(TagRef::name)
            .any(|tag| tag.eq_ignore_ascii_case(name))
    }
}

impl HasImages for Project {
    fn images(&self) -> &[Image] {
        &self.images
    }

    fn thumbnail_url_mut(&mut self) -> &mut Option<String> {
        &mut self.thumbnail_url
    }
}
