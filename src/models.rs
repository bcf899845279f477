//models.rs
use serde::{Deserialize, Serialize};

/// Fresh random record id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub done: bool,
    pub priority: Priority,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    #[default]
    #[serde(rename = "AI/ML")]
    AiMl,
    Science,
    #[serde(rename = "Self-Help")]
    SelfHelp,
    Exec,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::AiMl, Section::Science, Section::SelfHelp, Section::Exec];

    pub fn label(self) -> &'static str {
        match self {
            Section::AiMl => "AI/ML",
            Section::Science => "Science",
            Section::SelfHelp => "Self-Help",
            Section::Exec => "Exec",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookStatus {
    #[default]
    ToRead,
    Reading,
    Finished,
}

impl BookStatus {
    pub const ALL: [BookStatus; 3] = [BookStatus::ToRead, BookStatus::Reading, BookStatus::Finished];

    pub fn label(self) -> &'static str {
        match self {
            BookStatus::ToRead => "to-read",
            BookStatus::Reading => "reading",
            BookStatus::Finished => "finished",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            BookStatus::ToRead => "To read",
            BookStatus::Reading => "Reading",
            BookStatus::Finished => "Finished",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    pub section: Section,
    pub status: BookStatus,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    Pending,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [ProjectStatus::Active, ProjectStatus::Completed, ProjectStatus::Pending];

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Pending => "pending",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
}

/// Trimmed copy of `input`, or `None` if nothing is left.
pub fn non_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
