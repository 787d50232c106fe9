//! Editable state behind the project form.

use super::backend::{Project, ProjectPayload, ProjectStatus, ProjectType};

/// Which dynamic list a row operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    TechStack,
    Features,
}

impl ListField {
    pub fn label(self) -> &'static str {
        match self {
            ListField::TechStack => "Tech",
            ListField::Features => "Feature",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub kind: ProjectType,
    pub description: String,
    pub features: Vec<String>,
    pub tech_stack: Vec<String>,
    pub image: String,
    pub video_url: String,
    pub download_url: String,
    pub live_url: String,
    pub status: ProjectStatus,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: ProjectType::Web,
            description: String::new(),
            features: vec![String::new()],
            tech_stack: vec![String::new()],
            image: String::new(),
            video_url: String::new(),
            download_url: String::new(),
            live_url: String::new(),
            status: ProjectStatus::Draft,
        }
    }
}

impl ProjectDraft {
    /// Seeds the form from a stored project. Stored URLs may come back
    /// entity-escaped, so they are decoded here.
    pub fn from_project(project: &Project) -> Self {
        let url = |value: &Option<String>| value.as_deref().map(decode_html_entities).unwrap_or_default();
        let rows = |values: &[String]| {
            if values.is_empty() {
                vec![String::new()]
            } else {
                values.to_vec()
            }
        };

        Self {
            title: project.title.clone(),
            kind: project.kind,
            description: project.description.clone(),
            features: rows(&project.features),
            tech_stack: rows(&project.tech_stack),
            image: project.cover_image().map(decode_html_entities).unwrap_or_default(),
            video_url: url(&project.video_url),
            download_url: url(&project.download_url),
            live_url: url(&project.live_url),
            status: project.status,
        }
    }

    pub fn rows(&self, field: ListField) -> &[String] {
        match field {
            ListField::TechStack => &self.tech_stack,
            ListField::Features => &self.features,
        }
    }

    fn rows_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::TechStack => &mut self.tech_stack,
            ListField::Features => &mut self.features,
        }
    }

    pub fn set_row(&mut self, field: ListField, index: usize, value: String) {
        if let Some(row) = self.rows_mut(field).get_mut(index) {
            *row = value;
        }
    }

    pub fn add_row(&mut self, field: ListField) {
        self.rows_mut(field).push(String::new());
    }

    /// Removes a row unless it is the last one left.
    pub fn remove_row(&mut self, field: ListField, index: usize) {
        let rows = self.rows_mut(field);
        if rows.len() > 1 && index < rows.len() {
            rows.remove(index);
        }
    }

    /// Title and description are required; returns the first missing one.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Project title is required");
        }
        if self.description.trim().is_empty() {
            return Err("Project description is required");
        }
        Ok(())
    }

    /// Request body with blank list rows dropped.
    pub fn to_payload(&self) -> ProjectPayload {
        let filled = |values: &[String]| {
            values
                .iter()
                .filter(|v| !v.trim().is_empty())
                .cloned()
                .collect::<Vec<_>>()
        };

        ProjectPayload {
            title: self.title.clone(),
            kind: self.kind,
            description: self.description.clone(),
            features: filled(&self.features),
            tech_stack: filled(&self.tech_stack),
            images: if self.image.is_empty() {
                Vec::new()
            } else {
                vec![self.image.clone()]
            },
            video_url: self.video_url.clone(),
            download_url: self.download_url.clone(),
            live_url: self.live_url.clone(),
            status: self.status,
        }
    }
}

const ENTITIES: [(&str, &str); 6] = [
    ("&#x2F;", "/"),
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("&#x27;", "'"),
    ("&lt;", "<"),
    ("&gt;", ">"),
];

/// Undoes the HTML escaping some backends apply to stored strings.
pub fn decode_html_entities(value: &str) -> String {
    ENTITIES
        .iter()
        .fold(value.to_string(), |acc, (entity, plain)| acc.replace(entity, plain))
}

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;
