#[cfg(feature = "ssr")]
mod client;
mod error;
mod functions;

#[cfg(feature = "ssr")]
pub use client::*;
pub use error::*;
pub use functions::*;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    Web,
    Mobile,
}

impl ProjectType {
    pub const ALL: [ProjectType; 2] = [ProjectType::Web, ProjectType::Mobile];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Web => "web",
            ProjectType::Mobile => "mobile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Web => "Web App",
            ProjectType::Mobile => "Mobile App",
        }
    }

    /// Anything other than "mobile" (in any case) is treated as a web project.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("mobile") {
            ProjectType::Mobile
        } else {
            ProjectType::Web
        }
    }
}

impl<'de> Deserialize<'de> for ProjectType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(ProjectType::parse).unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Published,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Published => "published",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "published" => ProjectStatus::Published,
            _ => ProjectStatus::Draft,
        }
    }
}

/// A portfolio entry as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: ProjectId,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: ProjectType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
}

impl Project {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Body of a create or update request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ProjectType,
    pub description: String,
    pub features: Vec<String>,
    pub tech_stack: Vec<String>,
    pub images: Vec<String>,
    pub video_url: String,
    pub download_url: String,
    pub live_url: String,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// An inbound contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: MessageId,
    #[serde(default, deserialize_with = "sender_or_none")]
    pub sender: Option<Sender>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// An unpopulated sender arrives as a bare id; only a full object is kept.
fn sender_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Sender>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

impl Message {
    pub fn sender_name(&self) -> &str {
        self.sender
            .as_ref()
            .map(|s| s.username.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown User")
    }

    pub fn sender_email(&self) -> &str {
        self.sender.as_ref().map(|s| s.email.as_str()).unwrap_or_default()
    }

    /// First letter of the sender's name, used as an avatar.
    pub fn sender_initial(&self) -> String {
        self.sender
            .as_ref()
            .and_then(|s| s.username.chars().next())
            .unwrap_or('U')
            .to_uppercase()
            .collect()
    }

    /// Creation time rendered for display, or the raw value if it isn't RFC 3339.
    pub fn received_at(&self) -> String {
        let Some(raw) = self.created_at.as_deref() else {
            return String::new();
        };

        chrono::DateTime::parse_from_rfc3339(raw)
            .map(|at| at.format("%b %-d, %Y %H:%M").to_string())
            .unwrap_or_else(|_| raw.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// The backend answers with either the bare value or `{ "data": value }`.
#[cfg(feature = "ssr")]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

#[cfg(feature = "ssr")]
impl<T> Envelope<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

#[cfg(feature = "ssr")]
#[derive(Debug, Deserialize)]
pub(crate) struct TokenBody {
    token: Option<String>,
    data: Option<Box<TokenBody>>,
}

#[cfg(feature = "ssr")]
impl TokenBody {
    pub(crate) fn into_token(self) -> Option<String> {
        self.token
            .filter(|t| !t.is_empty())
            .or_else(|| self.data.and_then(|d| d.into_token()))
    }
}

#[cfg(feature = "ssr")]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum UploadBody {
    Path(String),
    Object {
        url: Option<String>,
        secure_url: Option<String>,
        data: Option<Box<UploadBody>>,
    },
}

#[cfg(feature = "ssr")]
impl UploadBody {
    pub(crate) fn into_url(self) -> Option<String> {
        match self {
            UploadBody::Path(path) => Some(path).filter(|p| !p.is_empty()),
            UploadBody::Object {
                url,
                secure_url,
                data,
            } => {
                let present = |u: &String| !u.is_empty();
                url.filter(present)
                    .or_else(|| data.and_then(|d| d.into_url()))
                    .or_else(|| secure_url.filter(present))
            }
        }
    }
}
