use super::*;
use crate::app::backend::ProjectId;

fn stored_project() -> Project {
    Project {
        id: ProjectId::new("p-9"),
        title: "Recipe Box".to_string(),
        kind: ProjectType::Mobile,
        description: "Save recipes".to_string(),
        images: vec!["https:&#x2F;&#x2F;cdn.example.com&#x2F;cover.png".to_string()],
        tech_stack: vec!["Kotlin".to_string()],
        features: Vec::new(),
        video_url: Some("https:&#x2F;&#x2F;youtu.be&#x2F;x?a=1&amp;b=2".to_string()),
        download_url: None,
        live_url: Some("https://recipes.example.com".to_string()),
        status: ProjectStatus::Published,
    }
}

#[test]
fn default_draft_has_one_empty_row_per_list() {
    let draft = ProjectDraft::default();
    assert_eq!(draft.features, vec![String::new()]);
    assert_eq!(draft.tech_stack, vec![String::new()]);
    assert_eq!(draft.kind, ProjectType::Web);
    assert_eq!(draft.status, ProjectStatus::Draft);
}

#[test]
fn from_project_decodes_escaped_urls() {
    let draft = ProjectDraft::from_project(&stored_project());
    assert_eq!(draft.image, "https://cdn.example.com/cover.png");
    assert_eq!(draft.video_url, "https://youtu.be/x?a=1&b=2");
    assert_eq!(draft.download_url, "");
    assert_eq!(draft.live_url, "https://recipes.example.com");
    assert_eq!(draft.features, vec![String::new()]);
    assert_eq!(draft.tech_stack, vec!["Kotlin".to_string()]);
    assert_eq!(draft.status, ProjectStatus::Published);
}

#[test]
fn decode_html_entities_handles_all_known_entities() {
    assert_eq!(
        decode_html_entities("&lt;a href=&quot;&#x2F;x&quot;&gt;it&#x27;s&lt;&#x2F;a&gt;"),
        "<a href=\"/x\">it's</a>"
    );
    assert_eq!(decode_html_entities("plain"), "plain");
}

#[test]
fn to_payload_strips_blank_rows() {
    let mut draft = ProjectDraft::default();
    draft.title = "Site".to_string();
    draft.tech_stack = vec!["Rust".to_string(), "   ".to_string(), String::new(), "Leptos".to_string()];
    draft.features = vec![String::new()];
    draft.image = "https://cdn.example.com/a.png".to_string();

    let payload = draft.to_payload();
    assert_eq!(payload.tech_stack, vec!["Rust", "Leptos"]);
    assert!(payload.features.is_empty());
    assert_eq!(payload.images, vec!["https://cdn.example.com/a.png"]);
}

#[test]
fn to_payload_without_image_sends_no_images() {
    assert!(ProjectDraft::default().to_payload().images.is_empty());
}

#[test]
fn row_operations_keep_at_least_one_row() {
    let mut draft = ProjectDraft::default();
    draft.set_row(ListField::Features, 0, "Dark mode".to_string());
    draft.add_row(ListField::Features);
    draft.set_row(ListField::Features, 1, "Sync".to_string());
    assert_eq!(draft.rows(ListField::Features), ["Dark mode", "Sync"]);

    draft.remove_row(ListField::Features, 0);
    assert_eq!(draft.rows(ListField::Features), ["Sync"]);

    draft.remove_row(ListField::Features, 0);
    assert_eq!(draft.rows(ListField::Features), ["Sync"]);

    draft.set_row(ListField::TechStack, 5, "ignored".to_string());
    assert_eq!(draft.rows(ListField::TechStack), [""]);
}

#[test]
fn validate_requires_title_and_description() {
    let mut draft = ProjectDraft::default();
    assert_eq!(draft.validate(), Err("Project title is required"));

    draft.title = "Site".to_string();
    assert_eq!(draft.validate(), Err("Project description is required"));

    draft.description = "A site".to_string();
    assert_eq!(draft.validate(), Ok(()));
}
