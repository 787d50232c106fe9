use super::*;

#[test]
fn project_reads_backend_field_names() {
    let raw = serde_json::json!({
        "_id": "p-1",
        "title": "Fitness Tracker",
        "type": "mobile",
        "description": "Counts steps",
        "images": ["https://cdn.example.com/a.png"],
        "techStack": ["Flutter", "Firebase"],
        "features": ["Offline mode"],
        "videoUrl": "https://youtube.com/watch?v=1",
        "status": "published",
        "createdAt": "2026-01-01T00:00:00.000Z"
    });

    let project: Project = serde_json::from_value(raw).unwrap();
    assert_eq!(project.id, ProjectId::new("p-1"));
    assert_eq!(project.kind, ProjectType::Mobile);
    assert_eq!(project.tech_stack, vec!["Flutter", "Firebase"]);
    assert_eq!(project.video_url.as_deref(), Some("https://youtube.com/watch?v=1"));
    assert_eq!(project.download_url, None);
    assert_eq!(project.status, ProjectStatus::Published);
    assert_eq!(project.cover_image(), Some("https://cdn.example.com/a.png"));
}

#[test]
fn project_defaults_missing_lists_and_status() {
    let project: Project =
        serde_json::from_value(serde_json::json!({ "_id": "p-2", "title": "Bare" })).unwrap();
    assert!(project.images.is_empty());
    assert!(project.features.is_empty());
    assert_eq!(project.kind, ProjectType::Web);
    assert_eq!(project.status, ProjectStatus::Draft);
    assert_eq!(project.cover_image(), None);
}

#[test]
fn payload_serializes_camel_case() {
    let payload = ProjectPayload {
        title: "Site".to_string(),
        kind: ProjectType::Web,
        tech_stack: vec!["Rust".to_string()],
        live_url: "https://site.dev".to_string(),
        ..Default::default()
    };

    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["type"], "web");
    assert_eq!(value["techStack"], serde_json::json!(["Rust"]));
    assert_eq!(value["liveUrl"], "https://site.dev");
    assert_eq!(value["status"], "draft");
}

#[cfg(feature = "ssr")]
#[test]
fn envelope_accepts_bare_and_wrapped_lists() {
    let bare: Envelope<Vec<Project>> =
        serde_json::from_str(r#"[{"_id":"a","title":"A"}]"#).unwrap();
    let wrapped: Envelope<Vec<Project>> =
        serde_json::from_str(r#"{"success":true,"data":[{"_id":"b","title":"B"}]}"#).unwrap();

    assert_eq!(bare.into_inner()[0].title, "A");
    assert_eq!(wrapped.into_inner()[0].title, "B");
}

#[cfg(feature = "ssr")]
#[test]
fn token_body_reads_top_level_or_nested_token() {
    let top: TokenBody = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
    let nested: TokenBody = serde_json::from_str(r#"{"data":{"token":"def"}}"#).unwrap();
    let missing: TokenBody = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();

    assert_eq!(top.into_token().as_deref(), Some("abc"));
    assert_eq!(nested.into_token().as_deref(), Some("def"));
    assert_eq!(missing.into_token(), None);
}

#[cfg(feature = "ssr")]
#[test]
fn upload_body_finds_url_in_known_shapes() {
    let cases = [
        (r#"{"url":"https://a"}"#, Some("https://a")),
        (r#"{"data":{"url":"https://b"}}"#, Some("https://b")),
        (r#"{"secure_url":"https://c"}"#, Some("https://c")),
        (r#""/uploads/d.png""#, Some("/uploads/d.png")),
        (r#"{"url":"","secure_url":"https://c"}"#, Some("https://c")),
        (r#"{"url":"","data":{"url":"https://b"}}"#, Some("https://b")),
        (r#"{"url":"","secure_url":""}"#, None),
        (r#"{"ok":true}"#, None),
    ];

    for (raw, expected) in cases {
        let body: UploadBody = serde_json::from_str(raw).unwrap();
        assert_eq!(body.into_url().as_deref(), expected, "{raw}");
    }
}

#[test]
fn message_sender_fallbacks() {
    let anonymous: Message =
        serde_json::from_value(serde_json::json!({ "_id": "m-1", "content": "hi" })).unwrap();
    assert_eq!(anonymous.sender_name(), "Unknown User");
    assert_eq!(anonymous.sender_email(), "");
    assert_eq!(anonymous.sender_initial(), "U");
    assert!(!anonymous.is_read);

    let named: Message = serde_json::from_value(serde_json::json!({
        "_id": "m-2",
        "sender": { "username": "alice", "email": "alice@example.com" },
        "content": "hello",
        "isRead": true,
        "createdAt": "2026-03-04T10:15:00.000Z"
    }))
    .unwrap();
    assert_eq!(named.sender_name(), "alice");
    assert_eq!(named.sender_initial(), "A");
    assert!(named.is_read);
    assert_eq!(named.received_at(), "Mar 4, 2026 10:15");
}

#[test]
fn received_at_keeps_unparseable_timestamps() {
    let message: Message = serde_json::from_value(serde_json::json!({
        "_id": "m-3",
        "createdAt": "yesterday"
    }))
    .unwrap();
    assert_eq!(message.received_at(), "yesterday");
}

#[test]
fn project_type_tolerates_casing_and_unknown_values() {
    let kinds: Vec<ProjectType> = serde_json::from_str(r#"["MOBILE", " Mobile", "web", "desktop", null]"#).unwrap();
    assert_eq!(
        kinds,
        [
            ProjectType::Mobile,
            ProjectType::Mobile,
            ProjectType::Web,
            ProjectType::Web,
            ProjectType::Web,
        ]
    );
}

#[test]
fn unpopulated_sender_degrades_to_unknown() {
    let messages: Vec<Message> = serde_json::from_value(serde_json::json!([
        { "_id": "a", "content": "hi", "sender": "64ab" },
        { "_id": "b", "content": "ok", "sender": null },
        { "_id": "c", "content": "yo", "sender": { "username": "bob" } },
    ]))
    .unwrap();

    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].sender, None);
    assert_eq!(messages[0].sender_name(), "Unknown User");
    assert_eq!(messages[1].sender, None);
    assert_eq!(messages[2].sender_name(), "bob");
}

#[cfg(feature = "ssr")]
#[test]
fn one_odd_record_keeps_the_rest_of_the_list() {
    let messages: Envelope<Vec<Message>> = serde_json::from_str(
        r#"{"data":[{"_id":"a","content":"hi","sender":"64ab"},{"_id":"b","content":"ok"}]}"#,
    )
    .unwrap();
    assert_eq!(messages.into_inner().len(), 2);

    let projects: Envelope<Vec<Project>> = serde_json::from_str(
        r#"[{"_id":"p","title":"P","type":"web"},{"_id":"q","title":"Q","type":"MOBILE"}]"#,
    )
    .unwrap();
    let kinds: Vec<_> = projects.into_inner().iter().map(|p| p.kind).collect();
    assert_eq!(kinds, [ProjectType::Web, ProjectType::Mobile]);
}
