use folio_core::{arrange_projects_by, decode_projects_response, Category, ProjectRecord};
use serde_json::json;

#[test]
fn decodes_content_api_record_shape() {
    let value = json!({
        "id": "ckxyz123",
        "slug": "walrus-site",
        "title": "Walrus",
        "description": "Marketing site",
        "createdAt": "2023-10-05T09:12:44.530Z",
        "githubUrl": "https://github.com/example/walrus",
        "site": "https://walrus.example.com",
        "fullImage": { "url": "https://media.example.com/abc", "fileName": "walrus.png" },
        "html": true,
        "css": true,
        "javascript": false,
        "photoshop": null,
        "gsap": true
    });

    let project: ProjectRecord = serde_json::from_value(value).unwrap();
    assert_eq!(project.id.as_deref(), Some("ckxyz123"));
    assert_eq!(project.slug, "walrus-site");
    assert_eq!(project.image_url(), Some("https://media.example.com/abc"));
    assert_eq!(
        project.full_image.as_ref().and_then(|image| image.file_name.as_deref()),
        Some("walrus.png")
    );
    assert_eq!(
        project.flags.active(),
        vec![Category::Html, Category::Css, Category::Gsap]
    );
    assert!(project.created_at().is_some());
}

#[test]
fn missing_optional_fields_default() {
    let project: ProjectRecord = serde_json::from_value(json!({
        "slug": "bare",
        "title": null,
        "description": null
    }))
    .unwrap();

    assert_eq!(project.title, "");
    assert_eq!(project.description, "");
    assert_eq!(project.created_at, None);
    assert_eq!(project.created_at(), None);
    assert_eq!(project.full_image, None);
    assert!(project.flags.active().is_empty());
}

#[test]
fn unknown_boolean_fields_are_not_categories() {
    let project: ProjectRecord = serde_json::from_value(json!({
        "slug": "extra",
        "title": "Extra",
        "description": "",
        "react": true,
        "featured": true
    }))
    .unwrap();

    assert!(project.flags.active().is_empty());
}

#[test]
fn serializes_flags_as_top_level_wire_fields() {
    let project = ProjectRecord::new("p", "P")
        .with_created_at("2024-01-01")
        .with_category(Category::Illustrator);

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["slug"], "p");
    assert_eq!(json["createdAt"], "2024-01-01");
    assert_eq!(json["illustrator"], true);
    assert_eq!(json["html"], false);
    assert!(json.get("flags").is_none());
    assert!(json.get("id").is_none());

    let decoded: ProjectRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn missing_slug_is_rejected() {
    let err = serde_json::from_value::<ProjectRecord>(json!({ "title": "No slug" }))
        .unwrap_err();
    assert!(err.to_string().contains("slug"), "unexpected error: {err}");
}

#[test]
fn numeric_created_at_keeps_the_rest_of_the_envelope() {
    let body = json!({
        "data": {
            "projects": [
                { "slug": "a", "createdAt": "2023-01-01" },
                { "slug": "b", "createdAt": 1_700_000_000_000_i64 },
                { "slug": "c", "createdAt": [2022, 1, 1] }
            ]
        }
    })
    .to_string();

    let projects = decode_projects_response(&body).unwrap();
    assert_eq!(projects.len(), 3);
    assert_eq!(
        projects[1].created_at.as_deref(),
        Some("2023-11-14T22:13:20.000Z")
    );
    assert_eq!(projects[2].created_at, None);

    let arranged = arrange_projects_by(&projects, None);
    let slugs = arranged
        .iter()
        .map(|project| project.slug.as_str())
        .collect::<Vec<_>>();
    assert_eq!(slugs, vec!["b", "a", "c"]);
}
