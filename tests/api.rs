use devto_publish::frontmatter::split;
use devto_publish::metadata::interpret;
use devto_publish::payload::assemble;
use devto_publish::{build_payload, HeaderLabel, MetadataValue, PublishError, PublishOptions};

#[test]
fn build_payload_runs_the_whole_pipeline() {
    let raw = "---\ntitle: \"Hello\"\n---\nWorld\n";
    let request = build_payload(raw, &PublishOptions::default()).expect("payload builds");

    assert_eq!(
        request.to_json().unwrap(),
        r#"{"article":{"title":"Hello","published":false,"body_markdown":"World"}}"#
    );
}

#[test]
fn stages_compose_the_same_as_build_payload() {
    let raw = "---\ntitle: Staged\ntags:\n  - a\n  - b\npublished: TRUE\n---\n\nBody\n";
    let options = PublishOptions::default();

    let document = split(raw).expect("header splits");
    let meta = interpret(&document.metadata);
    let staged = assemble(&meta, &document.body, &options).expect("payload assembles");

    assert_eq!(meta.get("published"), Some(&MetadataValue::Boolean(true)));
    assert_eq!(staged, build_payload(raw, &options).unwrap());
}

#[test]
fn forced_publish_and_removals_apply_together() {
    let raw = "---\ntitle: T\npublished: false\ntags: [a, b, c]\nseries: S\n---\nBody";
    let options = PublishOptions {
        force_publish: true,
        minimal: false,
        removals: [HeaderLabel::Tags].into_iter().collect(),
    };

    let article = build_payload(raw, &options).unwrap().article;

    assert!(article.published);
    assert_eq!(article.tags, None);
    assert_eq!(article.series.as_deref(), Some("S"));
}

#[test]
fn format_errors_stop_before_assembly() {
    let err = build_payload("title: T\n\nBody", &PublishOptions::default()).unwrap_err();

    assert!(matches!(err, PublishError::Format(_)));
}

#[test]
fn validation_errors_surface_from_the_pipeline() {
    let err = build_payload("---\ntitle:\n---\nBody", &PublishOptions::default()).unwrap_err();

    assert!(matches!(err, PublishError::Validation(_)));
    assert_eq!(err.to_string(), "Validation error: missing title");
}
