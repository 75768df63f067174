// tests/page_processor_tests.rs
//! Page processing end to end against an in-memory repository.

mod common;

use common::*;
use notion2moment::{
    process_page, query_published_pages, AppError, BlockId, DatabaseFilter, DatabaseId,
    MomentTemplate, PageProcessor, PropertyValue,
};
use pretty_assertions::assert_eq;

const PAGE_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

fn page_block_id() -> BlockId {
    BlockId::parse(PAGE_ID).unwrap()
}

#[tokio::test]
async fn test_full_moment_document() {
    let page = moment_page(
        PAGE_ID,
        "2024-01-01T00:00:00.000Z",
        Some("2024-03-05T18:30:00.000+08:00"),
    );
    let repo = MockRepository::new().with_children(
        &page_block_id(),
        vec![
            paragraph(10, "Hello"),
            image(11, "https://img/1.png"),
            bulleted(12, "milk"),
            bulleted(13, "beans"),
        ],
    );

    let document = process_page(&page, &repo).await.unwrap();

    assert_eq!(document.file_name, "20240305_1830-550e84.md");
    assert_eq!(
        document.content,
        concat!(
            "---\n",
            "top:\n",
            "name: \"\"\n",
            "avatar:\n",
            "signature: \"a quiet morning\"\n",
            "\n",
            "date: 2024-03-05T18:30:00+08:00\n",
            "\n",
            "tags:\n",
            "  - life\n",
            "  - coffee\n",
            "\n",
            "pictures:\n",
            "  - https://img/1.png\n",
            "\n",
            "link: \n",
            "link_text: \n",
            "link_logo: \n",
            "\n",
            "note: \"None\"\n",
            "---\n",
            "Hello\n",
            "\n",
            "- milk\n",
            "- beans",
        )
    );
}

#[tokio::test]
async fn test_empty_date_falls_back_to_creation_time() {
    let page = moment_page(PAGE_ID, "2024-01-01T09:15:00.000Z", None);
    let repo = MockRepository::new();

    let document = process_page(&page, &repo).await.unwrap();

    assert_eq!(document.file_name, "20240101_0915-550e84.md");
    assert_eq!(
        document.properties.created_time.to_rfc3339(),
        "2024-01-01T09:15:00+00:00"
    );
    assert!(document.content.contains("date: 2024-01-01T09:15:00+00:00\n"));
    assert!(document.content.ends_with("---\n"));
}

#[tokio::test]
async fn test_note_line_follows_the_note_property() {
    let without_note = moment_page(PAGE_ID, "2024-01-01T00:00:00.000Z", None);
    let mut with_note = without_note.clone();
    with_note.properties.insert(
        "Note".to_string(),
        serde_json::from_value(serde_json::json!({
            "type": "rich_text",
            "rich_text": [{"plain_text": "with oat milk"}]
        }))
        .unwrap(),
    );
    let repo = MockRepository::new();

    let note_line = |content: &str| {
        content
            .lines()
            .find(|line| line.starts_with("note:"))
            .map(str::to_string)
    };

    let absent = process_page(&without_note, &repo).await.unwrap();
    let present = process_page(&with_note, &repo).await.unwrap();

    assert_eq!(note_line(&absent.content).as_deref(), Some("note: \"None\""));
    assert_eq!(
        note_line(&present.content).as_deref(),
        Some("note: \"with oat milk\"")
    );
}

#[tokio::test]
async fn test_missing_property_fails_before_any_fetch() {
    let mut page = moment_page(PAGE_ID, "2024-01-01T00:00:00.000Z", None);
    page.properties.remove("Tags");
    let repo = MockRepository::new();

    let err = process_page(&page, &repo).await.unwrap_err();

    assert!(matches!(err, AppError::MissingProperty { ref name, .. } if name == "Tags"));
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn test_mistyped_property_is_rejected() {
    let mut page = moment_page(PAGE_ID, "2024-01-01T00:00:00.000Z", None);
    page.properties.insert(
        "Signature".to_string(),
        PropertyValue::Checkbox { checkbox: true },
    );
    let repo = MockRepository::new();

    let err = PageProcessor::new(&page, &repo).err().unwrap();

    assert!(matches!(
        err,
        AppError::UnexpectedPropertyType {
            expected: "rich_text",
            found: "checkbox",
            ..
        }
    ));
}

#[tokio::test]
async fn test_date_without_time_is_a_timestamp_error() {
    let page = moment_page(PAGE_ID, "2024-01-01T00:00:00.000Z", Some("2024-03-05"));
    let repo = MockRepository::new();

    let err = process_page(&page, &repo).await.unwrap_err();

    assert!(matches!(err, AppError::TimestampParse { ref value, .. } if value == "2024-03-05"));
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn test_content_fetch_failure_fails_the_page() {
    let page = moment_page(PAGE_ID, "2024-01-01T00:00:00.000Z", None);
    let repo = MockRepository::new().failing_on(&page_block_id());
    let template = MomentTemplate::new().unwrap();

    let processor = PageProcessor::new(&page, &repo).unwrap();
    let err = processor.process(&template).await.unwrap_err();

    assert!(matches!(err, AppError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_published_pages_are_collected_across_query_pages() {
    let repo = MockRepository::new().with_query_results(vec![
        vec![
            moment_page(
                "11111111111111111111111111111111",
                "2024-01-01T00:00:00.000Z",
                None,
            ),
            moment_page(
                "22222222222222222222222222222222",
                "2024-01-02T00:00:00.000Z",
                None,
            ),
        ],
        vec![moment_page(
            "33333333333333333333333333333333",
            "2024-01-03T00:00:00.000Z",
            None,
        )],
    ]);
    let database = DatabaseId::parse("44444444444444444444444444444444").unwrap();

    let pages = query_published_pages(&repo, &database).await.unwrap();

    let ids: Vec<_> = pages.iter().map(|p| p.id.as_str().to_string()).collect();
    assert_eq!(
        ids,
        vec![
            "11111111111111111111111111111111",
            "22222222222222222222222222222222",
            "33333333333333333333333333333333",
        ]
    );
    assert_eq!(
        repo.filters(),
        vec![DatabaseFilter::published(), DatabaseFilter::published()]
    );
}
