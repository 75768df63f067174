// tests/fetcher_tests.rs
//! Block tree fetching against an in-memory repository.

mod common;

use common::*;
use notion2moment::{fetch_block_tree, AppError, BlockTreeFetcher};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_paginated_children_are_concatenated_in_order() {
    let root = block_id(1);
    let repo = MockRepository::new().with_paged_children(
        &root,
        vec![
            vec![paragraph(10, "a"), paragraph(11, "b")],
            vec![paragraph(12, "c"), paragraph(13, "d")],
            vec![paragraph(14, "e")],
        ],
    );

    let tree = fetch_block_tree(&repo, root.clone()).await.unwrap();

    let ids: Vec<_> = tree
        .children(tree.root())
        .map(|index| tree.node(index).id.clone())
        .collect();
    assert_eq!(ids, (10..=14).map(block_id).collect::<Vec<_>>());
    assert_eq!(tree.block_count(), 5);
    assert_eq!(
        repo.calls(),
        vec![
            (root.clone(), None),
            (root.clone(), Some("cursor-1".to_string())),
            (root, Some("cursor-2".to_string())),
        ]
    );
}

#[tokio::test]
async fn test_children_are_listed_breadth_first() {
    let root = block_id(1);
    let repo = MockRepository::new()
        .with_children(
            &root,
            vec![
                paragraph(10, "a").with_children(),
                paragraph(11, "b").with_children(),
            ],
        )
        .with_children(&block_id(10), vec![paragraph(20, "a1").with_children()])
        .with_children(&block_id(11), vec![paragraph(21, "b1")])
        .with_children(&block_id(20), vec![paragraph(30, "a1x")]);

    let tree = fetch_block_tree(&repo, root.clone()).await.unwrap();

    assert_eq!(
        repo.listed_parents(),
        vec![root, block_id(10), block_id(11), block_id(20)]
    );
    assert_eq!(tree.block_count(), 5);
}

#[tokio::test]
async fn test_blocks_without_children_are_not_listed() {
    let root = block_id(1);
    let repo = MockRepository::new().with_children(&root, vec![paragraph(10, "leaf")]);

    fetch_block_tree(&repo, root.clone()).await.unwrap();

    assert_eq!(repo.listed_parents(), vec![root]);
}

#[tokio::test]
async fn test_failure_anywhere_aborts_the_fetch() {
    let root = block_id(1);
    let repo = MockRepository::new()
        .with_children(
            &root,
            vec![
                paragraph(10, "ok").with_children(),
                paragraph(11, "broken").with_children(),
            ],
        )
        .with_children(&block_id(10), vec![paragraph(20, "fine")])
        .failing_on(&block_id(11));

    let mut fetcher = BlockTreeFetcher::new(&repo, root);
    let err = fetcher.fetch().await.unwrap_err();

    assert!(matches!(err, AppError::MalformedResponse(_)));
    assert!(!fetcher.is_completed());
    assert!(matches!(fetcher.result(), Err(AppError::InvalidState(_))));
}

#[tokio::test]
async fn test_result_before_fetch_is_invalid_state() {
    let repo = MockRepository::new();
    let fetcher = BlockTreeFetcher::new(&repo, block_id(1));

    assert!(!fetcher.is_completed());
    assert!(matches!(fetcher.result(), Err(AppError::InvalidState(_))));
    assert!(matches!(
        fetcher.into_result(),
        Err(AppError::InvalidState(_))
    ));
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn test_completed_fetch_exposes_tree() {
    let root = block_id(1);
    let repo = MockRepository::new().with_children(&root, vec![quote(10, "q")]);

    let mut fetcher = BlockTreeFetcher::new(&repo, root.clone());
    fetcher.fetch().await.unwrap();

    assert!(fetcher.is_completed());
    assert_eq!(fetcher.root_id(), &root);
    let tree = fetcher.result().unwrap();
    assert_eq!(tree.node(tree.root()).id, root);
    assert!(tree.node(tree.root()).value.is_none());
}
