use crate::common::{parse, render, MockTransformer, Output};
use mdembed::dispatch::resolve;
use mdembed::scan::scan;
use mdembed::{Embedder, TransformerRegistry};
use std::sync::Arc;

#[tokio::test]
async fn test_first_matching_transformer_wins() {
    let first = MockTransformer::new("First")
        .returning(Output::Fixed(Some("<div>first</div>".to_string())))
        .into_arc();
    let second = MockTransformer::new("Second")
        .returning(Output::Fixed(Some("<div>second</div>".to_string())))
        .into_arc();
    let embedder = Embedder::builder()
        .transformer(first.clone())
        .transformer(second.clone())
        .build();

    let html = render("https://some-site.com\n", &embedder).await;

    assert_eq!(html, "<div>first</div>");
    assert_eq!(first.html_calls(), 1);
    assert_eq!(second.predicate_calls(), 0);
    assert_eq!(second.html_calls(), 0);
}

#[tokio::test]
async fn test_later_transformer_gets_rejected_urls() {
    let video = MockTransformer::new("Video")
        .accepting(|url| url.contains("video"))
        .returning(Output::Fixed(Some("<div>video</div>".to_string())))
        .into_arc();
    let fallback = MockTransformer::new("Fallback")
        .returning(Output::Fixed(Some("<div>fallback</div>".to_string())))
        .into_arc();
    let embedder = Embedder::builder()
        .transformers([video.clone(), fallback.clone()].map(|t| t as Arc<dyn mdembed::Transformer>))
        .build();

    let html = render(
        "https://some-site.com/video\n\nhttps://some-site.com/post\n",
        &embedder,
    )
    .await;

    assert_eq!(html, "<div>video</div>\n<div>fallback</div>");
    assert_eq!(video.predicate_calls(), 2);
    assert_eq!(fallback.predicate_calls(), 1);
}

#[tokio::test]
async fn test_async_predicate_behaves_like_sync() {
    let slow = MockTransformer::new("Slow").yielding().into_arc();
    let fast = MockTransformer::new("Fast").into_arc();
    let embedder = Embedder::builder()
        .transformer(slow.clone())
        .transformer(fast.clone())
        .build();

    let html = render("https://some-site.com\n", &embedder).await;

    assert_eq!(html, r#"<iframe src="https://some-site.com/"></iframe>"#);
    assert_eq!(slow.html_calls(), 1);
    assert_eq!(fast.predicate_calls(), 0);
}

#[tokio::test]
async fn test_resolve_keeps_document_order() {
    let picky = MockTransformer::new("Picky")
        .accepting(|url| !url.contains("skip"))
        .yielding()
        .into_arc();
    let mut registry = TransformerRegistry::new();
    registry.register(picky);
    let tree = parse("https://a.test\n\nhttps://skip.test\n\nhttps://b.test\n");

    let dispatched = resolve(scan(&tree), registry.bindings()).await;

    let urls: Vec<_> = dispatched
        .iter()
        .map(|d| d.candidate.url.as_str())
        .collect();
    assert_eq!(urls, vec!["https://a.test/", "https://b.test/"]);
    assert!(dispatched.iter().all(|d| d.binding.name() == "Picky"));
}

#[tokio::test]
async fn test_configured_and_bare_entries_keep_order() {
    let first = MockTransformer::new("First").into_arc();
    let second = MockTransformer::new("Second").into_arc();
    let registry = TransformerRegistry::from_entries(vec![
        mdembed::TransformerEntry::from((
            first as Arc<dyn mdembed::Transformer>,
            serde_json::json!({ "theme": "dark" }),
        )),
        mdembed::TransformerEntry::from(second as Arc<dyn mdembed::Transformer>),
    ]);

    assert_eq!(registry.names(), vec!["First", "Second"]);
    assert_eq!(
        registry.bindings()[0].config,
        Some(serde_json::json!({ "theme": "dark" }))
    );
    assert_eq!(registry.bindings()[1].config, None);
}
