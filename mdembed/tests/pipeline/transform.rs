use crate::common::{parse, render, MockTransformer, Output};
use mdembed::{Embedder, HastNode, MarkdownOptions, NodeKind};
use serde_json::json;

#[tokio::test]
async fn test_bare_url_becomes_iframe() {
    let video = MockTransformer::new("Video").into_arc();
    let embedder = Embedder::builder().transformer(video.clone()).build();

    let html = render("https://some-site.com\n", &embedder).await;

    insta::assert_snapshot!(html, @r#"<iframe src="https://some-site.com/"></iframe>"#);
    assert_eq!(video.html_calls(), 1);
}

#[tokio::test]
async fn test_only_bare_links_are_embedded() {
    let video = MockTransformer::new("Video").into_arc();
    let embedder = Embedder::builder().transformer(video.clone()).build();

    let md = r#"# Embeds

https://some-site.com

[my site](https://some-site.com)

Some text.
"#;
    let html = render(md, &embedder).await;

    insta::assert_snapshot!(html, @r#"
    <h1>Embeds</h1>
    <iframe src="https://some-site.com/"></iframe>
    <p><a href="https://some-site.com">my site</a></p>
    <p>Some text.</p>
    "#);
}

#[tokio::test]
async fn test_same_name_link_is_embedded() {
    let video = MockTransformer::new("Video").into_arc();
    let embedder = Embedder::builder().transformer(video.clone()).build();
    let mut tree = parse("[https://some-site.com](https://some-site.com)\n");

    embedder.transform(&mut tree).await.expect("transform to succeed");

    let data = tree.children[0].data.as_ref().expect("render override");
    assert_eq!(data.h_name, "iframe");
    assert_eq!(
        data.h_properties,
        vec![("src".to_string(), "https://some-site.com/".to_string())]
    );
    assert!(matches!(tree.children[0].children[0].kind, NodeKind::Link { .. }));
}

#[tokio::test]
async fn test_descriptive_titled_and_styled_links_are_left_alone() {
    let video = MockTransformer::new("Video").into_arc();
    let embedder = Embedder::builder().transformer(video.clone()).build();

    let md = r#"[my site](https://some-site.com)

[https://some-site.com](https://some-site.com "A title")

[*https://some-site.com*](https://some-site.com)

[**https://some-site.com**](https://some-site.com)
"#;
    let mut tree = parse(md);
    let before = tree.clone();

    embedder.transform(&mut tree).await.expect("transform to succeed");

    assert_eq!(tree, before);
    assert_eq!(video.predicate_calls(), 0);
    assert_eq!(video.html_calls(), 0);
}

#[tokio::test]
async fn test_predicate_called_once_per_candidate() {
    let video = MockTransformer::new("Video")
        .accepting(|url| url.contains("video"))
        .into_arc();
    let embedder = Embedder::builder().transformer(video.clone()).build();

    let md = r#"https://some-site.com/video

[my site](https://some-site.com)

https://some-site.com/article

Some text.
"#;
    let mut tree = parse(md);
    embedder.transform(&mut tree).await.expect("transform to succeed");

    assert_eq!(video.predicate_calls(), 2);
    assert_eq!(video.html_calls(), 1);
    assert!(tree.children[0].data.is_some());
    assert!(tree.children[2].data.is_none());
}

#[tokio::test]
async fn test_nothing_matches_leaves_tree_unchanged() {
    let video = MockTransformer::new("Video")
        .accepting(|_| false)
        .into_arc();
    let cache = std::sync::Arc::new(mdembed::MemoryCache::new());
    let embedder = Embedder::builder()
        .transformer(video.clone())
        .cache(cache.clone())
        .build();
    let mut tree = parse("https://some-site.com\n");
    let before = tree.clone();

    embedder.transform(&mut tree).await.expect("transform to succeed");

    assert_eq!(tree, before);
    assert_eq!(video.predicate_calls(), 1);
    assert_eq!(video.html_calls(), 0);
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_null_html_leaves_paragraph() {
    let video = MockTransformer::new("Video")
        .returning(Output::Fixed(None))
        .into_arc();
    let embedder = Embedder::builder().transformer(video.clone()).build();

    let html = render("https://some-site.com\n", &embedder).await;

    assert_eq!(html, "<p>https://some-site.com</p>");
    assert_eq!(video.html_calls(), 1);
}

#[tokio::test]
async fn test_blank_html_counts_as_null() {
    let video = MockTransformer::new("Video")
        .returning(Output::Fixed(Some("  \n".to_string())))
        .into_arc();
    let embedder = Embedder::builder().transformer(video).build();

    let html = render("https://some-site.com\n", &embedder).await;

    assert_eq!(html, "<p>https://some-site.com</p>");
}

#[tokio::test]
async fn test_text_only_html_leaves_paragraph() {
    let video = MockTransformer::new("Video")
        .returning(Output::Fixed(Some("no markup here".to_string())))
        .into_arc();
    let embedder = Embedder::builder().transformer(video).build();

    let html = render("https://some-site.com\n", &embedder).await;

    assert_eq!(html, "<p>https://some-site.com</p>");
}

#[tokio::test]
async fn test_nested_html_is_spliced() {
    let card = MockTransformer::new("Card")
        .returning(Output::Fixed(Some(
            r#"<figure class="card"><img src="thumb.png"><figcaption>Title</figcaption></figure>"#
                .to_string(),
        )))
        .into_arc();
    let embedder = Embedder::builder().transformer(card).build();
    let mut tree = parse("> https://some-site.com\n");

    embedder.transform(&mut tree).await.expect("transform to succeed");

    let paragraph = &tree.children[0].children[0];
    let data = paragraph.data.as_ref().expect("render override");
    assert_eq!(data.h_name, "figure");
    assert_eq!(data.h_children.len(), 2);
    match &data.h_children[1] {
        HastNode::Element(caption) => assert_eq!(caption.tag_name, "figcaption"),
        other => panic!("Expected figcaption, found {other:?}"),
    }
}

#[tokio::test]
async fn test_config_is_forwarded_and_url_normalized() {
    let video = MockTransformer::new("Video").into_arc();
    let embedder = Embedder::builder()
        .transformer_with_config(video.clone(), json!({ "size": "large" }))
        .build();

    let html = render("some-site.com/config\n", &embedder).await;

    assert_eq!(html, r#"<iframe src="https://some-site.com/config"></iframe>"#);
    assert_eq!(
        video.requests(),
        vec![(
            "https://some-site.com/config".to_string(),
            Some(json!({ "size": "large" }))
        )]
    );
}

#[tokio::test]
async fn test_autolinked_bare_url_is_embedded() {
    let video = MockTransformer::new("Video").into_arc();
    let embedder = Embedder::builder().transformer(video).build();
    let options = MarkdownOptions {
        autolink: true,
        ..Default::default()
    };

    let html = mdembed::embed_markdown(
        "https://some-site.com\n",
        &embedder,
        &options,
        &Default::default(),
    )
    .await
    .expect("embedding to succeed");

    assert_eq!(html, r#"<iframe src="https://some-site.com/"></iframe>"#);
}

#[tokio::test]
async fn test_embeds_inside_lists() {
    let video = MockTransformer::new("Video").into_arc();
    let embedder = Embedder::builder().transformer(video.clone()).build();

    let html = render("- https://a.test\n- plain words\n", &embedder).await;

    assert_eq!(
        html,
        r#"<ul><li><iframe src="https://a.test/"></iframe></li><li>plain words</li></ul>"#
    );
    assert_eq!(video.html_calls(), 1);
}
