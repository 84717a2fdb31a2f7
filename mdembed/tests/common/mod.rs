//! Shared fixtures: a scriptable transformer and a log capture.

use async_trait::async_trait;
use mdembed::{
    BoxError, EmbedHtml, Embedder, HtmlOptions, MarkdownOptions, Node, Transformer,
    TransformerConfig,
};
use parking_lot::Mutex;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;

/// What a [`MockTransformer`] returns from `get_html`.
pub enum Output {
    /// `<iframe src="URL"></iframe>`
    Iframe,
    Fixed(EmbedHtml),
    Fail(&'static str),
}

type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

pub struct MockTransformer {
    name: String,
    accepts: Predicate,
    output: Output,
    yield_in_predicate: bool,
    predicate_calls: AtomicUsize,
    html_calls: AtomicUsize,
    requests: Mutex<Vec<(String, Option<TransformerConfig>)>>,
}

impl MockTransformer {
    /// Accepts every URL and returns an iframe for it.
    pub fn new(name: &str) -> Self {
        MockTransformer {
            name: name.to_string(),
            accepts: Box::new(|_| true),
            output: Output::Iframe,
            yield_in_predicate: false,
            predicate_calls: AtomicUsize::new(0),
            html_calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn accepting(mut self, accepts: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.accepts = Box::new(accepts);
        self
    }

    pub fn returning(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Suspend once before answering the predicate.
    pub fn yielding(mut self) -> Self {
        self.yield_in_predicate = true;
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn predicate_calls(&self) -> usize {
        self.predicate_calls.load(Ordering::SeqCst)
    }

    pub fn html_calls(&self) -> usize {
        self.html_calls.load(Ordering::SeqCst)
    }

    /// `(url, config)` pairs passed to `get_html`, in call order.
    pub fn requests(&self) -> Vec<(String, Option<TransformerConfig>)> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Transformer for MockTransformer {
    fn name(&self) -> &str {
        &self.name
    }

    async fn should_transform(&self, url: &str) -> bool {
        self.predicate_calls.fetch_add(1, Ordering::SeqCst);
        if self.yield_in_predicate {
            tokio::task::yield_now().await;
        }
        (self.accepts)(url)
    }

    async fn get_html(
        &self,
        url: &str,
        config: Option<&TransformerConfig>,
    ) -> Result<EmbedHtml, BoxError> {
        self.html_calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .push((url.to_string(), config.cloned()));

        match &self.output {
            Output::Iframe => Ok(Some(format!(r#"<iframe src="{url}"></iframe>"#))),
            Output::Fixed(html) => Ok(html.clone()),
            Output::Fail(message) => Err((*message).into()),
        }
    }
}

pub fn parse(md: &str) -> Node {
    mdembed::formats::parse_markdown(md, &MarkdownOptions::default())
}

pub async fn render(md: &str, embedder: &Embedder) -> String {
    mdembed::embed_markdown(
        md,
        embedder,
        &MarkdownOptions::default(),
        &HtmlOptions::default(),
    )
    .await
    .expect("embedding to succeed")
}

/// Collects formatted log output from a scoped subscriber.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Install a subscriber for error-level events on the current thread.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::ERROR)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Number of error events recorded.
    pub fn error_count(&self) -> usize {
        self.contents()
            .lines()
            .filter(|line| line.starts_with("ERROR"))
            .count()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
