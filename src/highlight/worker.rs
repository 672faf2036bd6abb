//! Highlight worker thread
//!
//! One long-lived worker serves every post view. A view submits all of its
//! code blocks as a single request together with a shared cancellation
//! flag; the worker tokenizes block by block, checking the flag between
//! steps. Cancellation is cooperative: a set flag stops further delivery
//! for that request, and blocks already delivered are not retracted.
//!
//! The language tables are compiled lazily, when the first request arrives,
//! so an app session that never opens a post pays nothing.

use crate::highlight::syntax::{tokenize, HighlightSpan, Registry};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One code block submitted for highlighting
#[derive(Debug, Clone)]
pub struct CodeBlock {
    /// Position of the block in the owning view
    pub index: usize,
    /// Language tag as written in the content
    pub language: String,
    /// Raw source text
    pub source: String,
}

/// A finished block delivered back to the view
#[derive(Debug, Clone)]
pub struct HighlightedBlock {
    pub index: usize,
    pub spans: Vec<HighlightSpan>,
}

struct HighlightRequest {
    blocks: Vec<CodeBlock>,
    cancelled: Arc<AtomicBool>,
    results: Sender<HighlightedBlock>,
}

/// Handle to the worker thread
///
/// Dropping the handle closes the request channel; the worker drains what
/// it has and exits.
pub struct Highlighter {
    requests: Sender<HighlightRequest>,
}

impl Highlighter {
    /// Spawn the worker thread
    pub fn spawn() -> Self {
        let (tx, rx) = unbounded();
        std::thread::spawn(move || run(rx));
        Self { requests: tx }
    }

    /// Submit one view's code blocks
    ///
    /// Returns the session owning the results; dropping it cancels work not
    /// yet delivered.
    pub fn highlight(&self, blocks: Vec<CodeBlock>) -> HighlightSession {
        let cancelled = Arc::new(AtomicBool::new(false));
        let (tx, rx) = unbounded();
        let request = HighlightRequest {
            blocks,
            cancelled: Arc::clone(&cancelled),
            results: tx,
        };
        if self.requests.send(request).is_err() {
            // Worker gone; the view simply keeps its plain blocks
            tracing::warn!("Highlight worker is not running; code blocks stay plain");
        }
        HighlightSession {
            cancelled,
            results: rx,
        }
    }
}

/// One view's in-flight highlighting
pub struct HighlightSession {
    cancelled: Arc<AtomicBool>,
    results: Receiver<HighlightedBlock>,
}

impl HighlightSession {
    /// Drain finished blocks without blocking
    pub fn poll(&self) -> Vec<HighlightedBlock> {
        self.results.try_iter().collect()
    }

    /// Block until the next finished block arrives or `timeout` elapses
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<HighlightedBlock> {
        self.results.recv_timeout(timeout).ok()
    }

    /// Cooperatively stop work not yet delivered
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether the session has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for HighlightSession {
    fn drop(&mut self) {
        // View teardown cancels whatever is still in flight
        self.cancel();
    }
}

fn run(requests: Receiver<HighlightRequest>) {
    tracing::debug!("Highlight worker started");

    let mut registry: Option<Registry> = None;

    while let Ok(request) = requests.recv() {
        let registry = registry.get_or_insert_with(|| {
            let registry = Registry::load();
            tracing::debug!("Compiled {} language tables", registry.len());
            registry
        });
        handle_request(registry, &request);
    }

    tracing::debug!("Highlight worker stopped");
}

fn handle_request(registry: &Registry, request: &HighlightRequest) {
    for block in &request.blocks {
        if request.cancelled.load(Ordering::SeqCst) {
            tracing::debug!("Highlight request cancelled; dropping remaining blocks");
            return;
        }

        let spans = match registry.find(&block.language) {
            Some(syntax) => tokenize(syntax, &block.source),
            // Unsupported language: leave the block as-is
            None => HighlightSpan::plain(&block.source),
        };

        if request.cancelled.load(Ordering::SeqCst) {
            tracing::debug!("Highlight request cancelled; dropping remaining blocks");
            return;
        }

        let delivered = HighlightedBlock {
            index: block.index,
            spans,
        };
        if request.results.send(delivered).is_err() {
            // Receiver dropped without setting the flag; same outcome
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::syntax::SpanKind;
    use std::time::Duration;

    fn request_for(
        blocks: Vec<CodeBlock>,
    ) -> (HighlightRequest, Arc<AtomicBool>, Receiver<HighlightedBlock>) {
        let cancelled = Arc::new(AtomicBool::new(false));
        let (tx, rx) = unbounded();
        let request = HighlightRequest {
            blocks,
            cancelled: Arc::clone(&cancelled),
            results: tx,
        };
        (request, cancelled, rx)
    }

    fn block(index: usize, language: &str, source: &str) -> CodeBlock {
        CodeBlock {
            index,
            language: language.to_string(),
            source: source.to_string(),
        }
    }

    #[test]
    fn delivers_every_block_in_order() {
        let registry = Registry::load();
        let (request, _, rx) = request_for(vec![
            block(0, "rust", "let x = 1;"),
            block(2, "python", "x = 1"),
        ]);

        handle_request(&registry, &request);
        drop(request);

        let delivered: Vec<_> = rx.iter().collect();
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[0].index, 0);
        assert_eq!(delivered[1].index, 2);
    }

    #[test]
    fn cancelled_request_delivers_nothing() {
        let registry = Registry::load();
        let (request, cancelled, rx) = request_for(vec![block(0, "rust", "let x = 1;")]);
        cancelled.store(true, Ordering::SeqCst);

        handle_request(&registry, &request);
        drop(request);

        assert_eq!(rx.iter().count(), 0);
    }

    #[test]
    fn delivered_blocks_survive_cancellation() {
        let registry = Registry::load();
        let (request, cancelled, rx) = request_for(vec![block(0, "rust", "let x = 1;")]);

        handle_request(&registry, &request);
        cancelled.store(true, Ordering::SeqCst);
        drop(request);

        // Cancellation stops future work; it does not retract results
        assert_eq!(rx.iter().count(), 1);
    }

    #[test]
    fn unsupported_language_passes_through_plain() {
        let registry = Registry::load();
        let (request, _, rx) = request_for(vec![block(0, "brainfuck", "+[--->++<]")]);

        handle_request(&registry, &request);
        drop(request);

        let delivered: Vec<_> = rx.iter().collect();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].spans.len(), 1);
        assert_eq!(delivered[0].spans[0].kind, SpanKind::Plain);
        assert_eq!(delivered[0].spans[0].text, "+[--->++<]");
    }

    #[test]
    fn dropping_the_session_sets_the_flag() {
        let highlighter = Highlighter::spawn();
        let session = highlighter.highlight(vec![]);
        let flag = Arc::clone(&session.cancelled);
        assert!(!flag.load(Ordering::SeqCst));

        drop(session);
        assert!(flag.load(Ordering::SeqCst));
    }

    #[test]
    fn end_to_end_through_the_worker_thread() {
        let highlighter = Highlighter::spawn();
        let session = highlighter.highlight(vec![block(1, "bash", "echo hi # greet")]);

        let delivered = session
            .recv_timeout(Duration::from_secs(5))
            .expect("worker should deliver within the timeout");
        assert_eq!(delivered.index, 1);
        let text: String = delivered.spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(text, "echo hi # greet");
    }
}
