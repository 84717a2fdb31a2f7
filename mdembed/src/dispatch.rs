//! Transformer dispatch.
//!
//! Within one candidate, predicates are awaited one after another in
//! registration order and probing stops at the first acceptance, so a
//! lower-priority transformer never sees a URL that was already claimed.
//! Different candidates are resolved concurrently.

use crate::scan::Candidate;
use crate::transformer::TransformerBinding;
use futures::future::join_all;

/// A candidate paired with the binding that claimed it.
#[derive(Debug, Clone)]
pub struct Dispatched<'b> {
    pub candidate: Candidate,
    pub binding: &'b TransformerBinding,
}

/// Pair every candidate with its first accepting binding.
///
/// Candidates nobody accepts are dropped. Output keeps candidate order.
pub async fn resolve(
    candidates: Vec<Candidate>,
    bindings: &[TransformerBinding],
) -> Vec<Dispatched<'_>> {
    let total = candidates.len();
    let probes = candidates
        .into_iter()
        .map(|candidate| first_match(candidate, bindings));

    let matched: Vec<_> = join_all(probes).await.into_iter().flatten().collect();
    tracing::debug!(candidates = total, matched = matched.len(), "resolved transformers");
    matched
}

async fn first_match(
    candidate: Candidate,
    bindings: &[TransformerBinding],
) -> Option<Dispatched<'_>> {
    for binding in bindings {
        if binding.transformer.should_transform(&candidate.url).await {
            tracing::trace!(
                url = %candidate.url,
                transformer = binding.name(),
                "transformer accepted url"
            );
            return Some(Dispatched { candidate, binding });
        }
    }
    None
}
