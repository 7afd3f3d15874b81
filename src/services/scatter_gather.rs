//! Fan out over a static descriptor list, join every branch, keep failures per branch

use std::future::Future;

use tokio::task::JoinSet;

/// Why a branch produced no value
#[derive(Debug)]
pub enum BranchError<E> {
    /// The branch settled with its own error
    Failed(E),
    /// The branch task panicked or was cancelled before settling
    Aborted,
}

/// Run `fetch` once per descriptor concurrently and wait for all of them.
///
/// The result has one entry per descriptor, in descriptor order, regardless
/// of completion order. A failing or panicking branch only affects its own
/// entry.
pub async fn scatter_gather<D, T, E, F, Fut>(
    descriptors: &[D],
    fetch: F,
) -> Vec<(D, Result<T, BranchError<E>>)>
where
    D: Clone,
    T: Send + 'static,
    E: Send + 'static,
    F: Fn(D) -> Fut,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
{
    let mut set = JoinSet::new();
    for (slot, descriptor) in descriptors.iter().cloned().enumerate() {
        let branch = fetch(descriptor);
        set.spawn(async move { (slot, branch.await) });
    }

    let mut slots: Vec<Option<Result<T, E>>> = descriptors.iter().map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((slot, outcome)) => slots[slot] = Some(outcome),
            Err(e) => tracing::warn!("Scatter-gather branch did not settle: {}", e),
        }
    }

    descriptors
        .iter()
        .cloned()
        .zip(slots)
        .map(|(descriptor, outcome)| {
            let outcome = match outcome {
                Some(Ok(value)) => Ok(value),
                Some(Err(e)) => Err(BranchError::Failed(e)),
                None => Err(BranchError::Aborted),
            };
            (descriptor, outcome)
        })
        .collect()
}
