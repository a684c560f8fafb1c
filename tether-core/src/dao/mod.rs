/*!
The data-access engines.

[`Dao`] owns the injected remote provider, the retry policy wrapped around
every remote call, and the choice cache shared across reads. The read path
(record to typed graph) lives in [`hydrate`]; the write path (typed graph to
record writes) lives in [`persist`].
*/

mod hydrate;
mod persist;

pub use hydrate::Hydrator;
pub use persist::Persister;

use crate::choice::ChoiceCache;
use crate::provider::RemoteProvider;
use tether_retry::RetryPolicy;

/// Entry point for reading and writing object graphs.
///
/// Safe to share across threads only to the extent the injected provider is;
/// the engines themselves never schedule concurrent remote operations.
pub struct Dao<P: RemoteProvider> {
    provider: P,
    retry: RetryPolicy,
    choices: ChoiceCache,
}

impl<P: RemoteProvider> Dao<P> {
    /// Create a DAO with the default retry policy.
    pub fn new(provider: P) -> Self {
        Self::with_retry(provider, RetryPolicy::default())
    }

    /// Create a DAO with an injected retry policy.
    pub fn with_retry(provider: P, retry: RetryPolicy) -> Self {
        Self {
            provider,
            retry,
            choices: ChoiceCache::new(),
        }
    }
}
