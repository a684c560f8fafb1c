/*!
Choice enumerations and the remote-choice cache.

Choice fields hold values whose legal set is defined remotely, not in the
type system. Each enumeration type maps onto a Rust enum implementing
[`ChoiceEnum`]; the [`ChoiceCache`] learns, once per enumeration, which
remote choice artifact id corresponds to which declared member.
*/

use crate::error::{Result, TetherError};
use crate::provider::{ChoiceQuery, RemoteProvider};
use crate::record::ArtifactId;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Mutex;
use tether_retry::RetryPolicy;
use tracing::debug;
use uuid::Uuid;

/// A Rust enum backing a remote choice enumeration.
///
/// `MEMBER_GUIDS` lists the stable GUID of each member in declaration order;
/// that order is the contract the cache uses to pair remote ids with members.
pub trait ChoiceEnum: Copy + Eq + Ord + 'static {
    /// Display name used in `InvalidChoice` errors.
    const NAME: &'static str;
    /// Member GUIDs in declaration order.
    const MEMBER_GUIDS: &'static [Uuid];

    fn from_ordinal(ordinal: usize) -> Option<Self>;
    fn ordinal(self) -> usize;

    fn guid(self) -> Uuid {
        Self::MEMBER_GUIDS[self.ordinal()]
    }
}

/// Lazily populated mapping from remote choice ids to member ordinals,
/// one entry per enumeration type, shared for the cache's lifetime.
#[derive(Debug, Default)]
pub struct ChoiceCache {
    mappings: Mutex<HashMap<TypeId, HashMap<ArtifactId, usize>>>,
}

impl ChoiceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a raw remote choice id to a member of `E`.
    ///
    /// The first resolution for a given `E` issues one remote query for the
    /// legal choices and associates the i-th returned id with the i-th
    /// declared member. An id with no member is a hard failure; silently
    /// defaulting would corrupt the typed value.
    pub fn resolve<E, P>(&self, provider: &P, retry: &RetryPolicy, raw: ArtifactId) -> Result<E>
    where
        E: ChoiceEnum,
        P: RemoteProvider,
    {
        let mut mappings = self
            .mappings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if !mappings.contains_key(&TypeId::of::<E>()) {
            let query = ChoiceQuery {
                member_guids: E::MEMBER_GUIDS,
            };
            let records = retry.invoke(|| provider.query(&query))?;
            debug!(
                enum_name = E::NAME,
                choices = records.len(),
                "populated choice mapping"
            );
            let mapping = records
                .iter()
                .enumerate()
                .map(|(ordinal, record)| (record.artifact_id, ordinal))
                .collect();
            mappings.insert(TypeId::of::<E>(), mapping);
        }

        mappings
            .get(&TypeId::of::<E>())
            .and_then(|mapping| mapping.get(&raw))
            .and_then(|&ordinal| E::from_ordinal(ordinal))
            .ok_or(TetherError::InvalidChoice {
                enum_name: E::NAME,
                raw,
            })
    }
}
