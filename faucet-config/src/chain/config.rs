//! Ordered chain list and CAIP-2 keyed TOML (de)serialisation.

use std::collections::BTreeMap;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::descriptor::{ChainDescriptor, ChainId, ChainMetadata};

/// Ordered collection of [`ChainDescriptor`] entries.
///
/// Serialised as a map keyed by CAIP-2 chain identifiers. Order is preserved
/// in both directions; the first chain is the one wallets connect to by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainsConfig(pub Vec<ChainDescriptor>);

impl Deref for ChainsConfig {
    type Target = Vec<ChainDescriptor>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<ChainDescriptor> for ChainsConfig {
    fn from_iter<I: IntoIterator<Item = ChainDescriptor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl ChainsConfig {
    /// Looks up a chain by identifier. The first match wins.
    #[must_use]
    pub fn get(&self, id: ChainId) -> Option<&ChainDescriptor> {
        self.0.iter().find(|chain| chain.id == id)
    }

    /// Identifiers in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.0.iter().map(|chain| chain.id)
    }

    /// Identifiers that appear more than once, in ascending order.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<ChainId> {
        let mut seen: BTreeMap<ChainId, usize> = BTreeMap::new();
        for id in self.ids() {
            *seen.entry(id).or_default() += 1;
        }
        seen.into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(id, _)| id)
            .collect()
    }
}

impl Serialize for ChainsConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let chains = &self.0;
        let mut map = serializer.serialize_map(Some(chains.len()))?;
        for chain in chains {
            map.serialize_entry(&chain.id, &chain.metadata)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ChainsConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::fmt;

        use serde::de::{MapAccess, Visitor};

        struct ChainsVisitor;

        impl<'de> Visitor<'de> for ChainsVisitor {
            type Value = ChainsConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of chain identifiers to chain descriptors")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut chains = Vec::with_capacity(access.size_hint().unwrap_or(0));

                while let Some(key) = access.next_key::<String>()? {
                    let id: ChainId = key.parse().map_err(serde::de::Error::custom)?;
                    let metadata: ChainMetadata = access.next_value()?;
                    chains.push(ChainDescriptor { id, metadata });
                }

                Ok(ChainsConfig(chains))
            }
        }

        deserializer.deserialize_map(ChainsVisitor)
    }
}
