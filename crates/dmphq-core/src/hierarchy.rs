//! Derived folder hierarchy for the asset browser.
//!
//! The browser shows a virtual filesystem that never exists anywhere:
//! folders are synthesized from the flat asset list, one level per
//! unresolved dimension (entity, then category, then type). Entering a
//! folder pins its dimension; going up unpins the most recent one. The
//! whole tree is recomputed from scratch on every call — folders have no
//! identity beyond their derived id.
//!
//! Dimensions are described by an ordered [`DimensionDescriptor`] list
//! rather than nested branches, so adding a level is a data change, not
//! a code change.

use serde::{Deserialize, Serialize};

use crate::record::{DimensionKey, Record};

/// One enumerable value of a dimension, with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub value: String,
    pub label: String,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The full known domain of each dimension.
///
/// The catalog, not the data, defines which folders exist: a value with
/// no matching records still yields a folder with count 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionCatalog {
    entries: Vec<(DimensionKey, Vec<CatalogEntry>)>,
}

impl DimensionCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the enumerable values for one dimension.
    pub fn insert(&mut self, key: DimensionKey, values: Vec<CatalogEntry>) {
        self.entries.retain(|(k, _)| *k != key);
        self.entries.push((key, values));
    }

    /// Enumerable values for a dimension; empty when unregistered.
    #[must_use]
    pub fn entries(&self, key: DimensionKey) -> &[CatalogEntry] {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(&[], |(_, v)| v.as_slice())
    }
}

/// One level of the fixed traversal order, with an optional gate.
///
/// A gated dimension enumerates only while some other dimension is
/// pinned to a specific value (e.g. asset type only inside the
/// social-template category). An unsatisfied gate skips the level
/// entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionDescriptor {
    pub key: DimensionKey,
    pub gate: Option<(DimensionKey, String)>,
}

impl DimensionDescriptor {
    #[must_use]
    pub const fn open(key: DimensionKey) -> Self {
        Self { key, gate: None }
    }

    #[must_use]
    pub fn gated(key: DimensionKey, on: DimensionKey, value: impl Into<String>) -> Self {
        Self {
            key,
            gate: Some((on, value.into())),
        }
    }

    fn gate_satisfied(&self, path: &NavPath) -> bool {
        self.gate
            .as_ref()
            .is_none_or(|(key, value)| path.pinned(*key) == Some(value.as_str()))
    }
}

/// The navigation state: dimensions pinned by prior folder entry, in
/// traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavPath {
    pins: Vec<(DimensionKey, String)>,
}

impl NavPath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a dimension, as entering its folder does.
    pub fn enter(&mut self, key: DimensionKey, value: impl Into<String>) {
        self.pins.retain(|(k, _)| *k != key);
        self.pins.push((key, value.into()));
    }

    /// Unpin exactly the most recently pinned dimension.
    pub fn up(&mut self) -> Option<(DimensionKey, String)> {
        self.pins.pop()
    }

    /// Value pinned for a dimension, if any.
    #[must_use]
    pub fn pinned(&self, key: DimensionKey) -> Option<&str> {
        self.pins
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All pins in the order they were applied.
    #[must_use]
    pub fn pins(&self) -> &[(DimensionKey, String)] {
        &self.pins
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.pins.len()
    }

    /// Returns true if the record matches every pinned dimension.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.pins
            .iter()
            .all(|(key, value)| record.dimension(*key) == Some(value.as_str()))
    }
}

/// A synthetic grouping node for one candidate value of the open
/// dimension. Never persisted; identity is the derived `id` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Deterministic id, `"<dimension>-<value>"`.
    pub id: String,
    pub label: String,
    /// Number of records visible if this folder were entered.
    pub count: usize,
    pub key: DimensionKey,
    pub value: String,
}

/// What the browser shows at one navigation depth: synthetic folders for
/// the open dimension, or leaf records once every dimension is pinned.
/// The two sides are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing<R> {
    pub folders: Vec<Folder>,
    pub leaves: Vec<R>,
}

/// Compute the folder/leaf listing for the current navigation state.
///
/// The open dimension is the first descriptor, in traversal order, that
/// is not pinned and whose gate is satisfied. While one exists, the
/// listing holds one folder per catalog entry of that dimension (kept
/// even at count 0) and no leaves. Once none remains, the listing holds
/// exactly the records matching every pin.
///
/// A pinned value absent from the data simply yields empty leaves;
/// nothing here errors. Given identical inputs the output is identical:
/// folder order follows the catalog, leaf order follows the input.
pub fn build<R: Record + Clone>(
    records: &[R],
    path: &NavPath,
    descriptors: &[DimensionDescriptor],
    catalog: &DimensionCatalog,
) -> Listing<R> {
    let open = descriptors
        .iter()
        .find(|d| path.pinned(d.key).is_none() && d.gate_satisfied(path));

    match open {
        Some(descriptor) => {
            let folders = catalog
                .entries(descriptor.key)
                .iter()
                .map(|entry| Folder {
                    id: format!("{}-{}", descriptor.key, entry.value),
                    label: entry.label.clone(),
                    count: records
                        .iter()
                        .filter(|r| {
                            path.matches(*r)
                                && r.dimension(descriptor.key) == Some(entry.value.as_str())
                        })
                        .count(),
                    key: descriptor.key,
                    value: entry.value.clone(),
                })
                .collect();
            Listing {
                folders,
                leaves: Vec::new(),
            }
        }
        None => Listing {
            folders: Vec::new(),
            leaves: records
                .iter()
                .filter(|r| path.matches(*r))
                .cloned()
                .collect(),
        },
    }
}
