//! dmphq-core: derived-data layer for the DMPHQ operations console.
//!
//! Everything user-visible in the console is a pure derivation over three
//! in-memory record collections (assets, social posts, delegated tasks):
//!
//! - [`filter`] / [`sort`] — the filter-sort pipeline shared by every
//!   list view: AND-combined predicates, then one stable comparator.
//! - [`hierarchy`] — the synthetic folder tree the asset browser shows,
//!   computed fresh from flat records plus the current navigation path.
//! - [`due`] — overdue/today/upcoming bucketing for task lists.
//!
//! The derivations are pure and infallible: missing fields degrade to
//! neutral defaults instead of erroring, and identical inputs always
//! produce identical output. Fallible code lives only at the loading
//! boundary ([`snapshot`], [`config`]) and returns [`error::DmphqError`].
//!
//! # Conventions
//!
//! - **Errors**: typed `DmphqError` in this crate; `anyhow::Result` with
//!   context at binary boundaries.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `debug!`).

pub mod config;
pub mod due;
pub mod error;
pub mod filter;
pub mod hierarchy;
pub mod model;
pub mod record;
pub mod snapshot;
pub mod sort;
