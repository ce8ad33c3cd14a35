#![forbid(unsafe_code)]

//! Graph model for rosgraph-tui.
//!
//! This crate holds everything the navigation core reads but never mutates:
//! typed entity references, the read-only [`GraphSnapshot`] contract, an
//! in-memory [`StaticGraph`] implementation, the sources a snapshot can be
//! acquired from, and the approximate-match primitive in [`fuzzy`].
//!
//! # Role in rosgraph-tui
//! `rgtui-graph` is the leaf of the workspace. `rgtui-nav` drives its state
//! machine against a `GraphSnapshot`, and the `rgtui` binary acquires the
//! snapshot through a [`SnapshotSource`] at startup and on refresh.

pub mod entity;
pub mod error;
pub mod fuzzy;
pub mod snapshot;
pub mod source;

pub use entity::{EntityKind, EntityRef};
pub use error::{GraphError, GraphResult};
pub use snapshot::{GraphBuilder, GraphSnapshot, StaticGraph, UNKNOWN_TYPE};
pub use source::{DemoSource, FileSource, SnapshotDocument, SnapshotSource, TopicRecord};
