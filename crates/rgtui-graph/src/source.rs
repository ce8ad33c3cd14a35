#![forbid(unsafe_code)]

//! Where snapshots come from.
//!
//! Querying live middleware is outside this workspace. A snapshot is instead
//! acquired from a JSON document on disk (as exported by a capture tool) or
//! from a small built-in demo graph. Acquisition is atomic: it either yields
//! a complete [`StaticGraph`] or a [`GraphError`].
//!
//! # Document format
//!
//! ```json
//! {
//!   "nodes": ["/talker", "/listener"],
//!   "topics": [
//!     { "name": "/chatter", "type": "std_msgs/String",
//!       "publishers": ["/talker"], "subscribers": ["/listener"] }
//!   ]
//! }
//! ```
//!
//! Every field is optional. Nodes named only in edge lists are registered
//! implicitly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{GraphError, GraphResult};
use crate::snapshot::{GraphBuilder, StaticGraph};

/// Something a [`StaticGraph`] can be acquired from.
pub trait SnapshotSource {
    /// Short name used in diagnostics.
    fn name(&self) -> String;

    /// Capture a complete snapshot.
    fn acquire(&self) -> GraphResult<StaticGraph>;
}

/// One topic entry in a snapshot document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicRecord {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    pub publishers: Vec<String>,
    pub subscribers: Vec<String>,
}

/// Serialized form of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotDocument {
    pub nodes: Vec<String>,
    pub topics: Vec<TopicRecord>,
}

impl SnapshotDocument {
    /// Decode a document from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Build the immutable snapshot this document describes.
    #[must_use]
    pub fn into_graph(self) -> StaticGraph {
        let mut builder = GraphBuilder::new();
        for node in self.nodes {
            builder.add_node(node);
        }
        for topic in self.topics {
            builder.add_topic(topic.name.clone(), topic.message_type);
            for node in topic.publishers {
                builder.add_publisher(node, topic.name.clone());
            }
            for node in topic.subscribers {
                builder.add_subscriber(node, topic.name.clone());
            }
        }
        builder.build()
    }
}

/// Reads a [`SnapshotDocument`] from a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn acquire(&self) -> GraphResult<StaticGraph> {
        let text =
            fs::read_to_string(&self.path).map_err(|err| GraphError::unavailable(self.name(), &err))?;
        let document = SnapshotDocument::from_json(&text).map_err(|err| GraphError::Malformed {
            path: self.path.clone(),
            reason: err.to_string(),
        })?;
        debug!(
            path = %self.path.display(),
            nodes = document.nodes.len(),
            topics = document.topics.len(),
            "decoded snapshot document"
        );
        let graph = document.into_graph();
        info!(
            source = %self.name(),
            nodes = graph.node_count(),
            topics = graph.topic_count(),
            "graph snapshot acquired"
        );
        Ok(graph)
    }
}

/// Built-in demo graph: the classic talker/listener pair plus logging.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSource;

impl DemoSource {
    /// The demo graph without going through [`SnapshotSource`].
    #[must_use]
    pub fn graph() -> StaticGraph {
        GraphBuilder::new()
            .topic("/chatter", "std_msgs/String")
            .topic("/rosout", "rosgraph_msgs/Log")
            .topic("/rosout_agg", "rosgraph_msgs/Log")
            .topic("/diagnostics", "diagnostic_msgs/DiagnosticArray")
            .publishes("/talker", "/chatter")
            .subscribes("/listener", "/chatter")
            .publishes("/talker", "/rosout")
            .publishes("/listener", "/rosout")
            .subscribes("/rosout", "/rosout")
            .publishes("/rosout", "/rosout_agg")
            .subscribes("/diagnostic_aggregator", "/diagnostics")
            .build()
    }
}

impl SnapshotSource for DemoSource {
    fn name(&self) -> String {
        "demo".to_string()
    }

    fn acquire(&self) -> GraphResult<StaticGraph> {
        Ok(Self::graph())
    }
}
