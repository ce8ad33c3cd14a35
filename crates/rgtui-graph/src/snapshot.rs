#![forbid(unsafe_code)]

//! Read-only graph snapshots.
//!
//! [`GraphSnapshot`] is the query contract the navigation core relies on.
//! Every query is synchronous and deterministic for a fixed snapshot, and
//! every returned sequence is sorted ascending and duplicate-free.
//!
//! Filtering at this layer is plain case-sensitive substring containment.
//! Approximate matching lives in [`crate::fuzzy`] and is not used here.
//!
//! # Example
//!
//! ```
//! use rgtui_graph::{GraphBuilder, GraphSnapshot};
//!
//! let graph = GraphBuilder::new()
//!     .topic("/chatter", "std_msgs/String")
//!     .publishes("/talker", "/chatter")
//!     .subscribes("/listener", "/chatter")
//!     .build();
//!
//! assert_eq!(graph.list_nodes(""), vec!["/listener", "/talker"]);
//! assert_eq!(graph.publishers_of("/chatter"), vec!["/talker"]);
//! assert_eq!(graph.type_of("/chatter"), "std_msgs/String");
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::entity::EntityRef;

/// Message type reported for topics the snapshot has no type for.
pub const UNKNOWN_TYPE: &str = "unknown type";

/// Point-in-time, read-only view of nodes, topics, and pub/sub edges.
pub trait GraphSnapshot {
    /// Node names containing `filter`, sorted ascending.
    fn list_nodes(&self, filter: &str) -> Vec<String>;

    /// Topic names containing `filter`, sorted ascending.
    fn list_topics(&self, filter: &str) -> Vec<String>;

    /// Nodes publishing `topic`, sorted. Empty for unknown topics.
    fn publishers_of(&self, topic: &str) -> Vec<String>;

    /// Nodes subscribed to `topic`, sorted.
    fn subscribers_of(&self, topic: &str) -> Vec<String>;

    /// Topics `node` publishes, sorted.
    fn publications_of(&self, node: &str) -> Vec<String>;

    /// Topics `node` subscribes to, sorted.
    fn subscriptions_of(&self, node: &str) -> Vec<String>;

    /// Message type of `topic`, or [`UNKNOWN_TYPE`].
    fn type_of(&self, topic: &str) -> String;

    /// Wrap node names into entity references.
    fn node_refs(&self, names: Vec<String>) -> Vec<EntityRef> {
        names.into_iter().map(EntityRef::node).collect()
    }

    /// Wrap topic names into entity references carrying their type.
    fn topic_refs(&self, names: Vec<String>) -> Vec<EntityRef> {
        names
            .into_iter()
            .map(|name| {
                let message_type = self.type_of(&name);
                EntityRef::topic(name, message_type)
            })
            .collect()
    }

    /// Filtered nodes as entity references.
    fn nodes(&self, filter: &str) -> Vec<EntityRef> {
        self.node_refs(self.list_nodes(filter))
    }

    /// Filtered topics as entity references.
    fn topics(&self, filter: &str) -> Vec<EntityRef> {
        self.topic_refs(self.list_topics(filter))
    }

    /// True when the snapshot holds neither nodes nor topics.
    fn is_empty(&self) -> bool {
        self.list_nodes("").is_empty() && self.list_topics("").is_empty()
    }
}

impl<T: GraphSnapshot + ?Sized> GraphSnapshot for &T {
    fn list_nodes(&self, filter: &str) -> Vec<String> {
        (**self).list_nodes(filter)
    }
    fn list_topics(&self, filter: &str) -> Vec<String> {
        (**self).list_topics(filter)
    }
    fn publishers_of(&self, topic: &str) -> Vec<String> {
        (**self).publishers_of(topic)
    }
    fn subscribers_of(&self, topic: &str) -> Vec<String> {
        (**self).subscribers_of(topic)
    }
    fn publications_of(&self, node: &str) -> Vec<String> {
        (**self).publications_of(node)
    }
    fn subscriptions_of(&self, node: &str) -> Vec<String> {
        (**self).subscriptions_of(node)
    }
    fn type_of(&self, topic: &str) -> String {
        (**self).type_of(topic)
    }
}

impl<T: GraphSnapshot + ?Sized> GraphSnapshot for Arc<T> {
    fn list_nodes(&self, filter: &str) -> Vec<String> {
        (**self).list_nodes(filter)
    }
    fn list_topics(&self, filter: &str) -> Vec<String> {
        (**self).list_topics(filter)
    }
    fn publishers_of(&self, topic: &str) -> Vec<String> {
        (**self).publishers_of(topic)
    }
    fn subscribers_of(&self, topic: &str) -> Vec<String> {
        (**self).subscribers_of(topic)
    }
    fn publications_of(&self, node: &str) -> Vec<String> {
        (**self).publications_of(node)
    }
    fn subscriptions_of(&self, node: &str) -> Vec<String> {
        (**self).subscriptions_of(node)
    }
    fn type_of(&self, topic: &str) -> String {
        (**self).type_of(topic)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TopicEntry {
    message_type: Option<String>,
    publishers: BTreeSet<String>,
    subscribers: BTreeSet<String>,
}

/// Immutable in-memory snapshot.
///
/// Built once through [`GraphBuilder`]; all adjacency is stored in ordered
/// sets so queries come back sorted without extra work.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticGraph {
    nodes: BTreeSet<String>,
    topics: BTreeMap<String, TopicEntry>,
    publications: BTreeMap<String, BTreeSet<String>>,
    subscriptions: BTreeMap<String, BTreeSet<String>>,
}

impl StaticGraph {
    /// Start building a snapshot.
    #[must_use]
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of topics.
    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }
}

fn filtered<'a>(names: impl Iterator<Item = &'a String>, filter: &str) -> Vec<String> {
    names.filter(|name| name.contains(filter)).cloned().collect()
}

fn collect(set: Option<&BTreeSet<String>>) -> Vec<String> {
    set.map(|s| s.iter().cloned().collect()).unwrap_or_default()
}

impl GraphSnapshot for StaticGraph {
    fn list_nodes(&self, filter: &str) -> Vec<String> {
        filtered(self.nodes.iter(), filter)
    }

    fn list_topics(&self, filter: &str) -> Vec<String> {
        filtered(self.topics.keys(), filter)
    }

    fn publishers_of(&self, topic: &str) -> Vec<String> {
        collect(self.topics.get(topic).map(|t| &t.publishers))
    }

    fn subscribers_of(&self, topic: &str) -> Vec<String> {
        collect(self.topics.get(topic).map(|t| &t.subscribers))
    }

    fn publications_of(&self, node: &str) -> Vec<String> {
        collect(self.publications.get(node))
    }

    fn subscriptions_of(&self, node: &str) -> Vec<String> {
        collect(self.subscriptions.get(node))
    }

    fn type_of(&self, topic: &str) -> String {
        self.topics
            .get(topic)
            .and_then(|t| t.message_type.clone())
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string())
    }
}

/// Builder for [`StaticGraph`].
///
/// Edges register their endpoints implicitly, so a topic that is only ever
/// subscribed to still shows up in `list_topics` (with an unknown type).
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    graph: StaticGraph,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node.
    #[must_use]
    pub fn node(mut self, name: impl Into<String>) -> Self {
        self.add_node(name);
        self
    }

    /// Register a topic with its message type.
    #[must_use]
    pub fn topic(mut self, name: impl Into<String>, message_type: impl Into<String>) -> Self {
        self.add_topic(name, Some(message_type.into()));
        self
    }

    /// Record that `node` publishes `topic`.
    #[must_use]
    pub fn publishes(mut self, node: impl Into<String>, topic: impl Into<String>) -> Self {
        self.add_publisher(node, topic);
        self
    }

    /// Record that `node` subscribes to `topic`.
    #[must_use]
    pub fn subscribes(mut self, node: impl Into<String>, topic: impl Into<String>) -> Self {
        self.add_subscriber(node, topic);
        self
    }

    pub fn add_node(&mut self, name: impl Into<String>) {
        self.graph.nodes.insert(name.into());
    }

    /// Register a topic. A known type is never overwritten by `None`.
    pub fn add_topic(&mut self, name: impl Into<String>, message_type: Option<String>) {
        let entry = self.graph.topics.entry(name.into()).or_default();
        if message_type.is_some() {
            entry.message_type = message_type;
        }
    }

    pub fn add_publisher(&mut self, node: impl Into<String>, topic: impl Into<String>) {
        let (node, topic) = (node.into(), topic.into());
        self.add_node(node.clone());
        self.add_topic(topic.clone(), None);
        if let Some(entry) = self.graph.topics.get_mut(&topic) {
            entry.publishers.insert(node.clone());
        }
        self.graph.publications.entry(node).or_default().insert(topic);
    }

    pub fn add_subscriber(&mut self, node: impl Into<String>, topic: impl Into<String>) {
        let (node, topic) = (node.into(), topic.into());
        self.add_node(node.clone());
        self.add_topic(topic.clone(), None);
        if let Some(entry) = self.graph.topics.get_mut(&topic) {
            entry.subscribers.insert(node.clone());
        }
        self.graph.subscriptions.entry(node).or_default().insert(topic);
    }

    #[must_use]
    pub fn build(self) -> StaticGraph {
        self.graph
    }
}
