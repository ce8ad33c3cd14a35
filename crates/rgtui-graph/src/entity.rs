#![forbid(unsafe_code)]

//! Typed references to graph entities.
//!
//! An [`EntityRef`] names exactly one node or one topic. The kind is fixed
//! when the reference is created from snapshot data; it is never re-derived
//! from the display label.
//!
//! # Ordering
//!
//! Equality and ordering look at the name only (lexicographic, case
//! sensitive). A topic's message type is payload, not identity.

use std::cmp::Ordering;
use std::fmt;

/// The two kinds of entity in the bipartite graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A process-like participant that publishes and subscribes.
    Node,
    /// A named channel carrying one message type.
    Topic,
}

impl EntityKind {
    /// The other side of the bipartite graph.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Node => Self::Topic,
            Self::Topic => Self::Node,
        }
    }

    /// Single-letter marker used in list labels.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Node => 'N',
            Self::Topic => 'T',
        }
    }
}

/// A reference to one node or one topic.
#[derive(Debug, Clone)]
pub enum EntityRef {
    /// A node, identified by its name.
    Node {
        /// Globally unique node name.
        name: String,
    },
    /// A topic, identified by its name and carrying its message type.
    Topic {
        /// Globally unique topic name.
        name: String,
        /// Message type, or the snapshot's unknown-type sentinel.
        message_type: String,
    },
}

impl EntityRef {
    /// Create a node reference.
    #[must_use]
    pub fn node(name: impl Into<String>) -> Self {
        Self::Node { name: name.into() }
    }

    /// Create a topic reference.
    #[must_use]
    pub fn topic(name: impl Into<String>, message_type: impl Into<String>) -> Self {
        Self::Topic {
            name: name.into(),
            message_type: message_type.into(),
        }
    }

    /// The entity's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Node { name } | Self::Topic { name, .. } => name,
        }
    }

    /// Which side of the graph this entity belongs to.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Node { .. } => EntityKind::Node,
            Self::Topic { .. } => EntityKind::Topic,
        }
    }

    /// Message type for topics, `None` for nodes.
    #[must_use]
    pub fn message_type(&self) -> Option<&str> {
        match self {
            Self::Node { .. } => None,
            Self::Topic { message_type, .. } => Some(message_type),
        }
    }

    #[must_use]
    pub const fn is_node(&self) -> bool {
        matches!(self, Self::Node { .. })
    }

    #[must_use]
    pub const fn is_topic(&self) -> bool {
        matches!(self, Self::Topic { .. })
    }

    /// List label: kind marker, a space, then the name (`"T /chatter"`).
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.kind().marker(), self.name())
    }

    /// Footer text shown while this entity is selected in a side column.
    #[must_use]
    pub fn info(&self) -> String {
        match self {
            Self::Node { .. } => String::new(),
            Self::Topic { message_type, .. } => format!("Type: {message_type}"),
        }
    }
}

impl PartialEq for EntityRef {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for EntityRef {}

impl PartialOrd for EntityRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EntityRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_opposite_round_trips() {
        assert_eq!(EntityKind::Node.opposite(), EntityKind::Topic);
        assert_eq!(EntityKind::Topic.opposite().opposite(), EntityKind::Topic);
    }

    #[test]
    fn equality_ignores_message_type() {
        let a = EntityRef::topic("/chatter", "std_msgs/String");
        let b = EntityRef::topic("/chatter", "unknown type");
        assert_eq!(a, b);
    }

    #[test]
    fn ordering_is_case_sensitive_by_name() {
        let upper = EntityRef::node("/Zeta");
        let lower = EntityRef::node("/alpha");
        // 'Z' (0x5A) sorts before 'a' (0x61).
        assert!(upper < lower);
    }

    #[test]
    fn labels_carry_kind_marker() {
        assert_eq!(EntityRef::node("/talker").label(), "N /talker");
        assert_eq!(EntityRef::topic("/chatter", "x").label(), "T /chatter");
    }

    #[test]
    fn info_string_per_kind() {
        assert_eq!(EntityRef::node("/talker").info(), "");
        assert_eq!(
            EntityRef::topic("/chatter", "std_msgs/String").info(),
            "Type: std_msgs/String"
        );
    }

    #[test]
    fn accessors() {
        let topic = EntityRef::topic("/rosout", "rosgraph_msgs/Log");
        assert_eq!(topic.name(), "/rosout");
        assert_eq!(topic.kind(), EntityKind::Topic);
        assert_eq!(topic.message_type(), Some("rosgraph_msgs/Log"));
        assert!(topic.is_topic());
        assert!(!topic.is_node());
        assert_eq!(EntityRef::node("/n").message_type(), None);
    }
}
