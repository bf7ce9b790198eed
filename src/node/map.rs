use super::{ChatbotNode, NodeKind};
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize, Serializer};

/// The run-time representation of a bot: every compiled node keyed by its id.
///
/// Serializes as a plain `{ "<nodeId>": { ... } }` object, keys sorted so
/// recompiling an unchanged bot writes the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct NodeMap(AHashMap<String, ChatbotNode>);

impl Serialize for NodeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().sorted_by_key(|(id, _)| *id))
    }
}

impl NodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, node_id: &str) -> Option<&ChatbotNode> {
        self.0.get(node_id)
    }

    pub fn get_mut(&mut self, node_id: &str) -> Option<&mut ChatbotNode> {
        self.0.get_mut(node_id)
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.0.contains_key(node_id)
    }

    /// Inserts a node under its own id, returning whatever it replaced.
    pub fn insert(&mut self, node: ChatbotNode) -> Option<ChatbotNode> {
        self.0.insert(node.node_id.clone(), node)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &ChatbotNode> {
        self.0.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// The start marker of the bot. If the builder somehow saved several,
    /// the one with the smallest id wins so the choice is stable.
    pub fn start_node(&self) -> Option<&ChatbotNode> {
        self.0
            .values()
            .filter(|node| node.kind == NodeKind::Start)
            .min_by(|a, b| a.node_id.cmp(&b.node_id))
    }

    /// Every `(owner, referenced id)` pair whose target is not in the map.
    /// Covers both `next` pointers and child references.
    pub fn dangling_references(&self) -> Vec<(String, String)> {
        let mut dangling = Vec::new();
        for node in self.0.values() {
            let referenced = node
                .next
                .iter()
                .map(String::as_str)
                .chain(node.children().iter().map(|child| child.id()));
            for target in referenced {
                if !self.contains(target) {
                    dangling.push((node.node_id.clone(), target.to_string()));
                }
            }
        }
        dangling.sort();
        dangling
    }
}

impl FromIterator<ChatbotNode> for NodeMap {
    fn from_iter<I: IntoIterator<Item = ChatbotNode>>(iter: I) -> Self {
        let mut map = NodeMap::new();
        for node in iter {
            map.insert(node);
        }
        map
    }
}
