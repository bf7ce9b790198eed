//! Run-time traversal of a compiled node map.

use crate::error::ResolveError;
use crate::intent::MessageIntent;
use crate::node::{ChatbotNode, NodeMap};
use crate::session::ConversationState;

pub mod projector;
pub mod resolver;
pub mod walker;

pub use projector::project;
pub use resolver::{Resolution, resolve_interaction, resolve_reply};
pub use walker::{WalkConfig, walk};

/// A compiled bot ready to answer conversations.
///
/// The map is never mutated after construction, so one engine can serve any
/// number of concurrent conversations.
#[derive(Debug, Clone)]
pub struct FlowEngine {
    map: NodeMap,
    config: WalkConfig,
}

impl FlowEngine {
    pub fn new(map: NodeMap) -> Self {
        Self::with_config(map, WalkConfig::default())
    }

    pub fn with_config(map: NodeMap, config: WalkConfig) -> Self {
        Self { map, config }
    }

    pub fn map(&self) -> &NodeMap {
        &self.map
    }

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    pub fn walk(&self, start_id: &str) -> Vec<&ChatbotNode> {
        walk(&self.map, start_id, &self.config)
    }

    pub fn project(&self, start_id: &str) -> Vec<MessageIntent> {
        project(&self.walk(start_id))
    }

    /// Walks from the start marker, as when a trigger fires.
    pub fn begin(&self) -> Resolution {
        match self.map.start_node() {
            Some(start) => self.resume(&start.node_id),
            None => {
                tracing::warn!("node map has no start node");
                Resolution::default()
            }
        }
    }

    /// Walks from an arbitrary node, e.g. to re-deliver after a failed send.
    pub fn resume(&self, start_id: &str) -> Resolution {
        Resolution::from_walk(&self.walk(start_id))
    }

    pub fn resolve_interaction(
        &self,
        state: Option<&ConversationState>,
        button_id: &str,
    ) -> Result<Resolution, ResolveError> {
        resolve_interaction(&self.map, state, button_id, &self.config)
    }

    pub fn resolve_reply(
        &self,
        state: &ConversationState,
        reply: &str,
    ) -> Result<Resolution, ResolveError> {
        resolve_reply(&self.map, state, reply, &self.config)
    }
}
