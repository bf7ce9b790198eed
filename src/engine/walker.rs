use crate::node::{ChatbotNode, NodeMap};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Limits applied to every walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalkConfig {
    /// Upper bound on the nodes a single walk may collect.
    pub max_steps: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self { max_steps: 256 }
    }
}

/// Follows `next` pointers from `start_id`, stopping after the first node that
/// needs a response, at a terminal node, or at a pointer to a missing node.
///
/// The result borrows from `map` and depends on nothing else, so repeated
/// calls return the same list.
pub fn walk<'a>(map: &'a NodeMap, start_id: &str, config: &WalkConfig) -> Vec<&'a ChatbotNode> {
    let mut walked = Vec::new();
    let mut seen = AHashSet::new();

    let Some(mut current) = map.get(start_id) else {
        tracing::warn!(node_id = %start_id, "walk start is not in the node map");
        return walked;
    };

    loop {
        if !seen.insert(current.node_id.as_str()) {
            tracing::warn!(node_id = %current.node_id, "cycle in next pointers, stopping walk");
            break;
        }
        if walked.len() == config.max_steps {
            tracing::warn!(
                node_id = %current.node_id,
                max_steps = config.max_steps,
                "walk exceeded its step limit, truncating"
            );
            break;
        }
        walked.push(current);

        if current.need_response() {
            break;
        }
        let Some(next_id) = current.next.as_deref() else {
            break;
        };
        match map.get(next_id) {
            Some(next) => current = next,
            None => {
                tracing::warn!(
                    node_id = %current.node_id,
                    next = %next_id,
                    "next points to a missing node, ending flow"
                );
                break;
            }
        }
    }

    walked
}
