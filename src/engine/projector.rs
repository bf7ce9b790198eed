use crate::intent::MessageIntent;
use crate::node::ChatbotNode;

/// Maps walked nodes to message intents, in order, skipping structural kinds.
pub fn project(nodes: &[&ChatbotNode]) -> Vec<MessageIntent> {
    nodes
        .iter()
        .filter(|node| !node.kind.is_structural())
        .map(|node| MessageIntent::from_node(node))
        .collect()
}
