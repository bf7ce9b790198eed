use super::projector::project;
use super::walker::{WalkConfig, walk};
use crate::error::ResolveError;
use crate::intent::{Directive, MessageIntent};
use crate::node::{ChatbotNode, NodeMap};
use crate::session::ConversationState;

/// What to send next and where the conversation parks afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    /// Intents in the order they must be sent.
    pub intents: Vec<MessageIntent>,
    /// The node now awaiting a response, or `None` when the flow reached its end.
    pub parked_node_id: Option<String>,
    /// Ids of every walked node, structural ones included.
    pub walked: Vec<String>,
}

impl Resolution {
    pub fn from_walk(walked: &[&ChatbotNode]) -> Self {
        let parked_node_id = walked
            .last()
            .filter(|node| node.need_response())
            .map(|node| node.node_id.clone());
        Self {
            intents: project(walked),
            parked_node_id,
            walked: walked.iter().map(|node| node.node_id.clone()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.walked.is_empty()
    }
}

/// Resolves a click on a button or option node to the walk that follows it.
///
/// `state` is only consulted to notice clicks on buttons of an older message;
/// those are still honoured.
pub fn resolve_interaction(
    map: &NodeMap,
    state: Option<&ConversationState>,
    button_id: &str,
    config: &WalkConfig,
) -> Result<Resolution, ResolveError> {
    let Some(button) = map.get(button_id) else {
        tracing::warn!(button_id = %button_id, "clicked button is not in the node map");
        return Err(ResolveError::ButtonNotFound {
            button_id: button_id.to_string(),
        });
    };

    if let Some(parked_id) = state.and_then(|state| state.current_node.as_deref()) {
        let belongs = map
            .get(parked_id)
            .is_some_and(|parked| parked.children().iter().any(|child| child.id() == button_id));
        if !belongs {
            tracing::debug!(
                button_id = %button_id,
                parked = %parked_id,
                "click does not belong to the parked node"
            );
        }
    }

    let Some(next_id) = button.next.as_deref() else {
        tracing::warn!(button_id = %button_id, "clicked button has no next node");
        return Ok(Resolution::default());
    };

    let walked = walk(map, next_id, config);
    let resolution = Resolution::from_walk(&walked);

    for intent in resolution.intents.iter().filter(|intent| is_empty_send(intent)) {
        tracing::debug!(node_id = %intent.node_id, "node has nothing to say, sending empty text");
    }

    Ok(resolution)
}

/// An intent with neither a message nor any directive still goes out, as empty text.
fn is_empty_send(intent: &MessageIntent) -> bool {
    matches!(intent.directive(), Directive::Text(message) if message.is_empty())
}

/// Resolves a typed reply against the node the conversation is parked at.
///
/// A reply selects a child either by its 1-based number, as rendered in
/// option menus, or by matching its label ignoring case.
pub fn resolve_reply(
    map: &NodeMap,
    state: &ConversationState,
    reply: &str,
    config: &WalkConfig,
) -> Result<Resolution, ResolveError> {
    let parked = state
        .current_node
        .as_deref()
        .and_then(|parked_id| map.get(parked_id))
        .ok_or(ResolveError::NoParkedNode)?;

    let reply = reply.trim();
    let children = parked.children();
    let by_number = reply
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=children.len()).contains(n))
        .map(|n| &children[n - 1]);
    let selected = by_number.or_else(|| {
        children
            .iter()
            .find(|child| child.message().trim().eq_ignore_ascii_case(reply))
    });

    match selected {
        Some(child) => resolve_interaction(map, Some(state), child.id(), config),
        None => Err(ResolveError::ReplyNotRecognised {
            node_id: parked.node_id.clone(),
            reply: reply.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{FileType, NodeKind};

    #[test]
    fn only_bare_text_counts_as_empty_send() {
        let bare = MessageIntent::from_node(&ChatbotNode::new("bare", NodeKind::MessageReply));
        assert!(is_empty_send(&bare));

        let said = ChatbotNode::new("said", NodeKind::Text).with_message("hi");
        assert!(!is_empty_send(&MessageIntent::from_node(&said)));

        let pic = ChatbotNode::new("pic", NodeKind::Image).with_file(FileType::Image, "https://img");
        assert!(!is_empty_send(&MessageIntent::from_node(&pic)));
    }

    #[test]
    fn empty_nodes_anywhere_in_the_walk_are_still_sent() {
        let map: NodeMap = [
            ChatbotNode::new("b1", NodeKind::Button).with_next("said"),
            ChatbotNode::new("said", NodeKind::Text).with_message("hi").with_next("bare"),
            ChatbotNode::new("bare", NodeKind::MessageReply),
        ]
        .into_iter()
        .collect();

        let resolution = resolve_interaction(&map, None, "b1", &WalkConfig::default()).unwrap();
        assert_eq!(resolution.walked, vec!["said", "bare"]);
        assert_eq!(resolution.intents[1].directive(), Directive::Text(""));
    }
}
