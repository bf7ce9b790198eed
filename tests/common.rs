//! Common test utilities for building graphs and node maps.
use botflow::prelude::*;

/// The button flow used across the engine tests.
///
/// `start -> btn_msg [b1 "Yes"]`, and `b1 -> after`, where `after` carries
/// both a CTA and an image.
#[allow(dead_code)]
pub fn button_flow_map() -> NodeMap {
    [
        ChatbotNode::new("start", NodeKind::Start).with_next("btn_msg"),
        ChatbotNode::new("btn_msg", NodeKind::ButtonMessage)
            .with_message("Continue?")
            .with_children(vec![ChildRef::pending("b1", "Yes")]),
        ChatbotNode::new("b1", NodeKind::Button)
            .with_message("Yes")
            .with_next("after"),
        ChatbotNode::new("after", NodeKind::MessageReply)
            .with_message("Thanks!")
            .with_cta(visit_cta())
            .with_file(FileType::Image, "https://img"),
    ]
    .into_iter()
    .collect()
}

#[allow(dead_code)]
pub fn visit_cta() -> CtaButton {
    CtaButton {
        button_text: "Visit".to_string(),
        url: "https://x.com".to_string(),
        style: None,
    }
}

/// A linear chain `start -> a -> b -> c` of text nodes.
#[allow(dead_code)]
pub fn linear_map() -> NodeMap {
    [
        ChatbotNode::new("start", NodeKind::Start).with_next("a"),
        ChatbotNode::new("a", NodeKind::Text).with_message("one").with_next("b"),
        ChatbotNode::new("b", NodeKind::Text).with_message("two").with_next("c"),
        ChatbotNode::new("c", NodeKind::Text).with_message("three"),
    ]
    .into_iter()
    .collect()
}

/// The builder graph behind a small support bot:
///
/// start -> welcome -> menu (buttons: sales, support)
/// sales -> sales_info -> agent
/// support -> topics (options: billing, other)
/// billing -> billing_info
#[allow(dead_code)]
pub fn support_graph() -> BotGraph {
    BotGraph {
        nodes: vec![
            VisualNode::new("start", "START_NODE"),
            VisualNode::new("welcome", "TEXT_NODE").with_message("Welcome to Acme"),
            VisualNode::new("menu", "BUTTON_MESSAGE_NODE")
                .with_message("How can we help?")
                .with_children(["sales", "support"]),
            VisualNode::new("sales", "BUTTON_NODE")
                .with_message("Sales")
                .with_parent("menu"),
            VisualNode::new("support", "BUTTON_NODE")
                .with_message("Support")
                .with_parent("menu"),
            VisualNode::new("sales_info", "IMAGE_NODE")
                .with_message("Our catalogue")
                .with_file("Image", "https://cdn/catalogue.png"),
            VisualNode::new("agent", "CHAT_WITH_AGENT_NODE").with_message("Connecting you"),
            VisualNode::new("topics", "OPTION_MESSAGE_NODE")
                .with_message("Pick a topic")
                .with_children(["billing", "other"]),
            VisualNode::new("billing", "OPTION_NODE")
                .with_message("Billing")
                .with_parent("topics"),
            VisualNode::new("other", "OPTION_NODE")
                .with_message("Something else")
                .with_parent("topics"),
            VisualNode::new("billing_info", "TEXT_NODE").with_message("Invoices are sent monthly"),
        ],
        edges: vec![
            GraphEdge::new("start", "welcome"),
            GraphEdge::new("welcome", "menu"),
            GraphEdge::new("sales", "sales_info"),
            GraphEdge::new("sales_info", "agent"),
            GraphEdge::new("support", "topics"),
            GraphEdge::new("billing", "billing_info"),
        ],
    }
}

/// The same support bot as the builder would save it, as raw JSON.
#[allow(dead_code)]
pub const SUPPORT_GRAPH_JSON: &str = r#"{
  "nodes": [
    { "id": "start", "type": "START_NODE", "data": { "message": null } },
    { "id": "welcome", "type": "TEXT_NODE", "data": { "message": "Welcome to Acme" } },
    { "id": "menu", "type": "BUTTON_MESSAGE_NODE",
      "data": { "message": "How can we help?", "children": ["sales", "support"] } },
    { "id": "sales", "type": "BUTTON_NODE", "parentNode": "menu", "data": { "message": "Sales" } },
    { "id": "support", "type": "BUTTON_NODE", "parentNode": "menu", "data": { "message": "Support" } },
    { "id": "sales_info", "type": "IMAGE_NODE",
      "data": { "message": "Our catalogue", "fileType": "Image", "link": "https://cdn/catalogue.png" } },
    { "id": "agent", "type": "CHAT_WITH_AGENT_NODE", "data": { "message": "Connecting you" } },
    { "id": "topics", "type": "OPTION_MESSAGE_NODE",
      "data": { "message": "Pick a topic", "children": ["billing", "other"] } },
    { "id": "billing", "type": "OPTION_NODE", "parentNode": "topics", "data": { "message": "Billing" } },
    { "id": "other", "type": "OPTION_NODE", "parentNode": "topics", "data": { "message": "Something else" } },
    { "id": "billing_info", "type": "TEXT_NODE", "data": { "message": "Invoices are sent monthly" } }
  ],
  "edges": [
    { "id": "e1", "source": "start", "target": "welcome" },
    { "id": "e2", "source": "welcome", "target": "menu" },
    { "id": "e3", "source": "sales", "target": "sales_info", "sourceHandle": "b" },
    { "id": "e4", "source": "sales_info", "target": "agent" },
    { "id": "e5", "source": "support", "target": "topics" },
    { "id": "e6", "source": "billing", "target": "billing_info" }
  ]
}"#;

#[allow(dead_code)]
pub fn ids(nodes: &[&ChatbotNode]) -> Vec<String> {
    nodes.iter().map(|node| node.node_id.clone()).collect()
}
