//! Tests for walking node maps and projecting walks into intents.
mod common;
use botflow::engine::{project, walk};
use botflow::prelude::*;
use common::*;

#[test]
fn test_walk_stops_at_response_gate() {
    let map = button_flow_map();
    let walked = walk(&map, "start", &WalkConfig::default());
    assert_eq!(ids(&walked), vec!["start", "btn_msg"]);
    assert!(walked.last().unwrap().need_response());
}

#[test]
fn test_walk_follows_linear_chain_to_terminal() {
    let map = linear_map();
    let walked = walk(&map, "start", &WalkConfig::default());
    assert_eq!(ids(&walked), vec!["start", "a", "b", "c"]);
}

#[test]
fn test_walk_from_missing_start_is_empty() {
    let map = linear_map();
    assert!(walk(&map, "nope", &WalkConfig::default()).is_empty());
}

#[test]
fn test_walk_stops_before_dangling_next() {
    let map: NodeMap = [
        ChatbotNode::new("start", NodeKind::Start).with_next("a"),
        ChatbotNode::new("a", NodeKind::Text).with_next("ghost"),
    ]
    .into_iter()
    .collect();
    let walked = walk(&map, "start", &WalkConfig::default());
    assert_eq!(ids(&walked), vec!["start", "a"]);
}

#[test]
fn test_walk_is_bounded_on_cycles_and_long_chains() {
    let cyclic: NodeMap = [
        ChatbotNode::new("a", NodeKind::Text).with_next("b"),
        ChatbotNode::new("b", NodeKind::Text).with_next("a"),
    ]
    .into_iter()
    .collect();
    let walked = walk(&cyclic, "a", &WalkConfig::default());
    assert_eq!(ids(&walked), vec!["a", "b"]);

    let long: NodeMap = (0..10)
        .map(|i| {
            let node = ChatbotNode::new(format!("n{}", i), NodeKind::Text);
            if i < 9 {
                node.with_next(format!("n{}", i + 1))
            } else {
                node
            }
        })
        .collect();
    let walked = walk(&long, "n0", &WalkConfig { max_steps: 4 });
    assert_eq!(ids(&walked), vec!["n0", "n1", "n2", "n3"]);
}

#[test]
fn test_walk_is_idempotent() {
    let map = button_flow_map();
    let config = WalkConfig::default();
    assert_eq!(walk(&map, "start", &config), walk(&map, "start", &config));
}

#[test]
fn test_walk_has_at_most_one_gate_and_it_is_last() {
    let map = Compiler::builder(support_graph()).build().compile().node_map;
    let config = WalkConfig::default();
    for start in map.ids() {
        let walked = walk(&map, start, &config);
        let gates: Vec<_> = walked
            .iter()
            .enumerate()
            .filter(|(_, node)| node.need_response())
            .map(|(index, _)| index)
            .collect();
        assert!(gates.len() <= 1, "walk from {} crossed a gate", start);
        if let Some(index) = gates.first() {
            assert_eq!(*index, walked.len() - 1);
        }
    }
}

#[test]
fn test_projection_drops_only_structural_kinds() {
    let nodes: Vec<ChatbotNode> = NodeKind::ALL
        .iter()
        .map(|kind| ChatbotNode::new(kind.as_str(), *kind))
        .collect();
    let refs: Vec<&ChatbotNode> = nodes.iter().collect();
    let intents = project(&refs);

    let projected: Vec<_> = intents.iter().map(|intent| intent.kind).collect();
    for kind in NodeKind::ALL {
        assert_eq!(
            projected.contains(&kind),
            !kind.is_structural(),
            "{} projected incorrectly",
            kind
        );
    }
    assert_eq!(intents.len(), NodeKind::ALL.len() - 3);
}

#[test]
fn test_projection_keeps_empty_messages_and_order() {
    let map = linear_map();
    let mut empty = map.get("b").unwrap().clone();
    empty.message.clear();
    let nodes = [map.get("a").unwrap(), &empty, map.get("c").unwrap()];
    let intents = project(&nodes);
    let messages: Vec<_> = intents.iter().map(|i| i.message.as_str()).collect();
    assert_eq!(messages, vec!["one", "", "three"]);
    assert!(intents.iter().all(|i| i.file_type == FileType::None));
}

#[test]
fn test_engine_begin_parks_at_gate() {
    let engine = FlowEngine::new(button_flow_map());
    let resolution = engine.begin();
    assert_eq!(resolution.walked, vec!["start", "btn_msg"]);
    assert_eq!(resolution.parked_node_id.as_deref(), Some("btn_msg"));
    assert_eq!(resolution.intents.len(), 1);
    assert_eq!(resolution.intents[0].node_id, "btn_msg");
    assert_eq!(resolution.intents[0].children[0].message(), "Yes");
}

#[test]
fn test_engine_begin_without_start_node() {
    let mut map = linear_map();
    *map.get_mut("start").unwrap() = ChatbotNode::new("start", NodeKind::Text).with_next("a");
    let engine = FlowEngine::new(map);
    assert!(engine.begin().is_empty());
}

#[test]
fn test_agent_node_opens_chat() {
    let map = Compiler::builder(support_graph()).build().compile().node_map;
    let engine = FlowEngine::new(map);
    let intents = engine.project("sales_info");
    assert_eq!(intents.len(), 2);
    assert!(!intents[0].open_chat);
    assert!(intents[1].open_chat);
}
