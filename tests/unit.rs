//! Unit tests for core botflow functionality.
mod common;
use botflow::prelude::*;
use common::*;

#[test]
fn test_kind_display_and_structure() {
    assert_eq!(format!("{}", NodeKind::ButtonMessage), "BUTTON_MESSAGE_NODE");
    assert!(NodeKind::Start.is_structural());
    assert!(NodeKind::Button.is_structural());
    assert!(NodeKind::OptionItem.is_structural());
    assert!(!NodeKind::ButtonMessage.is_structural());
    assert!(!NodeKind::OptionMessage.is_structural());
}

#[test]
fn test_walk_formatter() {
    let map = button_flow_map();
    let engine = FlowEngine::new(map);
    assert_eq!(
        WalkFormatter::format_walk(&engine.walk("start")),
        "start -> btn_msg [awaiting response]"
    );
    assert_eq!(WalkFormatter::format_walk(&engine.walk("after")), "after [end]");
    assert_eq!(WalkFormatter::format_walk(&[]), "(empty walk)");
}

#[test]
fn test_intent_formatter_truncates_long_text() {
    let node = ChatbotNode::new("long", NodeKind::Text).with_message("word ".repeat(20));
    let intents = vec![MessageIntent::from_node(&node)];
    let formatted = WalkFormatter::format_intents(&intents);
    assert!(formatted.starts_with("1. long (text) \""));
    assert!(formatted.ends_with("...\""));
}

#[test]
fn test_error_display() {
    let err = ResolveError::ButtonNotFound {
        button_id: "b9".to_string(),
    };
    assert!(err.to_string().contains("b9"));

    let warning = CompileWarning::MissingChild {
        parent_id: "menu".to_string(),
        child_id: "ghost".to_string(),
    };
    assert!(warning.to_string().contains("menu"));
    assert!(warning.to_string().contains("ghost"));
    assert_eq!(warning.node_id(), "menu");

    let send_err = DispatchError::Send {
        node_id: "after".to_string(),
        message: "timeout".to_string(),
    };
    assert!(send_err.to_string().contains("after"));
    assert!(send_err.to_string().contains("timeout"));
}

#[test]
fn test_dangling_references_listed() {
    let mut map = button_flow_map();
    assert!(map.dangling_references().is_empty());
    map.get_mut("after").unwrap().next = Some("ghost".to_string());
    assert_eq!(
        map.dangling_references(),
        vec![("after".to_string(), "ghost".to_string())]
    );
}

#[test]
fn test_prelude_result_accepts_explicit_error() {
    fn parse(json: &str) -> Result<CompiledBot, GraphError> {
        CompiledBot::from_json(json)
    }
    fn boxed(json: &str) -> Result<usize> {
        Ok(parse(json)?.node_map.len())
    }

    assert_eq!(boxed("{}").unwrap(), 0);
    assert!(matches!(parse("not json"), Err(GraphError::JsonParse(_))));
}
