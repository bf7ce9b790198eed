use super::parsing::KindRegistry;
use crate::error::CompileWarning;
use crate::graph::{BotGraph, VisualNode, VisualNodeData};
use crate::node::{ChatbotNode, ChildRef, FileType, NodeKind, NodeMap};
use ahash::AHashMap;

/// First pass: turns every visual node into a provisional `ChatbotNode` with no successor.
pub(super) struct NodeBuilder<'a> {
    graph: &'a BotGraph,
    registry: &'a KindRegistry,
    by_id: AHashMap<&'a str, &'a VisualNode>,
    warnings: &'a mut Vec<CompileWarning>,
}

impl<'a> NodeBuilder<'a> {
    pub(super) fn new(
        graph: &'a BotGraph,
        registry: &'a KindRegistry,
        warnings: &'a mut Vec<CompileWarning>,
    ) -> Self {
        let by_id = graph
            .nodes
            .iter()
            .map(|node| (node.id.as_str(), node))
            .collect();
        Self {
            graph,
            registry,
            by_id,
            warnings,
        }
    }

    pub(super) fn build(mut self) -> NodeMap {
        let mut map = NodeMap::new();
        let graph = self.graph;
        for visual in &graph.nodes {
            // Unknown types still carry their message and successor, so they
            // compile as plain text rather than cutting the flow.
            let kind = self.registry.resolve(&visual.node_type).unwrap_or_else(|| {
                self.warn(CompileWarning::UnknownNodeType {
                    node_id: visual.id.clone(),
                    type_name: visual.node_type.clone(),
                });
                NodeKind::Text
            });
            let node = self.build_node(visual, kind);
            if map.insert(node).is_some() {
                tracing::debug!(node_id = %visual.id, "duplicate node id, later definition wins");
            }
        }
        map
    }

    fn build_node(&mut self, visual: &VisualNode, kind: NodeKind) -> ChatbotNode {
        let empty = VisualNodeData::default();
        let data = match &visual.data {
            Some(data) => data,
            None => {
                self.warn(CompileWarning::MissingData {
                    node_id: visual.id.clone(),
                });
                &empty
            }
        };

        let children = self.resolve_children(&visual.id, &data.children);

        let mut message = data.message.clone();
        if kind.numbers_children() {
            for (index, child) in children.iter().enumerate() {
                message.push_str(&format!("\n{} {}", index + 1, child.message()));
            }
        }

        let mut node = ChatbotNode::new(visual.id.clone(), kind)
            .with_message(message)
            .with_children(children);
        node.link = data.link.clone().filter(|link| !link.is_empty());
        node.file_type = data
            .file_type
            .as_deref()
            .map(FileType::parse)
            .unwrap_or_default();
        node.location = data.location.clone();
        node.cta = data.cta.clone();
        node.api = data.api.clone();
        node
    }

    /// Resolves child ids to `{id, message}` pairs using each child's own message.
    fn resolve_children(&mut self, parent_id: &str, child_ids: &[String]) -> Vec<ChildRef> {
        let mut children = Vec::with_capacity(child_ids.len());
        for child_id in child_ids {
            let child = self.by_id.get(child_id.as_str()).copied();
            let message = match child {
                Some(child) => child
                    .data
                    .as_ref()
                    .map(|data| data.message.clone())
                    .unwrap_or_default(),
                None => {
                    self.warn(CompileWarning::MissingChild {
                        parent_id: parent_id.to_string(),
                        child_id: child_id.clone(),
                    });
                    String::new()
                }
            };
            children.push(ChildRef::pending(child_id.clone(), message));
        }
        children
    }

    fn warn(&mut self, warning: CompileWarning) {
        super::record(self.warnings, warning);
    }
}
