use crate::error::CompileWarning;
use crate::graph::BotGraph;
use crate::node::{ChildRef, LinkedChild, NodeMap};
use ahash::AHashMap;

/// Second pass: applies every edge as a `next` pointer and mirrors the link
/// into the parent container's child list.
pub(super) struct EdgeLinker<'a> {
    graph: &'a BotGraph,
    map: &'a mut NodeMap,
    parents: AHashMap<&'a str, &'a str>,
    warnings: &'a mut Vec<CompileWarning>,
}

impl<'a> EdgeLinker<'a> {
    pub(super) fn new(
        graph: &'a BotGraph,
        map: &'a mut NodeMap,
        warnings: &'a mut Vec<CompileWarning>,
    ) -> Self {
        let parents = graph
            .nodes
            .iter()
            .filter_map(|node| {
                node.parent_node
                    .as_deref()
                    .map(|parent| (node.id.as_str(), parent))
            })
            .collect();
        Self {
            graph,
            map,
            parents,
            warnings,
        }
    }

    pub(super) fn link(mut self) {
        let graph = self.graph;
        for edge in &graph.edges {
            let (source_id, target_id) = (edge.source.as_str(), edge.target.as_str());

            if !self.map.contains(target_id) {
                self.warn(CompileWarning::EdgeTargetMissing {
                    source_id: source_id.to_string(),
                    target_id: target_id.to_string(),
                });
            }

            let Some(source) = self.map.get_mut(source_id) else {
                self.warn(CompileWarning::EdgeSourceMissing {
                    source_id: source_id.to_string(),
                    target_id: target_id.to_string(),
                });
                continue;
            };

            let previous = source.next.replace(target_id.to_string());
            if let Some(previous) = previous.filter(|previous| previous != target_id) {
                self.warn(CompileWarning::DuplicateOutgoingEdge {
                    source_id: source_id.to_string(),
                    previous_target: previous,
                    target_id: target_id.to_string(),
                });
            }

            if let Some(parent_id) = self.parents.get(source_id).copied() {
                self.propagate_to_parent(source_id, parent_id);
            }
        }
    }

    /// Replaces the parent's `{id, message}` entry for `child_id` with a linked record.
    fn propagate_to_parent(&mut self, child_id: &str, parent_id: &str) {
        let Some(child) = self.map.get(child_id) else {
            return;
        };
        let linked = ChildRef::Linked(LinkedChild {
            kind: child.kind,
            next: child.next.clone(),
            node_id: child.node_id.clone(),
            children: Vec::new(),
            message: child.message.clone(),
            need_response: false,
        });

        let Some(parent) = self.map.get_mut(parent_id) else {
            self.warn(CompileWarning::ParentMissing {
                node_id: child_id.to_string(),
                parent_id: parent_id.to_string(),
            });
            return;
        };

        match parent
            .children_mut()
            .iter_mut()
            .find(|entry| entry.id() == child_id)
        {
            Some(entry) => *entry = linked,
            None => self.warn(CompileWarning::ChildNotInParent {
                node_id: child_id.to_string(),
                parent_id: parent_id.to_string(),
            }),
        }
    }

    fn warn(&mut self, warning: CompileWarning) {
        super::record(self.warnings, warning);
    }
}
