use super::definition::BotGraph;
use crate::error::GraphConversionError;

/// A translation layer from some other editor's export format into a [`BotGraph`].
///
/// The compiler only understands `BotGraph`; implement this on your own
/// deserialized structs to feed it anything else.
///
/// ```rust,no_run
/// use botflow::prelude::*;
/// use botflow::error::GraphConversionError;
///
/// struct LegacyStep { id: String, text: String, then: Option<String> }
/// struct LegacyBot { steps: Vec<LegacyStep> }
///
/// impl IntoGraph for LegacyBot {
///     fn into_graph(self) -> Result<BotGraph, GraphConversionError> {
///         let mut graph = BotGraph::default();
///         for step in self.steps {
///             if step.id.is_empty() {
///                 return Err(GraphConversionError::Validation("step without id".into()));
///             }
///             if let Some(then) = &step.then {
///                 graph.edges.push(GraphEdge::new(step.id.clone(), then.clone()));
///             }
///             graph.nodes.push(VisualNode::new(step.id, "TEXT_NODE").with_message(step.text));
///         }
///         Ok(graph)
///     }
/// }
/// ```
pub trait IntoGraph {
    fn into_graph(self) -> Result<BotGraph, GraphConversionError>;
}

impl IntoGraph for BotGraph {
    fn into_graph(self) -> Result<BotGraph, GraphConversionError> {
        Ok(self)
    }
}
