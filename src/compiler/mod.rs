//! Compiles a builder graph into the flat node map used at message-handling time.
//!
//! Compilation runs in two passes over an immutable snapshot of the graph:
//!
//! 1. every visual node becomes a provisional [`ChatbotNode`](crate::node::ChatbotNode)
//!    with its children resolved to labels and no successor;
//! 2. every edge sets the `next` pointer of its source and, when the source
//!    lives inside a container, upgrades the container's child entry to carry
//!    that pointer too.
//!
//! Compilation never fails. Anything malformed is reported as a
//! [`CompileWarning`], logged, and degraded to the closest sensible value.

use crate::error::CompileWarning;
use crate::graph::{BotGraph, CompiledBot, GraphEdge, VisualNode};
use crate::node::{NodeKind, NodeMap};

mod builder;
mod linker;
pub mod parsing;

use builder::NodeBuilder;
use linker::EdgeLinker;
use parsing::KindRegistry;

/// Everything a compile run produced.
#[derive(Debug, Clone)]
pub struct CompilationArtifacts {
    pub node_map: NodeMap,
    pub warnings: Vec<CompileWarning>,
}

impl CompilationArtifacts {
    pub fn into_compiled_bot(self) -> CompiledBot {
        CompiledBot::new(self.node_map)
    }
}

pub struct Compiler {
    graph: BotGraph,
    registry: KindRegistry,
}

pub struct CompilerBuilder {
    graph: BotGraph,
    registry: KindRegistry,
}

impl CompilerBuilder {
    pub fn new(graph: BotGraph) -> Self {
        Self {
            graph,
            registry: KindRegistry::default(),
        }
    }

    /// Lets a graph use `user_type` wherever the builder would write `kind`'s own type string.
    pub fn with_type_alias(mut self, user_type: &str, kind: NodeKind) -> Self {
        self.registry.register(user_type, kind);
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            graph: self.graph,
            registry: self.registry,
        }
    }
}

impl Compiler {
    pub fn builder(graph: BotGraph) -> CompilerBuilder {
        CompilerBuilder::new(graph)
    }

    pub fn compile(self) -> CompilationArtifacts {
        let mut warnings = Vec::new();

        let mut node_map = NodeBuilder::new(&self.graph, &self.registry, &mut warnings).build();
        EdgeLinker::new(&self.graph, &mut node_map, &mut warnings).link();

        tracing::info!(
            nodes = node_map.len(),
            edges = self.graph.edges.len(),
            warnings = warnings.len(),
            "compiled chatbot graph"
        );

        CompilationArtifacts { node_map, warnings }
    }
}

/// Compiles a node/edge snapshot with the default type strings.
pub fn compile(nodes: &[VisualNode], edges: &[GraphEdge]) -> NodeMap {
    let graph = BotGraph {
        nodes: nodes.to_vec(),
        edges: edges.to_vec(),
    };
    Compiler::builder(graph).build().compile().node_map
}

/// Logs a warning and keeps it for the caller.
fn record(warnings: &mut Vec<CompileWarning>, warning: CompileWarning) {
    tracing::warn!(node_id = %warning.node_id(), "{}", warning);
    warnings.push(warning);
}
