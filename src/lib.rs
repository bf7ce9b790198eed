//! # botflow - Chatbot Flow Compiler and Traversal Engine
//!
//! **botflow** turns chatbot flows drawn in a visual builder into a flat node
//! map, then walks that map at message-handling time to decide what to send
//! and where the conversation waits next.
//!
//! ## Core Workflow
//!
//! 1.  **Load the graph**: deserialize the builder's `{ nodes, edges }` JSON into a
//!     [`BotGraph`](graph::BotGraph), or implement [`IntoGraph`](graph::IntoGraph)
//!     for another editor's format.
//! 2.  **Compile**: [`Compiler::builder`](compiler::Compiler::builder) resolves
//!     children and `next` pointers into a [`NodeMap`](node::NodeMap). This runs on
//!     every save; the map is persisted as JSON.
//! 3.  **Walk**: a [`FlowEngine`](engine::FlowEngine) walks from the start node (on a
//!     trigger) or from a clicked button, stopping at the first node that needs an
//!     answer, and projects the walk into ordered [`MessageIntent`](intent::MessageIntent)s.
//! 4.  **Send and park**: the caller sends the intents in order and stores the parked
//!     node id. [`Dispatcher`](session::Dispatcher) does both against your own
//!     transport and store.
//!
//! ## Quick Start
//!
//! ```rust
//! use botflow::prelude::*;
//!
//! let graph = BotGraph {
//!     nodes: vec![
//!         VisualNode::new("start", "START_NODE"),
//!         VisualNode::new("menu", "BUTTON_MESSAGE_NODE")
//!             .with_message("Shall we continue?")
//!             .with_children(["yes"]),
//!         VisualNode::new("yes", "BUTTON_NODE").with_message("Yes").with_parent("menu"),
//!         VisualNode::new("thanks", "TEXT_NODE").with_message("Thanks!"),
//!     ],
//!     edges: vec![GraphEdge::new("start", "menu"), GraphEdge::new("yes", "thanks")],
//! };
//!
//! let artifacts = Compiler::builder(graph).build().compile();
//! assert!(artifacts.warnings.is_empty());
//!
//! let engine = FlowEngine::new(artifacts.node_map);
//! let opening = engine.begin();
//! assert_eq!(opening.parked_node_id.as_deref(), Some("menu"));
//!
//! let answer = engine.resolve_interaction(None, "yes").unwrap();
//! assert_eq!(answer.intents[0].message, "Thanks!");
//! assert_eq!(answer.parked_node_id, None);
//! ```

pub mod compiler;
pub mod engine;
pub mod error;
pub mod graph;
pub mod intent;
pub mod node;
pub mod prelude;
pub mod session;
pub mod trace;
