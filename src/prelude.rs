//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to compile a graph and run a bot.
//!
//! ```rust,no_run
//! use botflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let graph: BotGraph = serde_json::from_str(&std::fs::read_to_string("bot.json")?)?;
//! let compiled = Compiler::builder(graph).build().compile().into_compiled_bot();
//! compiled.save("bot.map.json")?;
//!
//! let engine = FlowEngine::new(CompiledBot::from_file("bot.map.json")?.node_map);
//! for intent in engine.begin().intents {
//!     println!("{:?}", intent.directive());
//! }
//! # Ok(())
//! # }
//! ```

// Compilation
pub use crate::compiler::{CompilationArtifacts, Compiler};
pub use crate::graph::{BotGraph, CompiledBot, GraphEdge, IntoGraph, VisualNode, VisualNodeData};

// Node model
pub use crate::node::{
    ApiCall, ChatbotNode, ChildRef, CtaButton, FileType, LinkedChild, Location, NodeKind, NodeMap,
};

// Traversal
pub use crate::engine::{FlowEngine, Resolution, WalkConfig};
pub use crate::intent::{Directive, MessageIntent};

// Conversations
pub use crate::session::{
    Chatbot, ConversationKey, ConversationState, ConversationStore, Dispatcher, InboundEvent,
    MessageSender, Outcome, SentMessage, SessionConfig, Trigger,
};

// Errors
pub use crate::error::{CompileWarning, DispatchError, GraphError, ResolveError};

// Formatting
pub use crate::trace::WalkFormatter;

// Result type alias for convenience. The error type defaults to a boxed error
// but can still be named, so `Result<T, DispatchError>` keeps working under a glob import.
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
