use crate::node::NodeKind;
use ahash::AHashMap;

/// Maps the type strings found in a graph onto [`NodeKind`]s.
///
/// Every builder type string is registered by default; aliases let editors
/// with their own vocabulary reuse the same compiler.
#[derive(Debug, Clone)]
pub struct KindRegistry {
    kinds: AHashMap<String, NodeKind>,
}

impl Default for KindRegistry {
    fn default() -> Self {
        let kinds = NodeKind::ALL
            .iter()
            .map(|kind| (kind.as_str().to_string(), *kind))
            .collect();
        Self { kinds }
    }
}

impl KindRegistry {
    pub fn register(&mut self, type_name: impl Into<String>, kind: NodeKind) {
        self.kinds.insert(type_name.into(), kind);
    }

    pub fn resolve(&self, type_name: &str) -> Option<NodeKind> {
        self.kinds.get(type_name).copied()
    }
}
