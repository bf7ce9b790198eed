use crate::node::{ApiCall, CtaButton, Location};
use serde::{Deserialize, Deserializer, Serialize};

/// A bot exactly as the visual builder saves it: nodes plus the edges drawn between them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotGraph {
    #[serde(default)]
    pub nodes: Vec<VisualNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

/// One node on the builder canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub data: Option<VisualNodeData>,
    /// Set when this node sits inside a container, e.g. a button inside a button message.
    #[serde(default)]
    pub parent_node: Option<String>,
}

/// The payload the builder attaches to a node. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualNodeData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    /// Child node ids, in display order. Resolved to labels at compile time.
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub cta: Option<CtaButton>,
    #[serde(default)]
    pub api: Option<ApiCall>,
}

/// A `next` relationship drawn by the user from `source` to `target`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub source_handle: Option<String>,
    #[serde(default)]
    pub target_handle: Option<String>,
}

impl GraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            source_handle: None,
            target_handle: None,
        }
    }
}

impl VisualNode {
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            data: Some(VisualNodeData::default()),
            parent_node: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.data.get_or_insert_with(Default::default).message = message.into();
        self
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data.get_or_insert_with(Default::default).children =
            children.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_node = Some(parent.into());
        self
    }

    pub fn with_file(mut self, file_type: impl Into<String>, link: impl Into<String>) -> Self {
        let data = self.data.get_or_insert_with(Default::default);
        data.file_type = Some(file_type.into());
        data.link = Some(link.into());
        self
    }

    pub fn with_cta(mut self, cta: CtaButton) -> Self {
        self.data.get_or_insert_with(Default::default).cta = Some(cta);
        self
    }

    /// Drops the data bag entirely, as older builder versions sometimes saved.
    pub fn without_data(mut self) -> Self {
        self.data = None;
        self
    }
}

/// The builder writes `null` for fields it never touched.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
