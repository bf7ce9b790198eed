use super::{FileType, NodeKind};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Coordinates and an optional label for a location message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A call-to-action URL button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaButton {
    pub button_text: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// An outbound HTTP call configured on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiCall {
    pub endpoint: String,
    #[serde(default = "ApiCall::default_method")]
    pub method: String,
    #[serde(default)]
    pub headers: AHashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl ApiCall {
    fn default_method() -> String {
        "GET".to_string()
    }
}

/// A child reference held by a container node.
///
/// Freshly compiled containers hold `Pending` entries (id and label only).
/// Once the edge pass gives a child its own successor, the entry is upgraded
/// to `Linked`, which carries the onward `next` pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChildRef {
    Linked(LinkedChild),
    Pending { id: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedChild {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub next: Option<String>,
    pub node_id: String,
    #[serde(default)]
    pub children: Vec<ChildRef>,
    pub message: String,
    pub need_response: bool,
}

impl ChildRef {
    pub fn pending(id: impl Into<String>, message: impl Into<String>) -> Self {
        ChildRef::Pending {
            id: id.into(),
            message: message.into(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ChildRef::Linked(linked) => &linked.node_id,
            ChildRef::Pending { id, .. } => id,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ChildRef::Linked(linked) => &linked.message,
            ChildRef::Pending { message, .. } => message,
        }
    }

    pub fn next(&self) -> Option<&str> {
        match self {
            ChildRef::Linked(linked) => linked.next.as_deref(),
            ChildRef::Pending { .. } => None,
        }
    }
}

/// One compiled node of a chatbot, keyed by `node_id` in a [`NodeMap`](super::NodeMap).
///
/// `children` and `need_response` are kept private so the gate flag can only
/// ever be derived from the child list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredNode")]
pub struct ChatbotNode {
    pub node_id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub message: String,
    pub link: Option<String>,
    pub file_type: FileType,
    children: Vec<ChildRef>,
    pub next: Option<String>,
    need_response: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<CtaButton>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiCall>,
}

impl ChatbotNode {
    pub fn new(node_id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            node_id: node_id.into(),
            kind,
            message: String::new(),
            link: None,
            file_type: FileType::None,
            children: Vec::new(),
            next: None,
            need_response: false,
            location: None,
            cta: None,
            api: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_next(mut self, next: impl Into<String>) -> Self {
        self.next = Some(next.into());
        self
    }

    pub fn with_file(mut self, file_type: FileType, link: impl Into<String>) -> Self {
        self.file_type = file_type;
        self.link = Some(link.into());
        self
    }

    pub fn with_children(mut self, children: Vec<ChildRef>) -> Self {
        self.set_children(children);
        self
    }

    pub fn with_cta(mut self, cta: CtaButton) -> Self {
        self.cta = Some(cta);
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_api(mut self, api: ApiCall) -> Self {
        self.api = Some(api);
        self
    }

    pub fn children(&self) -> &[ChildRef] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [ChildRef] {
        &mut self.children
    }

    pub fn set_children(&mut self, children: Vec<ChildRef>) {
        self.need_response = !children.is_empty();
        self.children = children;
    }

    /// True when the walk has to stop here and wait for the user.
    pub fn need_response(&self) -> bool {
        self.need_response
    }
}

/// Wire shape of a node as persisted. Converting it recomputes the gate flag.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredNode {
    node_id: String,
    #[serde(rename = "type")]
    kind: NodeKind,
    #[serde(default)]
    message: String,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    file_type: FileType,
    #[serde(default)]
    children: Vec<ChildRef>,
    #[serde(default)]
    next: Option<String>,
    #[serde(default)]
    need_response: bool,
    #[serde(default)]
    location: Option<Location>,
    #[serde(default)]
    cta: Option<CtaButton>,
    #[serde(default)]
    api: Option<ApiCall>,
}

impl From<StoredNode> for ChatbotNode {
    fn from(stored: StoredNode) -> Self {
        let derived = !stored.children.is_empty();
        if derived != stored.need_response {
            tracing::warn!(
                node_id = %stored.node_id,
                stored = stored.need_response,
                derived,
                "stored needResponse disagrees with children, using derived value"
            );
        }
        Self {
            node_id: stored.node_id,
            kind: stored.kind,
            message: stored.message,
            link: stored.link,
            file_type: stored.file_type,
            children: stored.children,
            next: stored.next,
            need_response: derived,
            location: stored.location,
            cta: stored.cta,
            api: stored.api,
        }
    }
}
