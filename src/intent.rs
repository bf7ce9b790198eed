//! Send-ready descriptions of outbound messages.

use crate::node::{ApiCall, ChatbotNode, ChildRef, CtaButton, FileType, Location, NodeKind};
use serde::{Deserialize, Serialize};

/// One outbound message derived from one walked node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageIntent {
    pub node_id: String,
    pub message: String,
    pub link: Option<String>,
    pub file_type: FileType,
    pub open_chat: bool,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub children: Vec<ChildRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<CtaButton>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiCall>,
}

/// The single thing a sender should do for an intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Directive<'a> {
    Location(&'a Location),
    Cta(&'a CtaButton),
    Api(&'a ApiCall),
    Media { file_type: FileType, link: &'a str },
    Buttons(&'a [ChildRef]),
    Text(&'a str),
}

impl Directive<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Directive::Location(_) => "location",
            Directive::Cta(_) => "cta",
            Directive::Api(_) => "api",
            Directive::Media { .. } => "media",
            Directive::Buttons(_) => "buttons",
            Directive::Text(_) => "text",
        }
    }
}

impl MessageIntent {
    pub fn from_node(node: &ChatbotNode) -> Self {
        Self {
            node_id: node.node_id.clone(),
            message: node.message.clone(),
            link: node.link.clone(),
            file_type: node.file_type,
            open_chat: node.kind.opens_chat(),
            kind: node.kind,
            children: node.children().to_vec(),
            location: node.location.clone(),
            cta: node.cta.clone(),
            api: node.api.clone(),
        }
    }

    /// Picks the directive to send, first match wins:
    /// location, CTA, API call, media with a link, then text.
    ///
    /// A CTA suppresses any file configured on the same node. Existing bots
    /// rely on this, so it stays until the product decides otherwise.
    /// Button messages fall through to their buttons at the text step.
    pub fn directive(&self) -> Directive<'_> {
        if let Some(location) = &self.location {
            return Directive::Location(location);
        }
        if let Some(cta) = &self.cta {
            return Directive::Cta(cta);
        }
        if let Some(api) = &self.api {
            return Directive::Api(api);
        }
        if let Some(link) = self.link.as_deref()
            && self.file_type.is_media()
            && !link.is_empty()
        {
            return Directive::Media {
                file_type: self.file_type,
                link,
            };
        }
        if self.kind == NodeKind::ButtonMessage && !self.children.is_empty() {
            return Directive::Buttons(&self.children);
        }
        Directive::Text(&self.message)
    }
}
