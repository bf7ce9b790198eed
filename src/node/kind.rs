use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every node type the flow builder can place on the canvas.
///
/// The serialized names are the type strings the builder writes into the
/// graph, so a compiled map stays readable by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "START_NODE")]
    Start,
    #[serde(rename = "MESSAGE_REPLY_NODE")]
    MessageReply,
    #[serde(rename = "OPTION_MESSAGE_NODE")]
    OptionMessage,
    #[serde(rename = "OPTION_NODE")]
    OptionItem,
    #[serde(rename = "CHAT_WITH_AGENT_NODE")]
    ChatWithAgent,
    #[serde(rename = "BUTTON_MESSAGE_NODE")]
    ButtonMessage,
    #[serde(rename = "BUTTON_NODE")]
    Button,
    #[serde(rename = "TEMPLATE_NODE")]
    Template,
    #[serde(rename = "CONDITION_NODE")]
    Condition,
    #[serde(rename = "API_NODE")]
    Api,
    #[serde(rename = "TEXT_NODE")]
    Text,
    #[serde(rename = "IMAGE_NODE")]
    Image,
    #[serde(rename = "VIDEO_NODE")]
    Video,
    #[serde(rename = "AUDIO_NODE")]
    Audio,
    #[serde(rename = "FILE_NODE")]
    File,
    #[serde(rename = "INTERACTIVE_NODE")]
    Interactive,
    #[serde(rename = "MAPS_NODE")]
    Maps,
    #[serde(rename = "CTA_BUTTON_NODE")]
    CtaButton,
}

impl NodeKind {
    pub const ALL: [NodeKind; 18] = [
        NodeKind::Start,
        NodeKind::MessageReply,
        NodeKind::OptionMessage,
        NodeKind::OptionItem,
        NodeKind::ChatWithAgent,
        NodeKind::ButtonMessage,
        NodeKind::Button,
        NodeKind::Template,
        NodeKind::Condition,
        NodeKind::Api,
        NodeKind::Text,
        NodeKind::Image,
        NodeKind::Video,
        NodeKind::Audio,
        NodeKind::File,
        NodeKind::Interactive,
        NodeKind::Maps,
        NodeKind::CtaButton,
    ];

    /// The type string used by the flow builder.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Start => "START_NODE",
            NodeKind::MessageReply => "MESSAGE_REPLY_NODE",
            NodeKind::OptionMessage => "OPTION_MESSAGE_NODE",
            NodeKind::OptionItem => "OPTION_NODE",
            NodeKind::ChatWithAgent => "CHAT_WITH_AGENT_NODE",
            NodeKind::ButtonMessage => "BUTTON_MESSAGE_NODE",
            NodeKind::Button => "BUTTON_NODE",
            NodeKind::Template => "TEMPLATE_NODE",
            NodeKind::Condition => "CONDITION_NODE",
            NodeKind::Api => "API_NODE",
            NodeKind::Text => "TEXT_NODE",
            NodeKind::Image => "IMAGE_NODE",
            NodeKind::Video => "VIDEO_NODE",
            NodeKind::Audio => "AUDIO_NODE",
            NodeKind::File => "FILE_NODE",
            NodeKind::Interactive => "INTERACTIVE_NODE",
            NodeKind::Maps => "MAPS_NODE",
            NodeKind::CtaButton => "CTA_BUTTON_NODE",
        }
    }

    /// Structural kinds only carry routing; they never produce a message of their own.
    pub fn is_structural(&self) -> bool {
        match self {
            NodeKind::Start | NodeKind::Button | NodeKind::OptionItem => true,
            NodeKind::MessageReply
            | NodeKind::OptionMessage
            | NodeKind::ChatWithAgent
            | NodeKind::ButtonMessage
            | NodeKind::Template
            | NodeKind::Condition
            | NodeKind::Api
            | NodeKind::Text
            | NodeKind::Image
            | NodeKind::Video
            | NodeKind::Audio
            | NodeKind::File
            | NodeKind::Interactive
            | NodeKind::Maps
            | NodeKind::CtaButton => false,
        }
    }

    /// Whether reaching this node hands the conversation over to a human agent.
    pub fn opens_chat(&self) -> bool {
        matches!(self, NodeKind::ChatWithAgent)
    }

    /// Whether the compiler bakes a numbered menu of the children into the message.
    pub fn numbers_children(&self) -> bool {
        matches!(self, NodeKind::OptionMessage)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// The media attached to a node. Always stored lower-cased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    #[default]
    None,
    Image,
    Video,
    Audio,
}

impl FileType {
    /// Parses the builder's free-form file type, ignoring case.
    /// Anything unrecognised is treated as no file at all.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "image" => FileType::Image,
            "video" => FileType::Video,
            "audio" => FileType::Audio,
            _ => FileType::None,
        }
    }

    pub fn is_media(&self) -> bool {
        !matches!(self, FileType::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_strings_round_trip_through_from_str() {
        for kind in NodeKind::ALL {
            assert_eq!(kind.as_str().parse::<NodeKind>(), Ok(kind));
        }
        assert!("SPACESHIP_NODE".parse::<NodeKind>().is_err());
    }

    #[test]
    fn serde_names_match_builder_strings() {
        for kind in NodeKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn file_type_parsing_is_case_insensitive() {
        assert_eq!(FileType::parse("IMAGE"), FileType::Image);
        assert_eq!(FileType::parse(" Video "), FileType::Video);
        assert_eq!(FileType::parse("document"), FileType::None);
        assert_eq!(FileType::parse(""), FileType::None);
    }
}
