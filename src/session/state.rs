use crate::error::DispatchError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifies one conversation: a contact within a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationKey {
    pub phone: String,
    pub workspace_id: String,
}

impl ConversationKey {
    pub fn new(phone: impl Into<String>, workspace_id: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            workspace_id: workspace_id.into(),
        }
    }
}

/// Where a conversation is parked inside a bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationState {
    pub chatbot_id: String,
    pub current_node: Option<String>,
    pub timeout_at: Option<DateTime<Utc>>,
    /// Provider id of the inbound message that produced this state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_event_id: Option<String>,
}

impl ConversationState {
    pub fn parked(
        chatbot_id: impl Into<String>,
        node_id: impl Into<String>,
        timeout_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            chatbot_id: chatbot_id.into(),
            current_node: Some(node_id.into()),
            timeout_at,
            last_event_id: None,
        }
    }

    pub fn with_last_event_id(mut self, event_id: Option<String>) -> Self {
        self.last_event_id = event_id;
        self
    }

    /// Whether `event_id` is the event this state was written for.
    pub fn handled(&self, event_id: &str) -> bool {
        self.last_event_id.as_deref() == Some(event_id)
    }

    /// A state without a deadline never expires.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.timeout_at.is_some_and(|deadline| now >= deadline)
    }
}

/// Persistence for conversation state, implemented by the surrounding system.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    async fn load(&self, key: &ConversationKey) -> Result<Option<ConversationState>, DispatchError>;

    async fn save(&self, key: &ConversationKey, state: ConversationState) -> Result<(), DispatchError>;

    async fn clear(&self, key: &ConversationKey) -> Result<(), DispatchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn expiry_is_inclusive_of_the_deadline() {
        let deadline = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let state = ConversationState::parked("bot", "menu", Some(deadline));
        assert!(!state.is_expired(deadline - chrono::TimeDelta::seconds(1)));
        assert!(state.is_expired(deadline));

        let forever = ConversationState::parked("bot", "menu", None);
        assert!(!forever.is_expired(deadline));
    }

    #[test]
    fn remembers_the_event_it_was_written_for() {
        let state = ConversationState::parked("bot", "menu", None)
            .with_last_event_id(Some("wamid.in.1".to_string()));
        assert!(state.handled("wamid.in.1"));
        assert!(!state.handled("wamid.in.2"));

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"lastEventId\":\"wamid.in.1\""));

        let older: ConversationState =
            serde_json::from_str(r#"{"chatbotId":"bot","currentNode":"menu","timeoutAt":null}"#).unwrap();
        assert_eq!(older.last_event_id, None);
    }
}
