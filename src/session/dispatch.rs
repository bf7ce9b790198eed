use super::config::SessionConfig;
use super::state::{ConversationKey, ConversationState, ConversationStore};
use super::trigger::Trigger;
use crate::engine::{FlowEngine, Resolution};
use crate::error::{DispatchError, ResolveError};
use crate::intent::MessageIntent;
use crate::node::NodeMap;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// The provider's acknowledgement of one sent message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub id: String,
    pub node_id: String,
}

/// The transport that actually delivers intents, implemented by the surrounding system.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Sends one intent, returning the provider's acknowledgement.
    async fn send(&self, phone: &str, intent: &MessageIntent) -> Result<SentMessage, DispatchError>;
}

/// A compiled bot together with the keywords that start it.
#[derive(Debug, Clone)]
pub struct Chatbot {
    pub id: String,
    pub triggers: Vec<Trigger>,
    pub engine: FlowEngine,
}

impl Chatbot {
    pub fn new(id: impl Into<String>, triggers: Vec<Trigger>, engine: FlowEngine) -> Self {
        Self {
            id: id.into(),
            triggers,
            engine,
        }
    }

    pub fn is_triggered_by(&self, text: &str) -> bool {
        self.triggers.iter().any(|trigger| trigger.matches(text))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Text(String),
    ButtonReply(String),
}

/// One message received from a contact.
///
/// `message_id` is the provider's id for the inbound message. When present,
/// a redelivery of an already handled event is recognised and skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub key: ConversationKey,
    pub inbound: Inbound,
    pub message_id: Option<String>,
}

impl InboundEvent {
    pub fn text(key: ConversationKey, text: impl Into<String>) -> Self {
        Self {
            key,
            inbound: Inbound::Text(text.into()),
            message_id: None,
        }
    }

    pub fn button(key: ConversationKey, button_id: impl Into<String>) -> Self {
        Self {
            key,
            inbound: Inbound::ButtonReply(button_id.into()),
            message_id: None,
        }
    }

    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }
}

/// What handling an inbound event amounted to.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A trigger matched and the bot ran from its start node.
    Started {
        chatbot_id: String,
        sent: Vec<SentMessage>,
        parked: Option<String>,
    },
    /// A parked conversation moved forward.
    Advanced {
        chatbot_id: String,
        sent: Vec<SentMessage>,
        parked: Option<String>,
    },
    /// The event did not belong to any flow; the caller's fallback applies.
    Unhandled { reason: Option<ResolveError> },
    /// The parked conversation timed out and was cleared.
    Expired { chatbot_id: String },
    /// The event was already handled; nothing was sent or written.
    Duplicate { chatbot_id: String },
}

/// Runs inbound events through the registered bots.
///
/// Intents are sent one at a time, in order. Conversation state is written
/// once per event, after every send succeeded; a failed send leaves the
/// stored state as it was, so a redelivered event walks the same path again.
pub struct Dispatcher<S, C> {
    bots: Vec<Chatbot>,
    sender: S,
    store: C,
    config: SessionConfig,
}

impl<S: MessageSender, C: ConversationStore> Dispatcher<S, C> {
    pub fn new(sender: S, store: C, config: SessionConfig) -> Self {
        Self {
            bots: Vec::new(),
            sender,
            store,
            config,
        }
    }

    /// Registers a bot compiled from `map`, using this dispatcher's walk limits.
    pub fn register(&mut self, id: impl Into<String>, triggers: Vec<Trigger>, map: NodeMap) {
        let engine = FlowEngine::with_config(map, self.config.walk);
        self.bots.push(Chatbot::new(id, triggers, engine));
    }

    pub fn register_bot(&mut self, bot: Chatbot) {
        self.bots.push(bot);
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    pub fn store(&self) -> &C {
        &self.store
    }

    pub async fn handle(
        &self,
        event: &InboundEvent,
        now: DateTime<Utc>,
    ) -> Result<Outcome, DispatchError> {
        let key = &event.key;
        let stored = self.store.load(key).await?;

        if let (Some(state), Some(message_id)) = (&stored, event.message_id.as_deref())
            && state.handled(message_id)
        {
            tracing::info!(chatbot_id = %state.chatbot_id, %message_id, "event already handled, skipping");
            return Ok(Outcome::Duplicate {
                chatbot_id: state.chatbot_id.clone(),
            });
        }

        if let Inbound::Text(text) = &event.inbound
            && let Some(bot) = self.bots.iter().find(|bot| bot.is_triggered_by(text))
        {
            tracing::info!(chatbot_id = %bot.id, phone = %key.phone, "trigger matched");
            let resolution = bot.engine.begin();
            let sent = self.deliver(&key.phone, &resolution).await?;
            self.persist(event, bot, &resolution, now).await?;
            return Ok(Outcome::Started {
                chatbot_id: bot.id.clone(),
                sent,
                parked: resolution.parked_node_id,
            });
        }

        let Some(state) = stored else {
            return Ok(Outcome::Unhandled { reason: None });
        };

        if state.is_expired(now) {
            tracing::info!(chatbot_id = %state.chatbot_id, phone = %key.phone, "conversation timed out");
            self.store.clear(key).await?;
            return Ok(Outcome::Expired {
                chatbot_id: state.chatbot_id,
            });
        }

        let Some(bot) = self.bots.iter().find(|bot| bot.id == state.chatbot_id) else {
            tracing::warn!(chatbot_id = %state.chatbot_id, "conversation parked in an unknown bot");
            self.store.clear(key).await?;
            return Ok(Outcome::Unhandled { reason: None });
        };

        let resolved = match &event.inbound {
            Inbound::ButtonReply(button_id) => bot.engine.resolve_interaction(Some(&state), button_id),
            Inbound::Text(text) => bot.engine.resolve_reply(&state, text),
        };

        let resolution = match resolved {
            Ok(resolution) => resolution,
            Err(reason) => {
                tracing::debug!(chatbot_id = %bot.id, %reason, "inbound event left unhandled");
                return Ok(Outcome::Unhandled {
                    reason: Some(reason),
                });
            }
        };

        let sent = self.deliver(&key.phone, &resolution).await?;
        self.persist(event, bot, &resolution, now).await?;
        Ok(Outcome::Advanced {
            chatbot_id: bot.id.clone(),
            sent,
            parked: resolution.parked_node_id,
        })
    }

    async fn deliver(
        &self,
        phone: &str,
        resolution: &Resolution,
    ) -> Result<Vec<SentMessage>, DispatchError> {
        let mut sent = Vec::with_capacity(resolution.intents.len());
        for intent in &resolution.intents {
            tracing::debug!(
                node_id = %intent.node_id,
                directive = intent.directive().name(),
                "sending intent"
            );
            let ack = self.sender.send(phone, intent).await.inspect_err(|e| {
                tracing::warn!(node_id = %intent.node_id, error = %e, "send failed, state left unchanged");
            })?;
            sent.push(ack);
        }
        Ok(sent)
    }

    /// The single state write for an event.
    async fn persist(
        &self,
        event: &InboundEvent,
        bot: &Chatbot,
        resolution: &Resolution,
        now: DateTime<Utc>,
    ) -> Result<(), DispatchError> {
        match &resolution.parked_node_id {
            Some(parked) => {
                let state =
                    ConversationState::parked(bot.id.clone(), parked.clone(), self.config.timeout_at(now))
                        .with_last_event_id(event.message_id.clone());
                self.store.save(&event.key, state).await
            }
            None => self.store.clear(&event.key).await,
        }
    }
}
