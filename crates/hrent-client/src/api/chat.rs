use super::ApiClient;
use crate::error::Result;
use crate::models::requests::{EditMessageRequest, InitiateChatRequest, ReactToMessageRequest};
use crate::models::{
    ConversationResponse, ConversationsResponse, MessageServiceResponse, MessagesResponse,
    OutgoingMessage,
};
use crate::request::ApiRequest;

impl ApiClient {
    /// Lists the logged-in user's conversations.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out or the request fails.
    pub async fn conversations(&self) -> Result<ConversationsResponse> {
        self.call(ApiRequest::get(&["chat"]).authenticated()).await
    }

    /// Returns the conversation for a rental, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out or the request fails.
    pub async fn get_or_create_conversation(
        &self,
        rental_id: &str,
    ) -> Result<ConversationResponse> {
        self.call(
            ApiRequest::post(&["chat", "initiate"])
                .with_json(&InitiateChatRequest { rental_id })?
                .authenticated(),
        )
        .await
    }

    /// Lists a conversation's messages.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out or the request fails.
    pub async fn messages(&self, conversation_id: &str) -> Result<MessagesResponse> {
        self.call(
            ApiRequest::get(&["chat", conversation_id, "messages"])
                .authenticated(),
        )
        .await
    }

    /// Sends a text and/or image message.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out or the request fails.
    pub async fn send_message(
        &self,
        conversation_id: &str,
        message: &OutgoingMessage,
    ) -> Result<MessageServiceResponse> {
        self.call(
            ApiRequest::post(&["chat", conversation_id, "messages"])
                .with_json(message)?
                .authenticated(),
        )
        .await
    }

    /// Replaces a message's text.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out, the edit window has passed, or the
    /// request fails.
    pub async fn edit_message(
        &self,
        message_id: &str,
        text: &str,
    ) -> Result<MessageServiceResponse> {
        self.call(
            ApiRequest::put(&["chat", "messages", message_id])
                .with_json(&EditMessageRequest { text })?
                .authenticated(),
        )
        .await
    }

    /// Sets the logged-in user's reaction on a message.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out or the request fails.
    pub async fn react_to_message(
        &self,
        message_id: &str,
        emoji: &str,
    ) -> Result<MessageServiceResponse> {
        self.call(
            ApiRequest::post(&["chat", "messages", message_id, "react"])
                .with_json(&ReactToMessageRequest { emoji })?
                .authenticated(),
        )
        .await
    }
}
