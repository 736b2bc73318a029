//! Response envelopes.
//!
//! Every endpoint wraps its payload in `{ "success": bool, <field>: ... }`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::chat::{Conversation, Message};
use super::property::Property;
use super::rental::Rental;
use super::user::User;

/// A type the transport can produce from a successful response.
pub trait ApiResponse: DeserializeOwned {
    /// Value to use when a 2xx response has an empty body.
    ///
    /// `None` (the default) makes an empty body a decoding failure.
    fn from_empty() -> Option<Self> {
        None
    }
}

/// Plain acknowledgement, e.g. "OTP sent".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}

impl ApiResponse for MessageResponse {
    fn from_empty() -> Option<Self> {
        Some(Self {
            success: true,
            message: "Operation successful".to_string(),
        })
    }
}

/// Successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Fresh bearer token.
    pub token: String,
    /// Authenticated user.
    pub user: User,
}

/// A user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfileResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The profile.
    pub user: User,
}

/// A list of properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertiesResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The properties.
    pub properties: Vec<Property>,
}

/// A single property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The property.
    pub property: Property,
}

/// A list of rentals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalsResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The rentals.
    pub rentals: Vec<Rental>,
}

/// A single rental.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The rental.
    pub rental: Rental,
}

/// A list of conversations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationsResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The conversations.
    pub conversations: Vec<Conversation>,
}

/// A single conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The conversation.
    pub conversation: Conversation,
}

/// A list of chat messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The messages, oldest first.
    pub messages: Vec<Message>,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageServiceResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The message.
    pub message: Message,
}

/// Result of an image upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Public URL of the uploaded image.
    pub image_url: String,
}

/// Error body sent with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error.
    pub message: String,
}

impl ApiResponse for AuthResponse {}
impl ApiResponse for UserProfileResponse {}
impl ApiResponse for PropertiesResponse {}
impl ApiResponse for PropertyResponse {}
impl ApiResponse for RentalsResponse {}
impl ApiResponse for RentalResponse {}
impl ApiResponse for ConversationsResponse {}
impl ApiResponse for ConversationResponse {}
impl ApiResponse for MessagesResponse {}
impl ApiResponse for MessageServiceResponse {}
impl ApiResponse for UploadResponse {}
