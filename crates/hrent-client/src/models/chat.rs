//! Conversation and message types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::rental::{RentalProperty, RentalUser};

/// How long after sending a text message it may still be edited.
pub const EDIT_WINDOW_SECS: i64 = 120;

/// Rental details embedded in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRental {
    /// Property the rental is for.
    pub property: RentalProperty,
}

/// Chat between the parties of a rental.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Server id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Rental snapshot.
    pub rental: ConversationRental,
    /// Users taking part.
    pub participants: Vec<RentalUser>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Returns the participant that is not `user_id`.
    #[must_use]
    pub fn counterpart(&self, user_id: &str) -> Option<&RentalUser> {
        self.participants.iter().find(|p| p.id != user_id)
    }
}

/// An emoji reaction. The server keeps at most one per user per message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// Emoji.
    pub emoji: String,
    /// Reacting user.
    pub user: RentalUser,
}

/// A chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Server id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Conversation id.
    pub conversation: String,
    /// Sender snapshot.
    pub sender: RentalUser,
    /// Receiver id.
    pub receiver: String,
    /// Text body.
    pub text: Option<String>,
    /// Attached image.
    pub image_url: Option<String>,
    /// Whether the text was edited.
    pub is_edited: Option<bool>,
    /// Reactions.
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Whether the UI should offer editing at `now`.
    ///
    /// Only text messages younger than [`EDIT_WINDOW_SECS`] qualify. The
    /// server makes the final call.
    #[must_use]
    pub fn can_be_edited_at(&self, now: DateTime<Utc>) -> bool {
        self.image_url.is_none()
            && now.signed_duration_since(self.created_at) < Duration::seconds(EDIT_WINDOW_SECS)
    }

    /// [`Self::can_be_edited_at`] using the current time.
    #[must_use]
    pub fn can_be_edited(&self) -> bool {
        self.can_be_edited_at(Utc::now())
    }

    /// Whether the message was sent by `user_id`.
    #[must_use]
    pub fn is_from(&self, user_id: &str) -> bool {
        self.sender.id == user_id
    }

    /// Whether the message was edited.
    #[must_use]
    pub fn edited(&self) -> bool {
        self.is_edited.unwrap_or(false)
    }

    /// Returns the reaction left by `user_id`, if any.
    #[must_use]
    pub fn reaction_by(&self, user_id: &str) -> Option<&Reaction> {
        self.reactions.iter().find(|r| r.user.id == user_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn message(image_url: Option<&str>) -> Message {
        let json = serde_json::json!({
            "_id": "m1",
            "conversation": "c1",
            "sender": {"_id": "u1", "firstName": "Sam"},
            "receiver": "u2",
            "text": "hello",
            "imageUrl": image_url,
            "reactions": [{"emoji": "👍", "user": {"_id": "u2"}}],
            "createdAt": "2025-11-01T10:00:00.000Z",
            "updatedAt": "2025-11-01T10:00:00.000Z"
        });
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_edit_window() {
        let msg = message(None);
        let sent = msg.created_at;
        assert!(msg.can_be_edited_at(sent + Duration::seconds(119)));
        assert!(!msg.can_be_edited_at(sent + Duration::seconds(120)));
        assert!(!msg.can_be_edited_at(sent + Duration::hours(1)));
    }

    #[test]
    fn test_image_messages_are_not_editable() {
        let msg = message(Some("https://img.example.com/x.jpg"));
        assert!(!msg.can_be_edited_at(msg.created_at));
    }

    #[test]
    fn test_message_helpers() {
        let msg = message(None);
        assert!(msg.is_from("u1"));
        assert!(!msg.edited());
        assert_eq!(msg.reaction_by("u2").map(|r| r.emoji.as_str()), Some("👍"));
        assert!(msg.reaction_by("u1").is_none());
    }

    #[test]
    fn test_missing_reactions_default_to_empty() {
        let json = r#"{
            "_id": "m2", "conversation": "c1", "sender": {"_id": "u1"}, "receiver": "u2",
            "createdAt": "2025-11-01T10:00:00Z", "updatedAt": "2025-11-01T10:00:00Z"
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert!(msg.reactions.is_empty());
        assert!(msg.text.is_none());
    }

    #[test]
    fn test_conversation_counterpart() {
        let json = r#"{
            "_id": "c1",
            "rental": {"property": {"_id": "p1", "title": "Loft", "images": [], "price": 10, "pricingFrequency": "yearly"}},
            "participants": [{"_id": "u1"}, {"_id": "u2", "firstName": "Kim"}],
            "createdAt": "2025-11-01T10:00:00.000Z",
            "updatedAt": "2025-11-01T11:00:00.000Z"
        }"#;
        let conversation: Conversation = serde_json::from_str(json).unwrap();
        assert_eq!(
            conversation.counterpart("u1").map(|u| u.id.as_str()),
            Some("u2")
        );
    }
}
