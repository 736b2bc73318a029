//! Request bodies.

use serde::Serialize;

use super::property::{PricingFrequency, PropertyStatus};
use super::rental::RentalStatus;
use super::user::UserType;

/// Details submitted when asking for a registration OTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address the OTP is sent to.
    pub email: String,
    /// Requested role.
    pub user_type: UserType,
}

#[derive(Debug, Serialize)]
pub(crate) struct VerifyOtpRequest<'a> {
    pub email: &'a str,
    pub otp: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginOtpRequest<'a> {
    pub email: &'a str,
}

/// Identity forwarded from a completed Google sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAuth {
    /// Email address.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Google account id.
    pub google_id: String,
    /// Role to use if this creates an account.
    pub user_type: UserType,
}

/// Profile fields to change. Absent fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl ProfileUpdate {
    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A property to list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    /// Listing title.
    pub title: String,
    /// Listing description.
    pub description: String,
    /// Street address.
    pub address: String,
    /// Image URLs, usually from [`crate::ApiClient::upload_image`].
    pub images: Vec<String>,
    /// Price per `pricing_frequency`.
    pub price: f64,
    /// Billing period.
    pub pricing_frequency: PricingFrequency,
    /// Whether offers are accepted.
    pub allow_bargaining: bool,
}

/// Partial property update. Absent fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyUpdate {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Replacement image list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// New price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// New billing period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_frequency: Option<PricingFrequency>,
    /// New bargaining flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_bargaining: Option<bool>,
    /// New visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PropertyStatus>,
}

impl PropertyUpdate {
    /// An update that only changes the status.
    #[must_use]
    pub fn status(status: PropertyStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateRentalRequest<'a> {
    pub property_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateRentalStatusRequest {
    pub status: RentalStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InitiateChatRequest<'a> {
    pub rental_id: &'a str,
}

/// A chat message to send. At least one of text or image should be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingMessage {
    /// Text body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Image URL from an earlier upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl OutgoingMessage {
    /// A text-only message.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            image_url: None,
        }
    }

    /// An image-only message.
    #[must_use]
    pub fn image(image_url: impl Into<String>) -> Self {
        Self {
            text: None,
            image_url: Some(image_url.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct EditMessageRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReactToMessageRequest<'a> {
    pub emoji: &'a str,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_update_omits_absent_fields() {
        let update = PropertyUpdate {
            price: Some(950.0),
            allow_bargaining: Some(false),
            ..PropertyUpdate::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"price": 950.0, "allowBargaining": false})
        );
    }

    #[test]
    fn test_status_only_update() {
        let update = PropertyUpdate::status(PropertyStatus::Hidden);
        assert!(!update.is_empty());
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"status": "hidden"})
        );
        assert!(PropertyUpdate::default().is_empty());
    }

    #[test]
    fn test_profile_update_sends_only_set_names() {
        let update = ProfileUpdate {
            last_name: Some("Byron".into()),
            ..ProfileUpdate::default()
        };
        assert!(!update.is_empty());
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"lastName": "Byron"})
        );
        assert!(ProfileUpdate::default().is_empty());
    }

    #[test]
    fn test_new_property_field_names() {
        let property = NewProperty {
            title: "Loft".into(),
            description: "Bright".into(),
            address: "1 Main St".into(),
            images: vec![],
            price: 1200.0,
            pricing_frequency: PricingFrequency::Quarterly,
            allow_bargaining: true,
        };
        let value = serde_json::to_value(&property).unwrap();
        assert_eq!(value["pricingFrequency"], "quarterly");
        assert_eq!(value["allowBargaining"], true);
    }

    #[test]
    fn test_registration_and_chat_bodies() {
        let registration = Registration {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            user_type: UserType::Owner,
        };
        assert_eq!(
            serde_json::to_value(&registration).unwrap(),
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "userType": "owner"
            })
        );
        assert_eq!(
            serde_json::to_value(InitiateChatRequest { rental_id: "r1" }).unwrap(),
            json!({"rentalId": "r1"})
        );
        assert_eq!(
            serde_json::to_value(OutgoingMessage::text("hi")).unwrap(),
            json!({"text": "hi"})
        );
    }
}
