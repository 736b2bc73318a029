//! Rental request types.
//!
//! The server owns the rental lifecycle:
//!
//! ```text
//! pending ──► accepted ──► cancellationRequested ──► cancelled
//!    │  │         ▲                  │
//!    │  │         └──────────────────┘
//!    │  └──► denied
//!    └─────► cancelled
//! ```
//!
//! The helpers here only decide which transitions to offer each party.

use serde::{Deserialize, Serialize};

use super::property::PricingFrequency;

/// Rental request status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RentalStatus {
    /// Waiting for the owner.
    Pending,
    /// Accepted by the owner.
    Accepted,
    /// Rejected by the owner.
    Denied,
    /// Withdrawn or cancelled.
    Cancelled,
    /// Tenant asked to cancel an accepted rental.
    CancellationRequested,
}

/// Side of a rental a user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Party {
    /// The user who requested the rental.
    Tenant,
    /// The owner of the property.
    Owner,
}

impl RentalStatus {
    /// Get display name for the status.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Denied => "Denied",
            Self::Cancelled => "Cancelled",
            Self::CancellationRequested => "Cancellation Requested",
        }
    }

    /// Wire value of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Denied => "denied",
            Self::Cancelled => "cancelled",
            Self::CancellationRequested => "cancellationRequested",
        }
    }

    /// Returns true when no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Denied | Self::Cancelled)
    }

    /// Statuses the tenant may request from this one.
    #[must_use]
    pub fn tenant_actions(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Cancelled],
            Self::Accepted => &[Self::CancellationRequested],
            _ => &[],
        }
    }

    /// Statuses the owner may request from this one.
    ///
    /// From `CancellationRequested`, `Accepted` denies the cancellation and
    /// `Cancelled` approves it.
    #[must_use]
    pub fn owner_actions(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Accepted, Self::Denied],
            Self::CancellationRequested => &[Self::Accepted, Self::Cancelled],
            _ => &[],
        }
    }

    /// Statuses `party` may request from this one.
    #[must_use]
    pub fn actions_for(self, party: Party) -> &'static [Self] {
        match party {
            Party::Tenant => self.tenant_actions(),
            Party::Owner => self.owner_actions(),
        }
    }

    /// Whether `party` is offered a chat for a rental in this status.
    #[must_use]
    pub const fn chat_available(self, party: Party) -> bool {
        match party {
            Party::Tenant => matches!(self, Self::Accepted | Self::CancellationRequested),
            Party::Owner => matches!(self, Self::Accepted),
        }
    }
}

impl std::fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for RentalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "denied" => Ok(Self::Denied),
            "cancelled" => Ok(Self::Cancelled),
            "cancellationRequested" => Ok(Self::CancellationRequested),
            other => Err(format!("unknown rental status: {other}")),
        }
    }
}

/// Property details embedded in a rental.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalProperty {
    /// Property id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Listing title.
    pub title: String,
    /// Image URLs.
    pub images: Vec<String>,
    /// Price per `pricing_frequency`.
    pub price: f64,
    /// Billing period.
    pub pricing_frequency: PricingFrequency,
}

/// User details embedded in rentals, conversations and messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalUser {
    /// User id.
    #[serde(rename = "_id")]
    pub id: String,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Email address.
    pub email: Option<String>,
}

impl RentalUser {
    /// Returns the best available name for display.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.clone(),
            (None, None) => self.email.clone().unwrap_or_else(|| self.id.clone()),
        }
    }
}

/// A rental request between a tenant and an owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    /// Server id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Property snapshot.
    pub property: RentalProperty,
    /// Requesting user.
    pub tenant: RentalUser,
    /// Property owner.
    pub owner: RentalUser,
    /// Current status.
    pub status: RentalStatus,
}

impl Rental {
    /// Which side of this rental `user_id` is on, if any.
    #[must_use]
    pub fn party_of(&self, user_id: &str) -> Option<Party> {
        if self.tenant.id == user_id {
            Some(Party::Tenant)
        } else if self.owner.id == user_id {
            Some(Party::Owner)
        } else {
            None
        }
    }
}
