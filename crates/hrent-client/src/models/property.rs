//! Property listing types.

use serde::{Deserialize, Serialize};

/// How often the listed price is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingFrequency {
    /// Per month.
    #[default]
    Monthly,
    /// Per week.
    Weekly,
    /// Per quarter.
    Quarterly,
    /// Per year.
    Yearly,
}

impl PricingFrequency {
    /// All frequencies, in display order.
    pub const ALL: [Self; 4] = [Self::Monthly, Self::Weekly, Self::Quarterly, Self::Yearly];

    /// Get display name for the frequency.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Weekly => "Weekly",
            Self::Quarterly => "Quarterly",
            Self::Yearly => "Yearly",
        }
    }

    /// Wire value of the frequency.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Weekly => "weekly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::str::FromStr for PricingFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown pricing frequency: {s}"))
    }
}

/// Listing visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    /// Visible to tenants.
    #[default]
    Active,
    /// Hidden by the owner.
    Hidden,
    /// Deleted by the owner.
    Deleted,
}

impl PropertyStatus {
    /// Get display name for the status.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Hidden => "Hidden",
            Self::Deleted => "Deleted",
        }
    }

    /// Wire value of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Hidden => "hidden",
            Self::Deleted => "deleted",
        }
    }

    /// Statuses an owner can move a listing to from this one.
    ///
    /// Deleted listings offer nothing. The server validates the change.
    #[must_use]
    pub fn owner_actions(self) -> &'static [Self] {
        match self {
            Self::Active => &[Self::Hidden, Self::Deleted],
            Self::Hidden => &[Self::Active, Self::Deleted],
            Self::Deleted => &[],
        }
    }
}

impl std::str::FromStr for PropertyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "hidden" => Ok(Self::Hidden),
            "deleted" => Ok(Self::Deleted),
            other => Err(format!("unknown property status: {other}")),
        }
    }
}

/// Browse ordering for the property list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Newest first.
    #[default]
    #[serde(rename = "createdAtDesc")]
    Latest,
    /// Cheapest first.
    #[serde(rename = "priceAsc")]
    PriceAsc,
    /// Most expensive first.
    #[serde(rename = "priceDesc")]
    PriceDesc,
}

impl SortOrder {
    /// Value sent in the `sortBy` query parameter.
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::Latest => "createdAtDesc",
            Self::PriceAsc => "priceAsc",
            Self::PriceDesc => "priceDesc",
        }
    }

    /// Get display name for the ordering.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
        }
    }
}

/// Owner details embedded in a property.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyOwner {
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Email address.
    pub email: Option<String>,
}

/// A property listing.
///
/// Two properties are the same listing when their ids match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Server id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Owner snapshot.
    pub owner: PropertyOwner,
    /// Listing title.
    pub title: String,
    /// Listing description.
    pub description: String,
    /// Street address.
    pub address: String,
    /// Image URLs.
    pub images: Vec<String>,
    /// Price per `pricing_frequency`.
    pub price: f64,
    /// Billing period.
    pub pricing_frequency: PricingFrequency,
    /// Whether the owner accepts offers.
    pub allow_bargaining: bool,
    /// Visibility.
    pub status: PropertyStatus,
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Property {}

impl std::hash::Hash for Property {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Property {
    /// Returns the first image, used as the listing thumbnail.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Formats the price with its frequency, e.g. `1200.00 / Monthly`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("{:.2} / {}", self.price, self.pricing_frequency.display_name())
    }
}
