//! Data records mirroring the API's JSON shapes.

mod chat;
mod property;
mod rental;
pub(crate) mod requests;
mod responses;
mod user;

pub use chat::{Conversation, ConversationRental, EDIT_WINDOW_SECS, Message, Reaction};
pub use property::{PricingFrequency, Property, PropertyOwner, PropertyStatus, SortOrder};
pub use rental::{Party, Rental, RentalProperty, RentalStatus, RentalUser};
pub use requests::{
    GoogleAuth, NewProperty, OutgoingMessage, ProfileUpdate, PropertyUpdate, Registration,
};
pub use responses::{
    ApiResponse, AuthResponse, ConversationResponse, ConversationsResponse, ErrorResponse,
    MessageResponse, MessageServiceResponse, MessagesResponse, PropertiesResponse,
    PropertyResponse, RentalResponse, RentalsResponse, UploadResponse, UserProfileResponse,
};
pub use user::{User, UserType};
