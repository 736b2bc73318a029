use super::ApiClient;
use crate::error::Result;
use crate::models::requests::{CreateRentalRequest, UpdateRentalStatusRequest};
use crate::models::{RentalResponse, RentalStatus, RentalsResponse};
use crate::request::ApiRequest;

impl ApiClient {
    /// Requests to rent a property.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out or the request fails.
    pub async fn create_rental(&self, property_id: &str) -> Result<RentalResponse> {
        self.call(
            ApiRequest::post(&["rentals"])
                .with_json(&CreateRentalRequest { property_id })?
                .authenticated(),
        )
        .await
    }

    /// Lists rentals the logged-in user has requested.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out or the request fails.
    pub async fn my_rental_requests(&self) -> Result<RentalsResponse> {
        self.call(ApiRequest::get(&["rentals", "my-requests"]).authenticated())
            .await
    }

    /// Lists rental requests for the logged-in owner's properties.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out or the request fails.
    pub async fn incoming_rental_requests(&self) -> Result<RentalsResponse> {
        self.call(
            ApiRequest::get(&["rentals", "incoming-requests"])
                .authenticated(),
        )
        .await
    }

    /// Asks the server to move a rental to `status`.
    ///
    /// The server decides whether the transition is allowed; see
    /// [`RentalStatus::actions_for`] for what to offer.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out, the transition is rejected, or the
    /// request fails.
    pub async fn update_rental_status(
        &self,
        id: &str,
        status: RentalStatus,
    ) -> Result<RentalResponse> {
        self.call(
            ApiRequest::put(&["rentals", id, "status"])
                .with_json(&UpdateRentalStatusRequest { status })?
                .authenticated(),
        )
        .await
    }
}
