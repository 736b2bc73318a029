use super::ApiClient;
use crate::error::Result;
use crate::models::{
    MessageResponse, NewProperty, PropertiesResponse, PropertyResponse, PropertyStatus,
    PropertyUpdate, SortOrder,
};
use crate::request::ApiRequest;

impl ApiClient {
    /// Lists active properties in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out or the request fails.
    pub async fn properties(&self, sort: SortOrder) -> Result<PropertiesResponse> {
        self.call(
            ApiRequest::get(&["properties"])
                .query("sortBy", sort.as_query())
                .authenticated(),
        )
        .await
    }

    /// Lists the logged-in owner's properties, including hidden and deleted
    /// ones.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out or the request fails.
    pub async fn my_properties(&self) -> Result<PropertiesResponse> {
        self.call(
            ApiRequest::get(&["properties", "my-properties"])
                .authenticated(),
        )
        .await
    }

    /// Lists a new property.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out or the request fails.
    pub async fn create_property(&self, property: &NewProperty) -> Result<PropertyResponse> {
        self.call(
            ApiRequest::post(&["properties"])
                .with_json(property)?
                .authenticated(),
        )
        .await
    }

    /// Changes any subset of a property's fields.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out or the request fails.
    pub async fn update_property(
        &self,
        id: &str,
        update: &PropertyUpdate,
    ) -> Result<PropertyResponse> {
        self.call(
            ApiRequest::put(&["properties", id])
                .with_json(update)?
                .authenticated(),
        )
        .await
    }

    /// Changes only a property's status.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out or the request fails.
    pub async fn update_property_status(
        &self,
        id: &str,
        status: PropertyStatus,
    ) -> Result<PropertyResponse> {
        self.update_property(id, &PropertyUpdate::status(status)).await
    }

    /// Deletes a property.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out or the request fails.
    pub async fn delete_property(&self, id: &str) -> Result<MessageResponse> {
        self.call(ApiRequest::delete(&["properties", id]).authenticated())
            .await
    }
}
