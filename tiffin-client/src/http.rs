//! HTTP client for the ordering backend REST API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::client::{ApiMessage, ItemPayload, MenuPayload, RestaurantPayload};
use shared::models::{
    MenuItem, MenuItemCreate, MenuItemUpdate, Order, OrderUpdate, RestaurantProfile,
    RestaurantUpdate,
};
use tracing::debug;

/// HTTP client for making network requests to the backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorize(self.client.get(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.put(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, ignoring any response body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = self.authorize(self.client.delete(self.url(path)));
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_for(status, response.text().await?));
        }
        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Self::error_for(status, text));
        }

        Self::decode_body(&text)
    }

    /// Decode a success body; anything that is not the expected JSON shape
    /// (a proxy's HTML error page, a truncated body) surfaces as
    /// [`ClientError::InvalidResponse`] rather than a panic or a silent
    /// default.
    fn decode_body<T: DeserializeOwned>(body: &str) -> ClientResult<T> {
        serde_json::from_str(body).map_err(|err| ClientError::InvalidResponse(err.to_string()))
    }

    fn error_for(status: StatusCode, body: String) -> ClientError {
        // Prefer the backend's `{"message": "..."}` over the raw body
        let message = serde_json::from_str::<ApiMessage>(&body)
            .ok()
            .and_then(|m| m.message)
            .unwrap_or(body);

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            _ => ClientError::Internal(message),
        }
    }

    // ========== Menu API ==========

    /// Fetch the full menu
    pub async fn fetch_menu(&self) -> ClientResult<Vec<MenuItem>> {
        let payload: MenuPayload = self.get("/api/menu").await?;
        let items = payload.into_items();
        debug!(count = items.len(), "fetched menu");
        Ok(items)
    }

    /// Create a menu item
    pub async fn create_menu_item(&self, payload: &MenuItemCreate) -> ClientResult<MenuItem> {
        let response: ItemPayload = self.post("/api/menu", payload).await?;
        Ok(response.into_item())
    }

    /// Update a menu item
    pub async fn update_menu_item(
        &self,
        id: &str,
        payload: &MenuItemUpdate,
    ) -> ClientResult<MenuItem> {
        let response: ItemPayload = self.put(&format!("/api/menu/{id}"), payload).await?;
        Ok(response.into_item())
    }

    /// Delete a menu item
    pub async fn delete_menu_item(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/api/menu/{id}")).await
    }

    // ========== Restaurant API ==========

    /// Fetch the public restaurant profile (storefront)
    pub async fn fetch_restaurant(&self) -> ClientResult<RestaurantProfile> {
        let payload: RestaurantPayload = self.get("/api/restaurant").await?;
        Ok(payload.into_profile())
    }

    /// Fetch the restaurant profile with admin fields (requires token)
    pub async fn fetch_restaurant_admin(&self) -> ClientResult<RestaurantProfile> {
        let payload: RestaurantPayload = self.get("/api/restaurant/admin").await?;
        Ok(payload.into_profile())
    }

    /// Update the restaurant profile
    pub async fn update_restaurant(
        &self,
        payload: &RestaurantUpdate,
    ) -> ClientResult<RestaurantProfile> {
        let response: RestaurantPayload = self.put("/api/restaurant", payload).await?;
        Ok(response.into_profile())
    }

    // ========== Order API ==========

    /// Fetch all orders, newest first
    ///
    /// The backend returns oldest first; the list is reversed here so views
    /// can consume it directly.
    pub async fn fetch_orders(&self) -> ClientResult<Vec<Order>> {
        let mut orders: Vec<Order> = self.get("/api/order").await?;
        orders.reverse();
        debug!(count = orders.len(), "fetched orders");
        Ok(orders)
    }

    /// Update an order
    pub async fn update_order(&self, id: &str, payload: &OrderUpdate) -> ClientResult<()> {
        let _: serde_json::Value = self.put(&format!("/api/order/{id}"), payload).await?;
        Ok(())
    }

    /// Delete an order
    pub async fn delete_order(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/api/order/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_duplicate_slashes() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:8080/"));
        assert_eq!(client.url("/api/menu"), "http://localhost:8080/api/menu");
        assert_eq!(client.url("api/menu"), "http://localhost:8080/api/menu");
    }

    #[test]
    fn error_body_message_is_preferred_over_raw_text() {
        let err = HttpClient::error_for(
            StatusCode::BAD_REQUEST,
            r#"{"message": "Please select a category"}"#.to_string(),
        );
        match err {
            ClientError::Validation(message) => {
                assert_eq!(message, "Please select a category");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_error_body_falls_back_to_raw_text() {
        let err = HttpClient::error_for(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string());
        match err {
            ClientError::Internal(message) => assert_eq!(message, "boom"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unauthorized_maps_to_dedicated_variant() {
        let err = HttpClient::error_for(StatusCode::UNAUTHORIZED, String::new());
        assert!(matches!(err, ClientError::Unauthorized));
    }

    #[test]
    fn success_body_decodes_to_the_expected_shape() {
        let payload: MenuPayload = HttpClient::decode_body(
            r#"{"menu": [{"_id": "A", "name": "Dal", "pricingType": "single", "price": 120}]}"#,
        )
        .unwrap();
        assert_eq!(payload.into_items()[0].id, "A");
    }

    #[test]
    fn malformed_success_body_is_an_invalid_response() {
        let result: ClientResult<MenuPayload> =
            HttpClient::decode_body("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(ClientError::InvalidResponse(_))));
    }
}
