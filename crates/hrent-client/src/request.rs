//! Request descriptors.
//!
//! An [`ApiRequest`] says what to call; the transport decides how.

use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};
use crate::multipart::MultipartBody;

/// Body of an API request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// Serialized JSON.
    Json(Vec<u8>),
    /// `multipart/form-data` upload.
    Multipart(MultipartBody),
}

/// Description of a single API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: Method,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: RequestBody,
    requires_auth: bool,
}

impl ApiRequest {
    /// Creates a request for the endpoint made of `segments`.
    ///
    /// Segments are percent-encoded individually, so ids may contain any
    /// character.
    #[must_use]
    pub fn new<S: AsRef<str>>(method: Method, segments: &[S]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.as_ref().to_string()).collect(),
            query: Vec::new(),
            body: RequestBody::Empty,
            requires_auth: false,
        }
    }

    /// GET request.
    #[must_use]
    pub fn get<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(Method::GET, segments)
    }

    /// POST request.
    #[must_use]
    pub fn post<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(Method::POST, segments)
    }

    /// PUT request.
    #[must_use]
    pub fn put<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(Method::PUT, segments)
    }

    /// DELETE request.
    #[must_use]
    pub fn delete<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(Method::DELETE, segments)
    }

    /// Attaches a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be serialized.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = RequestBody::Json(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Attaches a multipart body.
    #[must_use]
    pub fn with_multipart(mut self, body: MultipartBody) -> Self {
        self.body = RequestBody::Multipart(body);
        self
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Marks the request as requiring the bearer token.
    #[must_use]
    pub const fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the body.
    #[must_use]
    pub const fn body(&self) -> &RequestBody {
        &self.body
    }

    /// Takes the body out, leaving [`RequestBody::Empty`].
    pub fn take_body(&mut self) -> RequestBody {
        std::mem::take(&mut self.body)
    }

    /// Returns true if the bearer token must be attached.
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    /// Unencoded path for logs, e.g. `/properties/abc`.
    #[must_use]
    pub fn display_path(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }
        self.segments.iter().fold(String::new(), |mut path, s| {
            path.push('/');
            path.push_str(s);
            path
        })
    }

    /// Resolves the full URL against `base`, keeping any path prefix on it.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` cannot carry a path.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                Error::InvalidConfig(format!("base_url {base} cannot carry paths"))
            })?;
            path.pop_if_empty();
            path.extend(&self.segments);
        }

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        Ok(url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> Url {
        Url::parse("https://api.example.com/api").unwrap()
    }

    #[test]
    fn test_url_keeps_base_path() {
        let url = ApiRequest::get(&["properties", "my-properties"])
            .url(&base())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/api/properties/my-properties"
        );
    }

    #[test]
    fn test_trailing_slash_on_base() {
        let base = Url::parse("http://127.0.0.1:3000/api/").unwrap();
        let url = ApiRequest::get(&["chat"]).url(&base).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:3000/api/chat");
    }

    #[test]
    fn test_root_base() {
        let base = Url::parse("http://localhost:3000").unwrap();
        let url = ApiRequest::post(&["upload"]).url(&base).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/upload");
    }

    #[test]
    fn test_segments_are_encoded() {
        let url = ApiRequest::put(&["properties", "a/b c"]).url(&base()).unwrap();
        assert_eq!(url.path(), "/api/properties/a%2Fb%20c");
    }

    #[test]
    fn test_query_parameters() {
        let url = ApiRequest::get(&["properties"])
            .query("sortBy", "priceAsc")
            .url(&base())
            .unwrap();
        assert_eq!(url.query(), Some("sortBy=priceAsc"));
    }

    #[test]
    fn test_json_body_and_flags() {
        let request = ApiRequest::post(&["rentals"])
            .with_json(&json!({"propertyId": "p1"}))
            .unwrap()
            .authenticated();

        assert!(request.requires_auth());
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(
            request.body(),
            &RequestBody::Json(br#"{"propertyId":"p1"}"#.to_vec())
        );
        assert_eq!(request.display_path(), "/rentals");
    }

    #[test]
    fn test_take_body() {
        let mut request =
            ApiRequest::post(&["upload"]).with_multipart(MultipartBody::jpeg_image(b"x"));
        assert!(matches!(request.take_body(), RequestBody::Multipart(_)));
        assert_eq!(request.body(), &RequestBody::Empty);
    }

    #[test]
    fn test_cannot_be_a_base() {
        let base = Url::parse("mailto:someone@example.com").unwrap();
        assert!(matches!(
            ApiRequest::get(&["chat"]).url(&base),
            Err(Error::InvalidConfig(_))
        ));
    }
}
