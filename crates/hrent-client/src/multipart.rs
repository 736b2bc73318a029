//! `multipart/form-data` bodies with a single file part.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Length of the random part of generated boundaries.
const BOUNDARY_LEN: usize = 32;

/// A `multipart/form-data` body holding exactly one file part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartBody {
    boundary: String,
    bytes: Vec<u8>,
}

impl MultipartBody {
    /// Builds a body with a freshly generated boundary.
    #[must_use]
    pub fn single_file(field: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        Self::with_boundary(generate_boundary(), field, filename, content_type, data)
    }

    /// Builds a body with a caller-chosen boundary.
    ///
    /// The boundary must not occur inside `data`.
    #[must_use]
    pub fn with_boundary(
        boundary: impl Into<String>,
        field: &str,
        filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> Self {
        let boundary = boundary.into();
        let mut bytes = Vec::with_capacity(data.len() + 3 * boundary.len() + 160);
        bytes.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        bytes.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        bytes.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        bytes.extend_from_slice(data);
        bytes.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Self { boundary, bytes }
    }

    /// An image upload as the API expects it.
    #[must_use]
    pub fn jpeg_image(data: &[u8]) -> Self {
        Self::single_file("image", "upload.jpg", "image/jpeg", data)
    }

    /// Returns the boundary.
    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the `Content-Type` header.
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Returns the encoded body.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the body, returning the encoded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Generates a random boundary.
fn generate_boundary() -> String {
    let random: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(BOUNDARY_LEN)
        .map(char::from)
        .collect();
    format!("hrent-{random}")
}
