use super::ApiClient;
use crate::error::Result;
use crate::models::UploadResponse;
use crate::multipart::MultipartBody;
use crate::request::ApiRequest;

impl ApiClient {
    /// Uploads a JPEG image and returns its public URL.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out or the request fails.
    pub async fn upload_image(&self, jpeg: &[u8]) -> Result<UploadResponse> {
        self.call(
            ApiRequest::post(&["upload"])
                .with_multipart(MultipartBody::jpeg_image(jpeg))
                .authenticated(),
        )
        .await
    }
}
