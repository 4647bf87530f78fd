//! Borrower-facing endpoints: loan record, timeline, payment screenshots

use reqwest::multipart;
use tracing::info;

use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::models::{AckResponse, ClientResponse, ScreenshotResponse, TimelineResponse};

/// Client-record endpoints
#[derive(Clone)]
pub struct ClientApi {
    http: ApiClient,
}

impl ClientApi {
    /// Create a new client service over the shared client
    pub fn new(http: ApiClient) -> Self {
        Self { http }
    }

    /// Fetch the borrower record; caches name/phone for the profile screen
    pub async fn get_client(&self) -> ApiResult<ClientResponse> {
        let response: ClientResponse = self.http.get("clients/get-client").await?;

        if response.success {
            if let Some(client) = &response.client {
                self.http
                    .session()
                    .cache_profile(client.customer.as_deref(), client.phone.as_deref())
                    .await?;
            }
        }

        Ok(response)
    }

    /// Fetch the repayment timeline
    pub async fn get_timeline(&self) -> ApiResult<TimelineResponse> {
        self.http.get("clients/get-timeline").await
    }

    /// List uploaded payment screenshots
    pub async fn get_screenshots(&self) -> ApiResult<ScreenshotResponse> {
        self.http.get("clients/get-screenshot").await
    }

    /// Upload a payment screenshot as JPEG bytes
    pub async fn upload_screenshot(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
    ) -> ApiResult<AckResponse> {
        info!("Uploading payment screenshot ({} bytes)", bytes.len());

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("image/jpeg")?;
        let form = multipart::Form::new().part("screenshot", part);

        self.http
            .post_multipart("clients/upload-payment-screenshot", form)
            .await
    }

    /// Delete an uploaded screenshot by id
    pub async fn delete_screenshot(&self, id: &str) -> ApiResult<AckResponse> {
        self.http
            .delete(&format!("clients/delete-screenshot/{id}"))
            .await
    }
}
