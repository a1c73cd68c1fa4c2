//! Request body helpers.

use salvo::prelude::Request;
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

/// Largest request body accepted, sized for bulk imports.
pub(crate) const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

pub(crate) trait RequestExt {
    /// Parse a JSON body, answering malformed input with a 400 carrying
    /// `message`.
    async fn json_or_400<T: DeserializeOwned>(&mut self, message: &str) -> Result<T, ApiError>;

    /// Read the body as UTF-8 text.
    async fn text_or_400(&mut self, message: &str) -> Result<String, ApiError>;
}

impl RequestExt for Request {
    async fn json_or_400<T: DeserializeOwned>(&mut self, message: &str) -> Result<T, ApiError> {
        self.parse_json_with_max_size::<T>(MAX_BODY_BYTES)
            .await
            .map_err(|_ignored| ApiError::bad_request(message))
    }

    async fn text_or_400(&mut self, message: &str) -> Result<String, ApiError> {
        let payload = self
            .payload_with_max_size(MAX_BODY_BYTES)
            .await
            .map_err(|_ignored| ApiError::bad_request(message))?;

        String::from_utf8(payload.to_vec()).map_err(|_ignored| ApiError::bad_request(message))
    }
}
