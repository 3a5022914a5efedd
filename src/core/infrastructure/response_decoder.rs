//! Maps a received response onto a typed result or an error.

use crate::core::domain::error::{ApiError, VmwareError, VmwareResult};
use crate::core::domain::model::{DetailedResponse, ResponseMetadata};
use serde::de::DeserializeOwned;

/// Reads status, headers and the complete body of a response.
pub(crate) async fn read_metadata(response: reqwest::Response) -> VmwareResult<ResponseMetadata> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response
        .bytes()
        .await
        .map_err(|e| VmwareError::Transport(format!("Failed to read response body: {e}")))?;
    Ok(ResponseMetadata::new(status_code, headers, body.to_vec()))
}

/// Decodes a response.
///
/// A 2xx with an empty body succeeds without a result. A 2xx body that does
/// not match `T` is a decode error. Anything else becomes an [`ApiError`].
pub(crate) fn decode<T: DeserializeOwned>(
    metadata: ResponseMetadata,
) -> VmwareResult<DetailedResponse<T>> {
    if !(200..300).contains(&metadata.status_code()) {
        return Err(ApiError::from_metadata(metadata).into());
    }

    if metadata.body().iter().all(u8::is_ascii_whitespace) {
        return Ok(DetailedResponse::new(metadata, None));
    }

    match serde_json::from_slice::<T>(metadata.body()) {
        Ok(result) => Ok(DetailedResponse::new(metadata, Some(result))),
        Err(e) => Err(VmwareError::Decode {
            message: e.to_string(),
            metadata: Box::new(metadata),
        }),
    }
}
