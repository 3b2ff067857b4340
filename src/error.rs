// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A composite error type for errors that can occur while interacting with BAND.
//!
//! Any action that crosses the network to call BAND has many places where it can go wrong. Whether
//! it's a bad network connection, a response body that doesn't decode the way the library expects,
//! or an error payload sent back by the service itself, those errors are all wrapped into a single
//! error type.

use std::fmt;

use hyper::StatusCode;
use serde::Deserialize;

/// Convenient alias to a Result containing a local [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Represents the types of errors that can occur when calling BAND.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The response from BAND was formatted incorrectly or in an unexpected manner. The enclosed
    /// values are an explanatory string and, if applicable, the input that caused the error.
    ///
    /// This usually indicates a bug in the library's understanding of a payload shape. If you
    /// encounter this error, please report it with the contained message.
    #[error("Invalid response received: {0} ({1:?})")]
    InvalidResponse(&'static str, Option<String>),
    /// The response from BAND was missing an expected value. The enclosed value was the field that
    /// was missing.
    #[error("Value missing from response: {0}")]
    MissingValue(&'static str),
    /// The response from BAND was not delivered with a JSON content type. The enclosed value is
    /// the `Content-Type` that was received instead.
    #[error("Invalid content type: {0}")]
    InvalidContentType(String),
    /// The response from BAND returned a non-success status code with no decodable error payload.
    /// The enclosed value was the status code.
    #[error("Error status received: {0}")]
    BadStatus(StatusCode),
    /// The BAND API returned an error envelope instead of a result. The enclosed value describes
    /// the error the service reported.
    #[error("Error from the BAND API: {0}")]
    BandError(ApiError),
    /// The network session experienced an error.
    ///
    /// TLS failures also surface here, wrapped by the connector into the `hyper` error.
    #[error("Network error: {0}")]
    NetError(#[from] hyper::Error),
    /// An error occurred while parsing the JSON response.
    #[error("JSON deserialize error: {0}")]
    DeserializeError(#[from] serde_json::Error),
}

/// Represents an error envelope returned by the BAND API.
///
/// Every openapi call wraps its payload in `{ "result_code": …, "result_data": … }`, and a
/// `result_code` other than `1` carries an error description in `result_data` instead of the
/// requested payload. This struct is the decoded form of that description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiError {
    /// The numeric result code reported by the service.
    pub result_code: i32,
    /// The error description, if one was given.
    #[serde(default)]
    pub result_data: ApiErrorData,
}

/// The `result_data` portion of an [`ApiError`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiErrorData {
    /// A human-readable summary of the error.
    pub message: Option<String>,
    /// Machine-readable error details, if the service included them.
    pub detail: Option<ApiErrorDetail>,
}

/// The `detail` portion of an [`ApiErrorData`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorDetail {
    /// A short error token, e.g. `invalid_token`.
    pub error: Option<String>,
    /// A longer description of the error condition.
    pub description: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.result_code)?;

        if let Some(ref message) = self.result_data.message {
            write!(f, " {}", message)?;
        }

        if let Some(ref detail) = self.result_data.detail {
            if let Some(ref error) = detail.error {
                write!(f, " ({})", error)?;
            }
            if let Some(ref description) = detail.description {
                write!(f, ": {}", description)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn display_error_payload() {
        let err: ApiError = serde_json::from_str(
            r#"{
                "result_code": 60104,
                "result_data": {
                    "message": "Invalid access token",
                    "detail": {
                        "error": "invalid_token",
                        "description": "The access token has been revoked"
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(err.result_code, 60104);
        assert_eq!(
            err.to_string(),
            "#60104 Invalid access token (invalid_token): The access token has been revoked"
        );
    }

    #[test]
    fn display_bare_code() {
        let err: ApiError = serde_json::from_str(r#"{"result_code": -1}"#).unwrap();

        assert_eq!(err.to_string(), "#-1");
    }
}
