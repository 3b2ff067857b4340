// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Infrastructure functions that load and vet responses from BAND.
//!
//! Every openapi payload arrives wrapped in an envelope: `{ "result_code": 1, "result_data": … }`.
//! A `result_code` other than `1` means the call failed and `result_data` describes the error
//! instead. The loaders here peel that envelope off so the endpoint wrappers only ever see the
//! payload they asked for. The one caller that bypasses the envelope is the token exchange in
//! `auth`, which talks to the auth server rather than the openapi host and uses `raw_request`
//! directly.

use hyper::client::HttpConnector;
use hyper::header::CONTENT_TYPE;
use hyper::{Body, Request, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::Error::{BadStatus, BandError, InvalidContentType, InvalidResponse, MissingValue};
use crate::error::{self, ApiError};

use super::Headers;

/// The `result_code` the service reports on a successful call.
const RESULT_SUCCESS: i32 = 1;

/// Wrapper that every successful openapi payload arrives in.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    result_code: i32,
    result_data: T,
}

#[cfg(feature = "native_tls")]
fn https_connector() -> hyper_tls::HttpsConnector<HttpConnector> {
    hyper_tls::HttpsConnector::new()
}

#[cfg(all(feature = "rustls", not(feature = "native_tls")))]
fn https_connector() -> hyper_rustls::HttpsConnector<HttpConnector> {
    hyper_rustls::HttpsConnector::with_native_roots()
}

#[cfg(all(
    feature = "rustls_webpki",
    not(feature = "rustls"),
    not(feature = "native_tls")
))]
fn https_connector() -> hyper_rustls::HttpsConnector<HttpConnector> {
    hyper_rustls::HttpsConnector::with_webpki_roots()
}

// n.b. this function is re-exported in the `raw` module - these docs are public!
/// Starts the given request and returns the in-flight `ResponseFuture` from `hyper`.
///
/// This is the most hands-off way to execute a request: nothing about the response is inspected,
/// so all the status and envelope vetting is left to you.
pub fn get_response(request: Request<Body>) -> hyper::client::ResponseFuture {
    let client = hyper::Client::builder().build::<_, Body>(https_connector());
    client.request(request)
}

// n.b. this function is re-exported in the `raw` module - these docs are public!
/// Loads the given request and returns the headers and response body after vetting.
///
/// Vetting means the response must carry a JSON content type, must not decode as an error
/// envelope, and must have a success status code; see the module docs. The body is returned
/// undecoded, for callers that want to process the JSON themselves.
pub async fn raw_request(request: Request<Body>) -> error::Result<(Headers, Vec<u8>)> {
    let (parts, body) = get_response(request).await?.into_parts();
    let body = hyper::body::to_bytes(body).await?;

    vet_response(parts.status, &parts.headers, &body)?;

    Ok((parts.headers, body.to_vec()))
}

// n.b. this function is re-exported in the `raw` module - these docs are public!
/// Loads the given request, then decodes the success envelope and deserializes its `result_data`
/// into the target type.
///
/// This is the loader that nearly every endpoint wrapper in the library goes through.
pub async fn request_with_json_response<T: DeserializeOwned>(
    request: Request<Body>,
) -> error::Result<T> {
    let (_, body) = raw_request(request).await?;

    parse_envelope(&body)
}

/// Checks the status code, content type, and error envelope of a response.
///
/// The service reports failures through the `result_code` envelope even on a `200 OK`, so the
/// envelope check runs regardless of status; `BadStatus` is only reported when no error payload
/// could be decoded.
pub(crate) fn vet_response(
    status: StatusCode,
    headers: &Headers,
    body: &[u8],
) -> error::Result<()> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .ok_or(MissingValue("Content-Type"))?;
    let content_type = content_type
        .to_str()
        .ok()
        .and_then(|ct| ct.parse::<mime::Mime>().ok())
        .ok_or_else(|| InvalidContentType(String::from_utf8_lossy(content_type.as_bytes()).into_owned()))?;

    if content_type.type_() != mime::APPLICATION || content_type.subtype() != mime::JSON {
        return Err(InvalidContentType(content_type.to_string()));
    }

    if let Ok(err) = serde_json::from_slice::<ApiError>(body) {
        if err.result_code != RESULT_SUCCESS {
            return Err(BandError(err));
        }
    }

    if !status.is_success() {
        return Err(BadStatus(status));
    }

    Ok(())
}

/// Decodes the success envelope from the given body and deserializes its `result_data`.
pub(crate) fn parse_envelope<T: DeserializeOwned>(body: &[u8]) -> error::Result<T> {
    let envelope = serde_json::from_slice::<Envelope<T>>(body)?;

    if envelope.result_code != RESULT_SUCCESS {
        return Err(InvalidResponse(
            "envelope carried an unexpected result_code",
            Some(envelope.result_code.to_string()),
        ));
    }

    Ok(envelope.result_data)
}

#[cfg(test)]
mod tests {
    use hyper::header::{HeaderValue, CONTENT_TYPE};
    use hyper::StatusCode;

    use crate::error::Error;

    use super::{parse_envelope, vet_response, Headers};

    fn json_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers
    }

    #[test]
    fn vet_passes_success_envelope() {
        let body = br#"{"result_code": 1, "result_data": {"bands": []}}"#;

        assert!(vet_response(StatusCode::OK, &json_headers(), body).is_ok());
    }

    #[test]
    fn vet_decodes_error_envelope() {
        let body = br#"{
            "result_code": 60104,
            "result_data": {
                "message": "Invalid access token",
                "detail": {"error": "invalid_token", "description": "The access token has been revoked"}
            }
        }"#;

        match vet_response(StatusCode::OK, &json_headers(), body) {
            Err(Error::BandError(err)) => {
                assert_eq!(err.result_code, 60104);
                assert_eq!(
                    err.result_data.message.as_deref(),
                    Some("Invalid access token")
                );
            }
            other => panic!("unexpected vetting result: {:?}", other),
        }
    }

    #[test]
    fn vet_rejects_non_json() {
        let mut headers = Headers::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));

        match vet_response(StatusCode::OK, &headers, b"<html></html>") {
            Err(Error::InvalidContentType(ct)) => assert_eq!(ct, "text/html"),
            other => panic!("unexpected vetting result: {:?}", other),
        }
    }

    #[test]
    fn vet_reports_bad_status() {
        match vet_response(StatusCode::BAD_GATEWAY, &json_headers(), b"{}") {
            Err(Error::BadStatus(status)) => assert_eq!(status, StatusCode::BAD_GATEWAY),
            other => panic!("unexpected vetting result: {:?}", other),
        }
    }

    #[test]
    fn envelope_unwraps_result_data() {
        #[derive(serde::Deserialize)]
        struct Payload {
            user_key: String,
        }

        let body = br#"{"result_code": 1, "result_data": {"user_key": "aaaa"}}"#;
        let payload: Payload = parse_envelope(body).unwrap();

        assert_eq!(payload.user_key, "aaaa");
    }
}
