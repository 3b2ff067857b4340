// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Internal mechanisms for the `auth` module.

use hyper::header::AUTHORIZATION;
use hyper::{Body, Method, Request};

use crate::common::*;

use super::{KeyPair, Token};

pub struct RequestBuilder<'a> {
    base_uri: &'a str,
    method: Method,
    params: Option<ParamList>,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(method: Method, base_uri: &'a str) -> Self {
        RequestBuilder {
            base_uri,
            method,
            params: None,
        }
    }

    pub fn with_query_params(self, params: &ParamList) -> Self {
        let total_params = if let Some(mut my_params) = self.params {
            my_params.combine(params.clone());
            my_params
        } else {
            params.clone()
        };
        RequestBuilder {
            params: Some(total_params),
            ..self
        }
    }

    /// Attaches the given access token as the `access_token` parameter and assembles the request.
    ///
    /// The service authenticates openapi calls through this parameter rather than an
    /// `Authorization` header.
    pub fn request_token(self, token: &Token) -> Request<Body> {
        let params = self
            .params
            .unwrap_or_default()
            .add_param("access_token", token.access.clone());
        RequestBuilder {
            params: Some(params),
            base_uri: self.base_uri,
            method: self.method,
        }
        .request_authorization(None)
    }

    /// Attaches a Basic `Authorization` header built from the given client credentials and
    /// assembles the request. Only the token-exchange endpoint accepts this authorization.
    pub fn request_consumer_basic(self, con_token: &KeyPair) -> Request<Body> {
        let authorization = basic_authorization(con_token);
        self.request_authorization(Some(authorization))
    }

    fn request_authorization(self, authorization: Option<String>) -> Request<Body> {
        let full_url = match self.params {
            Some(ref params) if !params.is_empty() => {
                format!("{}?{}", self.base_uri, params.to_urlencoded())
            }
            _ => self.base_uri.to_string(),
        };
        let mut request = Request::builder().method(self.method).uri(full_url);

        if let Some(authorization) = authorization {
            request = request.header(AUTHORIZATION, authorization);
        }

        request.body(Body::empty()).unwrap()
    }
}

/// Creates a Basic `Authorization` header based on the given client credentials.
///
/// The authorization created by this function can only be used with requests to exchange an
/// authorization code for an access token. Using this authorization with any other endpoint will
/// result in an invalid request.
pub(crate) fn basic_authorization(con_token: &KeyPair) -> String {
    let text = format!("{}:{}", con_token.key, con_token.secret);
    format!("Basic {}", base64::encode(&text))
}

// n.b. this function is re-exported in the `raw` module - these docs are public!
/// Assemble a GET request to the given URL with the given parameters, authenticated with the
/// given access token.
///
/// The given parameters, if present, will be appended to the given `uri` as a percent-encoded
/// query string, alongside the `access_token` parameter.
pub fn get(uri: &str, token: &Token, params: Option<&ParamList>) -> Request<Body> {
    let mut request = RequestBuilder::new(Method::GET, uri);
    if let Some(params) = params {
        request = request.with_query_params(params);
    }
    request.request_token(token)
}

// n.b. this function is re-exported in the `raw` module - these docs are public!
/// Assemble a POST request to the given URL with the given parameters, authenticated with the
/// given access token.
///
/// The service reads POST parameters from the query string, so the given parameters ride there
/// just as they do for `get`, and the request body stays empty.
pub fn post(uri: &str, token: &Token, params: Option<&ParamList>) -> Request<Body> {
    let mut request = RequestBuilder::new(Method::POST, uri);
    if let Some(params) = params {
        request = request.with_query_params(params);
    }
    request.request_token(token)
}

#[cfg(test)]
mod tests {
    use hyper::Method;

    use crate::common::ParamList;

    use super::{basic_authorization, get, KeyPair, RequestBuilder, Token};

    #[test]
    fn basic_header() {
        let con_token = KeyPair::new("test-client-id", "test-client-secret");

        let output = basic_authorization(&con_token);

        assert_eq!(output, "Basic dGVzdC1jbGllbnQtaWQ6dGVzdC1jbGllbnQtc2VjcmV0");
    }

    #[test]
    fn token_rides_in_query() {
        let token = Token::new("abcd1234");
        let params = ParamList::new().add_param("band_key", "zzzz");

        let req = get("https://openapi.band.us/v2.1/bands", &token, Some(&params));
        let query = req.uri().query().unwrap();

        assert!(query.contains("access_token=abcd1234"));
        assert!(query.contains("band_key=zzzz"));
    }

    #[test]
    fn no_params_leaves_bare_uri() {
        let con_token = KeyPair::new("id", "secret");

        let req = RequestBuilder::new(Method::GET, "https://auth.band.us/oauth2/token")
            .request_consumer_basic(&con_token);

        assert_eq!(req.uri().query(), None);
        assert!(req.headers().contains_key(hyper::header::AUTHORIZATION));
    }
}
