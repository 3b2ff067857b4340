// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Types and functions used to authenticate calls to BAND.
//!
//! BAND uses an OAuth2 authorization-code flow to authenticate its users. The short version of
//! how it works:
//!
//! 1. Your app, registered in the BAND developer console, has a client ID and client secret. Those
//!    form the [`KeyPair`] that stands in for your app.
//! 2. You direct the user to the URL given by [`authorize_url`]. When they approve access, the
//!    service redirects them to your registered redirect URI with a short-lived authorization
//!    `code` in the query string. How you capture that code is up to your app: a web app receives
//!    it on its own callback route, while the demos in this repository just ask for the redirected
//!    URL to be pasted back in.
//! 3. You hand the code to [`access_token`], which exchanges it for an access [`Token`] along with
//!    the user key of the account that approved access.
//!
//! The resulting [`Token`] is what every other call in this library takes. Tokens issued by the
//! developer console for your own account can be wrapped directly with [`Token::new`], skipping
//! the flow entirely.
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() {
//! let con_token = openband::KeyPair::new("client id", "client secret");
//!
//! println!("Open this page in your browser:");
//! println!("{}", openband::authorize_url(&con_token, "http://localhost:8000/"));
//!
//! // ...the user approves access and lands on the redirect URI with a `code` parameter...
//! # let redirected_to = "";
//!
//! let code = openband::auth::extract_code(redirected_to).unwrap();
//! let (token, user_key) = openband::access_token(&con_token, code).await.unwrap();
//! # }
//! ```

use std::borrow::Cow;

use hyper::Method;
use serde::Deserialize;
use url::Url;

use crate::common::*;
use crate::error::Error::{InvalidResponse, MissingValue};
use crate::{error, links};

pub(crate) mod raw;

/// A key/secret pair representing the client credentials issued to an app by the BAND developer
/// console.
#[derive(Debug, Clone)]
pub struct KeyPair {
    /// The client ID.
    pub key: Cow<'static, str>,
    /// The client secret.
    pub secret: Cow<'static, str>,
}

impl KeyPair {
    /// Creates a `KeyPair` with the given key and secret.
    ///
    /// This can be called with either `&'static str` (a string literal) or `String`.
    pub fn new(key: impl Into<Cow<'static, str>>, secret: impl Into<Cow<'static, str>>) -> KeyPair {
        KeyPair {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

/// An access token, authenticating the app/user pair that every API call acts on behalf of.
///
/// Tokens are obtained through the authorization flow described in [the module
/// docs][crate::auth], or wrapped directly from a token string issued elsewhere. The token string
/// itself is opaque; it is attached verbatim to every request.
#[derive(Debug, Clone)]
pub struct Token {
    pub(crate) access: Cow<'static, str>,
}

impl Token {
    /// Wraps the given access token string.
    pub fn new(access: impl Into<Cow<'static, str>>) -> Token {
        Token {
            access: access.into(),
        }
    }

    /// The underlying token string, e.g. for caching it between runs.
    pub fn access_key(&self) -> &str {
        &self.access
    }
}

/// With the given client credentials, return a URL that a user can access to accept or reject an
/// authorization request.
///
/// This can be considered the first step in obtaining access to a user's account: give the URL that this
/// function returns to the user so they can process the authorization request. When they accept,
/// the service redirects them to the given `redirect_uri` (which must match the one registered in
/// the developer console) with an authorization code in the `code` query parameter. That code can
/// be given to [`access_token`] to complete the flow.
pub fn authorize_url(con_token: &KeyPair, redirect_uri: &str) -> String {
    format!(
        "{}?response_type=code&client_id={}&redirect_uri={}",
        links::auth::AUTHORIZE,
        percent_encode(&con_token.key),
        percent_encode(redirect_uri)
    )
}

/// Pulls the authorization code out of the URL the service redirected the user to.
///
/// This is a convenience for apps that end up holding the full redirected URL, e.g. after asking
/// the user to paste it from their browser. Apps serving the redirect URI themselves can read the
/// `code` query parameter directly instead.
pub fn extract_code(redirect_url: &str) -> error::Result<String> {
    let url = Url::parse(redirect_url)
        .map_err(|_| InvalidResponse("redirect URL did not parse", Some(redirect_url.to_string())))?;

    url.query_pairs()
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value.into_owned())
        .ok_or(MissingValue("code"))
}

/// The response from the token-exchange endpoint. Unlike the openapi hosts, the auth server
/// returns a bare JSON object; alongside these fields it also carries `token_type`,
/// `refresh_token`, and `expires_in`, none of which this library acts on.
#[derive(Debug, Deserialize)]
struct RawAccessToken {
    access_token: Option<String>,
    user_key: Option<String>,
}

/// With the given client credentials and the authorization code from the user's redirect, ask
/// BAND for an access token that can be used to authenticate further API calls.
///
/// This can be considered the final step in obtaining access to a user's account. The `Token` this
/// function returns represents the user's authorization that your app can use their account, and
/// needs to be given to all other functions in the BAND API.
///
/// This function also returns the user key of the authenticated user.
pub async fn access_token(
    con_token: &KeyPair,
    code: impl Into<String>,
) -> error::Result<(Token, String)> {
    let params = ParamList::new()
        .add_param("grant_type", "authorization_code")
        .add_param("code", code.into());

    let req = raw::RequestBuilder::new(Method::GET, links::auth::ACCESS_TOKEN)
        .with_query_params(&params)
        .request_consumer_basic(con_token);

    let (_, body) = raw_request(req).await?;
    let raw: RawAccessToken = serde_json::from_slice(&body)?;

    let access = raw.access_token.ok_or(MissingValue("access_token"))?;
    let user_key = raw.user_key.ok_or(MissingValue("user_key"))?;

    Ok((Token::new(access), user_key))
}

#[cfg(test)]
mod tests {
    use super::{authorize_url, extract_code, KeyPair};

    #[test]
    fn authorize_url_query() {
        let con_token = KeyPair::new("my-client-id", "unused here");

        let url = authorize_url(&con_token, "http://localhost:8000/");

        assert_eq!(
            url,
            "https://auth.band.us/oauth2/authorize?response_type=code&client_id=my-client-id\
             &redirect_uri=http%3A%2F%2Flocalhost%3A8000%2F"
        );
    }

    #[test]
    fn code_from_redirect() {
        let code = extract_code("http://localhost:8000/?code=abc123&state=xyz").unwrap();

        assert_eq!(code, "abc123");
    }

    #[test]
    fn missing_code_is_reported() {
        assert!(extract_code("http://localhost:8000/?error=access_denied").is_err());
    }
}
