// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A library for interacting with BAND.
//!
//! [BAND](https://band.us) is a group-centered social network: users gather in named groups
//! called "bands", each with its own feed of posts. This library wraps the BAND Open API
//! (`openapi.band.us`), handling the authorization flow, the request plumbing, and the response
//! envelope so your code only deals with honest Rust types.
//!
//! openband is an async library; calls that hit the network are `async fn`s that need to be
//! driven by an executor like tokio, and they all return `error::Result`.
//!
//! # Getting started: authorization
//!
//! Every call to the API acts on behalf of a user who has authorized your app, represented by an
//! access [`Token`]. To get one, register your app in the BAND developer console to obtain a
//! client ID and secret (a [`KeyPair`]), then walk the user through the authorization flow:
//! direct them to [`authorize_url`], and exchange the `code` they come back with through
//! [`access_token`]. The [`auth`] module docs walk through the flow in detail. If you already
//! hold a token string (the developer console issues one for your own account), wrap it with
//! [`Token::new`] and skip the flow.
//!
//! # A quick tour
//!
//! With a token in hand, the rest of the library is small: look up who you are, look up your
//! bands, read their feeds, write to them.
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() {
//! # let token: openband::Token = unimplemented!();
//! use openband::post::PostDraft;
//!
//! let me = openband::profile::show(&token).await.unwrap();
//! println!("signed in as {}", me.name);
//!
//! let bands = openband::band::list(&token).await.unwrap();
//!
//! // band names are display text; the key is the identifier
//! if let Some(band) = bands.iter().find(|band| band.name == "Weekly Hiking Crew") {
//!     let feed = openband::post::posts_of(band.band_key.clone(), &token).await.unwrap();
//!     for post in &feed.items {
//!         println!("{}: {}", post.author.name, post.content);
//!     }
//!
//!     PostDraft::new(band.band_key.clone(), "See everyone at the trailhead!")
//!         .do_push(true)
//!         .send(&token)
//!         .await
//!         .unwrap();
//! }
//! # }
//! ```
//!
//! # Modules
//!
//! The library is split into modules by the portion of the API they cover:
//!
//! - [`auth`]: the authorization flow and the token types.
//! - [`band`]: listing the bands the user belongs to.
//! - [`profile`]: the user's profile, service-wide or within one band.
//! - [`post`]: reading a band's feed and writing posts to it.
//! - [`error`]: the error type every call reports through.
//! - [`raw`]: escape hatch for endpoints and parameters the library doesn't wrap.
//!
//! The types used to start the authorization flow are re-exported at the crate root, since
//! they're needed before anything else.

mod common;
mod links;

pub mod auth;
pub mod band;
pub mod error;
pub mod post;
pub mod profile;
pub mod raw;

pub use crate::auth::{access_token, authorize_url, KeyPair, Token};
