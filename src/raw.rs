// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Raw access to request- and response-building primitives used internally by openband.
//!
//! The functions and types exposed in this module allow you to access BAND API functions that
//! aren't currently wrapped by openband, or to provide parameters that openband doesn't currently
//! use. These functions also allow you to have more power in how you process the data returned by
//! the service. In return, much more knowledge of the BAND API is required to effectively use
//! these functions.
//!
//! The functions in this module can be divided into two categories: assembling a request, and
//! executing it to get a response. The functions that create `Request`s all require a `Token`,
//! like the rest of openband, so the access token can be attached to the call. They also take a
//! `ParamList` instance, which is used to store parameters to the API call. These correspond to
//! the parameters listed on the API Reference page for the given endpoint you would like to call.
//!
//! Once you have a `Request`, you can hand it to the `response_*` functions in this module to
//! process it. Which one you select depends on how much processing you want openband to do with
//! the response.
//!
//! * At the most hands-off end, there's `response_future`, which is a small wrapper that just
//!   starts the request and hands off the `ResponseFuture` from `hyper` to give you the most
//!   power over handling the response data.
//! * In the middle, there's `response_raw_bytes`, which returns the headers and response body
//!   after inspecting the status code, content type, and error envelope.
//! * Finally there's `response_json`, which picks up from `response_raw_bytes` to peel off the
//!   `result_data` envelope and deserialize the payload into the target type.
//!
//! Two parameters the wrapped endpoints accept but openband doesn't set are reachable this way:
//! the `locale` parameter of the posts listing, and the opaque paging parameters handed out in
//! [`post::Paging`][crate::post::Paging]. For example, to pull the page of posts that follows one
//! you've already loaded:
//!
//! ```rust,no_run
//! # use openband::Token;
//! # #[tokio::main]
//! # async fn main() {
//! # let token: Token = unimplemented!();
//! use openband::post::PostPage;
//! use openband::raw::{request_get, response_json, ParamList};
//!
//! let page = openband::post::posts_of("AABx1QTTqqGcNCp4H1Ds9Q", &token).await.unwrap();
//!
//! if let Some(next) = page.paging.next_params {
//!     let mut params = ParamList::new();
//!     for (key, value) in next {
//!         // paging values arrive as JSON scalars; echo them back as strings
//!         match value.as_str() {
//!             Some(s) => params.add_param_ref(key, s.to_string()),
//!             None => params.add_param_ref(key, value.to_string()),
//!         }
//!     }
//!
//!     let req = request_get("https://openapi.band.us/v2/band/posts", &token, Some(&params));
//!     let older: PostPage = response_json(req).await.unwrap();
//! }
//! # }
//! ```

pub use crate::common::Headers;
pub use crate::common::ParamList;

pub use crate::auth::raw::get as request_get;
pub use crate::auth::raw::post as request_post;

pub use crate::common::get_response as response_future;
pub use crate::common::raw_request as response_raw_bytes;
pub use crate::common::request_with_json_response as response_json;
