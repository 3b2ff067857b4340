// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::common::*;
use crate::error::Result;
use crate::{auth, links};

use super::*;

/// Lookup the latest page of posts on the given band's feed.
///
/// The page also carries the opaque parameter sets for reaching its neighbors; see [`Paging`] for
/// how to use them.
pub async fn posts_of(band_key: impl Into<CowStr>, token: &auth::Token) -> Result<PostPage> {
    let params = ParamList::new().add_param("band_key", band_key);

    let req = get(links::posts::LIST, token, Some(&params));

    request_with_json_response(req).await
}

/// Lookup a single post by its key.
///
/// Unlike the entries in a feed page, a post looked up this way also carries its read count.
pub async fn show(
    band_key: impl Into<CowStr>,
    post_key: impl Into<CowStr>,
    token: &auth::Token,
) -> Result<Post> {
    let params = ParamList::new()
        .add_param("band_key", band_key)
        .add_param("post_key", post_key);

    let req = get(links::posts::SHOW, token, Some(&params));

    request_with_json_response(req).await
}
