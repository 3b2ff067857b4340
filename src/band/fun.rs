// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::common::*;
use crate::error::Result;
use crate::{auth, links};

use super::*;

/// Lookup the bands the authenticated user belongs to.
pub async fn list(token: &auth::Token) -> Result<Vec<Band>> {
    let req = get(links::bands::LIST, token, None);

    let list = request_with_json_response::<BandList>(req).await?;

    Ok(list.bands)
}
