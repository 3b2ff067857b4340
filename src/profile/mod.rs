// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Structs and methods for pulling the authenticated user's profile from BAND.
//!
//! A user has one service-wide profile, and a per-band variation of it for every band they belong
//! to (members can change their display name and picture within a band). [`show`] loads the
//! service-wide profile; [`show_in_band`] loads the variation for a single band, which also says
//! when the user joined it.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::common::*;
use crate::error::Result;
use crate::{auth, links};

/// Represents the authenticated user's profile, either service-wide or scoped to one band.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    /// The opaque key issued by the service for this user.
    pub user_key: String,
    /// The user's display name. When the profile is scoped to a band, this is the name the user
    /// goes by within that band.
    pub name: String,
    /// A URL pointing to the user's profile image.
    pub profile_image_url: String,
    /// Whether the user has the BAND app connected to this account.
    pub is_app_member: bool,
    /// Whether the user accepts direct messages.
    pub message_allowed: bool,
    /// The time the user joined the band. Only present when the profile was requested through
    /// [`show_in_band`].
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub member_joined_at: Option<DateTime<Utc>>,
}

/// Lookup the authenticated user's service-wide profile.
pub async fn show(token: &auth::Token) -> Result<Profile> {
    let req = get(links::profile::SHOW, token, None);

    request_with_json_response(req).await
}

/// Lookup the authenticated user's profile within the given band.
///
/// In addition to the band-specific display name and picture, the profile loaded this way carries
/// the time the user joined the band in `member_joined_at`.
pub async fn show_in_band(band_key: impl Into<CowStr>, token: &auth::Token) -> Result<Profile> {
    let params = ParamList::new().add_param("band_key", band_key);

    let req = get(links::profile::SHOW, token, Some(&params));

    request_with_json_response(req).await
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use crate::common::parse_envelope;
    use crate::common::tests::load_file;

    use super::Profile;

    fn load_profile(path: &str) -> Profile {
        let content = load_file(path);
        parse_envelope(content.as_bytes()).unwrap()
    }

    #[test]
    fn parse_profile() {
        let profile = load_profile("sample_payloads/profile.json");

        assert_eq!(profile.user_key, "AAA4cGltaHRvbW91c2Vq30");
        assert_eq!(profile.name, "Charlie Doe");
        assert_eq!(
            profile.profile_image_url,
            "http://band.phinf.campmobile.net/2018023_16/profile.jpg"
        );
        assert!(profile.is_app_member);
        assert!(!profile.message_allowed);
        assert!(profile.member_joined_at.is_none());
    }

    #[test]
    fn parse_profile_in_band() {
        let profile = load_profile("sample_payloads/profile_band.json");

        // 1542945920000 ms
        let joined = profile.member_joined_at.unwrap();
        assert_eq!(joined.year(), 2018);
        assert_eq!(joined.month(), 11);
        assert_eq!(joined.day(), 23);
        assert_eq!(joined.hour(), 4);
        assert_eq!(joined.minute(), 5);
        assert_eq!(joined.second(), 20);

        // the in-band profile can carry a different display name
        assert_eq!(profile.name, "Chuck");
    }
}
