// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Structs and methods for listing the bands a user belongs to.
//!
//! A "band" is a named group on the service; nearly everything else in the API is scoped to one
//! through its band key. The key is an opaque identifier issued by the service, and it is the
//! only stable way to refer to a band: display names are user-chosen and not unique. A common
//! pattern is to list the user's bands once and pick the one you want by name:
//!
//! ```rust,no_run
//! # use openband::Token;
//! # #[tokio::main]
//! # async fn main() {
//! # let token: Token = unimplemented!();
//! let bands = openband::band::list(&token).await.unwrap();
//!
//! let book_club = bands.iter().find(|band| band.name == "Book Club");
//!
//! if let Some(band) = book_club {
//!     println!("Book Club key: {}", band.band_key);
//! }
//! # }
//! ```

use serde::Deserialize;

mod fun;

pub use self::fun::*;

/// Represents a band the authenticated user belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct Band {
    /// The band's display name, as chosen by its members. Not unique.
    pub name: String,
    /// The opaque key issued by the service for this band. Used to scope profile, post, and
    /// listing calls to this band.
    pub band_key: String,
    /// A URL pointing to the band's cover image.
    pub cover: String,
    /// The number of members in the band.
    pub member_count: i32,
}

/// The `result_data` payload of the band-listing endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct BandList {
    #[serde(default)]
    pub bands: Vec<Band>,
}

#[cfg(test)]
mod tests {
    use crate::common::parse_envelope;
    use crate::common::tests::load_file;

    use super::BandList;

    #[test]
    fn parse_band_list() {
        let content = load_file("sample_payloads/bands.json");
        let list: BandList = parse_envelope(content.as_bytes()).unwrap();

        assert_eq!(list.bands.len(), 3);

        let band = &list.bands[0];
        assert_eq!(band.name, "Weekly Hiking Crew");
        assert_eq!(band.band_key, "aAAbceDFg1Y9");
        assert_eq!(band.cover, "http://coresos.phinf.naver.net/a/2i5a01/cover.jpg");
        assert_eq!(band.member_count, 38);

        // display names are not unique; both copies keep their own key
        let dupes = list
            .bands
            .iter()
            .filter(|band| band.name == "Book Club")
            .collect::<Vec<_>>();
        assert_eq!(dupes.len(), 2);
        assert_ne!(dupes[0].band_key, dupes[1].band_key);
    }

    #[test]
    fn parse_empty_band_list() {
        let empty = br#"{"result_code": 1, "result_data": {"bands": []}}"#;
        let list: BandList = parse_envelope(empty).unwrap();

        assert!(list.bands.is_empty());
    }
}
