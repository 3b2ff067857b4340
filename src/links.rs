// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

pub mod auth {
    pub const AUTHORIZE: &str = "https://auth.band.us/oauth2/authorize";
    pub const ACCESS_TOKEN: &str = "https://auth.band.us/oauth2/token";
}

pub mod profile {
    pub const SHOW: &str = "https://openapi.band.us/v2/profile";
}

pub mod bands {
    pub const LIST: &str = "https://openapi.band.us/v2.1/bands";
}

pub mod posts {
    pub const LIST: &str = "https://openapi.band.us/v2/band/posts";
    pub const SHOW: &str = "https://openapi.band.us/v2/band/post";
    pub const CREATE: &str = "https://openapi.band.us/v2.2/band/post/create";
}
