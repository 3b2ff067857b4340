// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Set of structs and methods that act as a sort of internal prelude.
//!
//! The elements available in this module and its children are fairly basic building blocks that
//! the other modules all glob-import to make available as a common language. A lot of
//! infrastructure code goes in here.
//!
//! # Module contents
//!
//! ## Type Aliases
//!
//! * `hyper::header::HeaderMap<hyper::header::HeaderValue>` (re-exported as the alias `Headers`)
//! * `Cow<'static, str>` (re-exported as the alias `CowStr`)
//!
//! ## `ParamList`
//!
//! `ParamList` is a collection of parameters to a given web call. It's consumed in the auth
//! module when assembling requests, and provides some easy wrappers to consistently handle some
//! types.
//!
//! ## Request functions
//!
//! The functions `get` and `post` are re-exported here to keep people from having to qualify them
//! from `auth::raw`.
//!
//! ## Response functions
//!
//! Also in its own module, `response` contains the functions that all web calls go through: the
//! ones that execute a request, vet the status code, content type, and error envelope, and decode
//! the `result_data` payload. `request_with_json_response` is the loader used by nearly every
//! endpoint wrapper in the library.

use std::borrow::Cow;
use std::collections::HashMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, PercentEncode};

mod response;

pub use crate::auth::raw::{get, post};

pub use crate::common::response::*;

/// A set of headers returned with a response.
pub type Headers = hyper::header::HeaderMap<hyper::header::HeaderValue>;
pub type CowStr = Cow<'static, str>;

// n.b. this type is re-exported in the `raw` module - these docs are public!
/// Represents a list of parameters to a BAND API call.
///
/// This type is a wrapper around a `HashMap<Cow<'static, str>, Cow<'static, str>>` to collect a
/// set of parameter key/value pairs. These are then used to assemble a BAND API request. The `Cow`
/// type is used to avoid having to allocate a `String` if a string literal is used for a
/// parameter. All the functions that add parameters to this `ParamList` accept `impl
/// Into<Cow<'static, str>>`, meaning that either a string literal or an owned `String` may be
/// used.
///
/// Most of the functions to add parameters follow a builder pattern, so that you can assemble a
/// `ParamList` in a single statement:
///
/// ```
/// use openband::raw::ParamList;
///
/// // If you were listing the posts of a band with `GET /v2/band/posts`, you might assemble a
/// // ParamList like this...
/// let params = ParamList::new()
///     .add_param("band_key", "AABx1QTTqqGcNCp4H1Ds9Q")
///     .add_param("locale", "en_US");
/// ```
#[derive(Debug, Clone, Default, derive_more::Deref, derive_more::DerefMut, derive_more::From)]
pub struct ParamList(HashMap<Cow<'static, str>, Cow<'static, str>>);

impl ParamList {
    /// Creates a new, empty `ParamList`.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Adds the given key/value parameter to this `ParamList`.
    pub fn add_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    /// Adds the given key/value parameter to this `ParamList` only if the given value is `Some`.
    ///
    /// This can be a convenient wrapper to use in case you may or may not want to include
    /// something based on some condition. If the given value is `None`, then the `ParamList` is
    /// returned unmodified.
    pub fn add_opt_param(
        self,
        key: impl Into<Cow<'static, str>>,
        value: Option<impl Into<Cow<'static, str>>>,
    ) -> Self {
        match value {
            Some(val) => self.add_param(key.into(), val.into()),
            None => self,
        }
    }

    /// Adds the given key/value to this `ParamList` by mutating it in place, rather than consuming
    /// it as in `add_param`.
    pub fn add_param_ref(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) {
        self.0.insert(key.into(), value.into());
    }

    /// Merge the parameters from the given `ParamList` into this one.
    pub(crate) fn combine(&mut self, other: ParamList) {
        self.0.extend(other.0);
    }

    /// Renders this `ParamList` as an `application/x-www-form-urlencoded` string.
    ///
    /// The key/value pairs are printed as `key1=value1&key2=value2`, with all keys and values
    /// being percent-encoded according to the service's requirements.
    pub fn to_urlencoded(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

// Helper trait to stringify the contents of an Option
pub(crate) trait MapString {
    fn map_string(&self) -> Option<String>;
}

impl<T: std::fmt::Display> MapString for Option<T> {
    fn map_string(&self) -> Option<String> {
        self.as_ref().map(|v| v.to_string())
    }
}

/// Percent-encodes the given string based on RFC 3986, Section 2.1.
///
/// Every *byte* that is not an ASCII number or letter, or one of the ASCII characters `-`, `.`,
/// `_`, or `~`, is replaced with a percent sign (`%`) and the byte value in hexadecimal. The
/// `percent_encoding` crate does not ship an encoding set that matches this exactly, so it is
/// recreated here.
pub fn percent_encode(src: &str) -> PercentEncode {
    lazy_static::lazy_static! {
        static ref ENCODER: AsciiSet = percent_encoding::NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');
    }
    utf8_percent_encode(src, &*ENCODER)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Read;

    pub(crate) fn load_file(path: &str) -> String {
        let mut file = File::open(path).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn encode_unreserved() {
        assert_eq!(
            percent_encode("Ladies + Gentlemen").to_string(),
            "Ladies%20%2B%20Gentlemen"
        );
        assert_eq!(percent_encode("-._~abcXYZ019").to_string(), "-._~abcXYZ019");
        assert_eq!(percent_encode("밴드").to_string(), "%EB%B0%B4%EB%93%9C");
    }

    #[test]
    fn urlencoded_params() {
        let params = ParamList::new().add_param("content", "hello world");

        assert_eq!(params.to_urlencoded(), "content=hello%20world");

        let params = params.add_opt_param("do_push", None::<String>);
        assert_eq!(params.len(), 1);
    }
}
