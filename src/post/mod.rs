// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Structs and methods for working with posts on a band's feed.
//!
//! ## Types
//!
//! - `Post`/`Author`/`Photo`/`Comment`: returned by the lookup functions in this module, these
//!   types describe a post on a band's feed and the content attached to it.
//! - `PostPage`/`Paging`: returned by `posts_of`, a single page of a band's feed along with the
//!   opaque parameter sets the service hands out for reaching the neighboring pages.
//! - `PostDraft`: This is what you use to write a new post.
//! - `NewPost`: returned by `PostDraft::send`, the keys of the freshly created post.
//!
//! ## Functions
//!
//! - `posts_of`: the latest page of posts on a band's feed.
//! - `show`: a single post, looked up by its key.

use std::borrow::Cow;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::common::*;
use crate::error::Result;
use crate::{auth, links};

mod fun;

pub use self::fun::*;

/// Represents the band member that authored a post, photo, or comment.
#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    /// The display name the author goes by within the band.
    pub name: String,
    /// The author's self-description within the band.
    pub description: String,
    /// The author's role within the band, e.g. `leader` or `member`. Kept as the raw string the
    /// service sent, since the set of roles is service-defined.
    pub role: String,
    /// A URL pointing to the author's profile image.
    pub profile_image_url: String,
    /// The opaque key issued by the service for this user.
    pub user_key: String,
}

impl Author {
    /// Whether this author leads the band the content was posted in.
    pub fn is_leader(&self) -> bool {
        self.role == "leader"
    }
}

/// Represents a photo attached to a post.
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    /// The photo's width, in pixels.
    pub width: i32,
    /// The photo's height, in pixels.
    pub height: i32,
    /// The UTC timestamp for when the photo was uploaded.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// A URL pointing to the photo itself.
    pub url: String,
    /// The member that uploaded the photo.
    pub author: Author,
    /// The key of the album the photo was filed into, if any.
    #[serde(default)]
    pub photo_album_key: Option<String>,
    /// The opaque key issued by the service for this photo.
    pub photo_key: String,
    /// The number of comments left on the photo.
    pub comment_count: i32,
    /// The number of emotions ("likes") left on the photo.
    pub emotion_count: i32,
    /// Whether this entry is the thumbnail of a video rather than a plain photo.
    pub is_video_thumbnail: bool,
}

/// Represents a comment left on a post.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    /// The text of the comment, if it has any.
    #[serde(default)]
    pub body: Option<String>,
    /// The member that wrote the comment.
    pub author: Author,
    /// The UTC timestamp for when the comment was written.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Represents a single post on a band's feed.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    /// The text of the post.
    pub content: String,
    /// The member that wrote the post.
    pub author: Author,
    /// The opaque key issued by the service for this post.
    pub post_key: String,
    /// The key of the band the post was written in.
    pub band_key: String,
    /// The UTC timestamp for when the post was written.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// The number of comments left on the post.
    pub comment_count: i32,
    /// The number of emotions ("likes") left on the post.
    pub emotion_count: i32,
    /// The photos attached to the post.
    #[serde(default)]
    pub photos: Vec<Photo>,
    /// The most recent comments left on the post. The feed listing carries only a handful of
    /// them; `comment_count` has the full tally.
    #[serde(default)]
    pub latest_comments: Vec<Comment>,
    /// The number of members that have read the post. Only present when the post was looked up
    /// individually through [`show`].
    #[serde(default)]
    pub post_read_count: Option<i32>,
}

/// The parameter sets the service hands out for reaching the pages neighboring a [`PostPage`].
///
/// These are opaque key/value sets meant to be echoed back to the listing endpoint verbatim.
/// This library doesn't walk pages itself; if you need an older page, hand the parameters to
/// [`crate::raw::request_get`] as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paging {
    /// Parameters that reach the previous (newer) page, if there is one.
    #[serde(default)]
    pub previous_params: Option<HashMap<String, Value>>,
    /// Parameters that reach the next (older) page, if there is one.
    #[serde(default)]
    pub next_params: Option<HashMap<String, Value>>,
}

/// A single page of a band's feed.
#[derive(Debug, Clone, Deserialize)]
pub struct PostPage {
    /// The posts on this page, newest first.
    #[serde(default)]
    pub items: Vec<Post>,
    /// Parameter sets for the neighboring pages.
    #[serde(default)]
    pub paging: Paging,
}

/// The keys of a freshly created post, as returned by [`PostDraft::send`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    /// The key of the new post.
    pub post_key: String,
    /// The key of the band it was posted to.
    pub band_key: String,
}

/// Represents an in-progress post before it is sent.
///
/// This is your entry point to writing new posts to a band. To begin, make a new `PostDraft` by
/// calling `new` with the target band's key and your desired text:
///
/// ```rust,no_run
/// use openband::post::PostDraft;
///
/// let draft = PostDraft::new("AABx1QTTqqGcNCp4H1Ds9Q", "This is an example post!");
/// ```
///
/// As-is, the draft won't do anything until you call `send` to post it:
///
/// ```rust,no_run
/// # use openband::Token;
/// # #[tokio::main]
/// # async fn main() {
/// # let token: Token = unimplemented!();
/// # use openband::post::PostDraft;
/// # let draft = PostDraft::new("AABx1QTTqqGcNCp4H1Ds9Q", "This is an example post!");
/// let posted = draft.send(&token).await.unwrap();
/// println!("posted as {}", posted.post_key);
/// # }
/// ```
///
/// The only option to set beyond the text is `do_push`, which asks the service to send the band's
/// members a push notification about the post:
///
/// ```rust,no_run
/// # use openband::post::PostDraft;
/// let draft = PostDraft::new("AABx1QTTqqGcNCp4H1Ds9Q", "Meeting moved up to 7pm!")
///     .do_push(true);
/// ```
#[derive(Debug, Clone)]
pub struct PostDraft<'a> {
    /// The key of the band to post to.
    pub band_key: Cow<'a, str>,
    /// The text of the draft post.
    pub content: Cow<'a, str>,
    /// If present, whether the band's members should receive a push notification about the post.
    /// The service defaults to not pushing.
    pub do_push: Option<bool>,
}

impl<'a> PostDraft<'a> {
    /// Creates a new `PostDraft` targeting the given band with the given text.
    pub fn new(band_key: impl Into<Cow<'a, str>>, content: impl Into<Cow<'a, str>>) -> Self {
        PostDraft {
            band_key: band_key.into(),
            content: content.into(),
            do_push: None,
        }
    }

    /// Sets whether the band's members should receive a push notification about the post.
    pub fn do_push(self, do_push: bool) -> Self {
        PostDraft {
            do_push: Some(do_push),
            ..self
        }
    }

    fn to_params(&self) -> ParamList {
        ParamList::new()
            .add_param("band_key", self.band_key.to_string())
            .add_param("content", self.content.to_string())
            .add_opt_param("do_push", self.do_push.map_string())
    }

    /// Send the assembled post to the band, as the authenticated user.
    pub async fn send(&self, token: &auth::Token) -> Result<NewPost> {
        let req = post(links::posts::CREATE, token, Some(&self.to_params()));

        request_with_json_response(req).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike, Weekday};

    use crate::common::parse_envelope;
    use crate::common::tests::load_file;

    use super::{NewPost, Post, PostDraft, PostPage};

    #[test]
    fn parse_feed_page() {
        let content = load_file("sample_payloads/posts.json");
        let page: PostPage = parse_envelope(content.as_bytes()).unwrap();

        assert_eq!(page.items.len(), 2);

        let post = &page.items[0];
        assert_eq!(post.post_key, "AAB7aFG9xcJFZRWXmp-HxcRt");
        assert_eq!(post.band_key, "aAAbceDFg1Y9");
        assert_eq!(post.content, "Trailhead photos from Saturday are up!");
        assert_eq!(post.author.name, "Sun-mi Park");
        assert!(post.author.is_leader());
        assert_eq!(post.created_at.weekday(), Weekday::Mon);
        assert_eq!(post.created_at.year(), 2020);
        assert_eq!(post.created_at.month(), 9);
        assert_eq!(post.created_at.day(), 28);
        assert_eq!(post.created_at.hour(), 8);
        assert_eq!(post.created_at.minute(), 8);
        assert_eq!(post.created_at.second(), 53);
        assert_eq!(post.comment_count, 5);
        assert_eq!(post.emotion_count, 12);
        assert!(post.post_read_count.is_none());

        assert_eq!(post.photos.len(), 1);
        let photo = &post.photos[0];
        assert_eq!(photo.width, 1280);
        assert_eq!(photo.height, 720);
        assert_eq!(photo.photo_album_key.as_deref(), Some("AACAEJdq9rZNbYJq"));
        assert!(!photo.is_video_thumbnail);

        assert_eq!(post.latest_comments.len(), 1);
        let comment = &post.latest_comments[0];
        assert_eq!(comment.body.as_deref(), Some("Great shots!"));
        assert!(!comment.author.is_leader());

        // the second post has no attachments and no comments yet
        let post = &page.items[1];
        assert!(post.photos.is_empty());
        assert!(post.latest_comments.is_empty());

        let next = page.paging.next_params.unwrap();
        assert!(next.contains_key("after"));
        assert!(page.paging.previous_params.is_none());
    }

    #[test]
    fn parse_single_post() {
        let content = load_file("sample_payloads/post.json");
        let post: Post = parse_envelope(content.as_bytes()).unwrap();

        assert_eq!(post.post_key, "AAB7aFG9xcJFZRWXmp-HxcRt");
        assert_eq!(post.post_read_count, Some(31));
        assert_eq!(post.latest_comments.len(), 1);
    }

    #[test]
    fn parse_created_post() {
        let content = load_file("sample_payloads/new_post.json");
        let created: NewPost = parse_envelope(content.as_bytes()).unwrap();

        assert_eq!(created.post_key, "AABiOt8gyyFDIYtQrvQqrBqi");
        assert_eq!(created.band_key, "aAAbceDFg1Y9");
    }

    #[test]
    fn draft_params() {
        let draft = PostDraft::new("aAAbceDFg1Y9", "hello");
        let params = draft.to_params();

        assert_eq!(params.get("band_key").map(|v| &**v), Some("aAAbceDFg1Y9"));
        assert_eq!(params.get("content").map(|v| &**v), Some("hello"));
        assert!(params.get("do_push").is_none());

        let params = draft.do_push(true).to_params();
        assert_eq!(params.get("do_push").map(|v| &**v), Some("true"));
    }
}
