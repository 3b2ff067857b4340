// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//since this is going to get included in examples that might not use everything, clear out warnings
//that are unnecessary
#![allow(dead_code)]

//This is not an example that can be built with cargo! This is some helper code for the other
//examples so they can load access tokens from the same place.

use std::io::{Read, Write};

pub struct Config {
    pub token: openband::Token,
    pub user_key: String,
}

impl Config {
    pub async fn load() -> Self {
        //IMPORTANT: make an app for yourself at developers.band.us and get your client
        //ID/secret into these files; these examples won't work without them
        let client_id = include_str!("client_id").trim();
        let client_secret = include_str!("client_secret").trim();

        let con_token = openband::KeyPair::new(client_id, client_secret);

        if let Some(config) = Config::load_cached().await {
            config
        } else {
            Config::authorize(&con_token).await
        }
    }

    async fn load_cached() -> Option<Config> {
        let mut contents = String::new();
        let mut f = std::fs::File::open("band_settings").ok()?;
        f.read_to_string(&mut contents).ok()?;

        let mut iter = contents.split('\n');
        let user_key = iter.next()?.to_string();
        let token = openband::Token::new(iter.next()?.to_string());

        match openband::profile::show(&token).await {
            Ok(profile) => {
                println!("Welcome back, {}!", profile.name);
                Some(Config { token, user_key })
            }
            Err(err) => {
                println!("We've hit an error using your old token: {:?}", err);
                println!("We'll have to reauthorize before continuing.");
                std::fs::remove_file("band_settings").unwrap();
                None
            }
        }
    }

    async fn authorize(con_token: &openband::KeyPair) -> Config {
        const REDIRECT_URI: &str = "http://localhost:8000/";

        println!("Go to the following URL, approve access, and paste back the URL your browser");
        println!("gets redirected to:");
        println!("{}", openband::authorize_url(con_token, REDIRECT_URI));

        let mut redirect = String::new();
        std::io::stdin().read_line(&mut redirect).unwrap();
        println!();

        //accept either the full redirected URL or just the bare code
        let code = openband::auth::extract_code(redirect.trim())
            .unwrap_or_else(|_| redirect.trim().to_string());

        let (token, user_key) = openband::access_token(con_token, code).await.unwrap();

        let mut contents = String::new();
        contents.push_str(&user_key);
        contents.push('\n');
        contents.push_str(token.access_key());

        let mut f = std::fs::File::create("band_settings").unwrap();
        f.write_all(contents.as_bytes()).unwrap();

        let profile = openband::profile::show(&token).await.unwrap();
        println!("Welcome, {}, let's get this show on the road!", profile.name);

        Config { token, user_key }
    }
}

pub fn print_post(post: &openband::post::Post) {
    println!(
        "{} ({}) posted at {}",
        post.author.name,
        post.author.role,
        post.created_at.with_timezone(&chrono::Local)
    );

    println!("{}", post.content);

    if !post.photos.is_empty() {
        println!("--with {} attached photo(s)", post.photos.len());
    }

    for comment in &post.latest_comments {
        if let Some(ref body) = comment.body {
            println!("--{}: {}", comment.author.name, body);
        }
    }

    println!(
        "--{} comments, {} emotions",
        post.comment_count, post.emotion_count
    );
}
