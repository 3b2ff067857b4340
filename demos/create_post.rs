// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use structopt::StructOpt;

mod common;

#[derive(Debug, StructOpt)]
#[structopt(name = "create_post", about = "Write a post to one of your bands.")]
struct Args {
    ///The display name of the band to post to.
    band: String,
    ///The text of the post.
    message: String,
    ///Send the band's members a push notification about the post.
    #[structopt(long)]
    push: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::from_args();
    let config = common::Config::load().await;

    let bands = openband::band::list(&config.token).await.unwrap();
    let band = match bands.iter().find(|band| band.name == args.band) {
        Some(band) => band,
        None => {
            println!("You don't seem to have a band called {}", args.band);
            return;
        }
    };

    let posted = openband::post::PostDraft::new(band.band_key.clone(), args.message.clone())
        .do_push(args.push)
        .send(&config.token)
        .await
        .unwrap();

    println!("Posted to {}: post key {}", band.name, posted.post_key);
}
