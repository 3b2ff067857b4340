// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use yansi::Paint;

mod common;

#[tokio::main]
async fn main() {
    let config = common::Config::load().await;

    let name = std::env::args()
        .nth(1)
        .expect("expected the name of a band to load posts for");

    let bands = openband::band::list(&config.token).await.unwrap();
    let band = bands
        .into_iter()
        .find(|band| band.name == name)
        .expect("you don't seem to have a band with that name");

    println!();
    println!("{}", Paint::blue(format!("Latest posts in {}:", band.name)));

    let page = openband::post::posts_of(band.band_key, &config.token)
        .await
        .unwrap();

    for post in &page.items {
        println!();
        common::print_post(post);
    }

    if page.paging.next_params.is_some() {
        println!();
        println!(
            "{}",
            Paint::new("(there are older posts beyond this page)").dimmed()
        );
    }
}
