// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

mod common;

#[tokio::main]
async fn main() {
    let config = common::Config::load().await;

    let profile = openband::profile::show(&config.token).await.unwrap();
    println!("{} (user key {})", profile.name, config.user_key);
    println!();

    let bands = openband::band::list(&config.token).await.unwrap();
    println!("Your bands:");
    for band in &bands {
        println!("  {} ({} members)", band.name, band.member_count);
    }

    //pick a band by display name and look at our profile within it
    if let Some(name) = std::env::args().nth(1) {
        println!();
        match bands.iter().find(|band| band.name == name) {
            Some(band) => {
                let in_band = openband::profile::show_in_band(band.band_key.clone(), &config.token)
                    .await
                    .unwrap();

                match in_band.member_joined_at {
                    Some(joined) => println!(
                        "In {} you go by {}, since {}",
                        band.name,
                        in_band.name,
                        joined.with_timezone(&chrono::Local).format("%Y-%m-%d")
                    ),
                    None => println!("In {} you go by {}", band.name, in_band.name),
                }
            }
            None => println!("You don't seem to have a band called {}", name),
        }
    }
}
