//! Declares a record with every member form, then round-trips it through JSON.
//!
//! Run with `RUST_LOG=debug cargo run --example client`.

use codable::{codable_block, from_value, to_value, CodingKey, Value};
use tracing::{debug, info};

codable_block! {
    #[derive(Debug)]
    struct A {
        #[codable_key("some_name")]
        name: String,
        #[codable_key("myFavouriteBool")]
        flag: bool,
        number: i64,
        #[uncodable_key]
        number_of_shows: i64,
        compute_str: String {
            String::new()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let keys: Vec<&str> = ACodingKeys::ALL.iter().map(|k| k.string_value()).collect();
    info!(?keys, "key mapping");

    let a = A {
        name: "Severance".into(),
        flag: true,
        number: 2,
        number_of_shows: 9,
    };
    debug!(
        computed = %a.compute_str(),
        shows = a.number_of_shows,
        "members left out of the mapping"
    );

    let value = to_value(&a)?;
    let json = serde_json::to_string_pretty(&value)?;
    println!("{}", json);

    let parsed: Value = serde_json::from_str(&json)?;
    let decoded: A = from_value(&parsed)?;
    info!(?decoded, "decoded");

    Ok(())
}
