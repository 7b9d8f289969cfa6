//! Fetch the example-number document and show per-country placeholders.
//!
//! # Running
//!
//! ```bash
//! cargo run --example placeholders
//! ```

use std::time::Duration;
use tel_input::{PhoneInput, PhoneInputConfig, PlaceholderLoader};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = PhoneInputConfig::builder()
        .specified_countries(["us", "gb", "de", "fr", "jp"])
        .selected_country_iso("gb")
        .build();
    let mut input = PhoneInput::new(config);

    // Cancel on teardown; here tied to Ctrl+C.
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        token.cancel();
    });

    let loader = PlaceholderLoader::builder()
        .timeout(Duration::from_secs(10))
        .cancellation_token(cancel)
        .build()?;

    input.load_placeholders(&loader).await;

    for country in input.countries() {
        println!("{:>4}  {:<16} {}", country.iso2, country.name, country.placeholder);
    }
    println!("placeholder for selection: {}", input.resolve_placeholder());

    Ok(())
}
