//! Basic usage: write values, observe change records and auto-selection.
//!
//! # Running
//!
//! ```bash
//! cargo run --example basic_usage
//! ```

use tel_input::{Emission, PhoneInput, PhoneInputConfig, PhoneInputValue};

fn main() {
    let config = PhoneInputConfig::builder()
        .preferred_countries(["us", "gb"])
        .build();
    let mut input = PhoneInput::new(config);

    input.register_on_change(Box::new(|value| match value {
        Some(data) => println!(
            "host form <- number={} country={} dial={}",
            data.number, data.country_code, data.dial_code
        ),
        None => println!("host form <- null"),
    }));

    println!("selected at init: {}", input.selected_country().name);

    // A Toronto number flips the selection from the US to Canada.
    input.on_input("+1 416 555 0100");
    println!("after Toronto number: {}", input.selected_country().name);

    // A Manhattan number falls back to the main +1 country.
    input.on_input("+1 212 555 0100");
    println!("after Manhattan number: {}", input.selected_country().name);

    // Clearing propagates null, never an empty record.
    match input.write_value(PhoneInputValue::from("")) {
        Emission::Cleared => println!("cleared"),
        other => println!("unexpected: {other:?}"),
    }
}
