//! Country dropdown search with the sticky empty-result policy.
//!
//! # Running
//!
//! ```bash
//! cargo run --example country_search
//! ```

use tel_input::{PhoneInput, PhoneInputConfig};

fn print_filtered(input: &PhoneInput, label: &str) {
    let names: Vec<&str> = input
        .filtered_countries()
        .iter()
        .take(8)
        .map(|c| c.name.as_str())
        .collect();
    println!(
        "{label}: {} matches, first: {names:?}",
        input.filtered_countries().len()
    );
}

fn main() {
    let mut input = PhoneInput::new(PhoneInputConfig::default());
    print_filtered(&input, "no query");

    // Prefix match over ISO2, name and dial code.
    input.search_country("ca");
    print_filtered(&input, "query 'ca'");

    input.search_country("44");
    print_filtered(&input, "query '44'");

    // A query matching nothing keeps the previous list on screen.
    input.search_country("44xyz");
    print_filtered(&input, "query '44xyz' (sticky)");

    input.search_country("");
    print_filtered(&input, "query cleared");
}
