//! # tel-input
//!
//! The non-UI core of a country-aware telephone number input: a country
//! catalog with dial codes and area codes, country inference from typed
//! numbers, country-list search, and a state controller that emits
//! normalized change records to a host form.
//!
//! Phone number parsing, validation and formatting are delegated to the
//! [`phonenumber`] crate; this crate owns the state wiring around it.
//!
//! ## Quick Start
//!
//! ```rust
//! use tel_input::{Emission, PhoneInput, PhoneInputConfig};
//!
//! let config = PhoneInputConfig::builder()
//!     .preferred_countries(["us", "gb"])
//!     .build();
//! let mut input = PhoneInput::new(config);
//!
//! // Typing a Toronto number auto-selects Canada over the US.
//! match input.on_input("+1 416 555 0100") {
//!     Emission::Value(data) => {
//!         assert_eq!(data.country_code, "CA");
//!         assert_eq!(data.dial_code, "+1");
//!     }
//!     other => panic!("expected a change record, got {other:?}"),
//! }
//!
//! // Searching narrows the dropdown without ever leaving it blank.
//! input.search_country("ca");
//! assert!(input.filtered_countries().iter().any(|c| c.iso2 == "ca"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! PhoneInput                (state controller, change propagation)
//!     │
//!     ├── CountryCatalog    (embedded table, restriction, preferred)
//!     │       └── resolve   (calling code + area codes -> ISO2)
//!     ├── SearchState       (prefix filter, sticky on empty result)
//!     ├── parser            (phonenumber adapter)
//!     └── PlaceholderLoader (async example-number fetch)
//! ```
//!
//! ## Features
//!
//! - `tracing` - tracing instrumentation (enabled by default)

pub mod country;
pub mod errors;
pub mod input;
pub mod parser;
pub mod placeholder;
pub mod search;
pub mod types;
pub mod validator;

// Re-export commonly used types at the crate root
pub use country::{Country, CountryCatalog, resolve};
pub use errors::PlaceholderError;
pub use input::{Emission, PhoneInput, PhoneInputConfig, PhoneInputConfigBuilder, is_allowed_key};
pub use placeholder::{ExampleNumbers, PlaceholderLoader, PlaceholderLoaderBuilder};
pub use search::{SearchState, filter_countries};
pub use types::{ChangeData, DialCode, PhoneInputValue, PhoneNumberFormat, SearchCountryField};
pub use validator::{ValidationErrors, phone_number_validator};
