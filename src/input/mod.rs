//! The input state controller and its configuration.

mod config;
mod controller;
mod keys;

pub use config::{PhoneInputConfig, PhoneInputConfigBuilder};
pub use controller::{
    ChangeCallback, CountryChangeCallback, Emission, PhoneInput, TouchedCallback,
};
pub use keys::is_allowed_key;
