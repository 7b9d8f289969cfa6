//! The input state controller.

use super::config::PhoneInputConfig;
use crate::country::{Country, CountryCatalog, resolve};
use crate::parser;
use crate::search::SearchState;
use crate::types::{ChangeData, PhoneInputValue, PhoneNumberFormat};
use std::fmt;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Outcome of a trigger, mirrored to the registered change callback.
///
/// `Cleared` corresponds to the host form receiving `null` ("no valid
/// value"); `None` means the trigger propagated nothing at all, which is
/// distinct from clearing.
#[derive(Debug, Clone, PartialEq)]
pub enum Emission {
    /// Nothing was propagated.
    None,
    /// The value was cleared or is invalid; the host receives `null`.
    Cleared,
    /// An accepted edit; the host receives the change record.
    Value(ChangeData),
}

/// Callback receiving change records, `None` standing for the host's `null`.
pub type ChangeCallback = Box<dyn FnMut(Option<ChangeData>) + Send>;
/// Callback notified when the selected country changes by pick or init.
pub type CountryChangeCallback = Box<dyn FnMut(&Country) + Send>;
/// Callback notified on first user interaction.
pub type TouchedCallback = Box<dyn FnMut() + Send>;

/// The authoritative state of one telephone input instance.
///
/// Owns the (possibly restricted) catalog, the preferred sublist, the
/// search state, the current selection and raw text. All state lives on
/// the instance; there is no process-wide state. Reacts to three triggers:
/// external value writes, user keystrokes, and user country picks.
///
/// # Example
///
/// ```rust
/// use tel_input::{Emission, PhoneInput, PhoneInputConfig};
///
/// let mut input = PhoneInput::new(PhoneInputConfig::default());
/// let emission = input.on_input("+1 416 555 0100");
/// assert_eq!(input.selected_country().iso2, "ca");
/// assert!(matches!(emission, Emission::Value(_)));
/// ```
pub struct PhoneInput {
    config: PhoneInputConfig,
    catalog: CountryCatalog,
    preferred: Vec<Country>,
    search: SearchState,
    selected_country: Country,
    phone_number: String,
    value: String,
    custom_placeholder: String,
    disabled: bool,
    on_change: Option<ChangeCallback>,
    on_country_change: Option<CountryChangeCallback>,
    on_touched: Option<TouchedCallback>,
}

impl fmt::Debug for PhoneInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneInput")
            .field("selected_country", &self.selected_country.iso2)
            .field("phone_number", &self.phone_number)
            .field("value", &self.value)
            .field("disabled", &self.disabled)
            .field("countries", &self.catalog.len())
            .finish()
    }
}

impl PhoneInput {
    /// Create an input and run the initialization sequence: restrict the
    /// catalog, resolve preferred countries, and pick the initial selection
    /// (first of preferred, else first of catalog, overridden by
    /// `selected_country_iso`).
    pub fn new(config: PhoneInputConfig) -> Self {
        let mut catalog = CountryCatalog::load();
        catalog.restrict_to(&config.specified_countries);
        let preferred = catalog.preferred(&config.preferred_countries);
        let search = SearchState::new(config.search_country_fields.clone(), catalog.countries());

        let mut input = Self {
            config,
            catalog,
            preferred,
            search,
            selected_country: Country::default(),
            phone_number: String::new(),
            value: String::new(),
            custom_placeholder: String::new(),
            disabled: false,
            on_change: None,
            on_country_change: None,
            on_touched: None,
        };

        if input.config.select_first_country {
            let first = input
                .preferred
                .first()
                .or_else(|| input.catalog.first())
                .cloned();
            if let Some(country) = first {
                input.set_selected(country);
            }
        }
        if let Some(iso2) = input.config.selected_country_iso.clone() {
            if let Some(country) = input.catalog.find(&iso2).cloned() {
                input.set_selected(country);
            }
        }

        input
    }

    // --- host-form ("control value accessor") surface -----------------------

    /// Register the callback receiving propagated values.
    pub fn register_on_change(&mut self, callback: ChangeCallback) {
        self.on_change = Some(callback);
    }

    /// Register the callback notified on first interaction.
    pub fn register_on_touched(&mut self, callback: TouchedCallback) {
        self.on_touched = Some(callback);
    }

    /// Register the callback notified when the selection changes.
    pub fn register_on_country_change(&mut self, callback: CountryChangeCallback) {
        self.on_country_change = Some(callback);
    }

    /// External value write from the host form.
    ///
    /// A structured value carries its own country context, which overrides
    /// the current selection for parsing.
    pub fn write_value(&mut self, value: PhoneInputValue) -> Emission {
        let (text, country_override) = match value {
            PhoneInputValue::Raw(text) => (text, None),
            PhoneInputValue::Structured(data) => (data.number, Some(data.country_code)),
        };
        self.phone_number = text;
        self.on_phone_number_change(country_override)
    }

    /// Enable or disable the input.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether the input is disabled.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Mark the input as touched.
    pub fn touch(&mut self) {
        if let Some(callback) = self.on_touched.as_mut() {
            callback();
        }
    }

    // --- triggers -----------------------------------------------------------

    /// User keystroke: the field now holds `text`.
    pub fn on_input(&mut self, text: &str) -> Emission {
        self.phone_number = text.to_string();
        self.on_phone_number_change(None)
    }

    /// User pick from the country dropdown.
    ///
    /// Re-parses the current text against the new country and re-emits;
    /// an empty field propagates `Cleared`. An unknown ISO2 leaves the
    /// selection unchanged.
    pub fn select_country(&mut self, iso2: &str) -> Emission {
        let Some(country) = self.catalog.find(iso2).cloned() else {
            return Emission::None;
        };
        self.set_selected(country);

        if self.phone_number.is_empty() {
            return self.propagate(Emission::Cleared);
        }

        self.value = self.phone_number.clone();
        let parsed = parser::parse_number(&self.phone_number, &self.selected_country.iso2);
        let international = parsed
            .as_ref()
            .map(|p| p.format_international())
            .unwrap_or_default();
        if self.config.include_dial_code && !international.is_empty() {
            self.value = strip_dial_code(&international).to_string();
        }

        let data = ChangeData {
            number: self.value.clone(),
            international_number: international,
            national_number: parsed
                .as_ref()
                .map(|p| p.format_national())
                .unwrap_or_default(),
            country_code: self.selected_country.iso2_upper(),
            dial_code: self.selected_country.dial_code.with_plus_prefix(),
        };
        self.propagate(Emission::Value(data))
    }

    /// Force the selection by ISO2 code, as when the host changes the
    /// `selected_country_iso` option at runtime. Re-parses any current
    /// text; an empty field propagates `Cleared`.
    pub fn set_selected_country_iso(&mut self, iso2: &str) -> Emission {
        let Some(country) = self.catalog.find(iso2).cloned() else {
            return Emission::None;
        };
        self.set_selected(country);
        if self.phone_number.is_empty() {
            self.propagate(Emission::Cleared)
        } else {
            self.on_phone_number_change(None)
        }
    }

    // --- search -------------------------------------------------------------

    /// Apply a search query to the country dropdown.
    pub fn search_country(&mut self, query: &str) {
        self.search.apply(query, self.catalog.countries());
    }

    /// The filtered dropdown list.
    pub fn filtered_countries(&self) -> &[Country] {
        self.search.filtered()
    }

    // --- accessors ----------------------------------------------------------

    /// The full (possibly restricted) catalog.
    pub fn countries(&self) -> &[Country] {
        self.catalog.countries()
    }

    /// Countries pinned above the list.
    pub fn preferred_countries(&self) -> &[Country] {
        &self.preferred
    }

    /// The active country. Never unset after construction with a non-empty
    /// catalog and `select_first_country` or a forced selection.
    pub fn selected_country(&self) -> &Country {
        &self.selected_country
    }

    /// The raw text as typed or written.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// The display value, dial-code-stripped under `include_dial_code`.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The configuration this input was built with.
    pub fn config(&self) -> &PhoneInputConfig {
        &self.config
    }

    /// Render a change record for display, honoring `number_format` and
    /// `include_dial_code`. Falls back to the raw number when the record
    /// carries no formatted rendering.
    pub fn display_value(&self, data: &ChangeData) -> String {
        let formatted = match self.config.number_format {
            PhoneNumberFormat::International => &data.international_number,
            PhoneNumberFormat::National => &data.national_number,
        };
        if formatted.is_empty() {
            data.number.clone()
        } else if self.config.include_dial_code {
            strip_dial_code(formatted).to_string()
        } else {
            formatted.clone()
        }
    }

    /// Override the computed placeholder.
    pub fn set_custom_placeholder(&mut self, placeholder: impl Into<String>) {
        self.custom_placeholder = placeholder.into();
    }

    /// The placeholder to display: the custom override if set, otherwise
    /// the selected country's example number, dial-code-stripped under
    /// `include_dial_code`.
    pub fn resolve_placeholder(&self) -> String {
        if !self.custom_placeholder.is_empty() {
            return self.custom_placeholder.clone();
        }
        let placeholder = &self.selected_country.placeholder;
        if self.config.include_dial_code {
            strip_dial_code(placeholder).to_string()
        } else {
            placeholder.clone()
        }
    }

    /// Load example-number placeholders into the catalog, degrading to
    /// empty placeholders on any fetch failure. A no-op unless
    /// `enable_placeholder` is set.
    pub async fn load_placeholders(&mut self, loader: &crate::placeholder::PlaceholderLoader) {
        if !self.config.enable_placeholder {
            return;
        }
        loader.load_into(self.catalog.countries_mut()).await;
        if let Some(selected) = self.catalog.find(&self.selected_country.iso2).cloned() {
            self.selected_country = selected;
        }
        // Re-run any active search so an open dropdown keeps its filter.
        let query = self.search.query().to_string();
        self.search.apply(&query, self.catalog.countries());
        self.preferred = self.catalog.preferred(&self.config.preferred_countries);
    }

    // --- internals ----------------------------------------------------------

    fn set_selected(&mut self, country: Country) {
        self.selected_country = country;
        if let Some(callback) = self.on_country_change.as_mut() {
            callback(&self.selected_country);
        }
    }

    /// The shared value-change pipeline behind writes and keystrokes.
    fn on_phone_number_change(&mut self, country_override: Option<String>) -> Emission {
        self.value = self.phone_number.clone();
        let mut iso2 = country_override
            .map(|c| c.to_lowercase())
            .unwrap_or_else(|| self.selected_country.iso2.clone());
        let parsed = parser::parse_number(&self.phone_number, &iso2);

        if self.config.enable_auto_country_select {
            if let Some(parsed) = &parsed {
                let detected = resolve(
                    parsed.calling_code(),
                    &parsed.national_digits(),
                    self.catalog.countries(),
                )
                .map(str::to_string);
                // An unknown calling code keeps the prior selection.
                if let Some(detected) = detected {
                    if detected != self.selected_country.iso2 {
                        if let Some(country) = self.catalog.find(&detected).cloned() {
                            #[cfg(feature = "tracing")]
                            debug!(from = %self.selected_country.iso2, to = %detected, "Auto-selected country");
                            self.selected_country = country;
                        }
                    }
                    iso2 = detected;
                }
            }
        }

        if self.value.is_empty() {
            return self.propagate(Emission::Cleared);
        }
        if self.value.chars().count() < 2 {
            return Emission::None;
        }
        let Some(parsed) = parsed else {
            // Parse failure: selection untouched, nothing propagated.
            return Emission::None;
        };

        let international = parsed.format_international();
        if self.config.include_dial_code && !international.is_empty() {
            self.value = strip_dial_code(&international).to_string();
        }

        let data = ChangeData {
            number: self.value.clone(),
            international_number: international,
            national_number: parsed.format_national(),
            country_code: iso2.to_uppercase(),
            dial_code: self.selected_country.dial_code.with_plus_prefix(),
        };
        self.propagate(Emission::Value(data))
    }

    fn propagate(&mut self, emission: Emission) -> Emission {
        if let Some(callback) = self.on_change.as_mut() {
            match &emission {
                Emission::None => {}
                Emission::Cleared => callback(None),
                Emission::Value(data) => callback(Some(data.clone())),
            }
        }
        emission
    }
}

/// Strip the `+<dialcode> ` prefix from an internationally formatted
/// number by cutting at the first space. Numbers without a space after the
/// dial code are returned unmodified, leading '+' included.
fn strip_dial_code(number: &str) -> &str {
    match (number.starts_with('+'), number.find(' ')) {
        (true, Some(space)) => &number[space + 1..],
        _ => number,
    }
}
