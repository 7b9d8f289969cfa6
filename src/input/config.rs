//! Input configuration types.

use crate::types::{PhoneNumberFormat, SearchCountryField};

/// Configuration for a [`PhoneInput`](crate::PhoneInput) instance.
///
/// Mirrors the options surface the host exposes; everything has a sensible
/// default so `PhoneInputConfig::default()` gives a working input.
#[derive(Debug, Clone)]
pub struct PhoneInputConfig {
    /// ISO2 codes pinned above the country list, in the given order.
    pub preferred_countries: Vec<String>,
    /// Restrict the catalog to these ISO2 codes. Empty means no restriction.
    pub specified_countries: Vec<String>,
    /// Initial or forced selection by ISO2 code.
    pub selected_country_iso: Option<String>,
    /// Select the first country (preferred first) at initialization.
    pub select_first_country: bool,
    /// Strip the dial code from the displayed and propagated value.
    pub include_dial_code: bool,
    /// Re-run country detection on every accepted edit.
    pub enable_auto_country_select: bool,
    /// Load example-number placeholders at startup.
    pub enable_placeholder: bool,
    /// Fields the country search matches against.
    pub search_country_fields: Vec<SearchCountryField>,
    /// Display format for parsed numbers.
    pub number_format: PhoneNumberFormat,
}

impl Default for PhoneInputConfig {
    fn default() -> Self {
        Self {
            preferred_countries: Vec::new(),
            specified_countries: Vec::new(),
            selected_country_iso: None,
            select_first_country: true,
            include_dial_code: false,
            enable_auto_country_select: true,
            enable_placeholder: true,
            search_country_fields: vec![SearchCountryField::All],
            number_format: PhoneNumberFormat::International,
        }
    }
}

impl PhoneInputConfig {
    /// Create a new builder for PhoneInputConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tel_input::PhoneInputConfig;
    ///
    /// let config = PhoneInputConfig::builder()
    ///     .preferred_countries(["us", "gb"])
    ///     .include_dial_code(true)
    ///     .build();
    ///
    /// assert!(config.include_dial_code);
    /// assert_eq!(config.preferred_countries, ["us", "gb"]);
    /// ```
    pub fn builder() -> PhoneInputConfigBuilder {
        PhoneInputConfigBuilder::default()
    }
}

/// Builder for [`PhoneInputConfig`].
#[derive(Debug, Clone, Default)]
pub struct PhoneInputConfigBuilder {
    config: PhoneInputConfig,
}

impl PhoneInputConfigBuilder {
    /// Create a builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin these countries above the list, in order.
    pub fn preferred_countries<I, S>(mut self, iso2s: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.preferred_countries = iso2s.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict the catalog to these countries.
    pub fn specified_countries<I, S>(mut self, iso2s: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.specified_countries = iso2s.into_iter().map(Into::into).collect();
        self
    }

    /// Force the initial selection.
    pub fn selected_country_iso(mut self, iso2: impl Into<String>) -> Self {
        self.config.selected_country_iso = Some(iso2.into());
        self
    }

    /// Whether to select the first country at initialization.
    ///
    /// Default: true
    pub fn select_first_country(mut self, enabled: bool) -> Self {
        self.config.select_first_country = enabled;
        self
    }

    /// Whether to strip the dial code from the propagated value.
    ///
    /// Default: false
    pub fn include_dial_code(mut self, enabled: bool) -> Self {
        self.config.include_dial_code = enabled;
        self
    }

    /// Whether to auto-detect the country from the typed number.
    ///
    /// Default: true
    pub fn enable_auto_country_select(mut self, enabled: bool) -> Self {
        self.config.enable_auto_country_select = enabled;
        self
    }

    /// Whether to load example-number placeholders.
    ///
    /// Default: true
    pub fn enable_placeholder(mut self, enabled: bool) -> Self {
        self.config.enable_placeholder = enabled;
        self
    }

    /// Fields the country search matches against.
    ///
    /// Default: `[SearchCountryField::All]`
    pub fn search_country_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = SearchCountryField>,
    {
        self.config.search_country_fields = fields.into_iter().collect();
        self
    }

    /// Display format for parsed numbers.
    ///
    /// Default: `PhoneNumberFormat::International`
    pub fn number_format(mut self, format: PhoneNumberFormat) -> Self {
        self.config.number_format = format;
        self
    }

    /// Build the PhoneInputConfig.
    pub fn build(self) -> PhoneInputConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PhoneInputConfig::default();
        assert!(config.preferred_countries.is_empty());
        assert!(config.specified_countries.is_empty());
        assert_eq!(config.selected_country_iso, None);
        assert!(config.select_first_country);
        assert!(!config.include_dial_code);
        assert!(config.enable_auto_country_select);
        assert!(config.enable_placeholder);
        assert_eq!(config.search_country_fields, [SearchCountryField::All]);
        assert_eq!(config.number_format, PhoneNumberFormat::International);
    }

    #[test]
    fn test_config_builder() {
        let config = PhoneInputConfig::builder()
            .preferred_countries(["us", "ca"])
            .specified_countries(["us", "ca", "mx"])
            .selected_country_iso("ca")
            .select_first_country(false)
            .include_dial_code(true)
            .enable_auto_country_select(false)
            .enable_placeholder(false)
            .search_country_fields([SearchCountryField::Name, SearchCountryField::Iso2])
            .number_format(PhoneNumberFormat::National)
            .build();

        assert_eq!(config.preferred_countries, ["us", "ca"]);
        assert_eq!(config.specified_countries, ["us", "ca", "mx"]);
        assert_eq!(config.selected_country_iso.as_deref(), Some("ca"));
        assert!(!config.select_first_country);
        assert!(config.include_dial_code);
        assert!(!config.enable_auto_country_select);
        assert!(!config.enable_placeholder);
        assert_eq!(
            config.search_country_fields,
            [SearchCountryField::Name, SearchCountryField::Iso2]
        );
        assert_eq!(config.number_format, PhoneNumberFormat::National);
    }
}
