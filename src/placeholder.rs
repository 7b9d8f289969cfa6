//! Asynchronous example-number loading for per-country placeholders.
//!
//! The upstream document maps uppercase ISO2 codes to example mobile
//! numbers in national digits. It is fetched once per catalog load, with a
//! request timeout and an optional cancellation token tied to the host's
//! teardown.

use crate::country::Country;
use crate::errors::PlaceholderError;
use crate::parser;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use std::collections::HashMap;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

/// Default location of the example-number document.
pub const DEFAULT_EXAMPLES_URL: &str =
    "https://unpkg.com/libphonenumber-js@1.9.6/examples.mobile.json";

/// Default per-request timeout.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Example mobile numbers keyed by uppercase ISO2 code.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ExampleNumbers(HashMap<String, String>);

impl ExampleNumbers {
    /// Example national number for a country, if the document has one.
    pub fn national_for(&self, iso2: &str) -> Option<&str> {
        self.0.get(&iso2.to_uppercase()).map(String::as_str)
    }

    /// Number of countries covered by the document.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the document is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for ExampleNumbers {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Fetches the example-number document and writes placeholders into a
/// catalog.
///
/// # Example
///
/// ```rust,ignore
/// use tel_input::{CountryCatalog, PlaceholderLoader};
///
/// let mut catalog = CountryCatalog::load();
/// let loader = PlaceholderLoader::builder().build()?;
/// let examples = loader.fetch_examples().await?;
/// loader.apply(&examples, &mut catalog);
/// ```
#[derive(Clone)]
pub struct PlaceholderLoader {
    http_client: ClientWithMiddleware,
    endpoint: Url,
    timeout: Duration,
    cancel: CancellationToken,
}

impl std::fmt::Debug for PlaceholderLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceholderLoader")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for configuring a [`PlaceholderLoader`].
pub struct PlaceholderLoaderBuilder {
    endpoint: Option<Url>,
    timeout: Duration,
    http_client: Option<ClientWithMiddleware>,
    cancel: Option<CancellationToken>,
}

impl PlaceholderLoaderBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            endpoint: None,
            timeout: DEFAULT_FETCH_TIMEOUT,
            http_client: None,
            cancel: None,
        }
    }

    /// Set a custom document endpoint.
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set the per-request timeout.
    ///
    /// Default: 10 seconds
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom HTTP client with middleware.
    pub fn http_client(mut self, client: ClientWithMiddleware) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set a cancellation token, typically tied to the host's teardown.
    pub fn cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Build the [`PlaceholderLoader`].
    pub fn build(self) -> Result<PlaceholderLoader, url::ParseError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => Url::parse(DEFAULT_EXAMPLES_URL)?,
        };

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let client = reqwest::Client::new();
                ClientBuilder::new(client).build()
            }
        };

        Ok(PlaceholderLoader {
            http_client,
            endpoint,
            timeout: self.timeout,
            cancel: self.cancel.unwrap_or_default(),
        })
    }
}

impl Default for PlaceholderLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderLoader {
    /// Create a builder for the loader.
    pub fn builder() -> PlaceholderLoaderBuilder {
        PlaceholderLoaderBuilder::new()
    }

    /// The endpoint the loader fetches from.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch and decode the example-number document.
    ///
    /// Honors the configured timeout and cancellation token.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "tel_input.fetch_examples", skip_all, fields(endpoint = %self.endpoint))
    )]
    pub async fn fetch_examples(&self) -> Result<ExampleNumbers, PlaceholderError> {
        let request = async {
            let response = self
                .http_client
                .get(self.endpoint.clone())
                .send()
                .await
                .map_err(PlaceholderError::Http)?;

            let status = response.status();
            if !status.is_success() {
                return Err(PlaceholderError::UnexpectedStatus { status });
            }

            response
                .json::<ExampleNumbers>()
                .await
                .map_err(PlaceholderError::Decode)
        };

        let examples = tokio::select! {
            _ = self.cancel.cancelled() => return Err(PlaceholderError::Cancelled),
            result = tokio::time::timeout(self.timeout, request) => {
                result.map_err(|_| PlaceholderError::Timeout { timeout: self.timeout })??
            }
        };

        #[cfg(feature = "tracing")]
        debug!(countries = examples.len(), "Example-number document loaded");

        Ok(examples)
    }

    /// Write placeholders into `countries` from a fetched document.
    ///
    /// A country missing from the document, or whose example cannot be
    /// parsed, keeps an empty placeholder. This never fails.
    pub fn apply(&self, examples: &ExampleNumbers, countries: &mut [Country]) {
        for country in countries {
            country.placeholder = placeholder_for(examples, &country.iso2);
        }
    }

    /// Fetch the document and apply it, degrading to empty placeholders on
    /// any fetch failure. Intended for hosts that treat placeholders as
    /// purely cosmetic.
    pub async fn load_into(&self, countries: &mut [Country]) {
        match self.fetch_examples().await {
            Ok(examples) => self.apply(&examples, countries),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                warn!(error = %_e, "Placeholder loading failed, continuing without placeholders");
            }
        }
    }
}

/// Nationally formatted placeholder for one country, empty when the
/// document has no usable example.
pub fn placeholder_for(examples: &ExampleNumbers, iso2: &str) -> String {
    let Some(national) = examples.national_for(iso2) else {
        return String::new();
    };
    match parser::parse_number(national, iso2) {
        Some(number) => number.format_national(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn examples() -> ExampleNumbers {
        [
            ("US".to_string(), "2015550123".to_string()),
            ("DE".to_string(), "15123456789".to_string()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_national_lookup_is_case_insensitive() {
        let examples = examples();
        assert_eq!(examples.national_for("us"), Some("2015550123"));
        assert_eq!(examples.national_for("US"), Some("2015550123"));
        assert_eq!(examples.national_for("fr"), None);
    }

    #[test]
    fn test_placeholder_is_nationally_formatted() {
        let placeholder = placeholder_for(&examples(), "us");
        assert!(
            placeholder.contains("555"),
            "Expected formatted example number, got '{placeholder}'"
        );
        assert!(!placeholder.starts_with('+'));
    }

    #[test]
    fn test_missing_country_degrades_to_empty() {
        assert_eq!(placeholder_for(&examples(), "fr"), "");
    }

    #[test]
    fn test_builder_defaults() {
        let loader = PlaceholderLoader::builder().build().unwrap();
        assert_eq!(loader.endpoint().as_str(), DEFAULT_EXAMPLES_URL);
        assert_eq!(loader.timeout, DEFAULT_FETCH_TIMEOUT);
    }
}
