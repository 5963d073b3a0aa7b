use crate::error::ValidationError;

/// The provider supported out of the box.
pub const DEFAULT_PROVIDER_DOMAIN: &str = "1024terabox.com";

/// Allow-list of provider domains a URL must mention before it is resolved.
///
/// Matching is a plain substring test on the raw input: no trimming, no
/// scheme or host parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderGate {
    domains: Vec<String>,
}

impl ProviderGate {
    /// Creates a gate from a list of domain substrings. Empty entries are dropped.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(Into::into)
                .filter(|domain| !domain.is_empty())
                .collect(),
        }
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Returns the URL back if it mentions one of the allowed domains.
    pub fn check<'a>(&self, url: Option<&'a str>) -> Result<&'a str, ValidationError> {
        let url = url.ok_or(ValidationError::MissingUrl)?;

        if self.domains.iter().any(|domain| url.contains(domain.as_str())) {
            Ok(url)
        } else {
            Err(ValidationError::UnsupportedProvider(url.to_string()))
        }
    }
}

impl Default for ProviderGate {
    fn default() -> Self {
        Self::new([DEFAULT_PROVIDER_DOMAIN])
    }
}
