use reqwest::Client;
use tracing::debug;

pub const FLAG_URL: &str = "https://flagcdn.com";

/// Checks whether a flag image exists for a country code.
#[derive(Debug, Clone)]
pub struct FlagClient {
    client: Client,
    base_url: String,
}

impl Default for FlagClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FlagClient {
    pub fn new() -> Self {
        Self::with_base_url(FLAG_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(5))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn image_url(&self, country_code: &str) -> String {
        format!(
            "{}/w40/{}.png",
            self.base_url.trim_end_matches('/'),
            country_code.to_lowercase()
        )
    }

    /// Returns the image URL when the request succeeds. Any failure just
    /// means no flag is shown.
    pub async fn lookup(&self, country_code: &str) -> Option<String> {
        let code = country_code.trim();
        if code.is_empty() || !code.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return None;
        }

        let url = self.image_url(code);
        match self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
        {
            Ok(_) => Some(url),
            Err(err) => {
                debug!(%url, error = %err, "flag image unavailable");
                None
            }
        }
    }
}
