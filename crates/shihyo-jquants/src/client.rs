//! J-Quants API client implementation.

use crate::{
    Result,
    error::JQuantsError,
    types::{
        DailyBarsResponse, DailyQuote, MasterResponse, PerShare, SummaryResponse, latest_quote,
        normalize_code,
    },
};
use chrono::{Duration as DateDuration, Local, NaiveDate};
use reqwest::Client;
use shihyo_core::{DataSource, Fundamentals, SourceError};
use std::{env, time::Duration};
use tracing::{debug, info, warn};

/// Base URL for the J-Quants v2 API.
pub const JQUANTS_BASE_URL: &str = "https://api.jquants.com/v2";

/// Calendar days of daily bars requested when looking for the latest close.
///
/// Wide enough to span weekends and the longest market holidays.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 30;

/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`JQuantsClient`].
#[derive(Debug, Clone)]
pub struct JQuantsConfig {
    /// API key sent as the `x-api-key` header.
    pub api_key: String,
    /// API base URL, without a trailing slash.
    pub base_url: String,
    /// Calendar days of daily bars to request.
    pub lookback_days: i64,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl JQuantsConfig {
    /// Configuration with default settings for the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: JQUANTS_BASE_URL.to_string(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// J-Quants API client.
#[derive(Debug, Clone)]
pub struct JQuantsClient {
    client: Client,
    config: JQuantsConfig,
}

impl JQuantsClient {
    /// Create a new J-Quants client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(JQuantsConfig::new(api_key))
    }

    /// Create a new J-Quants client with explicit configuration.
    #[must_use]
    pub fn with_config(config: JQuantsConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Create a new J-Quants client from the `JQUANTS_API_KEY` environment
    /// variable, honoring `JQUANTS_BASE_URL` if set.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key variable is not set or is blank.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = env::var("JQUANTS_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(JQuantsError::MissingApiKey)?;

        let mut config = JQuantsConfig::new(api_key.trim());
        if let Ok(base_url) = env::var("JQUANTS_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        Ok(Self::with_config(config))
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &JQuantsConfig {
        &self.config
    }

    /// Build a URL for an endpoint path.
    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Make an authenticated GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.url(endpoint);
        debug!(%url, ?query, "requesting J-Quants endpoint");

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("x-api-key", &self.config.api_key)
            .timeout(self.config.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, endpoint, "J-Quants request failed");
            return Err(JQuantsError::Status {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                body,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Get the company name for a security code.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the code is unknown.
    pub async fn company_name(&self, code: &str) -> Result<String> {
        let code = normalize_code(code)?;
        let response: MasterResponse = self.get("equities/master", &[("code", code.as_str())]).await?;
        response
            .into_companies()
            .into_iter()
            .next()
            .map(|c| c.company_name)
            .ok_or_else(|| JQuantsError::NotFound(format!("company for code {code}")))
    }

    /// Get the most recent daily bar on or after `from`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no bars are returned.
    pub async fn latest_quote_since(&self, code: &str, from: NaiveDate) -> Result<DailyQuote> {
        let code = normalize_code(code)?;
        let from = from.format("%Y%m%d").to_string();
        let response: DailyBarsResponse = self
            .get("equities/bars/daily", &[("code", code.as_str()), ("from", from.as_str())])
            .await?;
        latest_quote(response.into_quotes())
            .ok_or_else(|| JQuantsError::NotFound(format!("daily quotes for code {code}")))
    }

    /// Get the most recent daily bar within the configured lookback window.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no bars are returned.
    pub async fn latest_quote(&self, code: &str) -> Result<DailyQuote> {
        let from = Local::now().date_naive() - DateDuration::days(self.config.lookback_days);
        self.latest_quote_since(code, from).await
    }

    /// Get the latest disclosed EPS and BPS.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn per_share(&self, code: &str) -> Result<PerShare> {
        let code = normalize_code(code)?;
        let response: SummaryResponse = self.get("fins/summary", &[("code", code.as_str())]).await?;
        Ok(PerShare::from_statements(&response.into_statements()))
    }

    /// Get company name, latest close, and latest EPS/BPS for a code.
    ///
    /// The three requests run one after another; the API enforces a request
    /// rate limit.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub async fn fundamentals(&self, code: &str) -> Result<Fundamentals> {
        let code = normalize_code(code)?;

        let company_name = self.company_name(&code).await?;
        let quote = self.latest_quote(&code).await?;
        let per_share = self.per_share(&code).await?;

        let as_of = quote
            .parsed_date()
            .ok_or_else(|| JQuantsError::Api(format!("unrecognized quote date {}", quote.date)))?;

        info!(
            %code,
            company = %company_name,
            %as_of,
            price = ?quote.close,
            eps = per_share.eps,
            bps = per_share.bps,
            "fetched fundamentals"
        );

        Ok(Fundamentals {
            code,
            company_name,
            as_of,
            eps: Some(per_share.eps),
            bps: Some(per_share.bps),
            price: quote.close,
        })
    }
}

impl DataSource for JQuantsClient {
    fn name(&self) -> &str {
        "jquants"
    }

    async fn fetch_fundamentals(&self, code: &str) -> std::result::Result<Fundamentals, SourceError> {
        self.fundamentals(code).await.map_err(SourceError::from)
    }
}
