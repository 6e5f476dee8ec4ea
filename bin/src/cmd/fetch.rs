//! Fetch command implementation.

use super::OutputFormat;
use super::output::{Report, render};
use anyhow::Result;
use shihyo_core::DataSource;
use shihyo_jquants::{JQuantsClient, JQuantsConfig, JQuantsError};
use shihyo_solver::evaluate;

/// Fetch base values for `code` from J-Quants, solve them, and print the record.
pub(crate) async fn run(
    code: &str,
    api_key: Option<String>,
    base_url: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let api_key = api_key
        .filter(|key| !key.trim().is_empty())
        .ok_or(JQuantsError::MissingApiKey)?;

    let mut config = JQuantsConfig::new(api_key);
    if let Some(url) = base_url {
        config = config.with_base_url(url);
    }
    let client = JQuantsClient::with_config(config);

    let data = client.fetch_fundamentals(code).await?;
    tracing::debug!(
        source = client.name(),
        code = %data.code,
        as_of = %data.as_of,
        "solving fetched base values"
    );

    let valuation = evaluate(data.base_values());
    let report = Report::new(&valuation).with_company(client.name(), &data);
    println!("{}", render(&report, format)?);

    Ok(())
}
