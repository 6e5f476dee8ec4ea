//! Rendering of solved records for the terminal.

use super::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use shihyo_core::{Date, Fundamentals, Valuation};
use shihyo_solver::{Highlight, PresentedValuation, assess, present, summary_line};

/// Where a fetched record came from.
#[derive(Debug, Serialize)]
pub(crate) struct Company<'a> {
    source: &'a str,
    code: &'a str,
    name: &'a str,
    as_of: Date,
}

/// Everything printed for one record.
#[derive(Debug, Serialize)]
pub(crate) struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<Company<'a>>,
    valuation: &'a Valuation,
    formatted: PresentedValuation,
    summary: String,
    highlights: Vec<Highlight>,
}

impl<'a> Report<'a> {
    /// Build a report for a solved record.
    pub(crate) fn new(valuation: &'a Valuation) -> Self {
        Self {
            company: None,
            valuation,
            formatted: present(valuation),
            summary: summary_line(valuation),
            highlights: assess(valuation),
        }
    }

    /// Attach the fetched company details.
    pub(crate) fn with_company(mut self, source: &'a str, data: &'a Fundamentals) -> Self {
        self.company = Some(Company {
            source,
            code: &data.code,
            name: &data.company_name,
            as_of: data.as_of,
        });
        self
    }
}

/// Render a report in the requested format.
pub(crate) fn render(report: &Report<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Aligned field table, chart-style summary and highlights.
pub(crate) fn render_text(report: &Report<'_>) -> String {
    let mut lines = Vec::new();

    if let Some(company) = &report.company {
        lines.push(format!(
            "{} ({}) as of {} [{}]",
            company.name, company.code, company.as_of, company.source
        ));
        lines.push(String::new());
    }

    for (label, value) in report.formatted.fields() {
        let shown = if value.is_empty() { "-" } else { value };
        lines.push(format!("  {:<6} {:>14}", label, shown));
    }

    if !report.summary.is_empty() {
        lines.push(String::new());
        lines.push(format!("  {}", report.summary));
    }

    if !report.highlights.is_empty() {
        lines.push(String::new());
        lines.push("Highlights:".to_string());
        for highlight in &report.highlights {
            lines.push(format!("  - {}", highlight));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shihyo_core::BaseValues;
    use shihyo_solver::evaluate;

    fn solved(eps: f64, bps: f64, price: f64) -> Valuation {
        evaluate(BaseValues::new(Some(eps), Some(bps), Some(price)))
    }

    #[test]
    fn test_text_table_and_summary() {
        let v = solved(100.0, 800.0, 2000.0);
        let text = render_text(&Report::new(&v));

        assert!(text.contains("  PER "));
        assert!(text.lines().any(|l| l.starts_with("  PER") && l.ends_with(" 20")));
        assert!(text.lines().any(|l| l.starts_with("  PBR") && l.ends_with(" 2.50")));
        assert!(text.lines().any(|l| l.starts_with("  ROE") && l.ends_with(" 12.50")));
        assert!(text.contains("ROE 12.5% | PER 20.0x | PBR 2.5x"));
        assert!(!text.contains("Highlights:"));
    }

    #[test]
    fn test_text_unset_fields() {
        let v = evaluate(BaseValues::new(Some(100.0), None, None));
        let text = render_text(&Report::new(&v));

        assert!(text.lines().any(|l| l.starts_with("  BPS") && l.ends_with(" -")));
        assert!(text.lines().any(|l| l.starts_with("  PER") && l.ends_with(" -")));
        // No ratio is set, so there is no summary line
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_text_highlights() {
        // PER 50, PBR 0.5, ROE 1%
        let v = solved(10.0, 1000.0, 500.0);
        let text = render_text(&Report::new(&v));

        assert!(text.contains("Highlights:"));
        assert!(text.contains("  - expensive relative to earnings"));
        assert!(text.contains("  - trading below book value"));
        assert!(!text.contains("high return on equity"));
    }

    #[test]
    fn test_text_company_heading() {
        let data = Fundamentals {
            code: "72030".to_string(),
            company_name: "Toyota Motor".to_string(),
            as_of: Date::from_ymd_opt(2024, 5, 1).unwrap(),
            eps: Some(100.0),
            bps: Some(800.0),
            price: Some(2000.0),
        };
        let v = evaluate(data.base_values());
        let text = render_text(&Report::new(&v).with_company("jquants", &data));

        assert_eq!(
            text.lines().next(),
            Some("Toyota Motor (72030) as of 2024-05-01 [jquants]")
        );
    }

    #[test]
    fn test_json_report() {
        let v = evaluate(BaseValues::new(Some(10.0), Some(1000.0), None));
        let json = render(&Report::new(&v), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(parsed.get("company").is_none());
        assert_eq!(parsed["valuation"]["eps"], 10.0);
        assert!(parsed["valuation"]["price"].is_null());
        assert!(parsed["valuation"]["per"].is_null());
        assert_eq!(parsed["valuation"]["roe"], 1.0);
        assert_eq!(parsed["formatted"]["roe"], "1");
        assert_eq!(parsed["formatted"]["per"], "");
        assert_eq!(parsed["summary"], "ROE 1.0%");
        assert_eq!(parsed["highlights"], serde_json::json!([]));
    }

    #[test]
    fn test_json_highlights_snake_case() {
        let v = solved(10.0, 1000.0, 500.0);
        let json = render(&Report::new(&v), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed["highlights"],
            serde_json::json!(["high_per", "below_book"])
        );
    }
}
