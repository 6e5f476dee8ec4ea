//! shihyo CLI binary.
//!
//! Solves PER, PBR and ROE from EPS, BPS and price, reverse-solves an edited
//! ratio, and fetches base values from J-Quants.

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cmd::{BaseArgs, OutputFormat};
use shihyo_core::RatioKind;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shihyo")]
#[command(about = "Valuation indicator solver for PER, PBR and ROE", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (and detailed listings)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Derive PER, PBR and ROE from base values
    Calc {
        #[command(flatten)]
        base: BaseArgs,

        /// Output format (text or json)
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Edit one ratio and re-solve the base value it implies
    Reverse {
        /// Edited ratio (per, pbr or roe)
        ratio: RatioKind,

        /// New ratio value (ROE in percent)
        #[arg(allow_negative_numbers = true, required_unless_present = "clear")]
        value: Option<f64>,

        /// Clear the ratio instead of setting it
        #[arg(long, conflicts_with = "value")]
        clear: bool,

        #[command(flatten)]
        base: BaseArgs,

        /// Output format (text or json)
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Fetch base values for a security code from J-Quants and solve them
    Fetch {
        /// Security code (4 or 5 digits)
        code: String,

        /// J-Quants API key
        #[arg(long, env = "JQUANTS_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// J-Quants API base URL
        #[arg(long, env = "JQUANTS_BASE_URL")]
        base_url: Option<String>,

        /// Output format (text or json)
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the solvable indicators
    Indicators,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Pick up JQUANTS_* from .env before clap reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Calc { base, format } => {
            cmd::calc::run(base.into(), format)?;
        }
        Commands::Reverse {
            ratio,
            value,
            clear,
            base,
            format,
        } => {
            let value = if clear { None } else { value };
            cmd::reverse::run(ratio, value, base.into(), format)?;
        }
        Commands::Fetch {
            code,
            api_key,
            base_url,
            format,
        } => {
            cmd::fetch::run(&code, api_key, base_url, format).await?;
        }
        Commands::Indicators => {
            cmd::indicators::run(cli.verbose);
        }
    }

    Ok(())
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `warn`, or `debug` with
/// `--verbose`. Logs go to stderr so stdout stays parseable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let json = std::env::var("SHIHYO_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calc() {
        let cli = parse(&["shihyo", "calc", "--eps", "100", "--price", "2000"]);
        match cli.command {
            Commands::Calc { base, format } => {
                assert_eq!(base.eps, Some(100.0));
                assert_eq!(base.bps, None);
                assert_eq!(base.price, Some(2000.0));
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_reverse_with_alias() {
        let cli = parse(&["shihyo", "reverse", "P/E", "25", "--eps", "100", "--format", "json"]);
        match cli.command {
            Commands::Reverse {
                ratio,
                value,
                clear,
                format,
                ..
            } => {
                assert_eq!(ratio, RatioKind::Per);
                assert_eq!(value, Some(25.0));
                assert!(!clear);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_reverse_negative_value() {
        let cli = parse(&["shihyo", "reverse", "roe", "-5", "--bps", "800"]);
        match cli.command {
            Commands::Reverse { value, .. } => assert_eq!(value, Some(-5.0)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_reverse_clear() {
        let cli = parse(&["shihyo", "reverse", "pbr", "--clear"]);
        match cli.command {
            Commands::Reverse { value, clear, .. } => {
                assert!(clear);
                assert_eq!(value, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_reverse_requires_value_or_clear() {
        assert!(Cli::try_parse_from(["shihyo", "reverse", "per"]).is_err());
        assert!(Cli::try_parse_from(["shihyo", "reverse", "per", "20", "--clear"]).is_err());
    }

    #[test]
    fn test_unknown_ratio_rejected() {
        let err = Cli::try_parse_from(["shihyo", "reverse", "ev_ebitda", "10"]).unwrap_err();
        assert!(err.to_string().contains("ev_ebitda"));
    }

    #[test]
    fn test_global_verbose() {
        let cli = parse(&["shihyo", "indicators", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Indicators));
    }

    #[test]
    fn test_parse_fetch() {
        let cli = parse(&["shihyo", "fetch", "7203", "--api-key", "k"]);
        match cli.command {
            Commands::Fetch { code, api_key, .. } => {
                assert_eq!(code, "7203");
                assert_eq!(api_key.as_deref(), Some("k"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
