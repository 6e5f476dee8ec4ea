//! Indicator listing command implementation.

use shihyo_solver::IndicatorCategory;
use shihyo_solver::registry::indicators_by_category;

/// List the solvable indicators grouped by category.
pub(crate) fn run(verbose: bool) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Available Indicators                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let categories = [
        (IndicatorCategory::Valuation, "Valuation"),
        (IndicatorCategory::Profitability, "Profitability"),
    ];

    for (cat, cat_name) in categories {
        let indicators = indicators_by_category(&cat);
        if indicators.is_empty() {
            continue;
        }

        println!("{}:", cat_name);
        println!("{}", "-".repeat(60));

        for info in indicators {
            if verbose {
                println!("  {:5} - {}", info.name, info.description);
                println!("          formula:  {}", info.formula);
                println!(
                    "          reverse:  anchored on {}, else on {}",
                    info.anchor.label(),
                    info.fallback.label()
                );
                println!("          aliases:  {}", info.aliases.join(", "));
            } else {
                println!("  {:5} {}", info.name, info.formula);
            }
        }
        println!();
    }

    if !verbose {
        println!("Use --verbose for descriptions and reverse-solve anchors.\n");
    }
}
