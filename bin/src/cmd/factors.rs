//! Factor listing command implementation.

use bolsa_factors::registry::available_factors;

/// List registered factors, optionally with details.
pub(crate) fn list_factors(verbose: bool) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Registered Factors                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    for info in available_factors() {
        if verbose {
            println!(
                "  {:<14} - {} (max: {}, weight: {}{})",
                info.name,
                info.description,
                info.max_score,
                info.default_weight,
                if info.requires_fundamentals {
                    ", needs fundamentals"
                } else {
                    ""
                }
            );
        } else {
            println!("  {}", info.name);
        }
    }
    println!();

    if !verbose {
        println!("Use --verbose for detailed factor descriptions.\n");
    }
}
