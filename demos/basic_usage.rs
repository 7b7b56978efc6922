// ============================================================================
// Basic Usage Example
// ============================================================================

use num_verbalizer::prelude::*;
use num_verbalizer::{to_english, to_thai};

fn main() {
    // Run with `--features logging` to see conversion traces
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    println!("=== Number Verbalizer Example ===\n");

    // One value in every supported language
    println!("1234.5 in every language:");
    for info in supported_languages() {
        match convert(1234.5, info.code.as_str()) {
            Ok(words) => println!("  {:<24} {}", info.name, words),
            Err(err) => println!("  {:<24} error: {}", info.name, err),
        }
    }

    // Typed text keeps every digit
    println!("\n=== Large Values ===");
    println!("  {}", to_english("123456789012345678901"));
    println!("  {}", to_thai("1000001"));

    // Special values
    println!("\n=== Special Values ===");
    for input in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN, 0.0] {
        println!("  {:>6} -> {}", input, to_english(input));
    }

    // Configured converter
    println!("\n=== Financial Report (German) ===");
    let converter = match ConverterBuilder::financial_report(LanguageCode::German).build() {
        Ok(converter) => converter,
        Err(err) => {
            eprintln!("invalid configuration: {}", err);
            return;
        },
    };
    for amount in ["1 000 000", "2,345.678", "-0.50"] {
        println!("  {:>12} -> {}", amount, converter.convert(amount));
    }

    // Unsupported code is an error, not a fallback
    println!("\n=== Unsupported Language ===");
    if let Err(err) = convert(42, "xx") {
        println!("  {}", err);
    }
}
