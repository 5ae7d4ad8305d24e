// ============================================================================
// Basic Usage Example
// ============================================================================

use num_rational::Ratio;
use to_decimal::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Decimal Conversion Example ===\n");

    println!("Integers:");
    for n in [0i64, 42, -1200] {
        let d = n.to_d();
        println!("  {:>8} -> {} ({})", n, d, d.to_digits());
    }

    println!("\nFloats (default {} digits):", ConversionConfig::DEFAULT_F64_PRECISION);
    for x in [0.5f64, 0.1, 22.0 / 7.0, f64::NAN, f64::INFINITY] {
        let d = x.to_d();
        println!("  {:>20} -> {} ({})", x, d, d.to_digits());
    }

    println!("\nFloat 22/7 at explicit precision:");
    for precision in [0usize, 1, 3, 20] {
        let d = (22.0f64 / 7.0).to_d_with_precision(precision);
        println!("  {:>3} digits -> {}", precision, d.to_digits());
    }

    println!("\nText (unparsable input becomes zero):");
    for text in ["0.5", "1_000.25", "-Infinity", "not a number"] {
        let d = text.to_d();
        println!("  {:>14?} -> {}", text, d);
    }

    println!("\nRatio 7077085128725065/2251799813685248:");
    let r = Ratio::new_raw(7077085128725065i64, 2251799813685248);
    for precision in [0usize, 3, 10] {
        match r.to_d(precision) {
            Ok(d) => println!("  {:>3} digits -> {} ({})", precision, d, d.to_digits()),
            Err(e) => println!("  {:>3} digits -> error: {}", precision, e),
        }
    }

    println!("\nCustom policy (4 digits, round down):");
    let config = ConversionConfig::new()
        .with_f64_precision(4)
        .with_rounding(Rounding::Down);
    println!("  2/3 -> {}", config.convert_f64(2.0 / 3.0).to_digits());
}
