use crate::rates::{ConversionResult, RateSnapshot};

/// Render a rate with four decimal places, the display convention for every
/// result line.
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.4}")
}

/// The one-line result, e.g. `1 EUR = 5.5556 BRL`. Single-currency lookups
/// arrive here with USD as the source.
pub fn result_line(result: &ConversionResult) -> String {
    format!(
        "1 {} = {} {}",
        result.source,
        format_rate(result.rate),
        result.target
    )
}

/// Print the result, preceded in verbose mode by the request date, the
/// endpoint used, and the raw fetched rates for both codes involved.
pub fn print_result(
    snapshot: &RateSnapshot,
    result: &ConversionResult,
    endpoint: &str,
    verbose: bool,
) {
    if verbose {
        println!("date: {}", snapshot.date);
        println!("endpoint: {endpoint}");
        for code in [result.source, result.target] {
            if let Ok(rate) = snapshot.rate(code) {
                println!("1 USD = {rate} {code} (raw)");
            }
        }
    }
    println!("{}", result_line(result));
}
