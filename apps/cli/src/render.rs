use std::fmt::Write;

use tokenset_decomposer::{CompositionReport, DecomposeError};

/// Plain-text rendering of a report, one line per component.
pub fn render_text(report: &CompositionReport) -> String {
    let unit = &report.price_denomination;
    let mut out = String::new();

    let _ = writeln!(out, "{} price: {} {}", report.set_symbol, report.set_price, unit);
    let _ = writeln!(
        out,
        "Set composition for {} ({}):",
        report.set_symbol, report.set_reference_url
    );

    let symbol_width = report
        .components
        .iter()
        .map(|c| c.symbol.len())
        .max()
        .unwrap_or(0);

    for component in &report.components {
        let value = component
            .value()
            .map(|v| format!("{} {}", v, unit))
            .unwrap_or_else(|| "n/a".to_string());
        let _ = writeln!(
            out,
            "  {:<width$}  units {}  price {} {}  value {}  {}",
            component.symbol,
            component.normalized_units,
            component.normalized_price,
            unit,
            value,
            component.reference_url,
            width = symbol_width
        );
    }

    out
}

/// Failure line for stderr. The error's message already carries its cause.
pub fn render_failure(error: &DecomposeError) -> String {
    format!("Something went wrong: {}", error)
}
