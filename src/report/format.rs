//! Number/timestamp formatting and terminal summaries.

use chrono::NaiveDateTime;

use crate::coefficients;
use crate::domain::{CalculationResult, CoefficientMode, CoefficientStandard, Multipliers};

/// Two decimals, comma decimal separator, space-grouped thousands: `1 234,56`.
pub fn format_rate(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped},{frac_part}")
}

/// `dd/mm/yyyy HH:MM`
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%d/%m/%Y %H:%M").to_string()
}

/// Terminal summary of one calculation.
pub fn format_calculation_summary(
    result: &CalculationResult,
    standard: CoefficientStandard,
    mode: CoefficientMode,
) -> String {
    let mut out = String::new();
    let multipliers = coefficients::multipliers(mode, standard);

    out.push_str("=== HSE-Flow - Safety indicators ===\n");
    out.push_str(&format!("Coefficient: {}\n", coefficients::label_of(standard)));
    out.push_str(&format!("Mode: {}\n", mode_line(mode, multipliers)));
    out.push('\n');

    match result {
        CalculationResult::Pending => {
            out.push_str("Enter hours worked to compute the indicators.\n");
        }
        CalculationResult::Computed(rates) => {
            out.push_str(&format!("{:<28} {:>16}\n", "Frequency rate (TF)", format_rate(rates.tf)));
            out.push_str(&format!("{:<28} {:>16}\n", "Severity rate (TG)", format_rate(rates.tg)));
        }
        CalculationResult::Failed(message) => {
            out.push_str(&format!("Error: {message}\n"));
        }
    }

    out
}

/// Table of the coefficient registry.
pub fn format_standards(default: CoefficientStandard) -> String {
    let mut out = String::new();
    out.push_str(format!("{:<12} {:>12} {:<32}", "standard", "multiplier", "label").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<12} {:-<12} {:-<32}", "", "", "").trim_end());
    out.push('\n');

    for standard in coefficients::ALL {
        let marker = if standard == default { " (default)" } else { "" };
        out.push_str(
            format!(
                "{:<12} {:>12} {}{marker}",
                standard.as_str(),
                coefficients::value_of(standard),
                coefficients::label_of(standard),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

fn mode_line(mode: CoefficientMode, m: Multipliers) -> String {
    match mode {
        CoefficientMode::Fixed => format!("fixed (TF x{}, TG x{})", m.tf, m.tg),
        CoefficientMode::Configurable => format!("configurable (TF/TG x{})", m.tf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rates;
    use chrono::NaiveDate;

    #[test]
    fn rate_formatting() {
        assert_eq!(format_rate(0.0), "0,00");
        assert_eq!(format_rate(0.01), "0,01");
        assert_eq!(format_rate(5.0), "5,00");
        assert_eq!(format_rate(999.999), "1 000,00");
        assert_eq!(format_rate(1_234_567.891), "1 234 567,89");
        assert_eq!(format_rate(-1234.5), "-1 234,50");
        assert_eq!(format_rate(-0.001), "0,00");
    }

    #[test]
    fn timestamp_formatting() {
        let at = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap().and_hms_opt(9, 3, 59).unwrap();
        assert_eq!(format_timestamp(at), "31/12/2024 09:03");
    }

    #[test]
    fn summary_shows_rates() {
        let result = CalculationResult::Computed(Rates { tf: 4.0, tg: 0.04 });
        let text = format_calculation_summary(&result, CoefficientStandard::European, CoefficientMode::Fixed);
        assert!(text.contains("Frequency rate (TF)"));
        assert!(text.contains("4,00"));
        assert!(text.contains("0,04"));
        assert!(text.contains("fixed (TF x1000000, TG x1000)"));
    }

    #[test]
    fn summary_shows_error_and_pending() {
        let failed = CalculationResult::Failed("Days lost cannot be negative".to_string());
        let text = format_calculation_summary(&failed, CoefficientStandard::Osha, CoefficientMode::Configurable);
        assert!(text.contains("Error: Days lost cannot be negative"));
        assert!(text.contains("OSHA (200,000)"));
        assert!(text.contains("configurable (TF/TG x200000)"));

        let text = format_calculation_summary(
            &CalculationResult::Pending,
            CoefficientStandard::European,
            CoefficientMode::Fixed,
        );
        assert!(text.contains("Enter hours worked"));
    }

    #[test]
    fn standards_table_marks_default() {
        let text = format_standards(CoefficientStandard::European);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("european"));
        assert!(lines[2].ends_with("(default)"));
        assert!(lines[3].starts_with("osha"));
        assert!(!lines[3].contains("default"));
    }
}
