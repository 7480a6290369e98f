//! Fee estimation for the calculator widget
//!
//! [`calculate_fee`] maps the two selector values onto a [`CalculatorOutput`].
//! Nothing is cached: the widget calls it again on every selection change.

use crate::fees::FeeSchedule;
use crate::prelude::*;

/// Label placed in front of every amount.
pub const CURRENCY_LABEL: &str = "KSh";

pub const PROMPT_MESSAGE: &str = "Please select both a course and a duration.";
pub const MISSING_DATA_MESSAGE: &str = "Error: Fee data missing for selection.";
pub const DISCLAIMER: &str = "*Note: Estimate only. Final fees confirmed on application.";

/// A computed estimate for one course/duration pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeEstimate {
    pub course: String,
    pub duration: String,
    pub multiplier: u64,
    pub tuition_per_term: u64,
    pub per_term_total: u64,
    pub grand_total: u64,
}

impl FeeEstimate {
    /// e.g. `Year (×3 terms estimate)`
    pub fn duration_summary(&self) -> String {
        format!("{} ({} estimate)", self.duration, term_label(self.multiplier))
    }
}

/// What the calculator output container shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorOutput {
    /// One of the selectors is still on its placeholder.
    Prompt,
    /// The selection has no entry in the schedule.
    Missing,
    Estimate(FeeEstimate),
}

impl CalculatorOutput {
    pub fn is_error(&self) -> bool {
        matches!(self, CalculatorOutput::Missing)
    }
}

/// Look up and total the fees for a selection.
pub fn estimate(schedule: &FeeSchedule, course: &str, duration: &str) -> Result<FeeEstimate> {
    let fees = schedule.fees_for(course);
    let multiplier = schedule.multiplier_for(duration);

    let (Some(fees), Some(multiplier)) = (fees, multiplier) else {
        return Err(Error::fee_data_missing(course, duration));
    };

    let per_term_total = fees.per_term_total();
    Ok(FeeEstimate {
        course: course.to_string(),
        duration: duration.to_string(),
        multiplier,
        tuition_per_term: fees.tuition,
        per_term_total,
        grand_total: per_term_total * multiplier,
    })
}

/// Decide what the calculator shows for the current selector values.
pub fn calculate_fee(schedule: &FeeSchedule, course: &str, duration: &str) -> CalculatorOutput {
    if course.is_empty() || duration.is_empty() {
        return CalculatorOutput::Prompt;
    }

    match estimate(schedule, course, duration) {
        Ok(estimate) => {
            debug!(
                course,
                duration,
                grand_total = estimate.grand_total,
                "Fee estimate computed"
            );
            CalculatorOutput::Estimate(estimate)
        }
        Err(e) => {
            warn!("{}", e);
            CalculatorOutput::Missing
        }
    }
}

/// `×1 term`, `×3 terms`
pub fn term_label(multiplier: u64) -> String {
    let plural = if multiplier > 1 { "s" } else { "" };
    format!("\u{00D7}{multiplier} term{plural}")
}

/// Group digits by thousands, en-KE style: `1234567` -> `1,234,567`.
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an amount with an explicit currency label.
pub fn format_amount(label: &str, amount: u64) -> String {
    format!("{label} {}", group_thousands(amount))
}

/// Format an amount in Kenyan shillings: `KSh 97,000`.
pub fn format_ksh(amount: u64) -> String {
    format_amount(CURRENCY_LABEL, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> FeeSchedule {
        FeeSchedule::builtin()
    }

    #[test]
    fn test_computer_science_term() {
        let est = estimate(&schedule(), "Computer Science", "Term").unwrap();
        assert_eq!(est.per_term_total, 97_000);
        assert_eq!(est.grand_total, 97_000);
        assert_eq!(est.tuition_per_term, 85_000);
        assert_eq!(est.multiplier, 1);
    }

    #[test]
    fn test_business_management_year() {
        let est = estimate(&schedule(), "Business Management", "Year").unwrap();
        assert_eq!(est.per_term_total, 70_000);
        assert_eq!(est.grand_total, 210_000);
    }

    #[test]
    fn test_grand_total_for_every_pair() {
        let schedule = schedule();
        for course in schedule.courses() {
            for duration in schedule.durations() {
                let est = estimate(&schedule, course.name, duration.label).unwrap();
                let f = course.fees;
                assert_eq!(
                    est.grand_total,
                    (f.tuition + f.registration + f.library + f.exam) * duration.multiplier
                );
            }
        }
    }

    #[test]
    fn test_empty_selection_prompts() {
        let schedule = schedule();
        assert_eq!(calculate_fee(&schedule, "", ""), CalculatorOutput::Prompt);
        assert_eq!(calculate_fee(&schedule, "Accounting", ""), CalculatorOutput::Prompt);
        assert_eq!(calculate_fee(&schedule, "", "Year"), CalculatorOutput::Prompt);
        assert!(!calculate_fee(&schedule, "", "").is_error());
    }

    #[test]
    fn test_unknown_selection_is_missing() {
        let out = calculate_fee(&schedule(), "Astronomy", "Term");
        assert_eq!(out, CalculatorOutput::Missing);
        assert!(out.is_error());

        let out = calculate_fee(&schedule(), "Accounting", "Semester");
        assert_eq!(out, CalculatorOutput::Missing);
    }

    #[test]
    fn test_estimate_error_names_selection() {
        let err = estimate(&schedule(), "Astronomy", "Term").unwrap_err();
        assert!(matches!(
            err,
            Error::FeeDataMissing { ref course, ref duration }
                if course == "Astronomy" && duration == "Term"
        ));
    }

    #[test]
    fn test_calculate_fee_is_idempotent() {
        let schedule = schedule();
        let a = calculate_fee(&schedule, "Data Science", "Year");
        let b = calculate_fee(&schedule, "Data Science", "Year");
        assert_eq!(a, b);
    }

    #[test]
    fn test_term_label_pluralization() {
        assert_eq!(term_label(1), "\u{00D7}1 term");
        assert_eq!(term_label(3), "\u{00D7}3 terms");
    }

    #[test]
    fn test_duration_summary() {
        let est = estimate(&schedule(), "Accounting", "Year").unwrap();
        assert_eq!(est.duration_summary(), "Year (\u{00D7}3 terms estimate)");
    }

    #[test]
    fn test_format_ksh() {
        assert_eq!(format_ksh(0), "KSh 0");
        assert_eq!(format_ksh(999), "KSh 999");
        assert_eq!(format_ksh(1_000), "KSh 1,000");
        assert_eq!(format_ksh(97_000), "KSh 97,000");
        assert_eq!(format_ksh(210_000), "KSh 210,000");
        assert_eq!(format_ksh(1_234_567), "KSh 1,234,567");
    }

    #[test]
    fn test_format_amount_custom_label() {
        assert_eq!(format_amount("KES", 12_500), "KES 12,500");
    }
}
