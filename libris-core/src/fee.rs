use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A late fee in whole currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fee(u64);

impl Fee {
    pub const ZERO: Fee = Fee(0);

    pub fn from_units(units: u64) -> Self {
        Self(units)
    }

    pub fn units(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Renders as a currency amount with two decimal places (e.g. `28.00`).
impl std::fmt::Display for Fee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.00", self.0)
    }
}

/// Loan period and per-day penalty used to compute late fees.
///
/// The due date is `borrowed_at + loan_period_days`. Every *whole* day past
/// the due date costs `daily_fee`; partial days are truncated, so a return
/// 23 hours late costs nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LateFeePolicy {
    pub loan_period_days: u32,
    pub daily_fee: u64,
}

impl Default for LateFeePolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl LateFeePolicy {
    /// Two-week loans at two units per overdue day.
    pub const STANDARD: LateFeePolicy = LateFeePolicy {
        loan_period_days: 14,
        daily_fee: 2,
    };

    pub fn new(loan_period_days: u32, daily_fee: u64) -> Self {
        Self {
            loan_period_days,
            daily_fee,
        }
    }

    /// Due date for a loan starting at `borrowed_at`.
    ///
    /// Returns `None` if the due date falls outside the representable range,
    /// in which case the loan can never be overdue.
    pub fn due_date(&self, borrowed_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        borrowed_at.checked_add_signed(Duration::days(i64::from(self.loan_period_days)))
    }

    /// Whole days between the due date and `returned_at`, or 0 if returned on time.
    pub fn days_overdue(&self, borrowed_at: DateTime<Utc>, returned_at: DateTime<Utc>) -> u64 {
        let Some(due) = self.due_date(borrowed_at) else {
            return 0;
        };
        if returned_at <= due {
            return 0;
        }
        // Positive here, so num_days() truncation is a floor.
        (returned_at - due).num_days().max(0) as u64
    }

    pub fn late_fee(&self, borrowed_at: DateTime<Utc>, returned_at: DateTime<Utc>) -> Fee {
        Fee(
            self.days_overdue(borrowed_at, returned_at)
                .saturating_mul(self.daily_fee),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_fee_display_two_decimals() {
        assert_eq!(Fee::from_units(28).to_string(), "28.00");
        assert_eq!(Fee::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_due_date_is_fourteen_days_later() {
        let due = LateFeePolicy::STANDARD.due_date(at(1, 9)).unwrap();
        assert_eq!(due, at(15, 9));
    }

    #[test]
    fn test_no_fee_on_or_before_due_date() {
        let policy = LateFeePolicy::STANDARD;
        assert_eq!(policy.late_fee(at(1, 9), at(2, 9)), Fee::ZERO);
        assert_eq!(policy.late_fee(at(1, 9), at(15, 9)), Fee::ZERO);
    }

    #[test]
    fn test_partial_day_truncates() {
        let policy = LateFeePolicy::STANDARD;
        // 23 hours past due
        assert_eq!(policy.late_fee(at(1, 9), at(16, 8)), Fee::ZERO);
        // one day and 23 hours past due
        assert_eq!(policy.late_fee(at(1, 9), at(17, 8)), Fee::from_units(2));
    }

    #[test]
    fn test_fee_scales_with_whole_days() {
        let policy = LateFeePolicy::STANDARD;
        assert_eq!(policy.days_overdue(at(1, 9), at(29, 9)), 14);
        assert_eq!(policy.late_fee(at(1, 9), at(29, 9)), Fee::from_units(28));
    }

    #[test]
    fn test_fee_is_monotonic_in_return_date() {
        let policy = LateFeePolicy::STANDARD;
        let borrowed = at(1, 0);
        let mut previous = Fee::ZERO;
        for hours in 0..(40 * 24) {
            let fee = policy.late_fee(borrowed, borrowed + Duration::hours(hours));
            assert!(fee >= previous, "fee decreased at hour {}", hours);
            previous = fee;
        }
    }

    #[test]
    fn test_custom_policy() {
        let policy = LateFeePolicy::new(7, 5);
        assert_eq!(policy.late_fee(at(1, 9), at(10, 9)), Fee::from_units(10));
    }

    #[test]
    fn test_unrepresentable_due_date_never_overdue() {
        let policy = LateFeePolicy::new(u32::MAX, 2);
        assert_eq!(policy.late_fee(DateTime::<Utc>::MAX_UTC, at(1, 0)), Fee::ZERO);
    }
}
