//! Client-side narrowing of a transaction list.

use crate::format::month_key;
use crate::models::{ModeOfPayment, Transaction, TransactionKind};

/// Criteria from the filter bar. Unset criteria impose no constraint; set
/// criteria combine with logical AND.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionFilter {
    pub kind: TransactionKind,
    /// Inclusive lower bound, `YYYY-MM`.
    pub start_month: Option<String>,
    /// Inclusive upper bound, `YYYY-MM`.
    pub end_month: Option<String>,
    pub mode: Option<ModeOfPayment>,
    /// Debits only.
    pub category: Option<String>,
    /// Case-insensitive substring of the purpose.
    pub search: Option<String>,
}

impl TransactionFilter {
    pub fn new(kind: TransactionKind) -> Self {
        TransactionFilter {
            kind,
            start_month: None,
            end_month: None,
            mode: None,
            category: None,
            search: None,
        }
    }

    /// Builds a filter from raw form values; blank inputs become `None`.
    /// Date inputs may carry a day (`YYYY-MM-DD`); only the month is kept.
    pub fn from_form(
        kind: TransactionKind,
        start: &str,
        end: &str,
        mode: &str,
        category: &str,
        search: &str,
    ) -> Self {
        TransactionFilter {
            kind,
            start_month: month_bound(start),
            end_month: month_bound(end),
            mode: ModeOfPayment::parse(mode),
            category: non_blank(category),
            search: non_blank(search),
        }
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        if tx.kind() != self.kind {
            return false;
        }

        if self.start_month.is_some() || self.end_month.is_some() {
            let Some(month) = month_key(tx.date()) else {
                return false;
            };
            if let Some(start) = &self.start_month {
                if month < *start {
                    return false;
                }
            }
            if let Some(end) = &self.end_month {
                if month > *end {
                    return false;
                }
            }
        }

        if let Some(mode) = self.mode {
            if tx.mode_of_payment() != mode {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if tx.category() != Some(category.as_str()) {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            match tx.purpose() {
                Some(purpose) if purpose.to_lowercase().contains(&needle) => {}
                _ => return false,
            }
        }

        true
    }

    /// The matching subset, in the order the server returned it.
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|tx| self.matches(tx)).collect()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn month_bound(value: &str) -> Option<String> {
    non_blank(value).map(|v| v.chars().take(7).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Credit, Debit};

    fn debit(id: &str, date: &str, mode: ModeOfPayment, purpose: &str, category: Option<&str>) -> Transaction {
        Transaction::Debit(Debit {
            id: id.to_string(),
            amount: 100.0,
            date: date.to_string(),
            mode_of_payment: mode,
            purpose: purpose.to_string(),
            category: category.map(str::to_string),
        })
    }

    fn credit(id: &str, date: &str) -> Transaction {
        Transaction::Credit(Credit {
            id: id.to_string(),
            amount: 5000.0,
            date: date.to_string(),
            mode_of_payment: ModeOfPayment::Card,
            bank: "HDFC".to_string(),
        })
    }

    fn sample() -> Vec<Transaction> {
        vec![
            debit("d1", "2024-01-15T00:00:00.000Z", ModeOfPayment::Cash, "Groceries", Some("Food")),
            debit("d2", "2024-02-03T00:00:00.000Z", ModeOfPayment::Upi, "Movie tickets", Some("Fun")),
            debit("d3", "2024-03-20T00:00:00.000Z", ModeOfPayment::Card, "Grocery run", Some("Food")),
            credit("c1", "2024-02-01T00:00:00.000Z"),
        ]
    }

    fn ids(list: &[&Transaction]) -> Vec<String> {
        list.iter().map(|tx| tx.id().to_string()).collect()
    }

    #[test]
    fn no_criteria_keeps_every_transaction_of_the_kind() {
        let all = sample();
        let filter = TransactionFilter::new(TransactionKind::Debit);
        assert_eq!(ids(&filter.apply(&all)), ["d1", "d2", "d3"]);
        let filter = TransactionFilter::new(TransactionKind::Credit);
        assert_eq!(ids(&filter.apply(&all)), ["c1"]);
    }

    #[test]
    fn month_range_is_inclusive() {
        let all = sample();
        let filter = TransactionFilter::from_form(TransactionKind::Debit, "2024-02", "2024-03", "", "", "");
        assert_eq!(ids(&filter.apply(&all)), ["d2", "d3"]);
    }

    #[test]
    fn inverted_range_yields_nothing() {
        let all = sample();
        let filter = TransactionFilter::from_form(TransactionKind::Debit, "2024-03", "2024-01", "", "", "");
        assert!(filter.apply(&all).is_empty());
    }

    #[test]
    fn full_dates_are_trimmed_to_month() {
        let all = sample();
        let filter = TransactionFilter::from_form(TransactionKind::Debit, "2024-01-31", "", "", "", "");
        assert_eq!(ids(&filter.apply(&all)), ["d1", "d2", "d3"]);
    }

    #[test]
    fn criteria_combine_with_and() {
        let all = sample();
        let filter = TransactionFilter::from_form(TransactionKind::Debit, "", "", "card", "Food", "grocery");
        assert_eq!(ids(&filter.apply(&all)), ["d3"]);
    }

    #[test]
    fn search_is_case_insensitive_on_purpose() {
        let all = sample();
        let filter = TransactionFilter::from_form(TransactionKind::Debit, "", "", "", "", "GROCER");
        assert_eq!(ids(&filter.apply(&all)), ["d1", "d3"]);
    }

    #[test]
    fn search_excludes_records_without_purpose() {
        let all = sample();
        let filter = TransactionFilter::from_form(TransactionKind::Credit, "", "", "", "", "hdfc");
        assert!(filter.apply(&all).is_empty());
    }

    #[test]
    fn unparseable_dates_fail_a_date_criterion_only() {
        let all = vec![debit("x", "not a date", ModeOfPayment::Cash, "Tea", None)];
        assert_eq!(TransactionFilter::new(TransactionKind::Debit).apply(&all).len(), 1);
        let ranged = TransactionFilter::from_form(TransactionKind::Debit, "2024-01", "", "", "", "");
        assert!(ranged.apply(&all).is_empty());
    }

    #[test]
    fn blank_form_is_the_reset_filter() {
        for kind in [TransactionKind::Debit, TransactionKind::Credit] {
            assert_eq!(
                TransactionFilter::from_form(kind, "", "", "", "", ""),
                TransactionFilter::new(kind)
            );
        }
        let stale = TransactionFilter::from_form(TransactionKind::Credit, "2024-01", "2024-03", "card", "", "");
        assert_ne!(stale, TransactionFilter::new(TransactionKind::Credit));
    }
}
