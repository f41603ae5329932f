//! Pure derivations over server data: chart buckets, progress figures and
//! the monthly report's insights.

use crate::format::{format_currency, short_day};
use crate::models::{Budget, CategoryTotal, MonthlyReport};

/// Slice colours, assigned by position.
pub const PALETTE: [&str; 7] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#C0C0C0",
];

/// Categories shown individually before the rest collapse into "Others".
pub const TOP_CATEGORIES: usize = 6;

pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const REPORT_YEARS: i32 = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

fn sorted_desc(totals: &[CategoryTotal]) -> Vec<&CategoryTotal> {
    let mut sorted: Vec<&CategoryTotal> = totals.iter().collect();
    sorted.sort_by(|a, b| b.total.total_cmp(&a.total));
    sorted
}

/// The largest six categories plus an "Others" slice holding the rest when
/// the rest sums above zero. Never more than seven slices.
pub fn top_slices(totals: &[CategoryTotal]) -> Vec<ChartSlice> {
    let sorted = sorted_desc(totals);
    let mut slices: Vec<ChartSlice> = sorted
        .iter()
        .take(TOP_CATEGORIES)
        .enumerate()
        .map(|(i, t)| ChartSlice {
            label: t.label().to_string(),
            value: t.total,
            color: PALETTE[i],
        })
        .collect();

    let others: f64 = sorted.iter().skip(TOP_CATEGORIES).map(|t| t.total).sum();
    if others > 0.0 {
        slices.push(ChartSlice {
            label: "Others".to_string(),
            value: others,
            color: PALETTE[slices.len()],
        });
    }
    slices
}

/// Every bucket as its own slice, in server order.
pub fn all_slices(totals: &[CategoryTotal]) -> Vec<ChartSlice> {
    totals
        .iter()
        .enumerate()
        .map(|(i, t)| ChartSlice {
            label: t.label().to_string(),
            value: t.total,
            color: PALETTE[i % PALETTE.len()],
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct BudgetProgress {
    pub spent: f64,
    /// Capped at 100 for the progress bar.
    pub percentage: f64,
    pub is_overspent: bool,
    /// Negative once overspent.
    pub remaining: f64,
}

pub fn budget_progress(budget: &Budget) -> BudgetProgress {
    let spent = budget.spent.unwrap_or(0.0);
    let raw = if budget.amount > 0.0 {
        spent / budget.amount * 100.0
    } else if spent > 0.0 {
        f64::INFINITY
    } else {
        0.0
    };
    BudgetProgress {
        spent,
        percentage: raw.min(100.0),
        is_overspent: raw > 100.0,
        remaining: budget.amount - spent,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GoalProgress {
    pub percentage: f64,
    pub is_achieved: bool,
    pub remaining: f64,
}

/// Progress of a goal measured against lifetime savings.
pub fn goal_progress(target_amount: f64, lifetime_savings: f64) -> GoalProgress {
    let raw = if target_amount > 0.0 {
        lifetime_savings / target_amount * 100.0
    } else {
        0.0
    };
    GoalProgress {
        percentage: raw.clamp(0.0, 100.0),
        is_achieved: target_amount > 0.0 && raw >= 100.0,
        remaining: target_amount - lifetime_savings,
    }
}

/// Years offered by the report selector, newest first.
pub fn report_years(current_year: i32) -> Vec<i32> {
    (0..REPORT_YEARS).map(|i| current_year - i).collect()
}

pub fn month_name(month: u32) -> &'static str {
    MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

#[derive(Clone, Debug, PartialEq)]
pub struct Insight {
    pub title: &'static str,
    pub points: Vec<String>,
}

fn share(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

pub fn average_daily_expense(report: &MonthlyReport) -> f64 {
    if report.daily_trend.is_empty() {
        0.0
    } else {
        report.totals.debit / report.daily_trend.len() as f64
    }
}

pub fn generate_insights(report: &MonthlyReport, symbol: &str) -> Vec<Insight> {
    let total_expense = report.totals.debit;
    let mut insights = vec![Insight {
        title: "Monthly Overview",
        points: vec![
            format!("Total expenses this month: {}", format_currency(total_expense, symbol)),
            format!(
                "Average daily expense: {}",
                format_currency(average_daily_expense(report), symbol)
            ),
            format!("Net savings: {}", format_currency(report.savings, symbol)),
        ],
    }];

    insights.push(Insight {
        title: "Top Expense Categories",
        points: sorted_desc(&report.expense_by_purpose)
            .into_iter()
            .take(3)
            .map(|t| {
                format!(
                    "{}: {} ({:.1}%)",
                    t.label(),
                    format_currency(t.total, symbol),
                    share(t.total, total_expense)
                )
            })
            .collect(),
    });

    insights.push(Insight {
        title: "Preferred Payment Methods",
        points: sorted_desc(&report.payment_method_distribution)
            .into_iter()
            .take(3)
            .map(|t| format!("{}: {}", t.label(), format_currency(t.total, symbol)))
            .collect(),
    });

    if let Some(peak) = sorted_desc(&report.daily_trend).first() {
        insights.push(Insight {
            title: "Spending Patterns",
            points: vec![format!(
                "Highest spending day: {} ({})",
                short_day(peak.label()),
                format_currency(peak.total, symbol)
            )],
        });
    }

    insights
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Plain-text export of a monthly report.
pub fn report_csv(report: &MonthlyReport, month: u32, year: i32) -> String {
    let mut out = format!("Financial report,{} {}\n", month_name(month), year);
    out.push_str("Section,Label,Amount\n");
    let mut row = |section: &str, label: &str, amount: f64| {
        out.push_str(&format!("{},{},{:.2}\n", section, csv_field(label), amount));
    };
    row("Summary", "Total income", report.totals.credit);
    row("Summary", "Total expenses", report.totals.debit);
    row("Summary", "Net savings", report.savings);
    for t in sorted_desc(&report.expense_by_purpose) {
        row("Expense by purpose", t.label(), t.total);
    }
    for t in &report.daily_trend {
        row("Daily trend", t.label(), t.total);
    }
    for t in &report.payment_method_distribution {
        row("Payment method", t.label(), t.total);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, ReportTotals};

    fn totals(pairs: &[(&str, f64)]) -> Vec<CategoryTotal> {
        pairs
            .iter()
            .map(|(id, total)| CategoryTotal {
                id: Some(id.to_string()),
                total: *total,
            })
            .collect()
    }

    #[test]
    fn few_categories_are_all_shown_sorted() {
        let slices = top_slices(&totals(&[("Rent", 100.0), ("Food", 300.0), ("Fuel", 200.0)]));
        let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Food", "Fuel", "Rent"]);
        assert_eq!(slices[0].color, PALETTE[0]);
    }

    #[test]
    fn extra_categories_fold_into_others() {
        let input = totals(&[
            ("a", 10.0),
            ("b", 90.0),
            ("c", 80.0),
            ("d", 70.0),
            ("e", 60.0),
            ("f", 50.0),
            ("g", 40.0),
            ("h", 5.0),
            ("i", 15.0),
        ]);
        let slices = top_slices(&input);
        assert_eq!(slices.len(), 7);
        let others = slices.last().unwrap();
        assert_eq!(others.label, "Others");
        assert_eq!(others.value, 30.0);
        assert_eq!(others.color, PALETTE[6]);
    }

    #[test]
    fn zero_remainder_has_no_others_slice() {
        let input = totals(&[
            ("a", 6.0),
            ("b", 5.0),
            ("c", 4.0),
            ("d", 3.0),
            ("e", 2.0),
            ("f", 1.0),
            ("g", 0.0),
            ("h", 0.0),
        ]);
        let slices = top_slices(&input);
        assert_eq!(slices.len(), 6);
        assert!(slices.iter().all(|s| s.label != "Others"));
    }

    #[test]
    fn slice_count_never_exceeds_seven() {
        for n in 0..20 {
            let input: Vec<CategoryTotal> = (0..n)
                .map(|i| CategoryTotal {
                    id: Some(format!("c{}", i)),
                    total: i as f64,
                })
                .collect();
            let slices = top_slices(&input);
            assert!(slices.len() <= 7);
            let rest: f64 = {
                let mut sorted: Vec<f64> = input.iter().map(|t| t.total).collect();
                sorted.sort_by(|a, b| b.total_cmp(a));
                sorted.iter().skip(6).sum()
            };
            assert_eq!(slices.iter().any(|s| s.label == "Others"), rest > 0.0);
        }
    }

    fn budget(amount: f64, spent: Option<f64>) -> Budget {
        Budget {
            id: "b".to_string(),
            category: "Food".to_string(),
            amount,
            period: BudgetPeriod::Monthly,
            spent,
        }
    }

    #[test]
    fn overspent_budget_caps_bar_but_reports_deficit() {
        let progress = budget_progress(&budget(1000.0, Some(1200.0)));
        assert_eq!(progress.percentage, 100.0);
        assert!(progress.is_overspent);
        assert_eq!(progress.remaining, -200.0);
    }

    #[test]
    fn missing_spent_counts_as_zero() {
        let progress = budget_progress(&budget(500.0, None));
        assert_eq!(progress.percentage, 0.0);
        assert!(!progress.is_overspent);
        assert_eq!(progress.remaining, 500.0);
    }

    #[test]
    fn exactly_spent_budget_is_not_overspent() {
        let progress = budget_progress(&budget(500.0, Some(500.0)));
        assert_eq!(progress.percentage, 100.0);
        assert!(!progress.is_overspent);
    }

    #[test]
    fn goal_is_achieved_at_exactly_one_hundred_percent() {
        let progress = goal_progress(50_000.0, 50_000.0);
        assert_eq!(progress.percentage, 100.0);
        assert!(progress.is_achieved);
        assert_eq!(progress.remaining, 0.0);

        let short = goal_progress(50_000.0, 49_999.0);
        assert!(!short.is_achieved);
    }

    #[test]
    fn goal_without_target_is_never_achieved() {
        let progress = goal_progress(0.0, 100.0);
        assert!(!progress.is_achieved);
        assert_eq!(progress.percentage, 0.0);
    }

    #[test]
    fn years_count_back_from_current() {
        assert_eq!(report_years(2026), [2026, 2025, 2024, 2023, 2022]);
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(13), "");
    }

    fn report() -> MonthlyReport {
        MonthlyReport {
            totals: ReportTotals {
                credit: 10_000.0,
                debit: 4_000.0,
            },
            savings: 6_000.0,
            expense_by_purpose: totals(&[("Rent", 3_000.0), ("Food", 1_000.0)]),
            daily_trend: totals(&[("2024-03-01", 3_500.0), ("2024-03-02", 500.0)]),
            payment_method_distribution: totals(&[("upi", 1_000.0), ("card", 3_000.0)]),
        }
    }

    #[test]
    fn insights_cover_overview_categories_methods_and_peak_day() {
        let insights = generate_insights(&report(), "₹");
        let titles: Vec<&str> = insights.iter().map(|i| i.title).collect();
        assert_eq!(
            titles,
            ["Monthly Overview", "Top Expense Categories", "Preferred Payment Methods", "Spending Patterns"]
        );
        assert_eq!(insights[0].points[1], "Average daily expense: ₹ 2,000.00");
        assert_eq!(insights[1].points[0], "Rent: ₹ 3,000.00 (75.0%)");
        assert_eq!(insights[2].points[0], "card: ₹ 3,000.00");
        assert_eq!(insights[3].points[0], "Highest spending day: Mar 1 (₹ 3,500.00)");
    }

    #[test]
    fn empty_month_has_no_peak_day_and_zero_average() {
        let empty = MonthlyReport::default();
        assert_eq!(average_daily_expense(&empty), 0.0);
        let insights = generate_insights(&empty, "₹");
        assert_eq!(insights.len(), 3);
    }

    #[test]
    fn csv_quotes_awkward_labels() {
        let mut r = report();
        r.expense_by_purpose = totals(&[("Rent, deposit", 3_000.0)]);
        let csv = report_csv(&r, 3, 2024);
        assert!(csv.starts_with("Financial report,March 2024\n"));
        assert!(csv.contains("Expense by purpose,\"Rent, deposit\",3000.00\n"));
        assert!(csv.contains("Summary,Net savings,6000.00\n"));
    }
}
