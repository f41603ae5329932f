//! Shapes of the JSON the MoneyMind API exchanges with the client.
//!
//! Everything here is a transient copy of server-owned state; nothing is
//! persisted client-side.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeOfPayment {
    Cash,
    Card,
    Upi,
    #[serde(other)]
    Other,
}

impl ModeOfPayment {
    pub const ALL: [ModeOfPayment; 3] = [ModeOfPayment::Cash, ModeOfPayment::Card, ModeOfPayment::Upi];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModeOfPayment::Cash => "cash",
            ModeOfPayment::Card => "card",
            ModeOfPayment::Upi => "upi",
            ModeOfPayment::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModeOfPayment::Cash => "Cash",
            ModeOfPayment::Card => "Card",
            ModeOfPayment::Upi => "UPI",
            ModeOfPayment::Other => "Other",
        }
    }

    /// Parses a form value; empty or unknown input yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cash" => Some(ModeOfPayment::Cash),
            "card" => Some(ModeOfPayment::Card),
            "upi" => Some(ModeOfPayment::Upi),
            _ => None,
        }
    }
}

impl fmt::Display for ModeOfPayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Debit,
    Credit,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Debit => "Debit",
            TransactionKind::Credit => "Credit",
        }
    }

    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("credit") {
            TransactionKind::Credit
        } else {
            TransactionKind::Debit
        }
    }
}

/// An expense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debit {
    #[serde(rename = "_id")]
    pub id: String,
    pub amount: f64,
    pub date: String,
    pub mode_of_payment: ModeOfPayment,
    #[serde(default)]
    pub purpose: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// An income record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credit {
    #[serde(rename = "_id")]
    pub id: String,
    pub amount: f64,
    pub date: String,
    pub mode_of_payment: ModeOfPayment,
    #[serde(default)]
    pub bank: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Transaction {
    Debit(Debit),
    Credit(Credit),
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Debit(_) => TransactionKind::Debit,
            Transaction::Credit(_) => TransactionKind::Credit,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Transaction::Debit(d) => &d.id,
            Transaction::Credit(c) => &c.id,
        }
    }

    pub fn amount(&self) -> f64 {
        match self {
            Transaction::Debit(d) => d.amount,
            Transaction::Credit(c) => c.amount,
        }
    }

    pub fn date(&self) -> &str {
        match self {
            Transaction::Debit(d) => &d.date,
            Transaction::Credit(c) => &c.date,
        }
    }

    pub fn mode_of_payment(&self) -> ModeOfPayment {
        match self {
            Transaction::Debit(d) => d.mode_of_payment,
            Transaction::Credit(c) => c.mode_of_payment,
        }
    }

    pub fn purpose(&self) -> Option<&str> {
        match self {
            Transaction::Debit(d) => Some(&d.purpose),
            Transaction::Credit(_) => None,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            Transaction::Debit(d) => d.category.as_deref(),
            Transaction::Credit(_) => None,
        }
    }

    pub fn bank(&self) -> Option<&str> {
        match self {
            Transaction::Debit(_) => None,
            Transaction::Credit(c) => Some(&c.bank),
        }
    }
}

/// Body of an add or edit request. The variant picks the endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NewTransaction {
    Debit(NewDebit),
    Credit(NewCredit),
}

impl NewTransaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            NewTransaction::Debit(_) => TransactionKind::Debit,
            NewTransaction::Credit(_) => TransactionKind::Credit,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDebit {
    pub amount: f64,
    pub date: String,
    pub purpose: String,
    pub mode_of_payment: ModeOfPayment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCredit {
    pub amount: f64,
    pub date: String,
    pub bank: String,
    pub mode_of_payment: ModeOfPayment,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
    Weekly,
    Yearly,
}

impl BudgetPeriod {
    pub const ALL: [BudgetPeriod; 3] = [BudgetPeriod::Monthly, BudgetPeriod::Weekly, BudgetPeriod::Yearly];

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Monthly => "monthly",
            BudgetPeriod::Weekly => "weekly",
            BudgetPeriod::Yearly => "yearly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetPeriod::Monthly => "Monthly",
            BudgetPeriod::Weekly => "Weekly",
            BudgetPeriod::Yearly => "Yearly",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "weekly" => BudgetPeriod::Weekly,
            "yearly" => BudgetPeriod::Yearly,
            _ => BudgetPeriod::Monthly,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(rename = "_id")]
    pub id: String,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub period: BudgetPeriod,
    #[serde(default)]
    pub spent: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BudgetInput {
    pub category: String,
    pub amount: f64,
    pub period: BudgetPeriod,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub target_amount: f64,
    pub deadline: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInput {
    pub title: String,
    pub target_amount: f64,
    pub deadline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub name: String,
    pub account_number: String,
}

impl BankAccount {
    /// Account number reduced to its last four digits.
    pub fn masked_number(&self) -> String {
        let digits: Vec<char> = self.account_number.chars().collect();
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("****{}", tail)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub profile_picture: String,
    pub bank_accounts: Vec<BankAccount>,
    pub custom_categories: Vec<String>,
}

/// One `{ _id, total }` bucket of a server-side aggregation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub total: f64,
}

impl CategoryTotal {
    pub fn label(&self) -> &str {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => "Uncategorized",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSummary {
    pub total: f64,
    pub expense_by_purpose: Vec<CategoryTotal>,
}

/// Amount and date of a recent transaction as listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecentEntry {
    pub amount: f64,
    pub date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DebitOverview {
    pub total_debit: f64,
    pub last_debits: Vec<RecentEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditOverview {
    pub total_credit: f64,
    pub last_credits: Vec<RecentEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportTotals {
    pub credit: f64,
    pub debit: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyReport {
    pub totals: ReportTotals,
    pub savings: f64,
    pub expense_by_purpose: Vec<CategoryTotal>,
    pub daily_trend: Vec<CategoryTotal>,
    pub payment_method_distribution: Vec<CategoryTotal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debit_reads_server_shape() {
        let json = r#"{"_id":"a1","amount":250,"date":"2024-03-05T00:00:00.000Z","modeOfPayment":"upi","purpose":"Groceries","__v":0}"#;
        let debit: Debit = serde_json::from_str(json).unwrap();
        assert_eq!(debit.id, "a1");
        assert_eq!(debit.mode_of_payment, ModeOfPayment::Upi);
        assert_eq!(debit.category, None);
    }

    #[test]
    fn unknown_payment_mode_is_tolerated() {
        let json = r#"{"_id":"c1","amount":10,"date":"2024-03-05","modeOfPayment":"cheque","bank":"HDFC"}"#;
        let credit: Credit = serde_json::from_str(json).unwrap();
        assert_eq!(credit.mode_of_payment, ModeOfPayment::Other);
    }

    #[test]
    fn new_debit_serializes_camel_case_without_bank() {
        let body = NewTransaction::Debit(NewDebit {
            amount: 99.5,
            date: "2024-03-05".to_string(),
            purpose: "Lunch".to_string(),
            mode_of_payment: ModeOfPayment::Cash,
            category: None,
        });
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["modeOfPayment"], "cash");
        assert_eq!(value["purpose"], "Lunch");
        assert!(value.get("bank").is_none());
        assert!(value.get("category").is_none());
    }

    #[test]
    fn profile_tolerates_missing_fields() {
        let profile: Profile = serde_json::from_str(r#"{"name":"Asha"}"#).unwrap();
        assert_eq!(profile.name, "Asha");
        assert!(profile.bank_accounts.is_empty());
    }

    #[test]
    fn masked_number_keeps_last_four() {
        let account = BankAccount {
            name: "SBI".to_string(),
            account_number: "123456789".to_string(),
        };
        assert_eq!(account.masked_number(), "****6789");
        let short = BankAccount {
            name: "X".to_string(),
            account_number: "12".to_string(),
        };
        assert_eq!(short.masked_number(), "****12");
    }

    #[test]
    fn null_category_id_reads_as_uncategorized() {
        let total: CategoryTotal = serde_json::from_str(r#"{"_id":null,"total":5}"#).unwrap();
        assert_eq!(total.label(), "Uncategorized");
    }
}
