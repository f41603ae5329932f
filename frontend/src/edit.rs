//! Edit-in-place state for transaction rows.

use std::collections::HashMap;
use std::rc::Rc;

use yew::Reducible;

use crate::error::ValidationError;
use crate::format::input_date;
use crate::models::{ModeOfPayment, NewCredit, NewDebit, NewTransaction, Transaction, TransactionKind};

/// Form values of a transaction being added or edited, kept as typed text.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: String,
    pub date: String,
    /// Purpose of a debit, bank of a credit.
    pub detail: String,
    pub mode: String,
    /// Debits only.
    pub category: String,
}

impl TransactionDraft {
    pub fn empty(kind: TransactionKind) -> Self {
        TransactionDraft {
            kind,
            amount: String::new(),
            date: String::new(),
            detail: String::new(),
            mode: String::new(),
            category: String::new(),
        }
    }

    pub fn from_transaction(tx: &Transaction) -> Self {
        let (detail, category) = match tx {
            Transaction::Debit(d) => (d.purpose.clone(), d.category.clone().unwrap_or_default()),
            Transaction::Credit(c) => (c.bank.clone(), String::new()),
        };
        TransactionDraft {
            kind: tx.kind(),
            amount: tx.amount().to_string(),
            date: input_date(tx.date()),
            detail,
            mode: tx.mode_of_payment().as_str().to_string(),
            category,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Amount => self.amount = value,
            DraftField::Date => self.date = value,
            DraftField::Detail => self.detail = value,
            DraftField::Mode => self.mode = value,
            DraftField::Category => self.category = value,
        }
    }

    pub fn detail_label(&self) -> &'static str {
        match self.kind {
            TransactionKind::Debit => "Purpose",
            TransactionKind::Credit => "Bank",
        }
    }

    /// Checks required fields and builds the request body.
    pub fn validate(&self) -> Result<NewTransaction, ValidationError> {
        let amount_raw = self.amount.trim();
        if amount_raw.is_empty() {
            return Err(ValidationError::MissingField("Amount"));
        }
        let amount: f64 = amount_raw
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| ValidationError::InvalidAmount(amount_raw.to_string()))?;

        let date = self.date.trim();
        if date.is_empty() {
            return Err(ValidationError::MissingField("Date"));
        }

        let detail = self.detail.trim();
        if detail.is_empty() {
            return Err(ValidationError::MissingField(self.detail_label()));
        }

        let mode_of_payment =
            ModeOfPayment::parse(&self.mode).ok_or(ValidationError::MissingField("Mode of payment"))?;

        Ok(match self.kind {
            TransactionKind::Debit => {
                let category = self.category.trim();
                NewTransaction::Debit(NewDebit {
                    amount,
                    date: date.to_string(),
                    purpose: detail.to_string(),
                    mode_of_payment,
                    category: (!category.is_empty()).then(|| category.to_string()),
                })
            }
            TransactionKind::Credit => NewTransaction::Credit(NewCredit {
                amount,
                date: date.to_string(),
                bank: detail.to_string(),
                mode_of_payment,
            }),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Amount,
    Date,
    Detail,
    Mode,
    Category,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RowEdit {
    Viewing,
    Editing(TransactionDraft),
}

/// Edit state of every row in a table, keyed by transaction id. Rows
/// absent from the map are viewing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowEdits {
    editing: HashMap<String, TransactionDraft>,
}

impl RowEdits {
    pub fn state(&self, id: &str) -> RowEdit {
        match self.editing.get(id) {
            Some(draft) => RowEdit::Editing(draft.clone()),
            None => RowEdit::Viewing,
        }
    }

    /// Viewing → Editing, seeding the draft from the record.
    pub fn begin(&mut self, tx: &Transaction) {
        self.editing
            .insert(tx.id().to_string(), TransactionDraft::from_transaction(tx));
    }

    pub fn update<F>(&mut self, id: &str, change: F)
    where
        F: FnOnce(&mut TransactionDraft),
    {
        if let Some(draft) = self.editing.get_mut(id) {
            change(draft);
        }
    }

    /// Editing → Viewing, dropping the draft. Used for both cancel and a
    /// successful save.
    pub fn finish(&mut self, id: &str) {
        self.editing.remove(id);
    }
}

pub enum EditAction {
    Begin(Transaction),
    Set {
        id: String,
        field: DraftField,
        value: String,
    },
    Finish(String),
}

impl Reducible for RowEdits {
    type Action = EditAction;

    fn reduce(self: Rc<Self>, action: EditAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            EditAction::Begin(tx) => next.begin(&tx),
            EditAction::Set { id, field, value } => next.update(&id, |draft| draft.set(field, value)),
            EditAction::Finish(id) => next.finish(&id),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Credit, Debit};

    fn groceries() -> Transaction {
        Transaction::Debit(Debit {
            id: "d1".to_string(),
            amount: 250.0,
            date: "2024-03-05T00:00:00.000Z".to_string(),
            mode_of_payment: ModeOfPayment::Upi,
            purpose: "Groceries".to_string(),
            category: Some("Food".to_string()),
        })
    }

    #[test]
    fn draft_is_seeded_from_record() {
        let draft = TransactionDraft::from_transaction(&groceries());
        assert_eq!(draft.amount, "250");
        assert_eq!(draft.date, "2024-03-05");
        assert_eq!(draft.detail, "Groceries");
        assert_eq!(draft.mode, "upi");
        assert_eq!(draft.category, "Food");
    }

    #[test]
    fn empty_amount_is_rejected() {
        let mut draft = TransactionDraft::from_transaction(&groceries());
        draft.amount = "  ".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::MissingField("Amount")));
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let mut draft = TransactionDraft::from_transaction(&groceries());
        draft.amount = "abc".to_string();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::InvalidAmount("abc".to_string()))
        );
    }

    #[test]
    fn credit_requires_bank() {
        let mut draft = TransactionDraft::empty(TransactionKind::Credit);
        draft.amount = "1000".to_string();
        draft.date = "2024-03-01".to_string();
        draft.mode = "card".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::MissingField("Bank")));
        draft.detail = "HDFC".to_string();
        assert!(matches!(draft.validate(), Ok(NewTransaction::Credit(_))));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let mut draft = TransactionDraft::from_transaction(&groceries());
        draft.mode = String::new();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Mode of payment"))
        );
    }

    #[test]
    fn editing_never_touches_the_record() {
        let list = vec![groceries()];
        let mut edits = RowEdits::default();
        edits.begin(&list[0]);
        edits.update("d1", |draft| draft.amount = String::new());

        match edits.state("d1") {
            RowEdit::Editing(draft) => assert!(draft.validate().is_err()),
            RowEdit::Viewing => panic!("row should still be editing"),
        }
        assert_eq!(list[0].amount(), 250.0);
    }

    #[test]
    fn finish_returns_row_to_viewing() {
        let tx = Transaction::Credit(Credit {
            id: "c1".to_string(),
            amount: 10.0,
            date: "2024-03-05".to_string(),
            mode_of_payment: ModeOfPayment::Cash,
            bank: "SBI".to_string(),
        });
        let mut edits = RowEdits::default();
        assert_eq!(edits.state("c1"), RowEdit::Viewing);
        edits.begin(&tx);
        assert!(matches!(edits.state("c1"), RowEdit::Editing(_)));
        edits.finish("c1");
        assert_eq!(edits.state("c1"), RowEdit::Viewing);
    }

    #[test]
    fn reducer_ignores_edits_to_rows_not_being_edited() {
        let state = Rc::new(RowEdits::default()).reduce(EditAction::Set {
            id: "d1".to_string(),
            field: DraftField::Amount,
            value: "99".to_string(),
        });
        assert_eq!(state.state("d1"), RowEdit::Viewing);

        let state = state
            .reduce(EditAction::Begin(groceries()))
            .reduce(EditAction::Set {
                id: "d1".to_string(),
                field: DraftField::Detail,
                value: "Rent".to_string(),
            });
        match state.state("d1") {
            RowEdit::Editing(draft) => assert_eq!(draft.detail, "Rent"),
            RowEdit::Viewing => panic!("row should be editing"),
        }
    }
}
