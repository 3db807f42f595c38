use super::{FormErrors, REQUIRED_MESSAGE, collect, required};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use validator::Validate;

/// Expense creation form.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct ExpenseForm {
    #[validate(custom(function = "required"))]
    pub description: String,
    #[validate(custom(function = "required"))]
    pub amount: String,
    #[validate(custom(function = "required"))]
    pub category: String,
}

/// Shown for text that does not parse as a decimal.
pub const INVALID_AMOUNT: &str = "Not a valid decimal value.";
/// Shown for amounts outside [`MAX_AMOUNT_DIGITS`] / [`AMOUNT_PLACES`].
pub const AMOUNT_OUT_OF_RANGE: &str =
    "Amount must have at most 15 digits before and 2 after the decimal point.";

/// Digits allowed before the decimal point.
pub const MAX_AMOUNT_DIGITS: u32 = 15;
/// Digits allowed after the decimal point.
pub const AMOUNT_PLACES: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
}

impl ExpenseForm {
    pub fn clean(&self) -> Result<NewExpense, FormErrors> {
        let mut errors = collect(self.validate());

        if !errors.contains("amount") {
            match parse_amount(&self.amount) {
                Ok(amount) => {
                    return errors.into_result(NewExpense {
                        description: self.description.clone(),
                        amount,
                        category: self.category.clone(),
                    });
                }
                Err(message) => errors.add("amount", message),
            }
        }
        Err(errors)
    }
}

/// Parses a submitted amount. Zero counts as missing.
fn parse_amount(raw: &str) -> Result<Decimal, &'static str> {
    let amount = Decimal::from_str(raw.trim()).map_err(|_| INVALID_AMOUNT)?;
    if amount.is_zero() {
        return Err(REQUIRED_MESSAGE);
    }

    let limit = Decimal::from(10_i64.pow(MAX_AMOUNT_DIGITS));
    if amount.abs() >= limit || amount.normalize().scale() > AMOUNT_PLACES {
        return Err(AMOUNT_OUT_OF_RANGE);
    }
    Ok(amount)
}
