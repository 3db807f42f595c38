//! Expense business logic - listing and adding a user's expenses.

use crate::{
    entities::{Expense, expense},
    errors::{Error, Result},
    forms::ExpenseForm,
};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves every expense owned by `user_id`, oldest first.
pub async fn get_expenses_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<expense::Model>> {
    Expense::find()
        .filter(expense::Column::UserId.eq(user_id))
        .order_by_asc(expense::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Validates an expense form, parsing its amount, and stores the expense under `user_id`.
pub async fn create_expense(
    db: &DatabaseConnection,
    user_id: i64,
    form: &ExpenseForm,
) -> Result<expense::Model> {
    let new_expense = form.clean().map_err(|errors| Error::Validation { errors })?;

    let expense = expense::ActiveModel {
        description: Set(new_expense.description),
        amount: Set(new_expense.amount.to_string()),
        category: Set(new_expense.category),
        user_id: Set(user_id),
        ..Default::default()
    };

    let expense = expense.insert(db).await?;
    tracing::info!(
        "User {} added expense {} ({})",
        user_id,
        expense.id,
        expense.amount
    );
    Ok(expense)
}

/// Sums a list of expenses for display.
///
/// # Errors
/// Returns [`Error::Database`] if a stored amount is not a decimal or the sum overflows.
pub fn total(expenses: &[expense::Model]) -> Result<Decimal> {
    expenses.iter().try_fold(Decimal::ZERO, |sum, expense| {
        sum.checked_add(expense.amount_value()?).ok_or_else(|| {
            Error::Database(DbErr::Custom("Expense total overflowed".to_string()))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn form(description: &str, amount: &str) -> ExpenseForm {
        ExpenseForm {
            description: description.to_string(),
            amount: amount.to_string(),
            category: "food".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_expense_keeps_decimal_amount() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        let expense = create_expense(&db, user.id, &form("lunch", "12.50")).await?;

        assert_eq!(expense.amount_value()?, Decimal::new(1250, 2));
        assert_eq!(expense.user_id, user.id);
        assert_eq!(expense.category, "food");

        let stored = get_expenses_for_user(&db, user.id).await?;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].amount, "12.50");
        Ok(())
    }

    #[tokio::test]
    async fn test_wide_amount_is_stored_exactly() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        let expense = create_expense(&db, user.id, &form("venue", "123456789012345.67")).await?;

        let stored = Expense::find_by_id(expense.id).one(&db).await?;
        let stored = stored.map(|e| e.amount_value()).transpose()?;
        assert_eq!(stored, Some(Decimal::new(12_345_678_901_234_567, 2)));
        Ok(())
    }

    #[tokio::test]
    async fn test_out_of_range_amount_is_not_stored() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        let result =
            create_expense(&db, user.id, &form("castle", "79228162514264337593543950335")).await;

        assert!(matches!(result, Err(Error::Validation { ref errors }) if errors.contains("amount")));
        assert!(get_expenses_for_user(&db, user.id).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_non_numeric_amount() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        let result = create_expense(&db, user.id, &form("lunch", "a lot")).await;

        assert!(matches!(result, Err(Error::Validation { ref errors }) if errors.contains("amount")));
        assert!(get_expenses_for_user(&db, user.id).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_total() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        create_expense(&db, user.id, &form("lunch", "12.50")).await?;
        create_expense(&db, user.id, &form("cake", "30")).await?;

        let expenses = get_expenses_for_user(&db, user.id).await?;
        assert_eq!(total(&expenses)?, Decimal::new(425, 1));
        assert_eq!(total(&[])?, Decimal::ZERO);
        Ok(())
    }
}
