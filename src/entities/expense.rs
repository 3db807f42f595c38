//! Expense entity - Money spent on the event.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Expense database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    /// Unique identifier for the expense
    #[sea_orm(primary_key)]
    pub id: i64,
    /// What the money was spent on
    pub description: String,
    /// Amount spent, as exact decimal text (`SQLite` has no decimal type)
    pub amount: String,
    /// Budget category (e.g., "food", "venue")
    pub category: String,
    /// ID of the owning user
    pub user_id: i64,
}

/// Defines relationships between Expense and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each expense belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Model {
    /// Parses the stored amount.
    ///
    /// # Errors
    /// Returns [`DbErr::Type`] if the column holds something other than a decimal.
    pub fn amount_value(&self) -> Result<Decimal, DbErr> {
        Decimal::from_str(&self.amount).map_err(|e| {
            DbErr::Type(format!("Invalid amount {:?} on expense {}: {e}", self.amount, self.id))
        })
    }
}

impl ActiveModelBehavior for ActiveModel {}
