//! Guest entity - A person invited to the event.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Guest database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "guests")]
pub struct Model {
    /// Unique identifier for the guest
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Guest's full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Free-form grouping (e.g., "family", "work")
    pub category: String,
    /// ID of the owning user
    pub user_id: i64,
}

/// Defines relationships between Guest and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each guest belongs to one user
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

impl ActiveModelBehavior for ActiveModel {}
