//! User entity - The account that owns every other record.
//!
//! Username and email are unique across all users. The password column holds
//! an argon2 PHC string, never the plaintext.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name chosen at registration (2-20 characters)
    #[sea_orm(unique)]
    pub username: String,
    /// Login identifier
    #[sea_orm(unique)]
    pub email: String,
    /// Hashed password
    #[serde(skip_serializing)]
    pub password: String,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user has many guests
    #[sea_orm(has_many = "super::guest::Entity")]
    Guests,
    /// One user has many tasks
    #[sea_orm(has_many = "super::task::Entity")]
    Tasks,
    /// One user has many vendors
    #[sea_orm(has_many = "super::vendor::Entity")]
    Vendors,
    /// One user has many expenses
    #[sea_orm(has_many = "super::expense::Entity")]
    Expenses,
    /// One user has many login sessions
    #[sea_orm(has_many = "super::session::Entity")]
    Sessions,
}

impl Related<super::guest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guests.def()
    }
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tasks.def()
    }
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendors.def()
    }
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
