//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod expense;
pub mod guest;
pub mod session;
pub mod task;
pub mod user;
pub mod vendor;

// Re-export specific types to avoid conflicts
pub use expense::{Column as ExpenseColumn, Entity as Expense, Model as ExpenseModel};
pub use guest::{Column as GuestColumn, Entity as Guest, Model as GuestModel};
pub use session::{Column as SessionColumn, Entity as Session, Model as SessionModel};
pub use task::{Column as TaskColumn, Entity as Task, Model as TaskModel};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
pub use vendor::{Column as VendorColumn, Entity as Vendor, Model as VendorModel};
