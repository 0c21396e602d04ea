//! # pantryshare-database
//!
//! PostgreSQL access for PantryShare: connection pool management, the
//! migration runner, and one repository per table. Repositories own all SQL;
//! multi-step workflow writes that must be atomic run inside a single
//! repository method using a sqlx transaction.

pub mod connection;
pub mod migration;
pub mod repositories;
