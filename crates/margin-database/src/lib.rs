//! # margin-database
//!
//! PostgreSQL connection management, migrations, and the repository that
//! backs token subject lookups.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::AdminRepository;
