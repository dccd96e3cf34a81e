//! Shared testing utilities for the club management backend.
//!
//! Provides a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories that
//! insert entities with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Member;
//!
//! #[tokio::test]
//! async fn lists_members() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Member)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
