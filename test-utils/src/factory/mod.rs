//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let family = factory::family::FamilyFactory::new(&db)
//!     .area("001", "002", "Krajan")
//!     .jumlah_anggota_15plus(3)
//!     .build()
//!     .await?;
//! let member = factory::create_member(&db, family.id, 1).await?;
//! ```
//!
//! # Available Factories
//!
//! - `family` - Create family entities
//! - `family_member` - Create family member entities
//! - `survey_completion` - Create survey completion entities
//! - `helpers` - Unique id counter and multi-entity helpers

pub mod family;
pub mod family_member;
pub mod helpers;
pub mod survey_completion;

pub use family::create_family;
pub use family_member::create_member;
pub use survey_completion::create_completion;
