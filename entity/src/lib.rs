//! SeaORM entity definitions for the census schema.
//!
//! Tables mirror the migrations in the `migration` crate: a `family` owns many
//! `family_member` rows and at most one `survey_completion` row. Both children
//! reference `family.id` and are removed with their family.

pub mod prelude;

pub mod family;
pub mod family_member;
pub mod survey_completion;
