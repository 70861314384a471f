//! Database repository layer for the census entities.
//!
//! Each repository holds a borrowed connection, issues the statements for one concern,
//! and converts entity models into server-side domain models before returning them.
//! Multi-statement writes that must stay consistent open their own transaction.

pub mod completion;
pub mod dashboard;
pub mod export;
pub mod family;
pub mod member;

#[cfg(test)]
mod test;
