//----------------------------------------
// data mod
//----------------------------------------
//! Grouped records: a grouping column and a value column, split into one
//! sample per group level.
pub mod error;
pub mod grouped;
