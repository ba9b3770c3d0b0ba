//----------------------------------------
// normality mod
//----------------------------------------
pub mod error;
pub mod shapiro_wilk;
pub mod types;
