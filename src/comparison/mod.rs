//----------------------------------------
// comparison mod
//----------------------------------------
pub mod compare;
pub mod error;
pub mod t_statistic;
pub mod types;
