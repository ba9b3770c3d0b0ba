//----------------------------------------
// power mod
//----------------------------------------
pub mod t_test_power;
