//----------------------------------------
// report mod
//----------------------------------------
pub mod render;
pub mod types;
