//----------------------------------------
// summary mod
//----------------------------------------
pub mod descriptive;
