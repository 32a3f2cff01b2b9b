pub mod frame;
pub mod term;
