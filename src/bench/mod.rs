pub mod harness;
pub mod linear_scan;
pub mod value;
