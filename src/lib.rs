pub mod bench;
pub mod cli;
pub mod common;
pub mod container;
