pub mod animate;
pub mod cleanup;
pub mod compare;
pub mod config;
