pub mod animate;
pub mod compare;
pub mod config;
pub mod consts;
pub mod error;
pub mod frame;
pub mod io;
pub mod lineart;
pub mod transform;
