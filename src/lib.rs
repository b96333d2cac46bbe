pub mod checker;
pub mod comparison;
pub mod error;
pub mod formats;
pub mod runner;
pub mod utils;
