pub mod config;
pub mod diag;
pub mod run;
