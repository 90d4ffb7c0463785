pub mod api;
pub mod calculator;
pub mod catalog;
pub mod config;
pub mod consts;
pub mod device;
pub mod error;
pub mod profile;
pub mod store;
pub mod util;
// cmd and reports are binary modules (declared in main.rs); everything
// a frontend or test needs is exported from the library crate.
