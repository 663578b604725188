pub mod account;
pub mod service;
