pub mod account;
pub mod service;
mod validation;
