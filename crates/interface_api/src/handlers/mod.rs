//! Request handlers

pub mod fraud;
pub mod documents;
pub mod translation;
pub mod currency;
pub mod health;
