//! Request and response data transfer objects

pub mod fraud;
pub mod translation;
pub mod currency;
