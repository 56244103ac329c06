//! Core Kernel - Foundational types shared by the claims platform
//!
//! This crate provides the building blocks used across all other crates:
//! - Money types with precise decimal arithmetic and injected exchange rates
//! - Port error taxonomy, provenance tagging and health types for upstream adapters

pub mod money;
pub mod ports;
pub mod error;

pub use money::{
    Money, Currency, MoneyError, ExchangeRateProvider, FixedExchangeRateProvider,
    DEFAULT_USD_TO_INR,
};
pub use ports::{
    PortError, DomainPort, CircuitBreakerConfig, DataSource, Sourced,
    AdapterHealth, HealthCheckResult, HealthCheckable,
};
pub use error::CoreError;
