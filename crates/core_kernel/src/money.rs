//! Money types with precise decimal arithmetic
//!
//! Monetary values use rust_decimal so that premium ratios and currency
//! conversions never go through floating point. Conversion rates are never
//! hard-coded at the call site: they come from an injected
//! [`ExchangeRateProvider`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Default USD to INR rate used when no rate is configured
pub const DEFAULT_USD_TO_INR: Decimal = dec!(83.5);

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    INR,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::INR => "₹",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::INR => "INR",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "INR" => Ok(Currency::INR),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            other => Err(MoneyError::UnknownCurrency(other.to_string())),
        }
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("No exchange rate from {from} to {to}")]
    MissingExchangeRate { from: Currency, to: Currency },

    #[error("Invalid exchange rate: {0}")]
    InvalidRate(Decimal),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount with associated currency
///
/// Amounts are stored with 4 decimal places internally so that converted
/// values keep their precision until they are rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Rounds to the currency's standard decimal places
    pub fn round_to_currency(&self) -> Self {
        Self {
            amount: self.amount.round_dp(self.currency.decimal_places()),
            currency: self.currency,
        }
    }

    /// Checked addition that returns an error on currency mismatch or overflow
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Checked subtraction that returns an error on currency mismatch or overflow
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Converts into another currency using the given rate provider
    pub fn convert<P>(&self, to: Currency, provider: &P) -> Result<Money, MoneyError>
    where
        P: ExchangeRateProvider + ?Sized,
    {
        let rate = provider.rate(self.currency, to)?;
        let amount = self.amount.checked_mul(rate).ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, to))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places();
        write!(
            f,
            "{}{:.dp$}",
            self.currency.symbol(),
            self.amount,
            dp = dp as usize
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Money::add on mismatched currencies or overflow")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other)
            .expect("Money::sub on mismatched currencies or overflow")
    }
}

/// Source of currency conversion rates
///
/// Implementations must return exactly `1` for identity conversions.
pub trait ExchangeRateProvider: Send + Sync {
    /// Returns the multiplier that converts an amount in `from` into `to`
    fn rate(&self, from: Currency, to: Currency) -> Result<Decimal, MoneyError>;
}

/// Exchange rate provider backed by a fixed, configured rate table
#[derive(Debug, Clone)]
pub struct FixedExchangeRateProvider {
    rates: HashMap<(Currency, Currency), Decimal>,
}

impl FixedExchangeRateProvider {
    /// Creates an empty provider that only supports identity conversions
    pub fn new() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Creates a provider for USD/INR with the given USD to INR rate
    pub fn usd_inr(usd_to_inr: Decimal) -> Result<Self, MoneyError> {
        Self::new().with_rate(Currency::USD, Currency::INR, usd_to_inr)
    }

    /// Registers a rate and its inverse
    pub fn with_rate(mut self, from: Currency, to: Currency, rate: Decimal) -> Result<Self, MoneyError> {
        if rate <= Decimal::ZERO {
            return Err(MoneyError::InvalidRate(rate));
        }
        self.rates.insert((from, to), rate);
        self.rates.insert((to, from), Decimal::ONE / rate);
        Ok(self)
    }
}

impl Default for FixedExchangeRateProvider {
    fn default() -> Self {
        let mut rates = HashMap::new();
        rates.insert((Currency::USD, Currency::INR), DEFAULT_USD_TO_INR);
        rates.insert((Currency::INR, Currency::USD), Decimal::ONE / DEFAULT_USD_TO_INR);
        Self { rates }
    }
}

impl ExchangeRateProvider for FixedExchangeRateProvider {
    fn rate(&self, from: Currency, to: Currency) -> Result<Decimal, MoneyError> {
        if from == to {
            return Ok(Decimal::ONE);
        }
        self.rates
            .get(&(from, to))
            .copied()
            .ok_or(MoneyError::MissingExchangeRate { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(100.50), Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.00), Currency::USD);

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
    }

    #[test]
    fn test_currency_mismatch() {
        let usd = Money::new(dec!(100.00), Currency::USD);
        let inr = Money::new(dec!(100.00), Currency::INR);

        let result = usd.checked_add(&inr);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_convert_overflow_is_an_error() {
        let provider = FixedExchangeRateProvider::default();
        let usd = Money::new(Decimal::MAX, Currency::USD);
        assert_eq!(usd.convert(Currency::INR, &provider), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Money::new(Decimal::MAX, Currency::USD);
        let one = Money::new(dec!(1), Currency::USD);
        assert_eq!(max.checked_add(&one), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_default_provider_converts_usd_to_inr() {
        let provider = FixedExchangeRateProvider::default();
        let usd = Money::new(dec!(100), Currency::USD);

        let inr = usd.convert(Currency::INR, &provider).unwrap();
        assert_eq!(inr.amount(), dec!(8350));
        assert_eq!(inr.currency(), Currency::INR);
    }

    #[test]
    fn test_configured_rate_is_used() {
        let provider = FixedExchangeRateProvider::usd_inr(dec!(80)).unwrap();
        let usd = Money::new(dec!(10), Currency::USD);
        assert_eq!(usd.convert(Currency::INR, &provider).unwrap().amount(), dec!(800));

        let inr = Money::new(dec!(800), Currency::INR);
        assert_eq!(inr.convert(Currency::USD, &provider).unwrap().amount(), dec!(10));
    }

    #[test]
    fn test_identity_conversion() {
        let provider = FixedExchangeRateProvider::new();
        let eur = Money::new(dec!(42), Currency::EUR);
        assert_eq!(eur.convert(Currency::EUR, &provider).unwrap(), eur);
    }

    #[test]
    fn test_missing_rate() {
        let provider = FixedExchangeRateProvider::default();
        let eur = Money::new(dec!(42), Currency::EUR);
        assert_eq!(
            eur.convert(Currency::GBP, &provider),
            Err(MoneyError::MissingExchangeRate {
                from: Currency::EUR,
                to: Currency::GBP,
            })
        );
    }

    #[test]
    fn test_non_positive_rate_rejected() {
        assert_eq!(
            FixedExchangeRateProvider::usd_inr(dec!(0)).unwrap_err(),
            MoneyError::InvalidRate(dec!(0))
        );
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("inr".parse::<Currency>().unwrap(), Currency::INR);
        assert!(matches!("XYZ".parse::<Currency>(), Err(MoneyError::UnknownCurrency(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(dec!(8350), Currency::INR).to_string(), "₹8350.00");
    }
}
