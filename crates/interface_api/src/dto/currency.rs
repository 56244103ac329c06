//! Currency conversion DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Currency;

#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    pub amount: Decimal,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub amount: Decimal,
    pub from: Currency,
    pub to: Currency,
    pub rate: Decimal,
    pub converted: Decimal,
    pub formatted: String,
}
