//! Currency conversion handlers

use axum::{
    extract::{Query, State},
    Json,
};

use core_kernel::{Currency, Money};

use crate::{AppState, error::ApiError};
use crate::dto::currency::{ConvertQuery, ConvertResponse};

/// Converts an amount using the configured exchange rates
pub async fn convert(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let from: Currency = query.from.parse()?;
    let to: Currency = query.to.parse()?;

    let rate = state.exchange_rates.rate(from, to)?;
    let converted = Money::new(query.amount, from)
        .convert(to, state.exchange_rates.as_ref())?
        .round_to_currency();

    Ok(Json(ConvertResponse {
        amount: query.amount,
        from,
        to,
        rate,
        converted: converted.amount(),
        formatted: converted.to_string(),
    }))
}
