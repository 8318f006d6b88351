use super::row::{ProductRow, RowStatus};
use crate::shared::number_parse::parse_decimal;
use serde::{Deserialize, Serialize};

/// Which fields of a row hold the normal price and the discount prices.
///
/// Discounts are compared in order; the first one that exceeds the normal
/// price decides the outcome and the remaining ones are not looked at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRules {
    pub normal: String,
    pub discounts: Vec<String>,
}

impl PriceRules {
    pub fn new(normal: impl Into<String>, discounts: &[&str]) -> Self {
        Self {
            normal: normal.into(),
            discounts: discounts.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Whether typing into `key` should re-run the price check
    pub fn watches(&self, key: &str) -> bool {
        self.normal == key || self.discounts.iter().any(|d| d == key)
    }
}

/// Outcome of comparing a row's prices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceCheck {
    /// The row lacks the normal price or the first discount column
    NotApplicable,
    /// The normal price is not a number, nothing to compare against
    Unvalidatable,
    Valid,
    Error,
}

/// Price as typed: empty counts as zero, no numeric prefix is `None`.
pub fn parse_price(raw: &str) -> Option<f64> {
    if raw.trim().is_empty() {
        return Some(0.0);
    }
    parse_decimal(raw)
}

pub fn check_prices(row: &ProductRow, rules: &PriceRules) -> PriceCheck {
    let (Some(normal_raw), Some(first)) = (row.raw(&rules.normal), rules.discounts.first()) else {
        return PriceCheck::NotApplicable;
    };
    if row.raw(first).is_none() {
        return PriceCheck::NotApplicable;
    }

    let Some(normal) = parse_price(normal_raw) else {
        return PriceCheck::Unvalidatable;
    };

    let exceeds = rules.discounts.iter().any(|field| {
        row.raw(field)
            .and_then(parse_price)
            .is_some_and(|discount| discount > normal)
    });

    if exceeds {
        PriceCheck::Error
    } else {
        PriceCheck::Valid
    }
}

/// Run the price check and reflect it on the row status.
///
/// A previous price error or "valid" mark is cleared first; an
/// unvalidatable row is left neutral. A barcode length error outranks any
/// price outcome and is never replaced here.
pub fn apply_price_check(row: &mut ProductRow, rules: &PriceRules) -> PriceCheck {
    let check = check_prices(row, rules);
    if check == PriceCheck::NotApplicable || row.status == RowStatus::LengthError {
        return check;
    }

    if matches!(row.status, RowStatus::PriceError | RowStatus::ConfirmedValid) {
        row.status = RowStatus::Unvalidated;
    }
    match check {
        PriceCheck::Error => row.status = RowStatus::PriceError,
        PriceCheck::Valid => row.status = RowStatus::ConfirmedValid,
        PriceCheck::Unvalidatable | PriceCheck::NotApplicable => {}
    }
    check
}
