use contracts::projections::p001_trade_table::FlatTradeRow;
use leptos::prelude::*;
use std::collections::HashSet;

/// Signal-backed state of the trade-history table.
#[derive(Clone, Debug, Default)]
pub struct TradeTableState {
    pub items: Vec<FlatTradeRow>,

    // filters; empty string = unset
    pub status_filter: String,
    pub type_filter: String,

    // load flag
    pub is_loaded: bool,
    pub error: Option<String>,
}

pub fn create_state() -> RwSignal<TradeTableState> {
    RwSignal::new(TradeTableState::default())
}

/// Filter policy: a row stays visible iff each filter is unset or equals
/// the row's stored attribute exactly. No partial matching, no folding.
pub fn row_visible(row: &FlatTradeRow, status_filter: &str, type_filter: &str) -> bool {
    (status_filter.is_empty() || row.status == status_filter)
        && (type_filter.is_empty() || row.type_tag() == type_filter)
}

/// Distinct statuses present in the rows, in first-appearance order.
pub fn distinct_statuses(rows: &[FlatTradeRow]) -> Vec<String> {
    distinct(rows.iter().map(|r| r.status.as_str()))
}

/// Distinct type tags present in the rows, in first-appearance order.
pub fn distinct_types(rows: &[FlatTradeRow]) -> Vec<String> {
    distinct(rows.iter().map(|r| r.type_tag()))
}

// Empty strings are skipped: "" is already taken by the unset option.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for v in values {
        if !v.is_empty() && seen.insert(v) {
            out.push(v.to_string());
        }
    }
    out
}
