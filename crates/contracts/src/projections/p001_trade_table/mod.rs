//! Flat read model for the trade-history table: one row per trade, tagged
//! with the date of the run it came from.

use serde_json::Value;
use uuid::Uuid;

use crate::domain::a001_trade_run::{TradeKind, TradeRun};

/// One table row. `row_id` exists only as a stable reactive list key;
/// everything else is carried over from the trade unchanged.
#[derive(Debug, Clone)]
pub struct FlatTradeRow {
    pub row_id: Uuid,
    pub run_date: String,
    pub symbol: String,
    pub kind: TradeKind,
    pub entry: Option<Value>,
    pub status: String,
    pub action: String,
}

impl FlatTradeRow {
    /// The raw `type` tag, used both as cell text and as the filter key.
    pub fn type_tag(&self) -> &str {
        self.kind.tag()
    }

    /// Entry cell text: blank when absent, otherwise the wire value's text
    /// (numbers via their JSON rendering, strings without quotes).
    pub fn entry_text(&self) -> String {
        match &self.entry {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(v) => v.to_string(),
        }
    }

    /// Strategy-detail cell text: the strangle legs in
    /// `P:{put_strike}@{put_price} / C:{call_strike}@{call_price}` form,
    /// blank for every other trade kind.
    pub fn detail_text(&self) -> String {
        match &self.kind {
            TradeKind::Strangle(legs) => format!(
                "P:{}@{} / C:{}@{}",
                legs.put_strike, legs.put_price, legs.call_strike, legs.call_price
            ),
            TradeKind::Other(_) => String::new(),
        }
    }
}

/// Flatten runs into rows: runs in original order, each run's trades in
/// original order, `run_date` copied from the parent run.
pub fn flatten_runs(runs: Vec<TradeRun>) -> Vec<FlatTradeRow> {
    runs.into_iter()
        .flat_map(|run| {
            let run_date = run.run_date;
            run.trades.into_iter().map(move |t| FlatTradeRow {
                row_id: Uuid::new_v4(),
                run_date: run_date.clone(),
                symbol: t.symbol,
                kind: t.kind,
                entry: t.entry,
                status: t.status,
                action: t.action,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_trade_run::parse_history;

    fn rows_from(json: &str) -> Vec<FlatTradeRow> {
        flatten_runs(parse_history(json).unwrap())
    }

    #[test]
    fn test_flatten_preserves_order_and_count() {
        let rows = rows_from(
            r#"[
                {"run_date":"2024-01-01","trades":[
                    {"symbol":"A","type":"Stock","status":"open","action":"buy"},
                    {"symbol":"B","type":"Futures","status":"open","action":"sell"}
                ]},
                {"run_date":"2024-01-02","trades":[]},
                {"run_date":"2024-01-03","trades":[
                    {"symbol":"C","type":"Stock","status":"closed","action":"hold"}
                ]}
            ]"#,
        );

        assert_eq!(rows.len(), 3);
        let symbols: Vec<&str> = rows.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_flatten_copies_run_date_onto_each_row() {
        let rows = rows_from(
            r#"[
                {"run_date":"2024-01-01","trades":[
                    {"symbol":"A","type":"Stock","status":"open","action":"buy"},
                    {"symbol":"B","type":"Stock","status":"open","action":"buy"}
                ]},
                {"run_date":"2024-01-02","trades":[
                    {"symbol":"C","type":"Stock","status":"open","action":"buy"}
                ]}
            ]"#,
        );

        assert_eq!(rows[0].run_date, "2024-01-01");
        assert_eq!(rows[1].run_date, "2024-01-01");
        assert_eq!(rows[2].run_date, "2024-01-02");
    }

    #[test]
    fn test_detail_text_for_strangle() {
        let rows = rows_from(
            r#"[{"run_date":"2024-02-05","trades":[
                {"symbol":"NIFTY","type":"Options-Strangle","status":"Open","action":"Sell",
                 "put_strike":95,"put_price":1.2,"call_strike":105,"call_price":1.1}
            ]}]"#,
        );

        assert_eq!(rows[0].detail_text(), "P:95@1.2 / C:105@1.1");
    }

    #[test]
    fn test_detail_text_blank_for_other_kinds() {
        let rows = rows_from(
            r#"[{"run_date":"2024-02-05","trades":[
                {"symbol":"ABC","type":"Stock","status":"open","action":"buy"}
            ]}]"#,
        );

        assert_eq!(rows[0].detail_text(), "");
    }

    #[test]
    fn test_entry_text_variants() {
        let rows = rows_from(
            r#"[{"run_date":"2024-02-05","trades":[
                {"symbol":"A","type":"Stock","status":"open","action":"buy","entry":150.5},
                {"symbol":"B","type":"Stock","status":"open","action":"buy","entry":null},
                {"symbol":"C","type":"Stock","status":"open","action":"buy"},
                {"symbol":"D","type":"Stock","status":"open","action":"buy","entry":"150.5"}
            ]}]"#,
        );

        assert_eq!(rows[0].entry_text(), "150.5");
        assert_eq!(rows[1].entry_text(), "");
        assert_eq!(rows[2].entry_text(), "");
        assert_eq!(rows[3].entry_text(), "150.5");
    }

    // Full single-trade scenario: cells in render order plus the two
    // attribute sources.
    #[test]
    fn test_single_trade_scenario() {
        let rows = rows_from(
            r#"[{"run_date":"2024-01-01","trades":[
                {"symbol":"ABC","type":"Stock","status":"open","action":"buy","entry":10}
            ]}]"#,
        );

        assert_eq!(rows.len(), 1);
        let r = &rows[0];
        let cells = vec![
            r.run_date.clone(),
            r.symbol.clone(),
            r.type_tag().to_string(),
            r.entry_text(),
            r.detail_text(),
            r.status.clone(),
            r.action.clone(),
        ];
        assert_eq!(cells, vec!["2024-01-01", "ABC", "Stock", "10", "", "open", "buy"]);
        assert_eq!(r.status, "open");
        assert_eq!(r.type_tag(), "Stock");
    }

    #[test]
    fn test_row_ids_are_unique() {
        let rows = rows_from(
            r#"[{"run_date":"2024-01-01","trades":[
                {"symbol":"A","type":"Stock","status":"open","action":"buy"},
                {"symbol":"A","type":"Stock","status":"open","action":"buy"}
            ]}]"#,
        );

        assert_ne!(rows[0].row_id, rows[1].row_id);
    }
}
