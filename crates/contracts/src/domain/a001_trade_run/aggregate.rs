use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire `type` tag that selects the strangle variant.
pub const STRANGLE_TAG: &str = "Options-Strangle";

/// One historical execution batch: a run date plus the trades recorded on it.
///
/// Transient — consumed by the flatten projection, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRun {
    pub run_date: String,
    #[serde(default)]
    pub trades: Vec<Trade>,
}

/// A single recorded trading action.
///
/// Deserialization goes through the permissive [`TradeWire`] shape so that
/// missing fields are defaulted (or rejected) in one explicit place instead
/// of leaking `undefined`-style blanks into the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TradeWire", into = "TradeWire")]
pub struct Trade {
    pub symbol: String,
    pub kind: TradeKind,
    /// Entry price as it appeared on the wire (number or string); `None`
    /// covers both an absent field and an explicit `null`.
    pub entry: Option<Value>,
    pub status: String,
    pub action: String,
}

/// Trade variant, tagged by the wire `type` field.
///
/// The tag set is open-ended ("Stock", "Futures", "Cash-Momentum", ...);
/// only the strangle tag carries extra payload, everything else keeps its
/// tag string verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum TradeKind {
    Strangle(StrangleLegs),
    Other(String),
}

impl TradeKind {
    /// The exact wire `type` string, round-tripped without normalization.
    pub fn tag(&self) -> &str {
        match self {
            TradeKind::Strangle(_) => STRANGLE_TAG,
            TradeKind::Other(tag) => tag,
        }
    }
}

/// The two legs of a short strangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrangleLegs {
    pub put_strike: f64,
    pub put_price: f64,
    pub call_strike: f64,
    pub call_price: f64,
}

/// Raw wire shape of a trade: every field optional, no validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TradeWire {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(rename = "type", default)]
    trade_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    entry: Option<Value>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    put_strike: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    put_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    call_strike: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    call_price: Option<f64>,
}

impl TryFrom<TradeWire> for Trade {
    type Error = String;

    fn try_from(w: TradeWire) -> Result<Self, Self::Error> {
        let tag = w.trade_type.unwrap_or_default();
        let kind = if tag == STRANGLE_TAG {
            fn leg(name: &str, v: Option<f64>) -> Result<f64, String> {
                v.ok_or_else(|| format!("strangle trade is missing `{name}`"))
            }
            TradeKind::Strangle(StrangleLegs {
                put_strike: leg("put_strike", w.put_strike)?,
                put_price: leg("put_price", w.put_price)?,
                call_strike: leg("call_strike", w.call_strike)?,
                call_price: leg("call_price", w.call_price)?,
            })
        } else {
            TradeKind::Other(tag)
        };

        Ok(Self {
            symbol: w.symbol.unwrap_or_default(),
            kind,
            entry: w.entry,
            status: w.status.unwrap_or_default(),
            action: w.action.unwrap_or_default(),
        })
    }
}

impl From<Trade> for TradeWire {
    fn from(t: Trade) -> Self {
        let tag = t.kind.tag().to_string();
        let legs = match t.kind {
            TradeKind::Strangle(legs) => Some(legs),
            TradeKind::Other(_) => None,
        };

        Self {
            symbol: Some(t.symbol),
            trade_type: Some(tag),
            entry: t.entry,
            status: Some(t.status),
            action: Some(t.action),
            put_strike: legs.map(|l| l.put_strike),
            put_price: legs.map(|l| l.put_price),
            call_strike: legs.map(|l| l.call_strike),
            call_price: legs.map(|l| l.call_price),
        }
    }
}

/// Parse the raw trade-history document: an ordered list of runs.
pub fn parse_history(json: &str) -> anyhow::Result<Vec<TradeRun>> {
    serde_json::from_str(json).context("trade history is not a valid JSON list of runs")
}
