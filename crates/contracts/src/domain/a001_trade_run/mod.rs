pub mod aggregate;

pub use aggregate::{parse_history, StrangleLegs, Trade, TradeKind, TradeRun, STRANGLE_TAG};
