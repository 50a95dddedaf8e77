use crate::domain::a001_trade_run::ui::list::TradeHistoryList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <TradeHistoryList />
    }
}
