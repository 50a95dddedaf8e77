pub mod state;

use contracts::domain::a001_trade_run::parse_history;
use contracts::projections::p001_trade_table::{flatten_runs, FlatTradeRow};
use gloo_net::http::Request;
use leptos::prelude::*;

use crate::shared::components::ui::FilterSelect;
use state::{create_state, distinct_statuses, distinct_types, row_visible};

/// Fixed same-origin location of the trade-history document.
const HISTORY_URL: &str = "/trade_history.json";

#[component]
#[allow(non_snake_case)]
pub fn TradeHistoryList() -> impl IntoView {
    let state = create_state();

    let load = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_trade_history().await {
                Ok(rows) => {
                    log::info!("loaded {} trades from {}", rows.len(), HISTORY_URL);
                    state.update(|s| {
                        s.items = rows;
                        s.error = None;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("failed to load trade history: {e}");
                    state.update(|s| {
                        s.error = Some(e);
                        s.is_loaded = true;
                    });
                }
            }
        });
    };

    load();

    let refreshed_at: String =
        js_sys::Date::new_0().to_locale_string("en-GB", &wasm_bindgen::JsValue::UNDEFINED).into();

    let status_filter = Signal::derive(move || state.with(|s| s.status_filter.clone()));
    let type_filter = Signal::derive(move || state.with(|s| s.type_filter.clone()));
    let status_options = Signal::derive(move || state.with(|s| distinct_statuses(&s.items)));
    let type_options = Signal::derive(move || state.with(|s| distinct_types(&s.items)));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Trade History"</h1>
                    <p class="header__subtitle">"Last refreshed: " <strong>{refreshed_at}</strong></p>
                </div>
                <div class="header__actions">
                    <FilterSelect
                        label="Status"
                        id="filter-status"
                        value=status_filter
                        options=status_options
                        placeholder="All statuses"
                        on_change=Callback::new(move |v: String| state.update(|s| s.status_filter = v))
                    />
                    <FilterSelect
                        label="Type"
                        id="filter-type"
                        value=type_filter
                        options=type_options
                        placeholder="All types"
                        on_change=Callback::new(move |v: String| state.update(|s| s.type_filter = v))
                    />
                </div>
            </div>

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped" id="trades-table">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Symbol"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Entry"</th>
                            <th class="table__header-cell">"Strategy"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.with(|s| s.items.clone())
                            key=|row| row.row_id
                            children=move |row: FlatTradeRow| {
                                // Filtering only toggles display; rows are never
                                // removed or reordered.
                                let row_for_policy = row.clone();
                                let display = move || {
                                    let visible = state.with(|s| {
                                        row_visible(&row_for_policy, &s.status_filter, &s.type_filter)
                                    });
                                    if visible { String::new() } else { "none".to_string() }
                                };
                                view! {
                                    <tr
                                        class="table__row"
                                        data-status=row.status.clone()
                                        data-type=row.type_tag().to_string()
                                        style:display=display
                                    >
                                        <td class="table__cell">{row.run_date.clone()}</td>
                                        <td class="table__cell">{row.symbol.clone()}</td>
                                        <td class="table__cell">{row.type_tag().to_string()}</td>
                                        <td class="table__cell">{row.entry_text()}</td>
                                        <td class="table__cell">{row.detail_text()}</td>
                                        <td class="table__cell">{row.status.clone()}</td>
                                        <td class="table__cell">{row.action.clone()}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Fetch the trade-history document and flatten it to table rows.
async fn fetch_trade_history() -> Result<Vec<FlatTradeRow>, String> {
    let response = Request::get(HISTORY_URL)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("could not read response body: {e}"))?;
    let runs = parse_history(&text).map_err(|e| format!("{e:#}"))?;
    Ok(flatten_runs(runs))
}
