use leptos::prelude::*;

/// Filter dropdown with label support and an always-present "unset" option
/// (empty value). An empty selection means the filter is off.
#[component]
pub fn FilterSelect(
    /// Label text
    #[prop(into)]
    label: String,
    /// Current value; empty string means unset
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler, receives the raw option value
    on_change: Callback<String>,
    /// Selectable values (each used as both option value and label)
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Label of the unset option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let unset_label = move || placeholder.get().unwrap_or_else(|| "All".to_string());

    view! {
        <div class="form__group">
            <label class="form__label" for=select_id>
                {label}
            </label>
            <select
                id=select_id
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>
                    {unset_label}
                </option>
                <For
                    each=move || options.get()
                    key=|val| val.clone()
                    children=move |val| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val.clone() selected=is_selected>
                                {val.clone()}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
