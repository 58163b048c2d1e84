//! Tabbed control panel beside the map.

use leptos::prelude::*;

use vanmitra_common::filters::{ClaimFilters, FilterField, SidebarTab};
use vanmitra_common::layers::VisibleLayers;

use crate::components::layer_toggle_group::LayerToggleGroup;
use crate::components::recorder_widget::RecorderWidget;
use crate::components::upload_drawer::UploadDrawer;

/// Filters, layer switches, document upload and voice recorder. On narrow
/// screens it slides in over a backdrop while `open` is set.
///
/// The form shows `filters` as held by the page and reports every edit
/// through `on_filter_change`.
#[component]
pub fn FilterSidebar(
    layers: RwSignal<VisibleLayers>,
    open: RwSignal<bool>,
    #[prop(into)] filters: Signal<ClaimFilters>,
    #[prop(into)] on_filter_change: Callback<(FilterField, String)>,
) -> impl IntoView {
    let (tab, set_tab) = signal(SidebarTab::Filters);

    let change = move |field: FilterField, value: String| on_filter_change.run((field, value));

    let tabs = SidebarTab::ALL
        .into_iter()
        .map(|t| {
            view! {
                <button
                    class=move || if tab.get() == t { "tab active" } else { "tab" }
                    on:click=move |_| set_tab.set(t)
                >
                    <span class="tab-icon">{t.icon()}</span>
                    <span class="tab-label">{t.label()}</span>
                </button>
            }
        })
        .collect_view();

    let filter_form = move || {
        let selects = FilterField::SELECTS
            .into_iter()
            .map(|field| {
                view! {
                    <label class="field">
                        <span>{field.label()}</span>
                        <select
                            prop:value=move || filters.with(|f| f.get(field).to_owned())
                            on:change=move |ev| change(field, event_target_value(&ev))
                        >
                            {field
                                .options()
                                .iter()
                                .map(|o| view! { <option value=*o>{*o}</option> })
                                .collect_view()}
                        </select>
                    </label>
                }
            })
            .collect_view();
        view! {
            <div class="filter-form">
                {selects}
                <label class="field">
                    <span>{FilterField::Description.label()}</span>
                    <textarea
                        rows="3"
                        placeholder="Search claim descriptions"
                        prop:value=move || filters.with(|f| f.description.clone())
                        on:input=move |ev| change(FilterField::Description, event_target_value(&ev))
                    ></textarea>
                </label>
            </div>
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="sidebar-backdrop mobile-only" on:click=move |_| open.set(false)></div>
        </Show>
        <aside class=move || if open.get() { "filter-sidebar open" } else { "filter-sidebar" }>
            <div class="sidebar-header">
                <h2>"Control Panel"</h2>
                <button class="icon-btn mobile-only" title="Close" on:click=move |_| open.set(false)>
                    "×"
                </button>
            </div>
            <nav class="sidebar-tabs">{tabs}</nav>
            <div class="sidebar-body">
                {move || {
                    let body = match tab.get() {
                        SidebarTab::Filters => filter_form().into_any(),
                        SidebarTab::Layers => view! { <LayerToggleGroup layers/> }.into_any(),
                        SidebarTab::Upload => view! { <UploadDrawer/> }.into_any(),
                        SidebarTab::Voice => view! { <RecorderWidget/> }.into_any(),
                    };
                    view! { <div class="tab-panel slide-in">{body}</div> }
                }}
            </div>
        </aside>
    }
}
