use leptos::prelude::*;

use vanmitra_common::layers::{LayerKey, VisibleLayers};

/// One switch per map layer, bound to the shared visibility flags.
#[component]
pub fn LayerToggleGroup(layers: RwSignal<VisibleLayers>) -> impl IntoView {
    let rows = LayerKey::ALL
        .into_iter()
        .map(|key| {
            let visible = move || layers.with(|l| l.is_visible(key));
            view! {
                <div class=move || if visible() { "layer-row layer-on" } else { "layer-row" }>
                    <div class="layer-info">
                        <span class=format!("layer-icon {}", key.accent())>
                            {key.icon()}
                        </span>
                        <div>
                            <p class="layer-label">{key.label()}</p>
                            <p class="layer-state">
                                {move || if visible() { "Visible" } else { "Hidden" }}
                            </p>
                        </div>
                    </div>
                    <button
                        class=move || if visible() { "switch switch-on" } else { "switch" }
                        role="switch"
                        aria-checked=move || visible().to_string()
                        aria-label=format!("Toggle {}", key.label())
                        on:click=move |_| {
                            layers.update(|l| {
                                l.toggle(key);
                            })
                        }
                    >
                        <span class="switch-knob"></span>
                    </button>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="layer-toggle-group">
            <h3 class="panel-heading">"Map Layers"</h3>
            {rows}
            <p class="layer-summary">
                {move || {
                    format!(
                        "{} of {} layers visible",
                        layers.with(VisibleLayers::visible_count),
                        LayerKey::ALL.len(),
                    )
                }}
            </p>
        </div>
    }
}
