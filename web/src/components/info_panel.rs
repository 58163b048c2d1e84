use leptos::prelude::*;

use vanmitra_common::chart::{ChartKind, Datum};
use vanmitra_common::format;
use vanmitra_common::village::{FraStatus, Village};

use crate::components::chart_widget::ChartWidget;

/// Monthly claim activity shown for every village.
const RECENT_ACTIVITY: [(&str, f64); 5] =
    [("Jan", 8.0), ("Feb", 12.0), ("Mar", 6.0), ("Apr", 15.0), ("May", 4.0)];

/// Overlay with the details of the selected village.
#[component]
pub fn InfoPanel(village: Village, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let claims: Vec<Datum> = village
        .claims
        .by_status()
        .into_iter()
        .map(|(status, n)| Datum::new(status.label(), f64::from(n)))
        .collect();
    let claim_colors: Vec<&'static str> = FraStatus::ALL.into_iter().map(FraStatus::color).collect();
    let activity: Vec<Datum> = RECENT_ACTIVITY.into_iter().map(|(m, n)| Datum::new(m, n)).collect();

    view! {
        <div class="info-panel slide-in">
            <div class="info-header">
                <div>
                    <h3>{village.name.clone()}</h3>
                    <p class="muted">{format!("📍 {} District", village.district)}</p>
                </div>
                <button class="icon-btn" title="Close" on:click=move |_| on_close.run(())>"×"</button>
            </div>

            <div class="info-stats">
                <div class="info-stat">
                    <span class="muted">"Population"</span>
                    <strong>{format::thousands(u64::from(village.population))}</strong>
                </div>
                <div class="info-stat">
                    <span class="muted">"Total Claims"</span>
                    <strong>{village.claims.total}</strong>
                </div>
            </div>

            <div class="info-status">
                <span class="muted">"FRA Status"</span>
                <span class=format!("status-badge {}", village.fra_status.css_class())>
                    {format!("{} {}", village.fra_status.emoji(), village.fra_status.label())}
                </span>
            </div>

            <ChartWidget title="Claims Breakdown" kind=ChartKind::Donut data=claims colors=claim_colors height=200.0/>
            <ChartWidget title="Recent Activity" kind=ChartKind::Bar data=activity height=180.0/>

            <div class="info-levels">
                <div class="info-level">
                    <span>"🍃 Biodiversity"</span>
                    <span class=format!("level-badge {}", village.biodiversity.css_class())>
                        {village.biodiversity.badge()}
                    </span>
                </div>
                <div class="info-level">
                    <span>"🌲 Deforestation Risk"</span>
                    <span class=format!("level-badge {}", village.deforestation_risk.css_class())>
                        {village.deforestation_risk.badge()}
                    </span>
                </div>
            </div>

            <div class="info-actions">
                <button class="btn btn-primary">"📄 View Claims"</button>
                <button class="btn btn-secondary">"📊 Generate Report"</button>
            </div>
        </div>
    }
}
