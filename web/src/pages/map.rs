//! Map dashboard: control panel, WebGIS map and headline statistics.

use leptos::prelude::*;

use vanmitra_common::chart::{ChartKind, Datum};
use vanmitra_common::filters::{ClaimFilters, FilterField};
use vanmitra_common::format;
use vanmitra_common::layers::VisibleLayers;
use vanmitra_common::village::Village;

use crate::app::use_app;
use crate::components::chart_widget::ChartWidget;
use crate::components::filter_sidebar::FilterSidebar;
use crate::components::map_container::MapContainer;
use crate::components::stat_card::{StatCard, Trend};

#[component]
pub fn MapPage() -> impl IntoView {
    let dataset = use_app().dataset;
    let dashboard = &dataset.dashboard;
    let overview = &dashboard.overview;

    let layers = RwSignal::new(VisibleLayers::default());
    let sidebar_open = RwSignal::new(false);
    let filters = RwSignal::new(ClaimFilters::default());
    let (selected, set_selected) = signal(None::<Village>);

    let on_filter_change = Callback::new(move |(field, value): (FilterField, String)| {
        filters.maybe_update(|f| f.set(field, value));
    });
    let on_village_select = Callback::new(move |v: Option<Village>| set_selected.set(v));

    let by_year: Vec<Datum> = dashboard
        .claims_by_year
        .iter()
        .map(|y| Datum::new(y.year.clone(), f64::from(y.filed)))
        .collect();
    let by_type: Vec<Datum> = dashboard
        .claim_type_distribution
        .iter()
        .map(|t| Datum::new(t.claim_type.clone(), f64::from(t.count)))
        .collect();

    view! {
        <div class="map-page">
            <div class="map-layout">
                <FilterSidebar layers open=sidebar_open filters on_filter_change/>
                <section class="map-section">
                    <div class="section-header">
                        <h2>"WebGIS Map"</h2>
                        <span class="muted filter-count">
                            {move || match filters.with(ClaimFilters::active_count) {
                                0 => "No filters applied".to_owned(),
                                1 => "1 filter applied".to_owned(),
                                n => format!("{n} filters applied"),
                            }}
                        </span>
                        <button class="btn btn-secondary mobile-only" on:click=move |_| sidebar_open.set(true)>
                            "☰ Controls"
                        </button>
                    </div>
                    <MapContainer layers on_village_select/>
                    <p class="selection-hint muted">
                        {move || match selected.get() {
                            Some(v) => format!("Selected: {} ({})", v.name, v.district),
                            None => "Click a village marker for details".to_owned(),
                        }}
                    </p>
                </section>
            </div>

            <section class="overview">
                <h2>"Dashboard Overview"</h2>
                <div class="stat-grid">
                    <StatCard
                        title="Total Claims"
                        value=format::thousands(u64::from(overview.total_claims))
                        icon="📋"
                        trend=Trend::Up
                        trend_value="+12%"
                        color="forest"
                    />
                    <StatCard
                        title="Approved Claims"
                        value=format::thousands(u64::from(overview.approved_claims))
                        sub_value=format!("{} approval rate", format::percent(overview.approval_rate()))
                        icon="✅"
                        trend=Trend::Up
                        trend_value="+8%"
                        color="green"
                        progress=overview.approval_rate()
                        delay=0.1
                    />
                    <StatCard
                        title="Pending Claims"
                        value=format::thousands(u64::from(overview.pending_claims))
                        icon="⏳"
                        trend=Trend::Down
                        trend_value="-5%"
                        color="yellow"
                        delay=0.2
                    />
                    <StatCard
                        title="Avg. Processing Time"
                        value=overview.average_processing_time.clone()
                        icon="⏱️"
                        trend=Trend::Down
                        trend_value="-2.1 months"
                        color="blue"
                        delay=0.3
                    />
                </div>

                <div class="chart-grid">
                    <ChartWidget title="Claims Filed by Year" kind=ChartKind::Bar data=by_year/>
                    <ChartWidget title="Claim Type Distribution" kind=ChartKind::Donut data=by_type/>
                </div>
            </section>
        </div>
    }
}
