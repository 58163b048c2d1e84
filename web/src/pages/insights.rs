//! AI insights: model status, predictions, anomaly alerts and risk cards.

use leptos::prelude::*;

use vanmitra_common::filters::InsightFilter;
use vanmitra_common::format;
use vanmitra_common::insight::InsightKind;

use crate::app::use_app;
use crate::components::insight_card::InsightCard;
use crate::components::loading_skeleton::{LoadingSkeleton, SkeletonKind};
use crate::timer::OwnedTimeout;

const SECTIONS: [(InsightKind, &str, &str); 3] = [
    (InsightKind::Prediction, "🧠", "Claim Predictions"),
    (InsightKind::Anomaly, "⚠️", "Anomaly Alerts"),
    (InsightKind::Risk, "🌲", "Deforestation Risk Assessment"),
];

#[component]
pub fn InsightsPage() -> impl IntoView {
    let app = use_app();
    let dataset = app.dataset;
    let data = &dataset.insights;

    let (filter, set_filter) = signal(InsightFilter::All);
    let (refreshing, set_refreshing) = signal(false);
    let refresh_timer = OwnedTimeout::new();

    let refresh = move |_| {
        if refreshing.get_untracked() {
            return;
        }
        tracing::info!("refreshing insights");
        set_refreshing.set(true);
        refresh_timer.schedule(app.config.timing.insights_refresh(), move || {
            set_refreshing.set(false)
        });
    };

    let models = data
        .ml_models
        .iter()
        .map(|(key, model)| {
            let fill = format!("width: {:.1}%", model.accuracy.clamp(0.0, 100.0));
            view! {
                <div class="model-card">
                    <div class="model-header">
                        <h4>{format::humanize_key(key)}</h4>
                        <span class="status-dot online" title="Active"></span>
                    </div>
                    <div class="metric-row">
                        <span>"Accuracy"</span>
                        <span class="metric-value">{format::percent(model.accuracy)}</span>
                    </div>
                    <div class="progress-track">
                        <div class="progress-fill fill-green" style=fill></div>
                    </div>
                    <p class="muted">{format!("Updated {}", format::display_date(&model.last_updated))}</p>
                </div>
            }
        })
        .collect_view();

    let tabs = InsightFilter::ALL
        .into_iter()
        .map(|f| {
            view! {
                <button
                    class=move || if filter.get() == f { "tab active" } else { "tab" }
                    on:click=move |_| set_filter.set(f)
                >
                    <span class="tab-icon">{f.icon()}</span>
                    {f.label()}
                </button>
            }
        })
        .collect_view();

    let sections = move || {
        let insights = data.insights();
        let shown = filter.get();
        SECTIONS
            .into_iter()
            .filter(|(kind, _, _)| shown.shows(*kind))
            .map(|(kind, icon, heading)| {
                let cards = insights
                    .iter()
                    .filter(|i| i.kind() == kind)
                    .cloned()
                    .enumerate()
                    .map(|(i, insight)| {
                        let delay = i as f64 * 0.1;
                        view! { <InsightCard insight delay/> }
                    })
                    .collect_view();
                view! {
                    <section class="insight-section fade-up">
                        <h3 class="section-title">{format!("{icon} {heading}")}</h3>
                        <div class="insight-grid">{cards}</div>
                    </section>
                }
            })
            .collect_view()
    };

    let biodiversity = move || {
        data.risk_assessment
            .biodiversity_impact
            .iter()
            .map(|b| {
                let tone = if b.is_positive() { "impact-card positive" } else { "impact-card negative" };
                view! {
                    <div class=tone>
                        <div class="impact-header">
                            <h4>{b.village.clone()}</h4>
                            <span class="impact-level">{b.impact_level.clone()}</span>
                        </div>
                        <p class="impact-score">{format!("Impact score: {:.1}/10", b.score)}</p>
                        <p>{b.description.clone()}</p>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="insights-page">
            <div class="page-header">
                <div>
                    <h1>"🤖 AI-Powered Insights"</h1>
                    <p class="muted">"Predictions, anomaly detection and risk analysis for FRA claims"</p>
                </div>
                <button class="btn btn-primary" on:click=refresh disabled=move || refreshing.get()>
                    <span class=move || if refreshing.get() { "spin" } else { "" }>"🔄"</span>
                    {move || if refreshing.get() { " Refreshing..." } else { " Refresh Insights" }}
                </button>
            </div>

            <div class="model-grid">{models}</div>

            <nav class="tab-bar">{tabs}</nav>

            <Show
                when=move || !refreshing.get()
                fallback=|| {
                    view! {
                        <div class="insight-grid">
                            <LoadingSkeleton kind=SkeletonKind::Card/>
                            <LoadingSkeleton kind=SkeletonKind::Card/>
                            <LoadingSkeleton kind=SkeletonKind::Card/>
                        </div>
                    }
                }
            >
                {sections}
            </Show>

            <Show when=move || filter.get().shows(InsightKind::Risk)>
                <section class="insight-section">
                    <h3 class="section-title">"🍃 Biodiversity Impact"</h3>
                    <div class="impact-grid">{biodiversity}</div>
                </section>
            </Show>
        </div>
    }
}
