use leptos::prelude::*;

use vanmitra_common::format;
use vanmitra_common::insight::{AnomalyAlert, DeforestationRisk, Insight, Prediction};

/// Card for one prediction, anomaly alert or deforestation risk.
#[component]
pub fn InsightCard(insight: Insight, #[prop(default = 0.0)] delay: f64) -> impl IntoView {
    let style = format!("animation-delay: {delay:.2}s");
    let body = match insight {
        Insight::Prediction(p) => prediction(p).into_any(),
        Insight::Anomaly(a) => anomaly(a).into_any(),
        Insight::Risk(r) => risk(r).into_any(),
    };
    view! { <div class="insight-card fade-up" style=style>{body}</div> }
}

fn factor_list(heading: &'static str, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class="insight-list">
                <p class="insight-list-heading">{heading}</p>
                <ul>{items.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}</ul>
            </div>
        }
    })
}

fn prediction(p: Prediction) -> impl IntoView {
    let probability = p.probability.map(|pct| {
        let fill = format!("width: {}%", pct.min(100));
        view! {
            <div class="insight-metric">
                <div class="metric-row">
                    <span>"Approval probability"</span>
                    <span class="metric-value">{format!("{pct}%")}</span>
                </div>
                <div class="progress-track">
                    <div class="progress-fill fill-green" style=fill></div>
                </div>
            </div>
        }
    });
    let months = p.estimated_months.map(|m| {
        view! {
            <div class="metric-row">
                <span>"Estimated time"</span>
                <span class="metric-value">{format!("{m} months")}</span>
            </div>
        }
    });

    view! {
        <div class="insight-header">
            <span class="insight-icon">"📈"</span>
            <div>
                <h4 class="insight-title">{p.title}</h4>
                <p class="insight-village">{format!("📍 {}", p.village)}</p>
            </div>
            <span class=format!("rating-badge {}", p.confidence.css_class())>
                {format!("{} confidence", p.confidence.label())}
            </span>
        </div>
        {probability}
        {months}
        {factor_list("Key factors", p.factors)}
    }
}

fn anomaly(a: AnomalyAlert) -> impl IntoView {
    view! {
        <div class="insight-header">
            <span class="insight-icon">"⚠️"</span>
            <div>
                <h4 class="insight-title">{a.title}</h4>
                <p class="insight-village">{format!("📍 {}", a.village)}</p>
            </div>
            <span class=format!("rating-badge {}", a.severity.css_class())>
                {format!("{} severity", a.severity.label())}
            </span>
        </div>
        <p class="insight-description">{a.description}</p>
        <div class="insight-recommendation">
            <p class="insight-list-heading">"Recommendation"</p>
            <p>{a.recommendation}</p>
        </div>
        <div class="insight-footer">
            <span>{format!("Alert ID: #{}", a.id)}</span>
            <span>{format::display_date(&a.timestamp)}</span>
        </div>
    }
}

fn risk(r: DeforestationRisk) -> impl IntoView {
    let fill = format!("width: {:.0}%", (r.score * 10.0).clamp(0.0, 100.0));
    view! {
        <div class="insight-header">
            <span class="insight-icon">"🌲"</span>
            <div>
                <h4 class="insight-title">"Deforestation Risk"</h4>
                <p class="insight-village">{format!("📍 {}", r.village)}</p>
            </div>
            <span class=format!("rating-badge {}", r.risk_level.css_class())>
                {format!("{} risk", r.risk_level.label())}
            </span>
        </div>
        <div class="insight-metric">
            <div class="metric-row">
                <span>"Risk score"</span>
                <span class="metric-value">{format!("{:.1}/10", r.score)}</span>
            </div>
            <div class="progress-track">
                <div class=format!("progress-fill {}", r.risk_level.css_class()) style=fill></div>
            </div>
        </div>
        {factor_list("Risk factors", r.factors)}
        {factor_list("Recommendations", r.recommendations)}
    }
}
