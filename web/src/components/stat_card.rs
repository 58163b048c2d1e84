//! Single-metric card with optional trend and progress bar.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    fn icon(self) -> &'static str {
        match self {
            Trend::Up => "↗",
            Trend::Down => "↘",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Trend::Up => "trend trend-up",
            Trend::Down => "trend trend-down",
        }
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] sub_value: Option<String>,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional)] trend: Option<Trend>,
    #[prop(optional, into)] trend_value: Option<String>,
    /// Colour theme: forest, earth, green, yellow, red, blue or purple.
    #[prop(default = "forest")]
    color: &'static str,
    /// Fill of the bar under the value, in percent.
    #[prop(optional)]
    progress: Option<f64>,
    /// Entry animation delay in seconds.
    #[prop(default = 0.0)]
    delay: f64,
) -> impl IntoView {
    let trend_row = trend.zip(trend_value).map(|(trend, text)| {
        view! {
            <div class=trend.class()>
                <span>{trend.icon()}</span>
                <span class="trend-value">{text}</span>
                <span class="trend-caption">"vs last month"</span>
            </div>
        }
    });

    let progress_bar = progress.map(|p| {
        let width = format!("width: {:.1}%", p.clamp(0.0, 100.0));
        view! {
            <div class="progress-track thin">
                <div class=format!("progress-fill fill-{color}") style=width></div>
            </div>
        }
    });

    view! {
        <div
            class=format!("stat-card theme-{color} fade-up")
            style=format!("animation-delay: {delay:.2}s")
        >
            <div class="stat-card-header">
                <h3 class="stat-title">{title}</h3>
                {icon.map(|i| view! { <span class="stat-icon">{i}</span> })}
            </div>
            <p class="stat-value">{value}</p>
            {sub_value.map(|s| view! { <p class="stat-sub">{s}</p> })}
            {trend_row}
            {progress_bar}
        </div>
    }
}
