//! Community voice: engagement overview, voice note transcripts and the
//! recorder.

use leptos::prelude::*;

use vanmitra_common::chart::{ChartKind, Datum};
use vanmitra_common::community::{CommunityData, Sentiment};
use vanmitra_common::filters::CommunityTab;
use vanmitra_common::format;

use crate::app::use_app;
use crate::components::chart_widget::ChartWidget;
use crate::components::recorder_widget::RecorderWidget;
use crate::components::stat_card::StatCard;

#[component]
pub fn CommunityPage() -> impl IntoView {
    let dataset = use_app().dataset;
    let data = &dataset.community;
    let (tab, set_tab) = signal(CommunityTab::Overview);

    let tabs = CommunityTab::ALL
        .into_iter()
        .map(|t| {
            view! {
                <button
                    class=move || if tab.get() == t { "tab active" } else { "tab" }
                    on:click=move |_| set_tab.set(t)
                >
                    <span class="tab-icon">{t.icon()}</span>
                    {t.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="community-page">
            <div class="page-header">
                <div>
                    <h1>"🗣️ Community Voice"</h1>
                    <p class="muted">"Feedback and voice notes from forest-dwelling communities"</p>
                </div>
            </div>
            <nav class="tab-bar">{tabs}</nav>
            {move || {
                let body = match tab.get() {
                    CommunityTab::Overview => overview(data).into_any(),
                    CommunityTab::Voices => voices(data).into_any(),
                    CommunityTab::Record => view! {
                        <section class="record-section">
                            <h3 class="section-title">"Record a Voice Note"</h3>
                            <p class="muted">"Share feedback about FRA claims in your own language."</p>
                            <RecorderWidget/>
                        </section>
                    }
                    .into_any(),
                };
                view! { <div class="tab-panel fade-up">{body}</div> }
            }}
        </div>
    }
}

fn overview(data: &'static CommunityData) -> impl IntoView {
    let engagement = &data.community_engagement;
    let overall = &data.sentiment_analysis.overall;

    let sentiment: Vec<Datum> =
        Sentiment::ALL.into_iter().map(|s| Datum::new(s.label(), overall.get(s))).collect();
    let sentiment_colors: Vec<&'static str> = Sentiment::ALL.into_iter().map(Sentiment::color).collect();
    let trend_colors = vec![Sentiment::Positive.color()];
    let trend: Vec<Datum> = data
        .feedback_trends
        .iter()
        .map(|t| Datum::new(t.month.clone(), t.split.get(Sentiment::Positive)))
        .collect();

    let languages = engagement
        .language_distribution
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let districts = data
        .sentiment_analysis
        .by_district
        .iter()
        .map(|d| {
            let segments = Sentiment::ALL
                .into_iter()
                .map(|s| {
                    let style = format!("width: {:.1}%; background: {}", d.split.get(s), s.color());
                    view! { <div class="segment" style=style title=s.label()></div> }
                })
                .collect_view();
            view! {
                <div class="district-row">
                    <div class="district-label">
                        <span>{d.district.clone()}</span>
                        <span class="muted">
                            {format!("{} positive", format::percent(d.split.get(Sentiment::Positive)))}
                        </span>
                    </div>
                    <div class="stacked-bar">{segments}</div>
                </div>
            }
        })
        .collect_view();

    let themes = data
        .topic_modeling
        .major_themes
        .iter()
        .map(|t| {
            let keywords = t
                .keywords
                .iter()
                .take(3)
                .map(|k| view! { <span class="chip">{k.clone()}</span> })
                .collect_view();
            view! {
                <div class="theme-card">
                    <div class="theme-header">
                        <h4>{t.theme.clone()}</h4>
                        <span class=t.sentiment.css_class()>{t.sentiment.emoji()}</span>
                    </div>
                    <p class="muted">{format!("{} of feedback", format::percent(t.frequency))}</p>
                    <div class="chips">{keywords}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="stat-grid">
            <StatCard
                title="Total Participants"
                value=format::thousands(u64::from(engagement.total_participants))
                icon="👥"
                color="forest"
            />
            <StatCard
                title="Active Voices"
                value=format::thousands(u64::from(engagement.active_voices))
                icon="🎤"
                color="blue"
                delay=0.1
            />
            <StatCard
                title="Avg. Response Time"
                value=engagement.average_response_time.clone()
                icon="⏱️"
                color="yellow"
                delay=0.2
            />
            <StatCard
                title="Languages"
                value=engagement.language_distribution.len().to_string()
                sub_value=languages
                icon="🌐"
                color="purple"
                delay=0.3
            />
        </div>

        <div class="chart-grid">
            <ChartWidget
                title="Overall Sentiment"
                kind=ChartKind::Donut
                data=sentiment
                colors=sentiment_colors
            />
            <ChartWidget title="Positive Feedback Trend" kind=ChartKind::Area data=trend colors=trend_colors/>
        </div>

        <div class="two-column">
            <section class="card">
                <h3 class="section-title">"Sentiment by District"</h3>
                {districts}
            </section>
            <section class="card">
                <h3 class="section-title">"Major Themes"</h3>
                <div class="theme-grid">{themes}</div>
            </section>
        </div>
    }
}

fn voices(data: &'static CommunityData) -> impl IntoView {
    data.voice_notes
        .iter()
        .map(|note| {
            let keywords = note
                .keywords
                .iter()
                .take(4)
                .map(|k| view! { <span class="chip">{k.clone()}</span> })
                .collect_view();
            view! {
                <article class="voice-card">
                    <div class="voice-header">
                        <span class=format!("sentiment-emoji {}", note.sentiment.css_class())>
                            {note.sentiment.emoji()}
                        </span>
                        <div>
                            <h4>{note.speaker.clone()}</h4>
                            <p class="muted">{format!("📍 {} • {}", note.village, note.duration)}</p>
                        </div>
                        <span class="muted voice-date">{format::display_date(&note.timestamp)}</span>
                    </div>
                    <p class="transcript">{format!("\u{201c}{}\u{201d}", note.transcript)}</p>
                    <div class="chips">{keywords}</div>
                </article>
            }
        })
        .collect_view()
}
