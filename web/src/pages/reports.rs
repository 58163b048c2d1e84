//! Reports: filter controls, template cards with simulated generation and
//! preview charts.

use leptos::prelude::*;

use vanmitra_common::chart::{ChartKind, Datum};
use vanmitra_common::format;
use vanmitra_common::report::{
    ExportFormat, ReportGeneration, ReportKind, ReportPeriod, RECENT_REPORTS, REPORT_DISTRICTS,
    REPORT_TEMPLATES,
};

use crate::app::use_app;
use crate::components::chart_widget::ChartWidget;
use crate::components::stat_card::{StatCard, Trend};
use crate::timer::OwnedTimeout;

const DEFAULT_START: &str = "2024-01-01";
const DEFAULT_END: &str = "2024-12-31";

#[component]
pub fn ReportsPage() -> impl IntoView {
    let app = use_app();
    let dataset = app.dataset;
    let dashboard = &dataset.dashboard;

    let period = RwSignal::new(ReportPeriod::default());
    let district = RwSignal::new(REPORT_DISTRICTS[0].0.to_owned());
    let start = RwSignal::new(DEFAULT_START.to_owned());
    let end = RwSignal::new(DEFAULT_END.to_owned());
    let generation = RwSignal::new(ReportGeneration::default());
    let generation_timer = OwnedTimeout::new();

    let generate = move |kind: ReportKind, export: Option<ExportFormat>| {
        if !generation.try_update(|g| g.begin(kind)).unwrap_or(false) {
            return;
        }
        tracing::info!(
            report = kind.template().title,
            format = export.map(ExportFormat::short_label),
            period = period.with_untracked(|p| p.value()),
            district = %district.get_untracked(),
            "generating report"
        );
        generation_timer.schedule(app.config.timing.report_generation(), move || {
            if let Some(done) = generation.try_update(ReportGeneration::finish).flatten() {
                tracing::info!(report = done.template().title, "report ready");
            }
        });
    };
    let busy = move || generation.with(ReportGeneration::is_generating);

    let templates = REPORT_TEMPLATES
        .into_iter()
        .map(|t| {
            let exports = ExportFormat::ALL
                .into_iter()
                .map(|f| {
                    view! {
                        <button
                            class="btn btn-small btn-secondary"
                            title=f.label()
                            disabled=busy
                            on:click=move |_| generate(t.kind, Some(f))
                        >
                            {format!("{} {}", f.icon(), f.short_label())}
                        </button>
                    }
                })
                .collect_view();
            let running = move || generation.with(|g| g.in_flight() == Some(t.kind));
            view! {
                <div class=format!("template-card theme-{}", t.color)>
                    <div class="template-header">
                        <span class="template-icon">{t.icon}</span>
                        <div>
                            <h4>{t.title}</h4>
                            <p class="muted">{t.description}</p>
                        </div>
                    </div>
                    <div class="template-actions">
                        <div class="export-buttons">{exports}</div>
                        <button
                            class="btn btn-primary"
                            disabled=busy
                            on:click=move |_| generate(t.kind, None)
                        >
                            {move || if running() { "⏳ Generating..." } else { "⬇️ Generate" }}
                        </button>
                    </div>
                </div>
            }
        })
        .collect_view();

    let approval: Vec<Datum> = dashboard
        .district_wise_stats
        .iter()
        .map(|d| Datum::new(d.district.clone(), d.approval_rate))
        .collect();
    let processing: Vec<Datum> = dashboard
        .claims_by_year
        .iter()
        .map(|y| Datum::new(y.year.clone(), y.avg_processing_months))
        .collect();
    let processing_colors = vec!["#EAB308"];
    let filed: Vec<Datum> = dashboard
        .claims_by_year
        .iter()
        .map(|y| Datum::new(y.year.clone(), f64::from(y.filed)))
        .collect();

    let recent = RECENT_REPORTS
        .into_iter()
        .map(|r| {
            view! {
                <li class="recent-report">
                    <span class="report-format">{r.format}</span>
                    <div class="recent-report-text">
                        <p>{r.name}</p>
                        <p class="muted">{format!("{} • {}", format::display_date(r.date), r.size)}</p>
                    </div>
                    <button class="icon-btn" title="Download">"⬇️"</button>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="reports-page">
            <div class="page-header">
                <div>
                    <h1>"📊 Reports & Analytics"</h1>
                    <p class="muted">"Generate and export FRA implementation reports"</p>
                </div>
            </div>

            <section class="card report-filters">
                <label class="field">
                    <span>"Time Period"</span>
                    <select
                        prop:value=move || period.get().value()
                        on:change=move |ev| {
                            if let Some(p) = ReportPeriod::from_value(&event_target_value(&ev)) {
                                period.set(p);
                            }
                        }
                    >
                        {ReportPeriod::ALL
                            .into_iter()
                            .map(|p| view! { <option value=p.value()>{p.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span>"District"</span>
                    <select
                        prop:value=move || district.get()
                        on:change=move |ev| district.set(event_target_value(&ev))
                    >
                        {REPORT_DISTRICTS
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span>"Start Date"</span>
                    <input
                        type="date"
                        prop:value=move || start.get()
                        on:input=move |ev| start.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"End Date"</span>
                    <input
                        type="date"
                        prop:value=move || end.get()
                        on:input=move |ev| end.set(event_target_value(&ev))
                    />
                </label>
            </section>

            <div class="stat-grid">
                <StatCard title="Reports Generated" value="147" icon="📄" trend=Trend::Up trend_value="+23%" color="forest"/>
                <StatCard title="Data Points" value="15.2K" icon="🗂️" trend=Trend::Up trend_value="+12%" color="blue" delay=0.1/>
                <StatCard title="Active Users" value="89" icon="👥" trend=Trend::Up trend_value="+5%" color="green" delay=0.2/>
                <StatCard title="Accuracy Rate" value="98.7%" icon="🎯" trend=Trend::Up trend_value="+0.3%" color="purple" delay=0.3/>
            </div>

            <section>
                <h3 class="section-title">"Report Templates"</h3>
                <div class="template-grid">{templates}</div>
            </section>

            <section>
                <h3 class="section-title">"Report Preview"</h3>
                <div class="chart-grid">
                    <ChartWidget title="District Approval Rate (%)" kind=ChartKind::Bar data=approval/>
                    <ChartWidget
                        title="Average Processing Time (months)"
                        kind=ChartKind::Line
                        data=processing
                        colors=processing_colors
                    />
                </div>
                <ChartWidget title="Historical Claims Filed" kind=ChartKind::Area data=filed height=350.0/>
            </section>

            <section class="card">
                <h3 class="section-title">"Recent Reports"</h3>
                <ul class="recent-reports">{recent}</ul>
            </section>
        </div>
    }
}
