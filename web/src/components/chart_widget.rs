//! SVG chart card: bar, line, area, pie and donut.

use leptos::prelude::*;

use vanmitra_common::chart::{self, ChartKind, Datum, Frame, PALETTE};
use vanmitra_common::format;
use vanmitra_common::projection::Point;

const VIEW_WIDTH: f64 = 600.0;
const TICK_INTERVALS: usize = 4;

#[component]
pub fn ChartWidget(
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = ChartKind::Bar)] kind: ChartKind,
    data: Vec<Datum>,
    /// Series colours; slices cycle through them.
    #[prop(optional)]
    colors: Option<Vec<&'static str>>,
    #[prop(default = 300.0)] height: f64,
) -> impl IntoView {
    let colors = colors.filter(|c| !c.is_empty()).unwrap_or_else(|| PALETTE.to_vec());

    let body = if data.is_empty() {
        view! { <p class="chart-empty">"No data"</p> }.into_any()
    } else if kind.is_radial() {
        radial(&data, kind, &colors, height).into_any()
    } else {
        cartesian(&data, kind, colors[0], height).into_any()
    };

    view! {
        <div class="chart-card fade-up">
            {title.map(|t| view! { <h3 class="chart-title">{t}</h3> })}
            <div class="chart-body" style=format!("height: {height}px")>{body}</div>
        </div>
    }
}

fn cartesian(data: &[Datum], kind: ChartKind, color: &'static str, height: f64) -> impl IntoView {
    let frame = Frame::new(VIEW_WIDTH, height);
    let max = chart::nice_max(chart::max_value(data));

    let grid = chart::ticks(max, TICK_INTERVALS)
        .into_iter()
        .map(|t| {
            let y = frame.value_y(t, max);
            view! {
                <g class="chart-grid">
                    <line
                        x1=frame.left
                        x2=frame.width - frame.right
                        y1=y
                        y2=y
                        stroke="#E5E7EB"
                        stroke-dasharray="3 3"
                    />
                    <text x=frame.left - 8.0 y=y + 4.0 text-anchor="end" class="axis-label">
                        {format::compact(t)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let labels = data
        .iter()
        .enumerate()
        .map(|(i, d)| {
            view! {
                <text
                    x=frame.band_center(i, data.len())
                    y=frame.baseline() + 18.0
                    text-anchor="middle"
                    class="axis-label"
                >
                    {d.label.clone()}
                </text>
            }
        })
        .collect_view();

    let series = match kind {
        ChartKind::Bar => chart::bars(data, &frame, max)
            .into_iter()
            .zip(data)
            .map(|(b, d)| {
                view! {
                    <rect
                        x=b.x
                        y=b.y
                        width=b.width
                        height=b.height
                        rx="4"
                        fill=color
                        class="bar"
                        aria-label=format!("{}: {}", d.label, format::compact(d.value))
                    />
                }
            })
            .collect_view()
            .into_any(),
        _ => {
            let points = chart::line_points(data, &frame, max);
            let line = chart::line_path(&points);
            let area = (kind == ChartKind::Area)
                .then(|| chart::area_path(&points, frame.baseline()))
                .map(|d| view! { <path d=d fill=color fill-opacity="0.3" stroke="none"/> });
            let dots = points
                .iter()
                .zip(data)
                .map(|(p, d)| dot(*p, color, d))
                .collect_view();
            view! {
                {area}
                <path d=line fill="none" stroke=color stroke-width="3"/>
                {dots}
            }
            .into_any()
        }
    };

    view! {
        <svg
            class="chart-svg"
            viewBox=format!("0 0 {VIEW_WIDTH} {height}")
            width="100%"
            height="100%"
        >
            {grid}
            <line
                x1=frame.left
                x2=frame.width - frame.right
                y1=frame.baseline()
                y2=frame.baseline()
                stroke="#6B7280"
            />
            {series}
            {labels}
        </svg>
    }
}

fn dot(p: Point, color: &'static str, d: &Datum) -> impl IntoView {
    view! {
        <circle
            cx=p.x
            cy=p.y
            r="4"
            fill=color
            stroke="white"
            stroke-width="2"
            aria-label=format!("{}: {}", d.label, format::compact(d.value))
        />
    }
}

fn radial(data: &[Datum], kind: ChartKind, colors: &[&'static str], height: f64) -> impl IntoView {
    let size = height.min(VIEW_WIDTH);
    let center = Point::new(size / 2.0, size / 2.0);
    let outer = size / 2.0 * 0.8;
    let inner = if kind == ChartKind::Donut { outer * 0.5 } else { 0.0 };
    let color_of = |i: usize| colors[i % colors.len()];

    let slices = chart::slices(data, center, outer, inner)
        .into_iter()
        .map(|s| {
            let label = data[s.index].label.clone();
            view! {
                <g class="slice">
                    <path
                        d=s.path.clone()
                        fill=color_of(s.index)
                        fill-rule="evenodd"
                        stroke="white"
                        stroke-width="2"
                        aria-label=format!("{label}: {}", s.percent_label())
                    />
                    <text
                        x=s.label_at.x
                        y=s.label_at.y
                        text-anchor="middle"
                        dominant-baseline="central"
                        class="slice-label"
                    >
                        {s.percent_label()}
                    </text>
                </g>
            }
        })
        .collect_view();

    let legend = data
        .iter()
        .enumerate()
        .map(|(i, d)| {
            view! {
                <li class="legend-item">
                    <span class="legend-swatch" style=format!("background: {}", color_of(i))></span>
                    <span class="legend-label">{d.label.clone()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="radial-chart">
            <svg class="chart-svg" viewBox=format!("0 0 {size} {size}") width="100%" height="100%">
                {slices}
            </svg>
            <ul class="chart-legend">{legend}</ul>
        </div>
    }
}
