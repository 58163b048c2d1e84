//! Slippy basemap with SVG overlays for forest, water, farm land and FRA
//! claim markers.

use leptos::ev;
use leptos::prelude::*;

use vanmitra_common::layers::{close_hidden_popup, LayerKey, MapPopup, MapSelection, VisibleLayers};
use vanmitra_common::projection::Viewport;
use vanmitra_common::village::{FraStatus, Village};

use crate::app::use_app;
use crate::components::info_panel::InfoPanel;
use crate::components::loading_skeleton::{LoadingSkeleton, SkeletonKind};
use crate::timer::OwnedTimeout;

const MARKER_RADIUS: f64 = 9.0;

/// Interactive map. Clicking a village marker selects it, opens the info
/// panel and reports the selection through `on_village_select`; closing
/// the panel reports `None`.
#[component]
pub fn MapContainer(
    #[prop(into)] layers: Signal<VisibleLayers>,
    #[prop(into)] on_village_select: Callback<Option<Village>>,
) -> impl IntoView {
    let app = use_app();
    let dataset = app.dataset;
    let map = &dataset.map;
    let config = app.config;

    let viewport = RwSignal::new(Viewport::from_config(&config.map));
    let selection = RwSignal::new(MapSelection::default());
    let popup = RwSignal::new(None::<MapPopup>);
    let (loading, set_loading) = signal(true);
    let drag_from = StoredValue::new(None::<(i32, i32)>);

    let loading_timer = OwnedTimeout::new();
    Effect::new(move |_| {
        loading_timer.schedule(config.timing.map_loading(), move || set_loading.set(false));
    });

    let visible = move |key: LayerKey| layers.with(|l| l.is_visible(key));

    Effect::new(move |_| {
        let current = layers.get();
        popup.maybe_update(|p| close_hidden_popup(p, &current));
    });

    let select_village = move |v: &'static Village| {
        selection.update(|s| s.select(v));
        popup.set(Some(MapPopup::for_village(v)));
        on_village_select.run(Some(v.clone()));
    };
    let close_panel = Callback::new(move |()| {
        selection.update(MapSelection::clear);
        on_village_select.run(None);
    });

    let on_mousedown = move |e: ev::MouseEvent| {
        drag_from.set_value(Some((e.client_x(), e.client_y())));
    };
    let on_mousemove = move |e: ev::MouseEvent| {
        let Some((x, y)) = drag_from.get_value() else {
            return;
        };
        let (nx, ny) = (e.client_x(), e.client_y());
        if (nx, ny) != (x, y) {
            viewport.update(|vp| vp.pan_by(f64::from(nx - x), f64::from(ny - y)));
            drag_from.set_value(Some((nx, ny)));
        }
    };
    let end_drag = move |_: ev::MouseEvent| drag_from.set_value(None);

    let tiles = move || {
        let vp = viewport.get();
        vp.tiles()
            .into_iter()
            .map(|t| {
                view! {
                    <img
                        class="map-tile"
                        src=t.url(&config.map.tile_url)
                        alt=""
                        draggable="false"
                        style=format!("left: {:.0}px; top: {:.0}px", t.left, t.top)
                    />
                }
            })
            .collect_view()
    };

    let forest = move || {
        visible(LayerKey::ForestCover).then(|| {
            let vp = viewport.get();
            let layer = &map.map_layers.forest_cover;
            layer
                .data
                .iter()
                .map(|area| {
                    let anchor = area.coordinates.first().copied().unwrap_or(config.map.center);
                    let info = MapPopup::new(
                        LayerKey::ForestCover,
                        anchor,
                        "Forest Area",
                        vec![format!("Density: {}%", area.density)],
                    );
                    view! {
                        <polygon
                            class="overlay"
                            points=vp.svg_points(&area.coordinates)
                            fill=layer.color.clone()
                            fill-opacity="0.3"
                            stroke=layer.color.clone()
                            stroke-width="2"
                            on:click=move |_| popup.set(Some(info.clone()))
                        />
                    }
                })
                .collect_view()
        })
    };

    let water = move || {
        visible(LayerKey::WaterBodies).then(|| {
            let vp = viewport.get();
            let layer = &map.map_layers.water_bodies;
            layer
                .data
                .iter()
                .map(|body| {
                    let anchor = body.coordinates.first().copied().unwrap_or(config.map.center);
                    let info = MapPopup::new(
                        LayerKey::WaterBodies,
                        anchor,
                        body.name.clone(),
                        vec!["Water body".to_owned()],
                    );
                    view! {
                        <polyline
                            class="overlay"
                            points=vp.svg_points(&body.coordinates)
                            fill="none"
                            stroke=layer.color.clone()
                            stroke-width="4"
                            stroke-linecap="round"
                            on:click=move |_| popup.set(Some(info.clone()))
                        />
                    }
                })
                .collect_view()
        })
    };

    let farms = move || {
        visible(LayerKey::FarmLands).then(|| {
            let vp = viewport.get();
            let layer = &map.map_layers.farm_lands;
            layer
                .data
                .iter()
                .map(|farm| {
                    let anchor = farm.coordinates.first().copied().unwrap_or(config.map.center);
                    let info = MapPopup::new(
                        LayerKey::FarmLands,
                        anchor,
                        "Farm Land",
                        vec![format!("Crop: {}", farm.crop_type)],
                    );
                    view! {
                        <polygon
                            class="overlay"
                            points=vp.svg_points(&farm.coordinates)
                            fill=layer.color.clone()
                            fill-opacity="0.4"
                            stroke=layer.color.clone()
                            stroke-width="2"
                            stroke-dasharray="5 5"
                            on:click=move |_| popup.set(Some(info.clone()))
                        />
                    }
                })
                .collect_view()
        })
    };

    let markers = move || {
        visible(LayerKey::FraClaims).then(|| {
            let vp = viewport.get();
            map.villages
                .iter()
                .map(|v| {
                    let p = vp.to_screen(v.coordinates);
                    let selected = move || selection.with(|s| s.selected().map(|s| s.id) == Some(v.id));
                    view! {
                        <circle
                            class=move || if selected() { "marker selected" } else { "marker" }
                            cx=p.x
                            cy=p.y
                            r=MARKER_RADIUS
                            fill=v.fra_status.color()
                            stroke="white"
                            stroke-width="3"
                            on:click=move |_| select_village(v)
                        />
                    }
                })
                .collect_view()
        })
    };

    let popup_view = move || {
        popup.get().map(|p| {
            let at = viewport.with(|vp| vp.to_screen(p.anchor));
            view! {
                <div
                    class="map-popup"
                    style=format!("left: {:.0}px; top: {:.0}px", at.x, at.y - MARKER_RADIUS)
                >
                    <button class="popup-close" on:click=move |_| popup.set(None)>"×"</button>
                    <h4>{p.title}</h4>
                    {p.lines.into_iter().map(|l| view! { <p>{l}</p> }).collect_view()}
                </div>
            }
        })
    };

    view! {
        <div class="map-container">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingSkeleton kind=SkeletonKind::Map/> }
            >
                <div
                    class="map-viewport"
                    style=format!("width: {}px; height: {}px", config.map.width, config.map.height)
                    on:mousedown=on_mousedown
                    on:mousemove=on_mousemove
                    on:mouseup=end_drag
                    on:mouseleave=end_drag
                >
                    <div class="map-tiles">{tiles}</div>
                    <svg
                        class="map-overlay"
                        viewBox=format!("0 0 {} {}", config.map.width, config.map.height)
                        width="100%"
                        height="100%"
                    >
                        {forest}
                        {water}
                        {farms}
                        {markers}
                    </svg>
                    {popup_view}

                    <div class="map-zoom">
                        <button
                            title="Zoom in"
                            disabled=move || !viewport.with(Viewport::can_zoom_in)
                            on:click=move |_| {
                                viewport.update(|vp| {
                                    vp.zoom_in();
                                })
                            }
                        >
                            "+"
                        </button>
                        <button
                            title="Zoom out"
                            disabled=move || !viewport.with(Viewport::can_zoom_out)
                            on:click=move |_| {
                                viewport.update(|vp| {
                                    vp.zoom_out();
                                })
                            }
                        >
                            "−"
                        </button>
                    </div>

                    <div class="map-legend">
                        <h4>"FRA Status Legend"</h4>
                        <ul>{status_legend()}</ul>
                    </div>
                    <div class="map-attribution">{config.map.attribution.as_str()}</div>
                </div>
            </Show>

            {move || {
                selection
                    .with(|s| s.selected().cloned())
                    .map(|village| view! { <InfoPanel village on_close=close_panel/> })
            }}
        </div>
    }
}

fn status_legend() -> impl IntoView {
    FraStatus::ALL
        .into_iter()
        .map(|s| {
            view! {
                <li>
                    <span class="legend-dot" style=format!("background: {}", s.color())></span>
                    {s.label()}
                </li>
            }
        })
        .collect_view()
}
