//! Pulsing placeholders shown while a view is "loading".

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkeletonKind {
    #[default]
    Card,
    Map,
}

#[component]
pub fn LoadingSkeleton(#[prop(default = SkeletonKind::Card)] kind: SkeletonKind) -> impl IntoView {
    match kind {
        SkeletonKind::Card => view! {
            <div class="skeleton-card pulse">
                <div class="skeleton-line w-half"></div>
                <div class="skeleton-block h-lg w-third"></div>
                <div class="skeleton-line w-quarter"></div>
            </div>
        }
        .into_any(),
        SkeletonKind::Map => view! {
            <div class="skeleton-map pulse">
                <span class="skeleton-map-icon">"🗺️"</span>
                <p>"Loading WebGIS Map..."</p>
            </div>
        }
        .into_any(),
    }
}
