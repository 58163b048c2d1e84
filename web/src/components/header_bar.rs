//! Top navigation bar component.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::app::SessionState;

const NAV_ITEMS: [(&str, &str, &str); 4] = [
    ("/map", "Map Dashboard", "🗺️"),
    ("/insights", "AI Insights", "🤖"),
    ("/community", "Community Voice", "🗣️"),
    ("/reports", "Reports", "📊"),
];

/// Site-wide navigation bar with a collapsible mobile menu.
#[component]
pub fn HeaderBar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let (menu_open, set_menu_open) = signal(false);
    let SessionState(session) = expect_context::<SessionState>();

    let link_class = move |path: &'static str| {
        move || {
            if pathname.get() == path {
                "nav-link active"
            } else {
                "nav-link"
            }
        }
    };

    // Close the mobile menu whenever the route changes.
    Effect::new(move |_| {
        pathname.track();
        set_menu_open.set(false);
    });

    let user_email = move || session.with(|s| s.as_ref().map(|s| s.email.clone()).unwrap_or_default());

    view! {
        <header class="header-bar">
            <div class="header-inner">
                <A href="/map" attr:class="brand">
                    <span class="brand-mark">"🍃"</span>
                    <span class="brand-text">
                        <span class="brand-title">"🌿 VanMitra"</span>
                        <span class="brand-subtitle">"Tribal Land Rights Management"</span>
                    </span>
                </A>

                <nav class="nav-links desktop-only">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(path, label, icon)| {
                            view! {
                                <A href=path attr:class=link_class(path)>
                                    <span class="nav-icon">{icon}</span>
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="header-actions">
                    <button class="icon-btn notification" title="Notifications">
                        "🔔"
                        <span class="badge">"3"</span>
                    </button>
                    <button class="icon-btn settings" title="Settings">"⚙️"</button>
                    <div class="avatar" title=user_email>"👤"</div>
                    <button
                        class="icon-btn mobile-only"
                        title="Menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="mobile-nav mobile-only">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(path, label, icon)| {
                            view! {
                                <A href=path attr:class=link_class(path)>
                                    <span class="nav-icon">{icon}</span>
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}
