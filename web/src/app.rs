//! Root Leptos application: HTML shell, sign-in gate and routing.

use std::sync::LazyLock;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Link, Meta, MetaTags, Stylesheet, Title};
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use vanmitra_common::session::Session;
use vanmitra_common::{DashboardConfig, Dataset};

use crate::components::header_bar::HeaderBar;
use crate::pages::{
    community::CommunityPage, insights::InsightsPage, login::LoginPage, map::MapPage,
    reports::ReportsPage,
};

static CONFIG: LazyLock<DashboardConfig> = LazyLock::new(DashboardConfig::bundled);

/// Read-only data shared by every page, provided as Leptos context.
#[derive(Clone, Copy, Debug)]
pub struct AppContext {
    pub dataset: &'static Dataset,
    pub config: &'static DashboardConfig,
}

/// The signed-in user, if any. Lives for the page lifetime only.
#[derive(Clone, Copy)]
pub struct SessionState(pub RwSignal<Option<Session>>);

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

/// HTML document wrapping `<App/>` for server rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// The root `<App/>` component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let dataset = Dataset::bundled();
    if let Ok(dataset) = dataset {
        provide_context(AppContext { dataset, config: &CONFIG });
    }
    provide_context(SessionState(RwSignal::new(None)));

    view! {
        <Stylesheet id="leptos" href="/pkg/vanmitra-web.css"/>
        <Link rel="icon" type_="image/svg+xml" href="/favicon.svg"/>
        <Title text="VanMitra – FRA Claims Dashboard"/>
        <Meta name="description" content="Forest Rights Act claims, insights and community voice"/>

        {match dataset {
            Ok(_) => view! { <AppRoutes/> }.into_any(),
            Err(e) => view! { <DataErrorScreen message=e.to_string()/> }.into_any(),
        }}
    }
}

#[component]
fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <RequireSession><NotFound/></RequireSession> }>
                <ParentRoute path=path!("") view=SignedInLayout>
                    <Route path=path!("") view=|| view! { <Redirect path="/map"/> }/>
                    <Route path=path!("map") view=MapPage/>
                    <Route path=path!("insights") view=InsightsPage/>
                    <Route path=path!("community") view=CommunityPage/>
                    <Route path=path!("reports") view=ReportsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn SignedInLayout() -> impl IntoView {
    view! {
        <RequireSession>
            <Outlet/>
        </RequireSession>
    }
}

/// Renders `children` under the header once signed in, the login form
/// otherwise.
#[component]
fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let SessionState(session) = expect_context::<SessionState>();
    let on_login = Callback::new(move |s: Session| session.set(Some(s)));

    move || {
        if session.with(Option::is_some) {
            view! {
                <div class="app-frame">
                    <HeaderBar/>
                    <main class="main-content">{children()}</main>
                </div>
            }
            .into_any()
        } else {
            view! { <LoginPage on_login/> }.into_any()
        }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>"There is nothing at this address."</p>
            <a href="/map" class="btn btn-primary">"Back to the map"</a>
        </div>
    }
}

/// Shown instead of the dashboard when the bundled data cannot be decoded.
#[component]
fn DataErrorScreen(message: String) -> impl IntoView {
    tracing::error!("{message}");
    view! {
        <div class="error-screen">
            <h1>"VanMitra could not start"</h1>
            <p>"The bundled dashboard data is unreadable."</p>
            <pre class="error-detail">{message}</pre>
        </div>
    }
}
