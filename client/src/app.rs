//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{PageKind, dashboard::DashboardPage, login::LoginPage, register::RegisterPage};

/// HTML shell rendered on the server for SSR + hydration.
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

/// Root application component. Each [`PageKind`] gets one route; the site
/// root shows the registration page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Task Manager"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RegisterPage/>
                <Route path=StaticSegment(PageKind::Register.segment()) view=RegisterPage/>
                <Route path=StaticSegment(PageKind::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(PageKind::Dashboard.segment()) view=DashboardPage/>
            </Routes>
        </Router>
    }
}
