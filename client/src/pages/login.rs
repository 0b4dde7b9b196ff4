//! Login page.

use leptos::prelude::*;

use super::PageKind;
use crate::net::types::Credentials;
use crate::util::in_flight::InFlight;

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let in_flight = InFlight::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !in_flight.try_begin() {
            return;
        }
        let credentials = Credentials::new(username.get_untracked(), password.get_untracked());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpTaskApi::default();
            let session = crate::state::session::Session::browser();
            let shell = crate::util::browser::BrowserShell;
            let result = crate::flows::login::submit_login(&api, &session, &shell, credentials).await;
            in_flight.release_on_error(&result);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = credentials;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Log in"</h1>
                <form id="loginForm" class="auth-form" on:submit=on_submit>
                    <input
                        id="username"
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || in_flight.is_busy()>
                        "Log in"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "No account yet? "
                    <a href=PageKind::Register.path()>"Register"</a>
                </p>
            </div>
        </div>
    }
}
