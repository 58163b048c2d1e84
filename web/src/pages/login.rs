use leptos::ev;
use leptos::prelude::*;

use vanmitra_common::session::{Credentials, Session};

/// Sign-in form. Any non-empty email and password pair is accepted.
#[component]
pub fn LoginPage(#[prop(into)] on_login: Callback<Session>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        match credentials.authenticate() {
            Ok(session) => {
                set_error.set(None);
                on_login.run(session);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card fade-up">
                <div class="login-brand">
                    <span class="brand-mark large">"🍃"</span>
                    <h1>"Sign In to VanMitra"</h1>
                    <p class="muted">"Forest Rights Act claims dashboard"</p>
                </div>

                <form class="login-form" on:submit=on_submit>
                    <label class="field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            placeholder="you@example.gov.in"
                            autocomplete="username"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            placeholder="••••••••"
                            autocomplete="current-password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>

                    {move || error.get().map(|msg| view! { <p class="form-error" role="alert">{msg}</p> })}

                    <button type="submit" class="btn btn-primary btn-block">"Sign In"</button>
                </form>

                <p class="login-note muted">"Demo build: any email and password will do."</p>
            </div>
        </div>
    }
}
