use leptos::{ev::SubmitEvent, *};
use leptos_router::{use_navigate, NavigateOptions};

use crate::app::backend::{login, Credentials};
use crate::app::components::Spinner;
use crate::app::session::use_api;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();

    // already signed in
    let home = navigate.clone();
    create_effect(move |_| {
        if untrack(|| api.session.is_authenticated()) {
            home(
                "/",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let (busy, set_busy) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let credentials = Credentials {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        set_busy.set(true);

        spawn_local(async move {
            match login(credentials).await {
                Ok(token) => {
                    api.session.store(token);
                    api.toasts.success("Welcome back!");
                    navigate("/", Default::default());
                }
                Err(err) => api.report(err),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="card login-card">
                <div class="login-card__header">
                    <h1>"Admin Login"</h1>
                    <p class="muted">"Sign in to manage your portfolio"</p>
                </div>

                <form class="login-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Username"</span>
                        <input
                            class="input"
                            type="text"
                            autocomplete="username"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="input"
                            type="password"
                            autocomplete="current-password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <button type="submit" class="btn btn--primary btn--block" disabled=move || busy.get()>
                        <Show when=move || busy.get() fallback=|| "Sign In">
                            <Spinner/>
                        </Show>
                    </button>
                </form>
            </div>
        </div>
    }
}
