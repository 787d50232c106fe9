use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions, Outlet};

use crate::app::components::{sidebar::Sidebar, Spinner};
use crate::app::nav::page_title;
use crate::app::session::{use_api, LOGIN_PATH};

/// Shell around every dashboard route. Nothing renders until the browser has
/// confirmed a stored token; without one the visitor is sent to `/login`.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let (authorized, set_authorized) = create_signal(false);
    let (sidebar_open, set_sidebar_open) = create_signal(false);

    create_effect(move |_| {
        if api.session.is_authenticated() {
            set_authorized.set(true);
        } else {
            set_authorized.set(false);
            navigate(
                LOGIN_PATH,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    // the guard above takes care of leaving the page
    let logout = Callback::new(move |_: ()| {
        api.session.clear();
        api.toasts.success("Logged out");
    });

    view! {
        <Show
            when=move || authorized.get()
            fallback=|| view! { <div class="guard"><Spinner/></div> }
        >
            <div class="dashboard">
                <Sidebar
                    open=sidebar_open
                    on_close=Callback::new(move |_: ()| set_sidebar_open.set(false))
                    on_logout=logout
                />

                <main class="dashboard__main">
                    <header class="dashboard__header">
                        <div class="dashboard__heading">
                            <button
                                class="dashboard__menu"
                                title="Open menu"
                                on:click=move |_| set_sidebar_open.set(true)
                            >
                                "☰"
                            </button>
                            <div>
                                <h1>{move || pathname.with(|path| page_title(path))}</h1>
                                <p class="muted">"Manage your portfolio content"</p>
                            </div>
                        </div>
                        <div class="dashboard__profile">
                            <div class="dashboard__who">
                                <strong>"Admin User"</strong>
                                <span class="muted">"Super Admin"</span>
                            </div>
                            <button class="btn btn--danger" title="Logout" on:click=move |_| logout.call(())>
                                "Log out"
                            </button>
                        </div>
                    </header>

                    <div class="dashboard__content">
                        <Outlet/>
                    </div>
                </main>
            </div>
        </Show>
    }
}
