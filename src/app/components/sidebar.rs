use leptos::*;
use leptos_router::use_location;

use crate::app::classes;
use crate::app::nav::{is_active, NAV_ITEMS};

#[component]
pub fn Sidebar(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <Show when=move || open.get()>
            <div class="sidebar__overlay" on:click=move |_| on_close.call(())></div>
        </Show>

        <aside class=move || classes(["sidebar", if open.get() { "sidebar--open" } else { "" }])>
            <div class="sidebar__header">
                <span class="sidebar__brand">"Portfolio Admin"</span>
                <button class="sidebar__close" on:click=move |_| on_close.call(())>
                    "✕"
                </button>
            </div>

            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|item| {
                        let class = move || {
                            let active = pathname.with(|path| is_active(path, item.href));
                            classes(["sidebar__link", if active { "sidebar__link--active" } else { "" }])
                        };
                        view! {
                            // closes the drawer on mobile
                            <a href=item.href class=class on:click=move |_| on_close.call(())>
                                <span class="sidebar__icon">{item.icon}</span>
                                <span>{item.label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <button class="sidebar__logout" on:click=move |_| on_logout.call(())>
                "Log out"
            </button>
        </aside>
    }
}
