use leptos::*;

/// Dialog over a dimmed backdrop. Clicking the backdrop or pressing Escape
/// closes it.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.call(());
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal__backdrop" on:click=move |_| on_close.call(())>
                <div
                    class="modal"
                    role="dialog"
                    tabindex="0"
                    on:click=|ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <div class="modal__header">
                        <h2>{title.clone()}</h2>
                        <button class="modal__close" title="Close" on:click=move |_| on_close.call(())>
                            "✕"
                        </button>
                    </div>
                    <div class="modal__body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
