use leptos::*;

use crate::app::backend::{list_messages, mark_message_read, Message, MessageId};
use crate::app::classes;
use crate::app::components::Spinner;
use crate::app::session::use_api;

/// Flags one message as read in the local list.
pub fn mark_read(messages: &mut [Message], id: &MessageId) -> bool {
    match messages.iter_mut().find(|m| &m.id == id) {
        Some(message) => {
            message.is_read = true;
            true
        }
        None => false,
    }
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let api = use_api();

    let messages = create_rw_signal(Vec::<Message>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        spawn_local(async move {
            match list_messages(api.token()).await {
                Ok(list) => messages.set(list),
                Err(err) => api.report(err),
            }
            set_loading.set(false);
        });
    });

    let on_read = move |id: MessageId| {
        spawn_local(async move {
            match mark_message_read(api.token(), id.clone()).await {
                Ok(()) => {
                    messages.update(|list| {
                        mark_read(list, &id);
                    });
                    api.toasts.success("Marked as read");
                }
                Err(err) => api.report(err),
            }
        });
    };

    view! {
        <div class="card messages">
            <div class="messages__header">
                <h2>"Messages"</h2>
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <Spinner/> }>
                <Show
                    when=move || messages.with(|list| !list.is_empty())
                    fallback=|| view! { <p class="empty">"No messages found."</p> }
                >
                    <For
                        each=move || messages.get()
                        key=|message| (message.id.clone(), message.is_read)
                        children=move |message| {
                            let id = message.id.clone();
                            let unread = !message.is_read;
                            view! {
                                <article class=classes(["message", if unread { "message--unread" } else { "" }])>
                                    <div class="message__avatar">{message.sender_initial()}</div>
                                    <div class="message__body">
                                        <div class="message__meta">
                                            <div>
                                                <h4>
                                                    {message.sender_name().to_string()}
                                                    {unread.then(|| view! { <span class="badge badge--new">"New"</span> })}
                                                </h4>
                                                <p class="muted">{message.sender_email().to_string()}</p>
                                            </div>
                                            <span class="muted message__time">{message.received_at()}</span>
                                        </div>
                                        <p class="message__content">{message.content.clone()}</p>
                                        {unread.then(|| view! {
                                            <button class="btn btn--link" on:click=move |_| on_read(id.clone())>
                                                "Mark as Read"
                                            </button>
                                        })}
                                    </div>
                                </article>
                            }
                        }
                    />
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;
