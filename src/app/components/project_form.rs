use leptos::{ev::SubmitEvent, *};
use leptos_router::use_navigate;

use super::image_upload::ImageUpload;
use crate::app::backend::{create_project, update_project, Project, ProjectStatus, ProjectType};
use crate::app::classes;
use crate::app::form::{ListField, ProjectDraft};
use crate::app::session::use_api;

/// Create form when `initial` is absent, edit form otherwise.
#[component]
pub fn ProjectForm(#[prop(optional)] initial: Option<Project>) -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();

    let editing = store_value(initial.as_ref().map(|p| p.id.clone()));
    let draft = create_rw_signal(
        initial
            .as_ref()
            .map(ProjectDraft::from_project)
            .unwrap_or_default(),
    );
    let (saving, set_saving) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }

        let current = draft.get_untracked();
        if let Err(msg) = current.validate() {
            api.toasts.error(msg);
            return;
        }

        let payload = current.to_payload();
        let id = editing.get_value();
        let navigate = navigate.clone();
        set_saving.set(true);

        spawn_local(async move {
            let token = api.token();
            let (result, done) = match id {
                Some(id) => (
                    update_project(token, id, payload).await,
                    "Project updated successfully",
                ),
                None => (
                    create_project(token, payload).await,
                    "Project created successfully",
                ),
            };
            set_saving.set(false);

            match result {
                Ok(()) => {
                    api.toasts.success(done);
                    navigate("/projects", Default::default());
                }
                Err(err) => api.report(err),
            }
        });
    };

    view! {
        <form class="project-form" on:submit=on_submit>
            <div class="project-form__grid">
                <div class="card project-form__section">
                    <h3>"Basic Info"</h3>

                    <label class="field">
                        <span class="field__label">"Title"</span>
                        <input
                            class="input"
                            name="title"
                            required
                            placeholder="Project Title"
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        />
                    </label>

                    <div class="field">
                        <span class="field__label">"Type"</span>
                        <div class="segmented">
                            {ProjectType::ALL
                                .into_iter()
                                .map(|kind| {
                                    let class = move || {
                                        let selected = draft.with(|d| d.kind == kind);
                                        classes(["segmented__option", if selected { "segmented__option--selected" } else { "" }])
                                    };
                                    view! {
                                        <button
                                            type="button"
                                            class=class
                                            on:click=move |_| draft.update(|d| d.kind = kind)
                                        >
                                            {kind.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <label class="field">
                        <span class="field__label">"Description"</span>
                        <textarea
                            class="input"
                            name="description"
                            required
                            rows="4"
                            placeholder="Project description..."
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>
                    </label>

                    <label class="field">
                        <span class="field__label">"Status"</span>
                        <select
                            class="input"
                            name="status"
                            on:change=move |ev| {
                                draft.update(|d| d.status = ProjectStatus::parse(&event_target_value(&ev)))
                            }
                        >
                            <option
                                value="draft"
                                selected=move || draft.with(|d| d.status == ProjectStatus::Draft)
                            >
                                "Draft"
                            </option>
                            <option
                                value="published"
                                selected=move || draft.with(|d| d.status == ProjectStatus::Published)
                            >
                                "Published"
                            </option>
                        </select>
                    </label>
                </div>

                <div class="card project-form__section">
                    <h3>"Media & Links"</h3>

                    <div class="field">
                        <span class="field__label">"Cover Image"</span>
                        <ImageUpload
                            value=Signal::derive(move || draft.with(|d| d.image.clone()))
                            on_change=Callback::new(move |url: String| draft.update(|d| d.image = url))
                            disabled=saving
                        />
                    </div>

                    <label class="field">
                        <span class="field__label">"Video URL"</span>
                        <input
                            class="input"
                            name="videoUrl"
                            placeholder="https://youtube.com/..."
                            prop:value=move || draft.with(|d| d.video_url.clone())
                            on:input=move |ev| draft.update(|d| d.video_url = event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span class="field__label">"Download URL"</span>
                        <input
                            class="input"
                            name="downloadUrl"
                            placeholder="https://drive.google.com/..."
                            prop:value=move || draft.with(|d| d.download_url.clone())
                            on:input=move |ev| draft.update(|d| d.download_url = event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span class="field__label">"Live URL"</span>
                        <input
                            class="input"
                            name="liveUrl"
                            placeholder="https://website.com/..."
                            prop:value=move || draft.with(|d| d.live_url.clone())
                            on:input=move |ev| draft.update(|d| d.live_url = event_target_value(&ev))
                        />
                    </label>
                </div>

                <RowList draft=draft field=ListField::TechStack title="Tech Stack"/>
                <RowList draft=draft field=ListField::Features title="Key Features"/>
            </div>

            <div class="project-form__actions">
                <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Project" }}
                </button>
            </div>
        </form>
    }
}

/// Editable list of single-line entries with add and remove controls.
#[component]
fn RowList(draft: RwSignal<ProjectDraft>, field: ListField, title: &'static str) -> impl IntoView {
    // re-render rows only when their number changes, so inputs keep focus while typing
    let count = create_memo(move |_| draft.with(|d| d.rows(field).len()));

    view! {
        <div class="card project-form__section">
            <h3>{title}</h3>
            <div class="row-list">
                {move || {
                    (0..count.get())
                        .map(|index| {
                            view! {
                                <div class="row-list__row">
                                    <input
                                        class="input"
                                        placeholder=format!("{} {}", field.label(), index + 1)
                                        prop:value=move || {
                                            draft.with(|d| d.rows(field).get(index).cloned().unwrap_or_default())
                                        }
                                        on:input=move |ev| {
                                            draft.update(|d| d.set_row(field, index, event_target_value(&ev)))
                                        }
                                    />
                                    <Show when=move || (count.get() > 1)>
                                        <button
                                            type="button"
                                            class="row-list__remove"
                                            title="Remove"
                                            on:click=move |_| draft.update(|d| d.remove_row(field, index))
                                        >
                                            "✕"
                                        </button>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <button
                type="button"
                class="btn btn--ghost"
                on:click=move |_| draft.update(|d| d.add_row(field))
            >
                "+ Add "
                {field.label()}
            </button>
        </div>
    }
}
