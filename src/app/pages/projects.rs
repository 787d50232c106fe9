use leptos::*;
use leptos_router::A;

use crate::app::backend::{delete_project, list_projects, Project, ProjectId, ProjectType};
use crate::app::classes;
use crate::app::components::{modal::Modal, Spinner};
use crate::app::session::use_api;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Mobile,
    Web,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 3] = [Self::All, Self::Mobile, Self::Web];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Mobile => "Mobile",
            Self::Web => "Web",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Mobile => project.kind == ProjectType::Mobile,
            Self::Web => project.kind == ProjectType::Web,
        }
    }
}

pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

/// Whether the current filter leaves anything to show.
pub fn has_visible(projects: &[Project], filter: ProjectFilter) -> bool {
    projects.iter().any(|p| filter.matches(p))
}

/// Drops the deleted project from the cached list. Returns whether anything was removed.
pub fn remove_project(projects: &mut Vec<Project>, id: &ProjectId) -> bool {
    let before = projects.len();
    projects.retain(|p| &p.id != id);
    projects.len() != before
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let api = use_api();

    let projects = create_rw_signal(Vec::<Project>::new());
    let (loading, set_loading) = create_signal(true);
    let (filter, set_filter) = create_signal(ProjectFilter::All);
    let pending = create_rw_signal(None::<ProjectId>);
    let (deleting, set_deleting) = create_signal(false);

    create_effect(move |_| {
        spawn_local(async move {
            match list_projects(api.token()).await {
                Ok(list) => projects.set(list),
                Err(err) => api.report(err),
            }
            set_loading.set(false);
        });
    });

    let visible = move || projects.with(|list| filter_projects(list, filter.get()));

    let confirm_delete = move |_| {
        let Some(id) = pending.get_untracked() else {
            return;
        };
        set_deleting.set(true);

        spawn_local(async move {
            match delete_project(api.token(), id.clone()).await {
                Ok(()) => {
                    projects.update(|list| {
                        remove_project(list, &id);
                    });
                    api.toasts.success("Project deleted successfully");
                }
                Err(err) => api.report(err),
            }
            set_deleting.set(false);
            pending.set(None);
        });
    };

    view! {
        <div class="projects-page">
            <div class="toolbar">
                <div class="segmented">
                    {ProjectFilter::ALL
                        .into_iter()
                        .map(|option| {
                            let class = move || {
                                classes([
                                    "segmented__option",
                                    if filter.get() == option { "segmented__option--selected" } else { "" },
                                ])
                            };
                            view! {
                                <button class=class on:click=move |_| set_filter.set(option)>
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <A href="/projects/create" class="btn btn--primary">"+ Add Project"</A>
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <Spinner/> }>
                <Show
                    when=move || projects.with(|list| has_visible(list, filter.get()))
                    fallback=|| view! { <p class="empty">"No projects found."</p> }
                >
                    <div class="project-grid">
                        <For
                            each=visible
                            key=|project| project.id.clone()
                            children=move |project| {
                                let id = project.id.clone();
                                view! {
                                    <ProjectCard
                                        project
                                        on_delete=Callback::new(move |_: ()| pending.set(Some(id.clone())))
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>

            <Modal
                open=Signal::derive(move || pending.with(Option::is_some))
                title="Delete Project?"
                on_close=Callback::new(move |_: ()| {
                    if !deleting.get_untracked() {
                        pending.set(None);
                    }
                })
            >
                <p>"Are you sure you want to delete this project? This action cannot be undone."</p>
                <div class="modal__actions">
                    <button class="btn btn--ghost" on:click=move |_| pending.set(None) disabled=move || deleting.get()>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=confirm_delete disabled=move || deleting.get()>
                        {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </Modal>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project, #[prop(into)] on_delete: Callback<()>) -> impl IntoView {
    let cover = project.cover_image().map(str::to_string);
    let edit_href = format!("/projects/{}/edit", project.id);
    let badge = classes(["badge", if project.kind == ProjectType::Mobile { "badge--blue" } else { "badge--orange" }]);

    view! {
        <article class="card project-card">
            <div class="project-card__cover">
                {match cover {
                    Some(src) => view! { <img src=src alt=project.title.clone()/> }.into_view(),
                    None => view! { <div class="project-card__placeholder">"No image"</div> }.into_view(),
                }}
                <span class=badge>{project.kind.label()}</span>
            </div>
            <div class="project-card__body">
                <h3>{project.title.clone()}</h3>
                <p class="muted project-card__description">{project.description.clone()}</p>
                <div class="chips">
                    {project
                        .tech_stack
                        .iter()
                        .take(3)
                        .map(|tech| view! { <span class="chip">{tech.clone()}</span> })
                        .collect_view()}
                    {(project.tech_stack.len() > 3)
                        .then(|| view! { <span class="chip">"+" {project.tech_stack.len() - 3}</span> })}
                </div>
                <div class="project-card__actions">
                    <A href=edit_href class="btn btn--ghost">"Edit"</A>
                    <button class="btn btn--danger" on:click=move |_| on_delete.call(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;
