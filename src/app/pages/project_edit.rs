use leptos::*;
use leptos_router::use_params_map;

use crate::app::backend::{find_project, ProjectId};
use crate::app::components::{project_form::ProjectForm, Spinner};
use crate::app::session::use_api;

#[component]
pub fn ProjectCreatePage() -> impl IntoView {
    view! { <ProjectForm/> }
}

/// Loads the project named in the route and hands it to the form.
#[component]
pub fn ProjectEditPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    let project = create_local_resource(id, move |id| async move {
        if id.is_empty() {
            return None;
        }
        match find_project(api.token(), ProjectId::new(id)).await {
            Ok(project) => Some(project),
            Err(err) => {
                api.report(err);
                None
            }
        }
    });

    view! {
        <Suspense fallback=|| view! { <Spinner label="Loading project..."/> }>
            {move || project.get().map(|found| match found {
                Some(project) => view! { <ProjectForm initial=project/> }.into_view(),
                None => view! { <p class="empty">"Project not found"</p> }.into_view(),
            })}
        </Suspense>
    }
}
