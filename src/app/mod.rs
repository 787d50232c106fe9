pub mod backend;
pub mod components;
pub mod form;
pub mod nav;
pub mod pages;
pub mod session;
pub mod stats;
pub mod toast;

use itertools::Itertools;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::error_template::{AppError, ErrorTemplate};

use self::pages::{
    DashboardLayout, LoginPage, MessagesPage, OverviewPage, ProjectCreatePage, ProjectEditPage,
    ProjectsPage,
};
use self::session::provide_session;
use self::toast::ToastProvider;

/// Joins the non-empty class names with single spaces.
pub(crate) fn classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts.into_iter().filter(|part| !part.is_empty()).join(" ")
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_session();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/folio-admin.css"/>
        <Title text="Portfolio Admin"/>

        <ToastProvider>
            <Router fallback=|| {
                let mut outside_errors = Errors::default();
                outside_errors.insert_with_default_key(AppError::NotFound);
                view! {
                    <ErrorTemplate outside_errors/>
                }
                .into_view()
            }>
                <Routes>
                    <Route path="/login" view=LoginPage/>
                    <Route path="" view=DashboardLayout>
                        <Route path="" view=OverviewPage/>
                        <Route path="projects" view=ProjectsPage/>
                        <Route path="projects/create" view=ProjectCreatePage/>
                        <Route path="projects/:id/edit" view=ProjectEditPage/>
                        <Route path="messages" view=MessagesPage/>
                    </Route>
                </Routes>
            </Router>
        </ToastProvider>
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
