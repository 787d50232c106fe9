use http::status::StatusCode;
use leptos::*;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Page not found")]
    NotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Rendered by the router when no route matches. On the server it also sets
/// the response status.
#[component]
pub fn ErrorTemplate(outside_errors: Errors) -> impl IntoView {
    let errors: Vec<AppError> = outside_errors
        .into_iter()
        .filter_map(|(_, error)| error.downcast_ref::<AppError>().cloned())
        .collect();

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;

        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    view! {
        <div class="error-page">
            {errors
                .into_iter()
                .map(|error| {
                    view! {
                        <h1>{error.status_code().as_u16()}</h1>
                        <p class="muted">{error.to_string()}</p>
                    }
                })
                .collect_view()}
            <a href="/" class="btn btn--primary">"Back to dashboard"</a>
        </div>
    }
}
