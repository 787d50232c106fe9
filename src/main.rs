#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::Router;
    use folio_admin::app::backend::BackendClient;
    use folio_admin::app::*;
    use folio_admin::config::AppConfig;
    use folio_admin::fileserv::{file_and_error_handler, limit_request_bodies};
    use leptos::leptos_config::Env;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().expect("invalid configuration");

    // Setting get_configuration(None) means we'll be using cargo-leptos's env values
    let conf = get_configuration(None).await.expect("leptos configuration");
    let mut leptos_options = conf.leptos_options;
    leptos_options.hash_files = true;
    if leptos_options.env == Env::PROD {
        // in the container image, hash.txt sits next to the release binary
        leptos_options.hash_file = "/app/target/release/hash.txt".to_string();
    }

    let addr = config.bind_addr.unwrap_or(leptos_options.site_addr);
    let cloned_leptos_options = leptos_options.clone();
    let routes = generate_route_list(App);

    let backend = Arc::new(BackendClient::new(&config).expect("backend client"));
    tracing::info!(api_url = %backend.base_url(), "proxying to portfolio backend");

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || {
                provide_context(backend.clone());
                provide_context(cloned_leptos_options.clone());
            },
            App,
        )
        .fallback(file_and_error_handler);
    let app = limit_request_bodies(app).with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("bind listener");
    tracing::info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
