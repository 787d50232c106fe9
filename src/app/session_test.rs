use super::*;

use crate::app::backend::{ApiError, WireError};
use crate::app::toast::{provide_toasts, ToastKind};

#[test]
fn has_token_rejects_blank_values() {
    assert!(has_token("eyJhbGciOi"));
    assert!(!has_token(""));
    assert!(!has_token("  "));
}

#[test]
fn unauthorized_redirects_from_dashboard_routes() {
    assert!(should_redirect_to_login("/"));
    assert!(should_redirect_to_login("/projects/p-1/edit"));
    assert!(should_redirect_to_login("/messages"));
}

#[test]
fn unauthorized_on_login_page_stays_put() {
    assert!(!should_redirect_to_login("/login"));
    assert!(!should_redirect_to_login("/login/"));
}

fn unauthorized() -> CallError {
    ServerFnError::WrappedServerError(WireError(ApiError::Unauthorized("Session expired".to_string())))
}

#[test]
fn storing_a_token_signs_in() {
    let runtime = create_runtime();
    let session = provide_session();
    assert!(!session.is_authenticated());

    session.store("tok-1".to_string());
    assert!(session.is_authenticated());
    assert_eq!(session.token(), "tok-1");

    runtime.dispose();
}

#[test]
fn unauthorized_report_ends_the_session() {
    let runtime = create_runtime();
    let session = provide_session();
    let toasts = provide_toasts();
    session.store("tok-1".to_string());

    use_api().report(unauthorized());

    assert!(!session.is_authenticated());
    assert_eq!(session.token(), "");
    let shown = toasts.items();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].kind, ToastKind::Error);
    assert_eq!(shown[0].message, "Session expired");

    runtime.dispose();
}

#[test]
fn other_failures_keep_the_session() {
    let runtime = create_runtime();
    let session = provide_session();
    let toasts = provide_toasts();
    session.store("tok-1".to_string());

    use_api().report(ServerFnError::WrappedServerError(WireError(ApiError::Backend {
        status: 404,
        message: "Project not found".to_string(),
    })));

    assert!(session.is_authenticated());
    assert_eq!(toasts.items()[0].message, "Project not found");

    runtime.dispose();
}
