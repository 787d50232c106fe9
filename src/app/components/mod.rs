pub mod image_upload;
pub mod modal;
pub mod project_form;
pub mod sidebar;
pub mod stats_charts;

use leptos::*;

#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="spinner-wrap" aria-busy="true">
            <span class="spinner"></span>
            {label.map(|label| view! { <p class="spinner-wrap__label">{label}</p> })}
        </div>
    }
}
