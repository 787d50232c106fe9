use leptos::*;

use crate::app::backend::{list_messages, list_projects};
use crate::app::components::{stats_charts::StatsCharts, Spinner};
use crate::app::session::use_api;
use crate::app::stats::{daily_activity, today_utc, MessageStats, ProjectStats};

/// Dashboard root: headline counts and charts.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let api = use_api();

    let data = create_local_resource(
        || (),
        move |_| async move {
            let token = api.token();
            match futures::try_join!(list_projects(token.clone()), list_messages(token)) {
                Ok(data) => data,
                Err(err) => {
                    api.report(err);
                    (Vec::new(), Vec::new())
                }
            }
        },
    );

    view! {
        <Suspense fallback=|| view! { <Spinner/> }>
            {move || data.get().map(|(projects, messages)| {
                let project_stats = ProjectStats::from_projects(&projects);
                let message_stats = MessageStats::from_messages(&messages);
                let activity = daily_activity(&messages, today_utc());

                view! {
                    <div class="stat-grid">
                        <StatCard label="Total Projects" value=project_stats.total accent="primary"/>
                        <StatCard label="Mobile Apps" value=project_stats.mobile accent="blue"/>
                        <StatCard label="Web Apps" value=project_stats.web accent="orange"/>
                        <div class="card stat stat--indigo">
                            <h3 class="stat__label">"Messages"</h3>
                            <div class="stat__row">
                                <p class="stat__value">{message_stats.total}</p>
                                {(message_stats.unread > 0).then(|| view! {
                                    <span class="badge badge--new">{message_stats.unread} " new"</span>
                                })}
                            </div>
                        </div>
                    </div>

                    <StatsCharts projects=project_stats activity/>
                }
            })}
        </Suspense>
    }
}

#[component]
fn StatCard(label: &'static str, value: usize, accent: &'static str) -> impl IntoView {
    view! {
        <div class=format!("card stat stat--{accent}")>
            <h3 class="stat__label">{label}</h3>
            <p class="stat__value">{value}</p>
        </div>
    }
}
