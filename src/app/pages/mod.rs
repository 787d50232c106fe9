mod layout;
mod login;
mod messages;
mod overview;
mod project_edit;
mod projects;

pub use layout::DashboardLayout;
pub use login::LoginPage;
pub use messages::MessagesPage;
pub use overview::OverviewPage;
pub use project_edit::{ProjectCreatePage, ProjectEditPage};
pub use projects::ProjectsPage;
