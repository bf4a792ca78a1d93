mod chat;
mod dashboard;
mod error;
mod pending_institute_details;
mod pending_institutes;
mod sign_in;
mod students;
mod teachers;
mod verified_institute_details;
mod verified_institutes;

pub use chat::ChatPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use pending_institute_details::PendingInstituteDetailsPage;
pub use pending_institutes::{PendingInstitutesPage, PendingListView, PendingListViewProps};
pub use sign_in::SignInPage;
pub use students::StudentsPage;
pub use teachers::TeachersPage;
pub use verified_institute_details::VerifiedInstituteDetailsPage;
pub use verified_institutes::VerifiedInstitutesPage;
