pub mod attendance;
pub mod dashboard;
pub mod login;
pub mod schedules;
pub mod users;

pub use attendance::AttendancePage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use schedules::SchedulesPage;
pub use users::UsersPage;
