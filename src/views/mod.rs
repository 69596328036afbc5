pub mod admins;
pub mod announcements;
pub mod attendance;
pub mod dashboard;
pub mod device_change;
pub mod locations;
pub mod login;
pub mod students;

pub use admins::AdminsView;
pub use announcements::AnnouncementsView;
pub use attendance::AttendanceView;
pub use dashboard::DashboardView;
pub use device_change::DeviceChangeView;
pub use locations::LocationsView;
pub use login::LoginView;
pub use students::StudentsView;
