pub mod admin;
pub mod announcement;
pub mod attendance;
pub mod auth;
pub mod common;
pub mod dashboard;
pub mod device_change;
pub mod location;
pub mod student;

pub use admin::{Admin, AdminList, AdminPayload};
pub use announcement::{Announcement, AnnouncementPayload};
pub use attendance::{AttendanceFilter, AttendanceRecord};
pub use auth::{LoginRequest, LoginResponse};
pub use common::{Department, SessionOfDay, YEAR_OPTIONS};
pub use dashboard::DashboardData;
pub use device_change::{DeviceChangeRequest, RequestStatus, StatusUpdate};
pub use location::{AttendanceLocation, GeoPoint, LocationPayload};
pub use student::{Student, StudentFilter, StudentPayload};
