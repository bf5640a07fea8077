pub mod bookings;
pub mod contents;
pub mod dashboard;
pub mod login;
pub mod members;
pub mod services;

pub use bookings::BookingsPage;
pub use contents::ContentsPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use members::MembersPage;
pub use services::ServicesPage;
