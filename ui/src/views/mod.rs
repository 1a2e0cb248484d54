mod dashboard;
pub use dashboard::Dashboard;

mod pages;
pub use pages::{Reports, Settings, Users};
