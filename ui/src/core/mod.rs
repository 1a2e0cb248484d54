//! Platform-agnostic building blocks shared by the sidebar controller and the chart initializer.

pub mod config;
pub mod platform;
pub mod storage;
pub mod timing;
pub mod viewport;
