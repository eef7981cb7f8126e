//! Client-side interaction layer of the HR app: the attendance
//! check-in/check-out widget driver, a typed client for the attendance
//! endpoints, and the two-language string catalog with its runtime helpers.

pub mod api;
pub mod clock;
pub mod config;
pub mod console;
pub mod driver;
pub mod i18n;
pub mod model;
pub mod storage;
pub mod view;
