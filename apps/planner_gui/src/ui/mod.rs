//! UI layer: app shell, form and result views, toasts, and theme.

pub mod app;
pub mod form;
pub mod result;
pub mod theme;
pub mod toast;

pub use app::{PlannerApp, StartupConfig};
