//! Flutter-facing bridge over `timesheet_core`.

pub mod api;
