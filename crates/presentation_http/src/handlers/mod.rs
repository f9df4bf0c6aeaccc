//! HTTP request handlers

pub mod alerts;
pub mod citizen_reports;
pub mod collection_routes;
mod common;
pub mod dashboard;
pub mod health;
pub mod metrics;
pub mod route_preview;
pub mod vehicles;
