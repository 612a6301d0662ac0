// Application layer - panel building use cases
pub mod panel_service;
