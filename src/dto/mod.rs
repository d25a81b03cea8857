/// Game payloads.
pub mod game;
/// Health payload.
pub mod health;
/// Custom validation rules.
pub mod validation;
