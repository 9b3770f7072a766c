/// Application layer - Use cases, DTOs and read models
///
/// Orchestrates the resolver and talks to infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
