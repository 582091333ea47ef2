/// Application layer - Use cases, factories, and DTOs
pub mod dto;
pub mod factories;
pub mod use_cases;
