// ABOUTME: Core data models for flashcards and the default deck

pub mod card;

pub use card::{default_deck, Card};
