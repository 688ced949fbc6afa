// ABOUTME: Library crate for Flashcards exposing public API for testing and external use

pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod storage;
