//! Универсальная колода карт: тасовка и раздача.
//!
//! Модули:
//! - `domain` — `Deck<T>` и `Dealt<T>`;
//! - `engine` — интерфейс случайности `RandomSource`;
//! - `infra` — реализации RNG поверх `rand`;
//! - `config` — настройки раздачи для CLI (TOML);
//! - `api` — DTO и ошибки для внешних потребителей.

pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod infra;

pub use domain::{Dealt, Deck};
pub use engine::RandomSource;
