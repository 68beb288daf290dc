//! Внешний API для потребителей колоды (CLI и т.п.).
//!
//! - DTO (dto.rs) — отчёт о раздаче для вывода в JSON;
//! - ошибки (errors.rs) — то, что может пойти не так вокруг колоды.

pub mod dto;
pub mod errors;

pub use dto::*;
pub use errors::*;
