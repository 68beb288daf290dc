//! Доменная модель: колода непрозрачных карт и результат полной раздачи.

pub mod deck;

pub use deck::*;
