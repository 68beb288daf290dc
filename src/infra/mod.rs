//! Инфраструктура вокруг колоды:
//! - RNG-реализации для тасовки (системный и детерминированный).

pub mod rng;

pub use rng::*;
