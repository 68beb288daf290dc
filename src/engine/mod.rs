//! Алгоритмический слой колоды.
//!
//! Здесь живёт только интерфейс случайности, через который
//! `Deck::shuffle_with` получает индексы для Fisher–Yates.

/// RNG интерфейс для тасовки.
///
/// Контракт: `gen_index(bound)` возвращает равномерно распределённое
/// число в `[0, bound)`. `bound` всегда > 0.
pub trait RandomSource {
    fn gen_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn gen_index(&mut self, bound: usize) -> usize {
        (**self).gen_index(bound)
    }
}
