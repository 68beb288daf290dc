use serde::{Deserialize, Serialize};

use crate::domain::Dealt;

/// DTO одной руки: номер и карты в порядке сдачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandDto<T> {
    pub index: usize,
    pub cards: Vec<T>,
}

/// Отчёт о раздаче для вывода наружу (например, `deck-cli --json`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealReport<T> {
    pub deck_size: usize,
    /// Отработал ли алгоритм тасовки.
    pub shuffled: bool,
    pub seed: Option<u64>,
    /// Плоская стопка, если рук меньше двух.
    pub pile: Option<Vec<T>>,
    pub hands: Vec<HandDto<T>>,
}

impl<T> DealReport<T> {
    pub fn new(deck_size: usize, shuffled: bool, seed: Option<u64>, dealt: Dealt<T>) -> Self {
        let (pile, hands) = match dealt {
            Dealt::Pile(cards) => (Some(cards), Vec::new()),
            Dealt::Hands(hands) => (
                None,
                hands
                    .into_iter()
                    .enumerate()
                    .map(|(index, cards)| HandDto { index, cards })
                    .collect(),
            ),
        };

        DealReport {
            deck_size,
            shuffled,
            seed,
            pile,
            hands,
        }
    }
}
