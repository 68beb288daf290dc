use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::engine::RandomSource;
use crate::infra::rng::SystemRng;

/// Меньше этого числа карт тасовка не выполняется.
pub const MIN_SHUFFLE_LEN: usize = 3;

/// Сколько рук раздача создаёт без оглядки на размер колоды.
///
/// Руки с номером >= числа карт всегда пустые, поэтому запрос больше
/// `max(len, MAX_HANDS)` обрезается: раскладка карт не меняется,
/// пропадают только лишние пустые руки в хвосте.
pub const MAX_HANDS: usize = 1 << 16;

/// Колода произвольных карт.
///
/// Карта — непрозрачное значение `T`, колода его не разбирает.
/// Порядок: индекс 0 — низ колоды, последний элемент — верх (сдаётся первым).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Deck<T> {
    cards: Vec<T>,
}

/// Результат `Deck::deal_all_to_hands`.
///
/// При числе рук < 2 колода отдаётся плоской стопкой (`Pile`),
/// иначе — списком рук (`Hands`). Формы разные намеренно: клиенты
/// старого API рассчитывают на плоский вариант.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Dealt<T> {
    Pile(Vec<T>),
    Hands(Vec<Vec<T>>),
}

impl<T> Dealt<T> {
    pub fn is_hands(&self) -> bool {
        matches!(self, Dealt::Hands(_))
    }

    /// Общее число карт во всех руках / в стопке.
    pub fn card_count(&self) -> usize {
        match self {
            Dealt::Pile(cards) => cards.len(),
            Dealt::Hands(hands) => hands.iter().map(Vec::len).sum(),
        }
    }

    /// Привести к списку рук: стопка становится одной рукой.
    pub fn into_hands(self) -> Vec<Vec<T>> {
        match self {
            Dealt::Pile(cards) => vec![cards],
            Dealt::Hands(hands) => hands,
        }
    }
}

impl<T> Deck<T> {
    /// Колода в точности в переданном порядке (без перестановок).
    pub fn new(cards: Vec<T>) -> Self {
        Deck { cards }
    }

    pub fn empty() -> Self {
        Deck { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Карты снизу вверх. Только чтение: менять порядок можно лишь
    /// через операции колоды.
    pub fn cards(&self) -> &[T] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<T> {
        self.cards
    }

    /// Верхняя карта без снятия.
    pub fn peek(&self) -> Option<&T> {
        self.cards.last()
    }

    /// Перетасовать системным RNG. См. `shuffle_with`.
    pub fn shuffle(&mut self) -> bool {
        self.shuffle_with(&mut SystemRng)
    }

    /// Перетасовать колоду по Фишеру–Йетсу.
    ///
    /// Если карт меньше трёх, колода не трогается и возвращается `false`.
    /// `true` означает, что алгоритм отработал, а не что порядок
    /// обязательно изменился.
    pub fn shuffle_with<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.cards.len() < MIN_SHUFFLE_LEN {
            trace!(len = self.cards.len(), "shuffle skipped");
            return false;
        }

        for cursor in (0..self.cards.len()).rev() {
            let pick = rng.gen_index(cursor + 1);
            self.cards.swap(cursor, pick);
        }

        debug!(len = self.cards.len(), "deck shuffled");
        true
    }

    /// Снять верхнюю карту. На пустой колоде — `None` без изменений.
    pub fn deal(&mut self) -> Option<T> {
        self.cards.pop()
    }

    /// Снять до `n` карт сверху, в порядке сдачи.
    pub fn deal_n(&mut self, n: usize) -> Vec<T> {
        let mut taken = Vec::with_capacity(n.min(self.cards.len()));
        for _ in 0..n {
            match self.deal() {
                Some(card) => taken.push(card),
                None => break,
            }
        }
        taken
    }

    /// Забрать всю колоду плоским списком, снизу вверх.
    ///
    /// Порядок совпадает с исходным, так что `Deck::new(v).deal_all() == v`.
    pub fn deal_all(&mut self) -> Vec<T> {
        std::mem::take(&mut self.cards)
    }

    /// Раздать всю колоду по кругу в `hand_count` рук.
    ///
    /// Карты идут сверху, первая — в руку 0, затем 1, ... и снова 0.
    /// Первые `len % hand_count` рук получают на карту больше.
    /// `0` и `1` дают ровно одну руку со всеми картами в порядке сдачи.
    /// Рук создаётся не больше `max(len, MAX_HANDS)`; пустые руки не
    /// аллоцируют память.
    pub fn deal_to_hands(&mut self, hand_count: usize) -> Vec<Vec<T>> {
        let hand_count = hand_count.max(1).min(self.cards.len().max(MAX_HANDS));
        let len = self.cards.len();
        let per_hand = len / hand_count + 1;
        let mut hands: Vec<Vec<T>> = (0..hand_count)
            .map(|i| if i < len { Vec::with_capacity(per_hand) } else { Vec::new() })
            .collect();

        let mut current = 0;
        while let Some(card) = self.deal() {
            hands[current].push(card);
            current = if current == hand_count - 1 { 0 } else { current + 1 };
        }

        hands
    }

    /// Раздать всю колоду.
    ///
    /// - `None` или любое значение < 2: вся колода плоской стопкой
    ///   (`Dealt::Pile`). Порядок — снизу вверх, как при создании колоды,
    ///   а не порядок сдачи: `Deck::new(v).deal_all_to_hands(None)` вернёт `v`;
    /// - `n >= 2`: `n` рук по кругу (`Dealt::Hands`, как `deal_to_hands`,
    ///   включая ограничение `MAX_HANDS` для огромных `n`).
    ///
    /// В обоих случаях колода после вызова пуста.
    pub fn deal_all_to_hands(&mut self, hand_count: Option<i64>) -> Dealt<T> {
        match hand_count {
            Some(n) if n >= 2 => {
                let hands = usize::try_from(n).unwrap_or(usize::MAX);
                debug!(hands, cards = self.cards.len(), "dealing deck into hands");
                Dealt::Hands(self.deal_to_hands(hands))
            }
            _ => {
                debug!(?hand_count, cards = self.cards.len(), "dealing deck as a single pile");
                Dealt::Pile(self.deal_all())
            }
        }
    }
}

impl<T> Default for Deck<T> {
    fn default() -> Self {
        Deck::empty()
    }
}

impl<T> From<Vec<T>> for Deck<T> {
    fn from(cards: Vec<T>) -> Self {
        Deck::new(cards)
    }
}

impl<T> FromIterator<T> for Deck<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Deck::new(iter.into_iter().collect())
    }
}
