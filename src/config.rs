//! Настройки раздачи, которые CLI читает из TOML.
//!
//! Пример файла:
//!
//! ```toml
//! hands = 4
//! seed = 42
//! shuffle = true
//! deck_size = 52
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::ConfigError;

/// Больше карт, чем в стандартной колоде, CLI не строит.
pub const MAX_DECK_SIZE: usize = 52;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DealerConfig {
    /// Число рук; `None` или < 2 — раздача одной стопкой.
    pub hands: Option<i64>,
    /// Seed для воспроизводимой тасовки; без него — системный RNG.
    pub seed: Option<u64>,
    pub shuffle: bool,
    pub deck_size: usize,
}

impl Default for DealerConfig {
    fn default() -> Self {
        DealerConfig {
            hands: None,
            seed: None,
            shuffle: true,
            deck_size: MAX_DECK_SIZE,
        }
    }
}

impl DealerConfig {
    /// Прочитать и проверить конфиг из файла.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: DealerConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Наложить значения из командной строки: заданный флаг побеждает файл.
    pub fn apply_overrides(
        &mut self,
        hands: Option<i64>,
        seed: Option<u64>,
        no_shuffle: bool,
        deck_size: Option<usize>,
    ) {
        if hands.is_some() {
            self.hands = hands;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if no_shuffle {
            self.shuffle = false;
        }
        if let Some(size) = deck_size {
            self.deck_size = size;
        }
    }

    /// Рук больше, чем карт в стандартной колоде, не бывает;
    /// отрицательные и 0/1 допустимы (раздача стопкой).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deck_size == 0 || self.deck_size > MAX_DECK_SIZE {
            return Err(ConfigError::InvalidDeckSize(self.deck_size));
        }
        if let Some(hands) = self.hands {
            if hands > MAX_DECK_SIZE as i64 {
                return Err(ConfigError::InvalidHandCount(hands));
            }
        }
        Ok(())
    }
}
