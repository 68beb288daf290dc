use std::path::PathBuf;

use thiserror::Error;

/// Ошибки загрузки и проверки конфигурации раздачи.
///
/// Сама колода ошибок не возвращает: все её операции тотальны.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось прочитать конфиг {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("конфиг {} не разобран как TOML", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("размер колоды {0} вне диапазона 1..={max}", max = crate::config::MAX_DECK_SIZE)]
    InvalidDeckSize(usize),

    #[error("число рук {0} больше {max}", max = crate::config::MAX_DECK_SIZE)]
    InvalidHandCount(i64),
}
