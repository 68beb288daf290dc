// src/bin/deck_cli.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use card_deck::api::DealReport;
use card_deck::config::DealerConfig;
use card_deck::infra::{DeterministicRng, SystemRng};
use card_deck::{Dealt, Deck};

#[derive(Parser, Debug)]
#[command(name = "deck-cli", version, about = "Shuffle a deck and deal it into hands")]
struct Cli {
    /// TOML-файл с настройками раздачи
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Число рук (< 2 — вся колода одной стопкой)
    #[arg(long, allow_hyphen_values = true)]
    hands: Option<i64>,

    /// Seed для воспроизводимой тасовки
    #[arg(long)]
    seed: Option<u64>,

    /// Раздать без тасовки
    #[arg(long, default_value_t = false)]
    no_shuffle: bool,

    /// Сколько карт взять из стандартной колоды
    #[arg(long)]
    deck_size: Option<usize>,

    /// Печатать JSON вместо текста
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Cli {
    /// Конфиг из файла (или дефолтный), поверх — флаги командной строки.
    fn resolve_config(&self) -> Result<DealerConfig> {
        let mut cfg = match &self.config {
            Some(path) => DealerConfig::load(path)
                .with_context(|| format!("loading config '{}'", path.display()))?,
            None => DealerConfig::default(),
        };

        cfg.apply_overrides(self.hands, self.seed, self.no_shuffle, self.deck_size);

        cfg.validate().context("invalid deal settings")?;
        Ok(cfg)
    }
}

/// Подписи стандартной колоды: 2s..10s, as, js, qs, ks, потом трефы, бубны, червы.
fn card_labels() -> Vec<String> {
    let mut cards = Vec::with_capacity(52);
    for suit in ['s', 'c', 'd', 'h'] {
        for rank in 2..=10 {
            cards.push(format!("{rank}{suit}"));
        }
        for special in ['a', 'j', 'q', 'k'] {
            cards.push(format!("{special}{suit}"));
        }
    }
    cards
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = cli.resolve_config()?;
    info!(?cfg, "deck-cli starting");

    let mut deck: Deck<String> = card_labels().into_iter().take(cfg.deck_size).collect();
    let deck_size = deck.len();

    let shuffled = match (cfg.shuffle, cfg.seed) {
        (false, _) => false,
        (true, Some(seed)) => deck.shuffle_with(&mut DeterministicRng::from_seed(seed)),
        (true, None) => deck.shuffle_with(&mut SystemRng),
    };

    let dealt = deck.deal_all_to_hands(cfg.hands);
    info!(cards = dealt.card_count(), hands = dealt.is_hands(), "deck dealt");

    if cli.json {
        let report = DealReport::new(deck_size, shuffled, cfg.seed, dealt);
        let out = serde_json::to_string_pretty(&report).context("serializing deal report")?;
        println!("{out}");
        return Ok(());
    }

    println!("deck: {deck_size} cards, shuffled: {shuffled}");
    match dealt {
        Dealt::Pile(cards) => {
            println!("pile: {}", cards.join(" "));
        }
        Dealt::Hands(hands) => {
            for (i, hand) in hands.iter().enumerate() {
                println!("hand {} ({} cards): {}", i + 1, hand.len(), hand.join(" "));
            }
        }
    }

    Ok(())
}
