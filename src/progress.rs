//! Player progress: best score, coin bank, skins, daily challenges
//!
//! Each piece persists under its own key, so a corrupt entry only costs
//! that entry. All reads default on absence or corruption.

use serde::{Deserialize, Serialize};

use crate::storage::KvStore;

const KEY_BEST_SCORE: &str = "emoji_dash_best_score";
const KEY_TOTAL_COINS: &str = "emoji_dash_total_coins";
const KEY_SELECTED_SKIN: &str = "emoji_dash_selected_skin";
const KEY_UNLOCKED_SKINS: &str = "emoji_dash_skins";
const KEY_CHALLENGES: &str = "emoji_dash_challenges";

/// A purchasable player skin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skin {
    pub id: String,
    pub emoji: String,
    pub name: String,
    /// Price in coins; 0 means free
    pub price: u32,
}

/// The shop catalog. The first skin is free and always unlocked.
pub fn skin_catalog() -> Vec<Skin> {
    let entries = [
        ("1", "😀", "Happy", 0),
        ("2", "😎", "Cool", 100),
        ("3", "🤖", "Robot", 200),
        ("4", "🐱", "Cat", 300),
        ("5", "🐼", "Panda", 400),
        ("6", "🐸", "Frog", 500),
    ];
    entries
        .into_iter()
        .map(|(id, emoji, name, price)| Skin {
            id: id.to_string(),
            emoji: emoji.to_string(),
            name: name.to_string(),
            price,
        })
        .collect()
}

/// What a challenge measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeKind {
    /// Best score in a single run
    Score,
    /// Coins collected in a single run
    Coins,
    /// Obstacles dodged, cumulative across runs
    Obstacles,
}

/// A daily challenge with progress toward a coin reward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: ChallengeKind,
    pub target: u64,
    pub current: u64,
    pub reward: u32,
    pub completed: bool,
}

/// The default daily challenge set
pub fn default_challenges() -> Vec<Challenge> {
    let entries = [
        (
            "1",
            "Survival Master",
            "Survive 1000 points without hitting obstacles",
            ChallengeKind::Score,
            1000,
            50,
        ),
        (
            "2",
            "Coin Collector",
            "Collect 50 coins in one run",
            ChallengeKind::Coins,
            50,
            75,
        ),
        (
            "3",
            "Obstacle Dodger",
            "Avoid 100 obstacles in total",
            ChallengeKind::Obstacles,
            100,
            100,
        ),
    ];
    entries
        .into_iter()
        .map(|(id, title, description, kind, target, reward)| Challenge {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            kind,
            target,
            current: 0,
            reward,
            completed: false,
        })
        .collect()
}

/// Persistent player progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub best_score: u64,
    pub total_coins: u32,
    pub selected_skin: String,
    pub unlocked_skins: Vec<String>,
    pub challenges: Vec<Challenge>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            best_score: 0,
            total_coins: 0,
            selected_skin: "1".to_string(),
            unlocked_skins: vec!["1".to_string()],
            challenges: default_challenges(),
        }
    }
}

fn load_json<T: for<'de> Deserialize<'de>>(store: &dyn KvStore, key: &str) -> Option<T> {
    store
        .get(key)
        .and_then(|json| serde_json::from_str(&json).ok())
}

fn save_json<T: Serialize>(store: &dyn KvStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => store.set(key, &json),
        Err(e) => log::warn!("failed to serialize {key}: {e}"),
    }
}

impl Progress {
    /// Load all progress, defaulting any missing or corrupt entry
    pub fn load(store: &dyn KvStore) -> Self {
        let defaults = Self::default();
        Self {
            best_score: store
                .get(KEY_BEST_SCORE)
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
            total_coins: store
                .get(KEY_TOTAL_COINS)
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
            selected_skin: store
                .get(KEY_SELECTED_SKIN)
                .unwrap_or(defaults.selected_skin),
            unlocked_skins: load_json(store, KEY_UNLOCKED_SKINS)
                .unwrap_or(defaults.unlocked_skins),
            challenges: load_json(store, KEY_CHALLENGES).unwrap_or(defaults.challenges),
        }
    }

    /// Persist everything (best-effort)
    pub fn save(&self, store: &dyn KvStore) {
        store.set(KEY_BEST_SCORE, &self.best_score.to_string());
        store.set(KEY_TOTAL_COINS, &self.total_coins.to_string());
        store.set(KEY_SELECTED_SKIN, &self.selected_skin);
        save_json(store, KEY_UNLOCKED_SKINS, &self.unlocked_skins);
        save_json(store, KEY_CHALLENGES, &self.challenges);
    }

    /// Fold a finished run into progress: bank coins, update the best
    /// score, and advance challenges (completions pay their reward into
    /// the coin bank). Returns true if the score is a new best.
    pub fn record_run(&mut self, score: u64, coins: u32, obstacles_dodged: u32) -> bool {
        let new_best = score > self.best_score;
        if new_best {
            self.best_score = score;
        }
        self.total_coins += coins;

        for challenge in &mut self.challenges {
            if challenge.completed {
                continue;
            }
            challenge.current = match challenge.kind {
                ChallengeKind::Score => challenge.current.max(score),
                ChallengeKind::Coins => challenge.current.max(coins as u64),
                ChallengeKind::Obstacles => challenge.current + obstacles_dodged as u64,
            };
            if challenge.current >= challenge.target {
                challenge.completed = true;
                self.total_coins += challenge.reward;
                log::info!(
                    "challenge '{}' completed, +{} coins",
                    challenge.title,
                    challenge.reward
                );
            }
        }

        new_best
    }

    pub fn is_unlocked(&self, skin_id: &str) -> bool {
        self.unlocked_skins.iter().any(|id| id == skin_id)
    }

    /// Buy a catalog skin with banked coins. Returns false if unknown,
    /// already owned, or unaffordable.
    pub fn buy_skin(&mut self, skin_id: &str) -> bool {
        let catalog = skin_catalog();
        let Some(skin) = catalog.iter().find(|s| s.id == skin_id) else {
            return false;
        };
        if self.is_unlocked(skin_id) || self.total_coins < skin.price {
            return false;
        }
        self.total_coins -= skin.price;
        self.unlocked_skins.push(skin_id.to_string());
        true
    }

    /// Select an owned skin. Unowned skins are rejected.
    pub fn select_skin(&mut self, skin_id: &str) -> bool {
        if self.is_unlocked(skin_id) {
            self.selected_skin = skin_id.to_string();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_on_empty_store() {
        let store = MemoryStore::new();
        let progress = Progress::load(&store);
        assert_eq!(progress, Progress::default());
        assert_eq!(progress.best_score, 0);
        assert!(progress.is_unlocked("1"));
        assert!(!progress.is_unlocked("2"));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let store = MemoryStore::new();
        let mut progress = Progress::default();
        progress.record_run(1200, 30, 12);
        progress.save(&store);

        let loaded = Progress::load(&store);
        assert_eq!(loaded, progress);
        assert_eq!(loaded.best_score, 1200);
    }

    #[test]
    fn test_corrupt_entry_only_costs_that_entry() {
        let store = MemoryStore::new();
        store.set(KEY_BEST_SCORE, "900");
        store.set(KEY_CHALLENGES, "[broken");

        let progress = Progress::load(&store);
        assert_eq!(progress.best_score, 900);
        assert_eq!(progress.challenges, default_challenges());
    }

    #[test]
    fn test_record_run_best_score_and_bank() {
        let mut progress = Progress::default();
        assert!(progress.record_run(800, 10, 0));
        assert!(!progress.record_run(500, 5, 0));
        assert_eq!(progress.best_score, 800);
        assert_eq!(progress.total_coins, 15);
    }

    #[test]
    fn test_challenge_completion_pays_reward() {
        let mut progress = Progress::default();
        progress.record_run(1000, 0, 0);

        let survival = &progress.challenges[0];
        assert!(survival.completed);
        assert_eq!(progress.total_coins, 50);

        // Completed challenges don't pay twice
        progress.record_run(2000, 0, 0);
        assert_eq!(progress.total_coins, 50);
    }

    #[test]
    fn test_obstacle_challenge_accumulates_across_runs() {
        let mut progress = Progress::default();
        progress.record_run(10, 0, 60);
        assert!(!progress.challenges[2].completed);
        progress.record_run(10, 0, 40);
        assert!(progress.challenges[2].completed);
        assert_eq!(progress.total_coins, 100);
    }

    #[test]
    fn test_buy_and_select_skin() {
        let mut progress = Progress::default();
        progress.total_coins = 150;

        assert!(!progress.buy_skin("3")); // 200 coins, can't afford
        assert!(progress.buy_skin("2")); // 100 coins
        assert_eq!(progress.total_coins, 50);
        assert!(!progress.buy_skin("2")); // already owned

        assert!(progress.select_skin("2"));
        assert_eq!(progress.selected_skin, "2");
        assert!(!progress.select_skin("6"));
    }
}
