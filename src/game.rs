use crate::error::{Error, Result};
use itertools::Itertools;
use serde::Deserialize;
use std::fmt;

/// Words typed in a multiplayer round and how long each player took per word
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    words: Vec<String>,
    durations: Vec<Vec<f64>>,
}

impl Game {
    /// Build a game, checking that every player has exactly one finite
    /// duration per word.
    pub fn new(words: Vec<String>, durations: Vec<Vec<f64>>) -> Result<Self> {
        for (player, times) in durations.iter().enumerate() {
            if times.len() != words.len() {
                return Err(Error::malformed_game(format!(
                    "player {player} has {} times for {} words",
                    times.len(),
                    words.len()
                )));
            }
            if let Some(bad) = times.iter().find(|t| !t.is_finite()) {
                return Err(Error::malformed_game(format!(
                    "player {player} has a non-numeric time {bad}"
                )));
            }
        }
        Ok(Self { words, durations })
    }

    /// # Panics
    /// If `word_index` is out of range.
    pub fn word_at(&self, word_index: usize) -> &str {
        assert!(
            word_index < self.words.len(),
            "word_index out of range of words"
        );
        &self.words[word_index]
    }

    pub fn all_words(&self) -> &[String] {
        &self.words
    }

    pub fn all_times(&self) -> &[Vec<f64>] {
        &self.durations
    }

    /// # Panics
    /// If either index is out of range.
    pub fn time(&self, player: usize, word_index: usize) -> f64 {
        assert!(
            word_index < self.words.len(),
            "word_index out of range of words"
        );
        assert!(
            player < self.durations.len(),
            "player_num out of range of players"
        );
        self.durations[player][word_index]
    }

    pub fn num_players(&self) -> usize {
        self.durations.len()
    }
}

/// `game(<words>, <times>)` with both lists in Rust `Debug` form, e.g.
/// `game(["Hello", "world"], [[5.0, 1.0], [4.0, 2.0]])`
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game({:?}, {:?})", self.words, self.durations)
    }
}

/// Raw timing input for `time_per_word`: each player's list starts with the
/// time they began and then has the time each word was finished.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawTimes {
    pub words: Vec<String>,
    pub times: Vec<Vec<f64>>,
}

/// Turn per-player timestamps into per-word durations.
///
/// Each list in `times_per_player` is rewritten in place: entry `i` becomes
/// the gap between timestamps `i` and `i + 1`, and the final entry is
/// dropped. Callers should treat the lists as consumed.
pub fn time_per_word(times_per_player: &mut [Vec<f64>], words: &[String]) -> Result<Game> {
    for times in times_per_player.iter_mut() {
        for j in 0..times.len().saturating_sub(1) {
            times[j] = times[j + 1] - times[j];
        }
        times.pop();
    }
    Game::new(words.to_vec(), times_per_player.to_vec())
}

/// For every word, the player with the strictly smallest duration gets the
/// word; the earliest player keeps it on a tie.
pub fn fastest_words(game: &Game) -> Vec<Vec<String>> {
    let mut fastest = vec![Vec::new(); game.num_players()];
    if game.num_players() == 0 {
        return fastest;
    }

    for (word_index, word) in game.all_words().iter().enumerate() {
        let mut winner = 0;
        for player in 1..game.num_players() {
            if game.time(player, word_index) < game.time(winner, word_index) {
                winner = player;
            }
        }
        fastest[winner].push(word.clone());
    }
    fastest
}

/// Text summary of which words each player typed fastest.
pub fn fastest_words_report(times_per_player: &mut [Vec<f64>], words: &[String]) -> Result<String> {
    let game = time_per_word(times_per_player, words)?;
    log::debug!("{game}");
    let report = fastest_words(&game)
        .iter()
        .enumerate()
        .map(|(i, words)| format!("Player {} typed these fastest: {}\n", i + 1, words.iter().join(",")))
        .collect();
    Ok(report)
}
