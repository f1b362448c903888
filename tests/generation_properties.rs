//! Property tests for puzzle generation.

use proptest::prelude::*;
use sopa::generation::utils;
use sopa::{GenerationConfig, PuzzleGenerator, WordEntry};

fn word_list_strategy() -> impl Strategy<Value = Vec<WordEntry>> {
    prop::collection::vec(
        prop::string::string_regex("[A-ZÑ]{2,6}").unwrap(),
        1..8,
    )
    .prop_map(|words| {
        words
            .into_iter()
            .map(|word| {
                let clue = format!("pista de {}", word);
                WordEntry::new(word, clue)
            })
            .collect()
    })
}

proptest! {
    /// Every generated grid is fully populated and every placed word is
    /// readable along its cells, forward and backward.
    #[test]
    fn generated_puzzles_are_consistent(
        entries in word_list_strategy(),
        seed in any::<u64>(),
    ) {
        let config = GenerationConfig::for_testing(seed);
        let mut rng = utils::create_rng(&config);
        let puzzle = PuzzleGenerator::new()
            .generate(&entries, &config, &mut rng)
            .unwrap();

        prop_assert!(puzzle.grid().is_fully_filled());

        for word in puzzle.words() {
            prop_assert_eq!(word.cells.len(), word.word.chars().count());
            prop_assert_eq!(puzzle.read_cells(&word.cells), word.word.clone());

            let backwards: Vec<_> = word.cells.iter().rev().copied().collect();
            let reversed: String = word.word.chars().rev().collect();
            prop_assert_eq!(puzzle.read_cells(&backwards), reversed);

            prop_assert!(!word.found);
        }
    }

    /// The same seed yields an identical grid and placement set.
    #[test]
    fn generation_is_seed_deterministic(
        entries in word_list_strategy(),
        seed in any::<u64>(),
    ) {
        let config = GenerationConfig::for_testing(seed);
        let mut rng_a = utils::create_rng(&config);
        let mut rng_b = utils::create_rng(&config);

        let a = PuzzleGenerator::new().generate(&entries, &config, &mut rng_a).unwrap();
        let b = PuzzleGenerator::new().generate(&entries, &config, &mut rng_b).unwrap();
        prop_assert_eq!(a, b);
    }

    /// A word longer than the grid in every direction is always dropped,
    /// whatever the seed and attempt budget.
    #[test]
    fn overlong_words_are_always_dropped(
        seed in any::<u64>(),
        budget in 1u32..500,
        size in 3usize..6,
    ) {
        let entries = vec![
            WordEntry::new("SOL", "Estrella del día"),
            WordEntry::new("MURCIELAGO", "Mamífero volador"),
        ];
        let mut config = GenerationConfig::for_testing(seed);
        config.size = size; // always smaller than the 10-letter word
        config.max_attempts = budget;
        let mut rng = utils::create_rng(&config);

        let puzzle = PuzzleGenerator::new().generate(&entries, &config, &mut rng).unwrap();
        prop_assert!(puzzle.words().iter().all(|w| w.word != "MURCIELAGO"));
    }

    /// Words placed on crossing lines always agree on shared cells.
    #[test]
    fn crossings_share_letters_exactly(
        entries in word_list_strategy(),
        seed in any::<u64>(),
    ) {
        use std::collections::HashMap;

        let mut config = GenerationConfig::for_testing(seed);
        config.size = 7; // crowded enough to force crossings now and then
        let mut rng = utils::create_rng(&config);
        let puzzle = PuzzleGenerator::new().generate(&entries, &config, &mut rng).unwrap();

        let mut claimed = HashMap::new();
        for word in puzzle.words() {
            for (ch, &pos) in word.word.chars().zip(word.cells.iter()) {
                if let Some(&prior) = claimed.get(&pos) {
                    prop_assert_eq!(prior, ch);
                }
                claimed.insert(pos, ch);
            }
        }
    }
}
