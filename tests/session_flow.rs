//! Integration tests for the full play flow: generation, selection,
//! matching, win/give-up transitions and timer behavior.

use sopa::generation::utils;
use sopa::{
    GameEvent, GameSession, GenerationConfig, LetterGrid, PlacedWord, Position, Puzzle,
    PuzzleGenerator, SessionPhase, SopaResult, WordEntry,
};

/// Builds a fixed 5x5 puzzle with known placements:
/// "CAT" at (0,0)→(0,2) and "DOG" at (1,0)→(3,0).
fn fixed_puzzle() -> Puzzle {
    let mut grid = LetterGrid::new(5);
    let cat: Vec<Position> = (0..3).map(|col| Position::new(0, col)).collect();
    for (&pos, ch) in cat.iter().zip("CAT".chars()) {
        grid.set_letter(pos, ch);
    }
    let dog: Vec<Position> = (1..4).map(|row| Position::new(row, 0)).collect();
    for (&pos, ch) in dog.iter().zip("DOG".chars()) {
        grid.set_letter(pos, ch);
    }
    // Deterministic filler from letters no target word uses
    for row in 0..5 {
        for col in 0..5 {
            let pos = Position::new(row, col);
            if grid.is_empty_cell(pos) {
                grid.set_letter(pos, 'X');
            }
        }
    }

    Puzzle::new(
        grid,
        vec![
            PlacedWord::new("CAT".to_string(), "Feline".to_string(), cat),
            PlacedWord::new("DOG".to_string(), "Canine".to_string(), dog),
        ],
    )
}

fn drag(session: &mut GameSession, from: Position, to: Position) -> Vec<GameEvent> {
    session.pointer_down(from);
    session.pointer_move(to);
    session.pointer_up()
}

#[test]
fn scenario_conflicting_words_never_disagree_on_shared_cells() -> SopaResult<()> {
    // "CAT" and "DOG" can never share their first cell ('C' != 'D'); any
    // crossing the generator produces must agree letter for letter.
    let entries = vec![
        WordEntry::new("cat", "Feline"),
        WordEntry::new("dog", "Canine"),
    ];

    for seed in 0..20 {
        let mut config = GenerationConfig::for_testing(seed);
        config.size = 4;
        let mut rng = utils::create_rng(&config);
        let puzzle = PuzzleGenerator::new().generate(&entries, &config, &mut rng)?;

        for word in puzzle.words() {
            for (ch, &pos) in word.word.chars().zip(word.cells.iter()) {
                assert_eq!(
                    puzzle.grid().letter(pos),
                    Some(ch),
                    "seed {}: grid letter at {:?} disagrees with {:?}",
                    seed,
                    pos,
                    word.word
                );
            }
        }
    }
    Ok(())
}

#[test]
fn scenario_matching_selection_scores_and_counts() {
    let mut session = GameSession::from_puzzle(fixed_puzzle());
    session.start();

    let events = drag(&mut session, Position::new(0, 0), Position::new(0, 2));
    assert_eq!(
        events,
        vec![GameEvent::WordFound {
            word: "CAT".to_string()
        }]
    );

    let stats = session.stats();
    assert_eq!(stats.found, 1);
    assert_eq!(stats.score, 30);
    assert_eq!(stats.errors, 0);
    assert!(session.words().iter().any(|w| w.word == "CAT" && w.found));
}

#[test]
fn scenario_non_matching_selection_counts_an_error() {
    let mut session = GameSession::from_puzzle(fixed_puzzle());
    session.start();

    let events = drag(&mut session, Position::new(4, 0), Position::new(4, 2));
    assert!(events.is_empty());

    let stats = session.stats();
    assert_eq!(stats.errors, 1);
    assert_eq!(stats.found, 0);
    assert_eq!(stats.score, 0);
}

#[test]
fn scenario_winning_stops_the_session() {
    let mut session = GameSession::from_puzzle(fixed_puzzle());
    session.start();
    session.tick();

    drag(&mut session, Position::new(0, 0), Position::new(0, 2));
    let events = drag(&mut session, Position::new(1, 0), Position::new(3, 0));

    assert_eq!(session.phase(), SessionPhase::Won);
    assert!(events.iter().any(|event| matches!(
        event,
        GameEvent::Won { stats } if stats.found == 2 && stats.score == 60
    )));

    // Timer stopped, further selections are no-ops
    session.tick();
    assert_eq!(session.elapsed_secs(), 1);
    let stats_before = session.stats();
    assert!(drag(&mut session, Position::new(4, 0), Position::new(4, 2)).is_empty());
    assert_eq!(session.stats(), stats_before);
}

#[test]
fn scenario_give_up_reveals_unfound_words() {
    // 5-word board: find 2, give up, expect the other 3 revealed unfound.
    let mut grid = LetterGrid::new(6);
    let rows = [
        ("UNO", 0),
        ("DOS", 1),
        ("TRES", 2),
        ("GATO", 3),
        ("SOL", 4),
    ];
    let mut placed = Vec::new();
    for (word, row) in rows {
        let cells: Vec<Position> = (0..word.chars().count() as i32)
            .map(|col| Position::new(row, col))
            .collect();
        for (&pos, ch) in cells.iter().zip(word.chars()) {
            grid.set_letter(pos, ch);
        }
        placed.push(PlacedWord::new(
            word.to_string(),
            format!("clue for {}", word),
            cells,
        ));
    }
    for row in 0..6 {
        for col in 0..6 {
            let pos = Position::new(row, col);
            if grid.is_empty_cell(pos) {
                grid.set_letter(pos, 'X');
            }
        }
    }

    let mut session = GameSession::from_puzzle(Puzzle::new(grid, placed));
    session.start();
    session.tick();

    drag(&mut session, Position::new(0, 0), Position::new(0, 2));
    drag(&mut session, Position::new(3, 0), Position::new(3, 3));
    assert_eq!(session.stats().found, 2);

    let events = session.give_up();
    assert_eq!(session.phase(), SessionPhase::GaveUp);
    match &events[0] {
        GameEvent::GaveUp { words } => {
            assert_eq!(words.len(), 5);
            let found: Vec<&str> = words
                .iter()
                .filter(|w| w.found)
                .map(|w| w.word.as_str())
                .collect();
            let unfound: Vec<&str> = words
                .iter()
                .filter(|w| !w.found)
                .map(|w| w.word.as_str())
                .collect();
            assert_eq!(found, vec!["UNO", "GATO"]);
            assert_eq!(unfound, vec!["DOS", "TRES", "SOL"]);
            // Answer text is exposed for every revealed word
            assert!(words.iter().all(|w| !w.word.is_empty()));
        }
        other => panic!("expected GaveUp event, got {:?}", other),
    }

    // Timer stopped in the terminal phase
    session.tick();
    assert_eq!(session.elapsed_secs(), 1);
}

#[test]
fn seeded_generation_is_reproducible_end_to_end() -> SopaResult<()> {
    let entries = vec![
        WordEntry::new("gato", "Felino doméstico"),
        WordEntry::new("perro", "El mejor amigo"),
        WordEntry::new("luna", "Satélite natural"),
    ];
    let config = GenerationConfig::for_testing(4242);

    let mut rng_a = utils::create_rng(&config);
    let mut rng_b = utils::create_rng(&config);
    let a = GameSession::new(&entries, &config, &mut rng_a)?;
    let b = GameSession::new(&entries, &config, &mut rng_b)?;

    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.words(), b.words());
    assert_eq!(a.stats().total, a.words().len());
    Ok(())
}

#[test]
fn restart_is_a_fresh_session() -> SopaResult<()> {
    let entries = vec![
        WordEntry::new("gato", "Felino doméstico"),
        WordEntry::new("luna", "Satélite natural"),
    ];
    let config = GenerationConfig::for_testing(99);
    let mut rng = utils::create_rng(&config);

    let mut session = GameSession::new(&entries, &config, &mut rng)?;
    session.start();
    session.tick();
    drag(&mut session, Position::new(0, 0), Position::new(1, 2)); // off-axis, collapses
    session.give_up();
    assert_eq!(session.phase(), SessionPhase::GaveUp);

    session.restart(&entries, &config, &mut rng)?;
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert_eq!(session.elapsed_secs(), 0);
    assert_eq!(session.stats().found, 0);
    assert!(session.selection().is_empty());
    assert!(session.words().iter().all(|w| !w.found));
    Ok(())
}
