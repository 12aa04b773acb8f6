//=========================================================================
// Highscore System
//=========================================================================
//
// Ranked persistent ladder of player performance.
//
// Architecture:
//   HighscoreTable
//     ├─ entries: Vec<HighscoreRecord>  (always TABLE_SIZE, sorted desc)
//     └─ persisted via SettingsStore under a single string key
//
// Flow:
//   load() → rank_of()/top_score() queries → submit() → persist
//
//=========================================================================

//=== Module Declarations =================================================

mod table;

//=== Public API ==========================================================

pub use table::{HighscoreRecord, HighscoreTable, TableParseError, TABLE_SIZE};
