//=========================================================================
// Highscore Table
//=========================================================================
//
// Fixed-capacity ranked ladder of (player, level, points) records.
//
// Architecture:
//   SettingsStore ──load()──> HighscoreTable ──submit()──> SettingsStore
//
// The table is always fully populated and sorted descending by points:
// entries[i].points >= entries[i + 1].points. Initialization is total:
// any parse failure discards the persisted state and installs the
// default ladder, which is re-persisted immediately.
//
// Wire format: records joined by ',' in rank order, each record
// 'name:level:points'. Names and levels must not contain ',' or ':'.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::settings::{SettingsStore, KEY_HIGHSCORES};

//=== Constants ===========================================================

/// Number of entries in the ladder. Insertion evicts the bottom entry;
/// the linear scan-and-shift is fine at this size.
pub const TABLE_SIZE: usize = 10;

/// Level name carried by the bootstrap ladder.
const DEFAULT_LEVEL: &str = "Apocalypse";

/// Bootstrap ladder names, rank order. Scores descend 450, 400, ..., 0.
const DEFAULT_NAMES: [&str; TABLE_SIZE] = [
    "abi", "Waii", "Duke", "Vex", "Kane", "Mara", "Otis", "Pyre", "Sol", "Newbie",
];

//=== TableParseError =====================================================

/// Reasons a persisted ladder is rejected.
///
/// Any of these discards the whole persisted table in favor of the
/// default ladder; partial recovery is never attempted.
#[derive(Debug)]
pub enum TableParseError {
    /// Record count differs from [`TABLE_SIZE`].
    WrongRecordCount(usize),

    /// A record did not split into exactly name, level, points.
    MalformedRecord(usize),

    /// A record's points field was not a non-negative integer.
    BadPoints { record: usize, raw: String },

    /// Entries were not sorted descending by points.
    Misordered(usize),
}

impl std::fmt::Display for TableParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongRecordCount(n) => {
                write!(f, "Expected {} records, found {}", TABLE_SIZE, n)
            }
            Self::MalformedRecord(i) => write!(f, "Record {} is malformed", i),
            Self::BadPoints { record, raw } => {
                write!(f, "Record {} has non-numeric points '{}'", record, raw)
            }
            Self::Misordered(i) => write!(f, "Record {} outranks record {}", i + 1, i),
        }
    }
}

impl std::error::Error for TableParseError {}

//=== HighscoreRecord =====================================================

/// One ranked entry: who scored how much on which level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighscoreRecord {
    /// Player name (no ',' or ':').
    pub name: String,

    /// Level/mission identifier (no ',' or ':').
    pub level: String,

    /// Points scored, the ordering key.
    pub points: u32,
}

impl HighscoreRecord {
    /// Creates a record, stripping wire-format delimiters from the
    /// free-text fields.
    pub fn new(name: impl Into<String>, level: impl Into<String>, points: u32) -> Self {
        Self {
            name: sanitize(name.into()),
            level: sanitize(level.into()),
            points,
        }
    }
}

/// Replaces wire-format delimiters so a record can always round-trip.
fn sanitize(field: String) -> String {
    if field.contains([',', ':']) {
        field.replace([',', ':'], "_")
    } else {
        field
    }
}

//=== HighscoreTable ======================================================

/// The ranked persistent ladder.
///
/// Mutated only through [`submit`](Self::submit); persisted through the
/// settings store after every mutation. Persistence failures are logged
/// and swallowed — losing a write is a defect, not a crash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighscoreTable {
    entries: Vec<HighscoreRecord>,
}

impl HighscoreTable {
    //--- Initialization ---------------------------------------------------

    /// Loads the ladder from the settings store.
    ///
    /// Total: on a missing key or any parse failure the default ladder is
    /// installed and persisted immediately, so the result is always a
    /// valid, fully populated, sorted table.
    pub fn load(settings: &mut SettingsStore) -> Self {
        match settings.get(KEY_HIGHSCORES) {
            Some(raw) => match Self::parse(raw) {
                Ok(table) => {
                    debug!("Loaded highscore ladder, top score {}", table.top_score());
                    table
                }
                Err(e) => {
                    warn!("Discarding persisted highscores: {}", e);
                    let table = Self::default_ladder();
                    table.persist(settings);
                    table
                }
            },
            None => {
                debug!("No persisted highscores, installing default ladder");
                let table = Self::default_ladder();
                table.persist(settings);
                table
            }
        }
    }

    /// Returns the hardcoded bootstrap ladder: distinct names on the
    /// default level, scores descending 450, 400, ..., 50, 0.
    pub fn default_ladder() -> Self {
        let entries = DEFAULT_NAMES
            .iter()
            .enumerate()
            .map(|(rank, name)| HighscoreRecord {
                name: (*name).to_string(),
                level: DEFAULT_LEVEL.to_string(),
                points: (50 * (TABLE_SIZE - 1 - rank)) as u32,
            })
            .collect();

        Self { entries }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the 0-based rank the given score would occupy right now:
    /// the first index whose points it is `>=`, or [`TABLE_SIZE`] if it
    /// beats nothing. Monotonically non-increasing in `points`.
    pub fn rank_of(&self, points: u32) -> usize {
        self.entries
            .iter()
            .position(|entry| points >= entry.points)
            .unwrap_or(TABLE_SIZE)
    }

    /// Returns the current leading score (for the live gameplay HUD).
    pub fn top_score(&self) -> u32 {
        self.entries.first().map_or(0, |entry| entry.points)
    }

    /// Returns the entries in rank order, most significant first.
    pub fn entries(&self) -> &[HighscoreRecord] {
        &self.entries
    }

    //--- Mutation ---------------------------------------------------------

    /// Submits a score, returning the rank it was placed at.
    ///
    /// Scans top to bottom for the first slot whose points the score is
    /// `>=`, shifts everything below down one, and drops the bottom entry
    /// (permanently). A score below every entry leaves the table
    /// untouched and returns `None`. Any mutation is persisted before
    /// returning. A tie with an existing entry displaces it (the new
    /// record takes the slot, the old tie shifts down).
    pub fn submit(
        &mut self,
        points: u32,
        level: &str,
        name: &str,
        settings: &mut SettingsStore,
    ) -> Option<usize> {
        let rank = self.rank_of(points);
        if rank >= TABLE_SIZE {
            debug!("Score {} does not place, ladder unchanged", points);
            return None;
        }

        let evicted = self.entries.pop();
        self.entries.insert(rank, HighscoreRecord::new(name, level, points));

        if let Some(evicted) = evicted {
            debug!(
                "'{}' placed rank {} with {}, evicting '{}' ({})",
                name, rank, points, evicted.name, evicted.points
            );
        }

        self.persist(settings);
        Some(rank)
    }

    //--- Serialization ----------------------------------------------------

    /// Renders the wire format: `name:level:points` records joined by
    /// ',', rank order most significant first.
    pub fn serialize(&self) -> String {
        let records: Vec<String> = self
            .entries
            .iter()
            .map(|e| format!("{}:{}:{}", e.name, e.level, e.points))
            .collect();
        records.join(",")
    }

    /// Parses the wire format, validating population and rank order.
    pub fn parse(raw: &str) -> Result<Self, TableParseError> {
        let records: Vec<&str> = raw.split(',').collect();
        if records.len() != TABLE_SIZE {
            return Err(TableParseError::WrongRecordCount(records.len()));
        }

        let mut entries = Vec::with_capacity(TABLE_SIZE);
        for (i, record) in records.iter().enumerate() {
            let mut fields = record.split(':');
            let (Some(name), Some(level), Some(points), None) =
                (fields.next(), fields.next(), fields.next(), fields.next())
            else {
                return Err(TableParseError::MalformedRecord(i));
            };

            if name.is_empty() || level.is_empty() {
                return Err(TableParseError::MalformedRecord(i));
            }

            let points: u32 = points.parse().map_err(|_| TableParseError::BadPoints {
                record: i,
                raw: points.to_string(),
            })?;

            entries.push(HighscoreRecord {
                name: name.to_string(),
                level: level.to_string(),
                points,
            });
        }

        for i in 0..entries.len() - 1 {
            if entries[i].points < entries[i + 1].points {
                return Err(TableParseError::Misordered(i));
            }
        }

        Ok(Self { entries })
    }

    //--- Internal Helpers -------------------------------------------------

    /// Writes the ladder into the settings store and flushes it.
    fn persist(&self, settings: &mut SettingsStore) {
        settings.set(KEY_HIGHSCORES, self.serialize());
        if let Err(e) = settings.save() {
            warn!("Highscore persistence failed: {}", e);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn fresh() -> (HighscoreTable, SettingsStore) {
        (HighscoreTable::default_ladder(), SettingsStore::in_memory())
    }

    //=====================================================================
    // Default Ladder Tests
    //=====================================================================

    #[test]
    fn default_ladder_shape() {
        let table = HighscoreTable::default_ladder();
        let entries = table.entries();

        assert_eq!(entries.len(), TABLE_SIZE);
        assert_eq!(entries[0].name, "abi");
        assert_eq!(entries[0].points, 450);
        assert_eq!(entries[1].name, "Waii");
        assert_eq!(entries[1].points, 400);
        assert_eq!(entries[TABLE_SIZE - 1].name, "Newbie");
        assert_eq!(entries[TABLE_SIZE - 1].points, 0);

        for pair in entries.windows(2) {
            assert!(pair[0].points >= pair[1].points);
        }
    }

    #[test]
    fn load_without_persisted_state_installs_and_persists_defaults() {
        let mut settings = SettingsStore::in_memory();
        let table = HighscoreTable::load(&mut settings);

        assert_eq!(table, HighscoreTable::default_ladder());
        assert_eq!(settings.get(KEY_HIGHSCORES), Some(table.serialize().as_str()));
    }

    #[test]
    fn load_with_valid_persisted_state_uses_it() {
        let mut settings = SettingsStore::in_memory();
        let mut original = HighscoreTable::default_ladder();
        original.submit(475, "Crypt", "Zed", &mut settings);

        let reloaded = HighscoreTable::load(&mut settings);
        assert_eq!(reloaded, original);
    }

    //=====================================================================
    // Parse Failure Tests
    //=====================================================================

    #[test]
    fn malformed_state_falls_back_to_defaults() {
        let bad_points = format!("{}x:y:nan", "x:y:0,".repeat(TABLE_SIZE - 1));
        let cases = [
            "not a ladder",
            "a:b:1,c:d:2", // wrong record count
            bad_points.as_str(),
        ];

        for raw in cases {
            let mut settings = SettingsStore::in_memory();
            settings.set(KEY_HIGHSCORES, raw);

            let table = HighscoreTable::load(&mut settings);
            assert_eq!(table, HighscoreTable::default_ladder(), "input: {raw}");
            // Defaults are re-persisted so the next run loads cleanly.
            assert_eq!(settings.get(KEY_HIGHSCORES), Some(table.serialize().as_str()));
        }
    }

    #[test]
    fn parse_rejects_missing_field() {
        let mut raw = HighscoreTable::default_ladder().serialize();
        raw = raw.replacen("abi:Apocalypse:450", "abi:450", 1);
        assert!(matches!(
            HighscoreTable::parse(&raw),
            Err(TableParseError::MalformedRecord(0))
        ));
    }

    #[test]
    fn parse_rejects_misordered_entries() {
        let mut table = HighscoreTable::default_ladder();
        table.entries.swap(0, 9);
        assert!(matches!(
            HighscoreTable::parse(&table.serialize()),
            Err(TableParseError::Misordered(_))
        ));
    }

    #[test]
    fn parse_rejects_extra_field() {
        let raw = HighscoreTable::default_ladder()
            .serialize()
            .replacen("abi:Apocalypse:450", "abi:Apocalypse:450:extra", 1);
        assert!(matches!(
            HighscoreTable::parse(&raw),
            Err(TableParseError::MalformedRecord(0))
        ));
    }

    //=====================================================================
    // Rank Query Tests
    //=====================================================================

    #[test]
    fn rank_of_matches_insertion_point() {
        let (table, _) = fresh();

        assert_eq!(table.rank_of(1000), 0);
        assert_eq!(table.rank_of(450), 0); // tie takes the slot
        assert_eq!(table.rank_of(449), 1);
        assert_eq!(table.rank_of(0), TABLE_SIZE - 1); // ties the floor
    }

    #[test]
    fn rank_of_is_monotonically_non_increasing() {
        let (table, _) = fresh();

        let mut previous = table.rank_of(0);
        for score in 1..=500u32 {
            let rank = table.rank_of(score);
            assert!(rank <= previous, "rank_of({}) regressed", score);
            previous = rank;
        }
    }

    #[test]
    fn top_score_is_first_entry() {
        let (table, _) = fresh();
        assert_eq!(table.top_score(), 450);
    }

    //=====================================================================
    // Submission Tests
    //=====================================================================

    #[test]
    fn winning_submission_takes_the_top_and_evicts_the_floor() {
        let (mut table, mut settings) = fresh();

        let rank = table.submit(475, "Crypt", "Zed", &mut settings);
        assert_eq!(rank, Some(0));

        let entries = table.entries();
        assert_eq!(entries.len(), TABLE_SIZE);
        assert_eq!(
            entries[0],
            HighscoreRecord::new("Zed", "Crypt", 475)
        );
        // Old top shifts to second; old bottom ("Newbie", 0) is gone.
        assert_eq!(entries[1].name, "abi");
        assert_eq!(entries[1].points, 450);
        assert!(!entries.iter().any(|e| e.name == "Newbie"));
        assert_eq!(entries[TABLE_SIZE - 1].points, 50);
    }

    #[test]
    fn submission_shifts_only_entries_at_and_below_its_rank() {
        let (mut table, mut settings) = fresh();
        let before: Vec<_> = table.entries().to_vec();

        let rank = table.submit(225, "Crypt", "Zed", &mut settings).unwrap();
        assert_eq!(rank, table.entries().iter().position(|e| e.name == "Zed").unwrap());

        // Entries above the insertion point are untouched.
        assert_eq!(&table.entries()[..rank], &before[..rank]);
        // Entries below shifted down by one, bottom dropped.
        assert_eq!(&table.entries()[rank + 1..], &before[rank..TABLE_SIZE - 1]);
    }

    #[test]
    fn tie_with_the_floor_replaces_it_in_place() {
        let (mut table, mut settings) = fresh();

        let rank = table.submit(0, "Crypt", "Zed", &mut settings);
        assert_eq!(rank, Some(TABLE_SIZE - 1));

        let bottom = &table.entries()[TABLE_SIZE - 1];
        assert_eq!(bottom.name, "Zed");
        assert_eq!(bottom.points, 0);
        assert!(!table.entries().iter().any(|e| e.name == "Newbie"));
    }

    #[test]
    fn submission_below_the_floor_is_a_no_op() {
        let mut settings = SettingsStore::in_memory();
        let mut table = HighscoreTable::default_ladder();
        // Raise the floor so a score can actually miss.
        table.submit(500, "Crypt", "Zed", &mut settings);
        assert_eq!(table.entries()[TABLE_SIZE - 1].points, 50);

        let before = table.serialize();
        let persisted_before = settings.get(KEY_HIGHSCORES).map(str::to_owned);

        assert_eq!(table.submit(10, "Crypt", "Nobody", &mut settings), None);
        assert_eq!(table.serialize(), before);
        assert_eq!(
            settings.get(KEY_HIGHSCORES).map(str::to_owned),
            persisted_before
        );
    }

    #[test]
    fn submission_persists_the_mutated_ladder() {
        let (mut table, mut settings) = fresh();

        table.submit(300, "Crypt", "Zed", &mut settings);

        let persisted = settings.get(KEY_HIGHSCORES).unwrap();
        assert_eq!(persisted, table.serialize());
        assert!(persisted.contains("Zed:Crypt:300"));
    }

    #[test]
    fn submission_sanitizes_delimiters_in_free_text() {
        let (mut table, mut settings) = fresh();

        table.submit(475, "Cry:pt", "Z,ed", &mut settings);

        let reparsed = HighscoreTable::parse(&table.serialize()).unwrap();
        assert_eq!(reparsed.entries()[0].name, "Z_ed");
        assert_eq!(reparsed.entries()[0].level, "Cry_pt");
    }

    //=====================================================================
    // Round-Trip Tests
    //=====================================================================

    #[test]
    fn serialize_parse_round_trip() {
        let mut settings = SettingsStore::in_memory();
        let mut table = HighscoreTable::default_ladder();
        table.submit(475, "Crypt", "Zed", &mut settings);
        table.submit(120, "Warrens", "Mo", &mut settings);

        let reparsed = HighscoreTable::parse(&table.serialize()).unwrap();
        assert_eq!(reparsed, table);
    }
}
