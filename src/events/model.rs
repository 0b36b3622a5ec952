use std::io::Read;
use std::path::Path;

use crate::foundation::core::Point;
use crate::foundation::error::{GlowError, GlowResult};

/// One match event, flattened from the StatsBomb open-data schema to the
/// attributes the renderer cares about.
///
/// Records are immutable once loaded; the pipeline only ever reads them.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchEvent {
    /// Event type name (e.g. `"Pass"`, `"Shot"`).
    pub kind: String,
    /// Name of the team the event belongs to.
    pub team: String,
    /// Event start location in pitch units, if recorded.
    pub location: Option<Point>,
    /// Pass end location in pitch units, for pass events.
    pub pass_end: Option<Point>,
    /// Pass outcome name. `None` means the pass was completed; StatsBomb only
    /// records an outcome for unsuccessful passes.
    pub pass_outcome: Option<String>,
}

/// All events of one match, in file order.
#[derive(Clone, Debug, Default)]
pub struct MatchEvents {
    events: Vec<MatchEvent>,
}

// The raw wire schema. StatsBomb nests names inside `{id, name}` objects and
// pass attributes inside a `pass` object; everything not listed here is
// ignored on purpose.
#[derive(serde::Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: RawName,
    team: RawName,
    #[serde(default)]
    location: Option<[f64; 2]>,
    #[serde(default)]
    pass: Option<RawPass>,
}

#[derive(serde::Deserialize)]
struct RawName {
    name: String,
}

#[derive(serde::Deserialize)]
struct RawPass {
    #[serde(default)]
    end_location: Option<[f64; 2]>,
    #[serde(default)]
    outcome: Option<RawName>,
}

impl From<RawEvent> for MatchEvent {
    fn from(raw: RawEvent) -> Self {
        let (pass_end, pass_outcome) = match raw.pass {
            Some(p) => (
                p.end_location.map(|[x, y]| Point::new(x, y)),
                p.outcome.map(|o| o.name),
            ),
            None => (None, None),
        };
        Self {
            kind: raw.kind.name,
            team: raw.team.name,
            location: raw.location.map(|[x, y]| Point::new(x, y)),
            pass_end,
            pass_outcome,
        }
    }
}

impl MatchEvents {
    /// Build from already-flattened events (used by tests and callers that
    /// source events elsewhere).
    pub fn from_events(events: Vec<MatchEvent>) -> Self {
        Self { events }
    }

    /// Parse a StatsBomb event array from a reader.
    pub fn from_reader(reader: impl Read) -> GlowResult<Self> {
        let raw: Vec<RawEvent> = serde_json::from_reader(reader)
            .map_err(|e| GlowError::serde(format!("malformed event json: {e}")))?;
        Ok(Self {
            events: raw.into_iter().map(MatchEvent::from).collect(),
        })
    }

    /// Parse a StatsBomb event file.
    pub fn from_path(path: impl AsRef<Path>) -> GlowResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            GlowError::data(format!("failed to open events '{}': {e}", path.display()))
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Parse the event file for one match in a directory of per-match files
    /// named `<match_id>.json` (the StatsBomb open-data slug convention).
    pub fn from_match_id(events_dir: impl AsRef<Path>, match_id: u64) -> GlowResult<Self> {
        Self::from_path(events_dir.as_ref().join(format!("{match_id}.json")))
    }

    /// All events, in file order.
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when the match contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Unique team names in order of first appearance.
    pub fn team_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for ev in &self.events {
            if !names.iter().any(|n| n == &ev.team) {
                names.push(ev.team.clone());
            }
        }
        names
    }
}

#[cfg(test)]
#[path = "../../tests/unit/events/model.rs"]
mod tests;
