use crate::events::model::MatchEvents;
use crate::foundation::core::Point;
use crate::foundation::error::{GlowError, GlowResult};

/// One completed pass, projected to the coordinates the renderer needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PassSegment {
    /// Pass origin in pitch units.
    pub start: Point,
    /// Pass end location in pitch units.
    pub end: Point,
}

/// Select the completed passes of `team`.
///
/// A pass counts as completed when its outcome is absent; StatsBomb only
/// records outcomes for unsuccessful passes. The team must be named
/// explicitly and must appear in the data ([`GlowError::UnknownTeam`]
/// otherwise), and an empty result is a loud [`GlowError::EmptySelection`]
/// rather than a silent empty drawing.
pub fn completed_passes(events: &MatchEvents, team: &str) -> GlowResult<Vec<PassSegment>> {
    let available = events.team_names();
    if !available.iter().any(|n| n == team) {
        return Err(GlowError::UnknownTeam {
            team: team.to_owned(),
            available,
        });
    }

    let mut passes = Vec::new();
    for ev in events.events() {
        if ev.kind != "Pass" || ev.team != team || ev.pass_outcome.is_some() {
            continue;
        }
        let (Some(start), Some(end)) = (ev.location, ev.pass_end) else {
            // A pass without coordinates cannot be drawn; skip it rather than
            // failing the whole render.
            tracing::debug!(team, "skipping pass event without coordinates");
            continue;
        };
        passes.push(PassSegment { start, end });
    }

    if passes.is_empty() {
        return Err(GlowError::EmptySelection {
            team: team.to_owned(),
        });
    }
    Ok(passes)
}

#[cfg(test)]
#[path = "../../tests/unit/events/filter.rs"]
mod tests;
