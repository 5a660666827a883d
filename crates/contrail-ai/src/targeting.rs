//! Nearest-enemy target selection.

use contrail_core::components::ShipId;
use contrail_core::types::Position;

/// One live ship as seen by the targeting scan.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub id: ShipId,
    pub team: u32,
    pub position: Position,
    /// Current speed, used by the steering context after selection.
    pub speed: f64,
}

/// Pick the closest ship on any other team.
///
/// Strict minimum — on equal distances the first candidate in roster
/// order wins. Callers pass the roster sorted by `ShipId` so the result
/// is deterministic. O(roster) per call.
pub fn nearest_enemy(own_team: u32, own_position: Position, roster: &[Candidate]) -> Option<ShipId> {
    let mut best: Option<(ShipId, f64)> = None;
    for candidate in roster {
        if candidate.team == own_team {
            continue;
        }
        let distance = own_position.distance_to(&candidate.position);
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((candidate.id, distance));
        }
    }
    best.map(|(id, _)| id)
}

/// Resolve a stored target id against the live roster.
///
/// Returns the candidate only if it still exists and is still hostile to
/// `own_team`; a miss tells the caller to re-run selection.
pub fn resolve(own_team: u32, target: ShipId, roster: &[Candidate]) -> Option<Candidate> {
    roster
        .iter()
        .find(|c| c.id == target && c.team != own_team)
        .copied()
}
