//! Scoring engine: turn a finished hole into an exact zero-sum point delta.

use crate::domain::player::PlayerId;
use crate::domain::points::Points;
use crate::domain::rules::{GameConfig, Phase};
use crate::domain::state::{HoleWinner, MatchState, SoloStyle, TeamSide, Teams, WagerState};
use crate::domain::{teams as formation, validate};
use crate::errors::domain::DomainError;

/// Result of scoring one hole.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleOutcome {
    pub winner: HoleWinner,
    /// Exact per-player delta in quarters, indexed by `PlayerId`.
    pub deltas: Vec<Points>,
}

/// Score the hole currently in progress from raw strokes.
///
/// Formation must be final; the declaration (if any) must match the team
/// configuration it pairs with. The returned deltas always sum to exactly
/// zero.
pub fn score_hole(state: &MatchState, scores: &[u32]) -> Result<HoleOutcome, DomainError> {
    formation::ensure_formation_final(state)?;
    let hole = crate::domain::state::require_hole(state, "score_hole")?;
    let roster = state.roster_ids();
    validate::ensure_scores(scores, &roster)?;
    validate_declaration(&state.config, hole.captain(), &hole.rotation_order, hole)?;

    compute_outcome(
        &hole.teams,
        &hole.wager,
        hole.phase,
        scores,
        &state.standings(),
    )
}

/// A declaration is only legal with the team shape it pairs with.
fn validate_declaration(
    config: &GameConfig,
    captain: PlayerId,
    rotation_order: &[PlayerId],
    hole: &crate::domain::state::HoleState,
) -> Result<(), DomainError> {
    let Some(style) = hole.wager.declaration else {
        return Ok(());
    };
    let Teams::Solo { soloist, .. } = &hole.teams else {
        return Err(DomainError::invalid_configuration(format!(
            "{style:?} requires a solo team configuration"
        )));
    };
    match style {
        SoloStyle::Standard => Ok(()),
        SoloStyle::Duncan => {
            if *soloist != captain {
                return Err(DomainError::invalid_configuration(
                    "the Duncan pairs with a solo by the captain",
                ));
            }
            Ok(())
        }
        SoloStyle::BigDick => {
            if hole.hole_number != config.holes {
                return Err(DomainError::phase(format!(
                    "the Big Dick only pays on hole {}",
                    config.holes
                )));
            }
            Ok(())
        }
        SoloStyle::Tunkarri => {
            validate::ensure_aardvark_match(config, "the Tunkarri")?;
            let is_aardvark = config
                .aardvark_positions()
                .any(|pos| rotation_order.get(pos) == Some(soloist));
            if !is_aardvark {
                return Err(DomainError::invalid_configuration(
                    "the Tunkarri pairs with a solo by an Aardvark",
                ));
            }
            Ok(())
        }
    }
}

/// Pure delta computation from final teams, wager, and strokes.
///
/// `standings` are the running totals *before* this hole; they only matter
/// for the Karl Marx remainder assignment.
pub fn compute_outcome(
    teams: &Teams,
    wager: &WagerState,
    phase: Phase,
    scores: &[u32],
    standings: &[Points],
) -> Result<HoleOutcome, DomainError> {
    let stake = wager.effective_wager() as i64 * wager.toss_multiplier() as i64;
    let mut deltas = vec![Points::ZERO; scores.len()];

    let winner = match teams {
        Teams::Pending => {
            return Err(DomainError::invalid_configuration(
                "cannot score an unformed hole",
            ))
        }
        Teams::Partners { team_one, team_two } => {
            let one = best_ball(team_one, scores);
            let two = best_ball(team_two, scores);
            if one == two {
                HoleWinner::Push
            } else {
                let (winners, losers, side) = if one < two {
                    (team_one, team_two, TeamSide::TeamOne)
                } else {
                    (team_two, team_one, TeamSide::TeamTwo)
                };
                pay_partners(&mut deltas, winners, losers, stake, standings);
                HoleWinner::Side(side)
            }
        }
        Teams::Solo { soloist, opponents } => {
            let lone = scores[*soloist as usize];
            let field = best_ball(opponents, scores);
            if lone == field {
                HoleWinner::Push
            } else if lone < field {
                pay_solo_win(&mut deltas, *soloist, opponents, stake, wager.declaration);
                HoleWinner::Side(TeamSide::Soloist)
            } else {
                // Losses stay standard regardless of declaration.
                for &opp in opponents {
                    deltas[opp as usize] += Points::from_quarters(stake);
                }
                deltas[*soloist as usize] -= Points::from_quarters(stake * opponents.len() as i64);
                HoleWinner::Side(TeamSide::Opponents)
            }
        }
    };

    if phase == Phase::FinishingDouble && winner != HoleWinner::Push {
        for delta in deltas.iter_mut() {
            *delta = *delta * 2;
        }
    }

    debug_assert!(
        deltas.iter().copied().sum::<Points>().is_zero(),
        "hole deltas must net to zero"
    );
    Ok(HoleOutcome { winner, deltas })
}

/// Best-ball: the lowest stroke count among a side's members.
fn best_ball(members: &[PlayerId], scores: &[u32]) -> u32 {
    members
        .iter()
        .map(|&p| scores[p as usize])
        .min()
        .unwrap_or(u32::MAX)
}

/// Losers each pay the stake; winners split the pot, with any indivisible
/// quarters going to the winner(s) furthest ahead in the standings
/// (Karl Marx distribution).
fn pay_partners(
    deltas: &mut [Points],
    winners: &[PlayerId],
    losers: &[PlayerId],
    stake: i64,
    standings: &[Points],
) {
    for &loser in losers {
        deltas[loser as usize] -= Points::from_quarters(stake);
    }
    let pot = stake * losers.len() as i64;
    let share = pot.div_euclid(winners.len() as i64);
    let remainder = pot.rem_euclid(winners.len() as i64);

    let mut by_standing: Vec<PlayerId> = winners.to_vec();
    // Highest total first; roster order breaks ties deterministically.
    by_standing.sort_by(|&a, &b| {
        standings[b as usize]
            .cmp(&standings[a as usize])
            .then(a.cmp(&b))
    });
    for (rank, &player) in by_standing.iter().enumerate() {
        let extra = if (rank as i64) < remainder { 1 } else { 0 };
        deltas[player as usize] += Points::from_quarters(share + extra);
    }
}

/// Soloist win: full pot, or 3-for-2 on the stake for Duncan / Big Dick /
/// Tunkarri, split exactly (fractionally where needed) across opponents.
fn pay_solo_win(
    deltas: &mut [Points],
    soloist: PlayerId,
    opponents: &[PlayerId],
    stake: i64,
    declaration: Option<SoloStyle>,
) {
    let three_for_two = declaration.map(SoloStyle::pays_three_for_two).unwrap_or(false);
    if three_for_two {
        let total = Points::from_ratio(3 * stake, 2);
        let per_opponent = total.div_exact(opponents.len() as i64);
        for &opp in opponents {
            deltas[opp as usize] -= per_opponent;
        }
        deltas[soloist as usize] += total;
    } else {
        for &opp in opponents {
            deltas[opp as usize] -= Points::from_quarters(stake);
        }
        deltas[soloist as usize] += Points::from_quarters(stake * opponents.len() as i64);
    }
}
