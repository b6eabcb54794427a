//! Optimal lineup and bench-points analysis.
//!
//! For every (year, week, owner) roster the best legal starting lineup is
//! found with an exact dynamic programme over the remaining slot counts.
//! A lineup value compares, in order:
//!
//! 1. slots filled (a legal lineup fills every slot it can),
//! 2. total points in integer hundredths,
//! 3. players who were actually started.
//!
//! The last key makes the chosen lineup match the owner's own picks
//! whenever that costs nothing, so bench points are never inflated by a
//! tie-break.

use std::collections::BTreeMap;

use tracing::debug;

use super::{round1, round2};
use crate::config::{LineupConfig, SlotRule};
use crate::models::{LineupEfficiency, LineupEntry, LineupSlotPick, OptimalLineupRow, RecordStore};

/// (filled slots, points in cents, started players)
type LineupValue = (u32, i64, u32);

fn cents(points: f64) -> i64 {
    (points * 100.0).round() as i64
}

fn add(a: LineupValue, b: LineupValue) -> LineupValue {
    (a.0 + b.0, a.1 + b.1, a.2 + b.2)
}

/// Mixed-radix encoding of "how many of each slot are still open".
struct SlotState {
    strides: Vec<usize>,
    counts: Vec<usize>,
    full: usize,
    size: usize,
}

impl SlotState {
    fn new(slots: &[SlotRule]) -> Self {
        let mut strides = Vec::with_capacity(slots.len());
        let mut counts = Vec::with_capacity(slots.len());
        let mut size = 1;
        let mut full = 0;
        for rule in slots {
            let count = rule.count as usize;
            strides.push(size);
            counts.push(count);
            full += count * size;
            size *= count + 1;
        }
        Self {
            strides,
            counts,
            full,
            size,
        }
    }

    fn open(&self, state: usize, slot: usize) -> usize {
        (state / self.strides[slot]) % (self.counts[slot] + 1)
    }
}

/// Best legal lineup from one week's roster: each chosen player paired
/// with the index of the slot rule it fills, in slot order.
pub fn optimal_lineup<'a>(players: &[&'a LineupEntry], slots: &[SlotRule]) -> Vec<(usize, &'a LineupEntry)> {
    let state = SlotState::new(slots);
    let n = players.len();

    // best[i][s]: best value from players[i..] with open slots `s`
    let mut best = vec![vec![(0u32, 0i64, 0u32); state.size]; n + 1];
    let mut choice: Vec<Vec<Option<usize>>> = vec![vec![None; state.size]; n];

    for i in (0..n).rev() {
        let player = players[i];
        let gain = (1, cents(player.points), u32::from(player.is_starter()));
        for s in 0..state.size {
            let mut value = best[i + 1][s];
            let mut picked = None;
            for (k, rule) in slots.iter().enumerate() {
                if state.open(s, k) == 0 || !rule.accepts(&player.position) {
                    continue;
                }
                let candidate = add(best[i + 1][s - state.strides[k]], gain);
                if candidate > value {
                    value = candidate;
                    picked = Some(k);
                }
            }
            best[i][s] = value;
            choice[i][s] = picked;
        }
    }

    let mut lineup = Vec::new();
    let mut s = state.full;
    for (i, player) in players.iter().enumerate() {
        if let Some(k) = choice[i][s] {
            lineup.push((k, *player));
            s -= state.strides[k];
        }
    }
    lineup.sort_by_key(|(k, _)| *k);
    lineup
}

/// `actual / optimal * 100`, one decimal, `None` without positive
/// optimal points.
fn efficiency(actual: f64, optimal: f64) -> Option<f64> {
    (optimal > 0.0).then(|| round1(actual / optimal * 100.0))
}

fn lineup_row(players: &[&LineupEntry], config: &LineupConfig) -> Option<OptimalLineupRow> {
    let first = players.first()?;
    let chosen = optimal_lineup(players, &config.slots);

    let actual: f64 = players.iter().filter(|p| p.is_starter()).map(|p| p.points).sum();
    let optimal: f64 = chosen.iter().map(|(_, p)| p.points).sum();

    Some(OptimalLineupRow {
        year: first.year,
        week: first.week,
        owner: first.owner.clone(),
        team_name: first.team_name.clone(),
        actual_points: round2(actual),
        optimal_points: round2(optimal),
        bench_points: round2(optimal - actual),
        efficiency: efficiency(actual, optimal),
        optimal_starters: chosen
            .into_iter()
            .map(|(k, p)| LineupSlotPick {
                slot: config.slots[k].slot.clone(),
                player_name: p.player_name.clone(),
                position: p.position.clone(),
                points: round2(p.points),
            })
            .collect(),
    })
}

/// One row per (year, week, owner) with lineup data, in that order.
pub fn optimal_lineups(store: &RecordStore, config: &LineupConfig) -> Vec<OptimalLineupRow> {
    let mut weeks: BTreeMap<(u16, u32, &str), Vec<&LineupEntry>> = BTreeMap::new();
    for entry in store.lineups() {
        weeks
            .entry((entry.year, entry.week, entry.owner.as_str()))
            .or_default()
            .push(entry);
    }

    let rows: Vec<OptimalLineupRow> = weeks
        .values()
        .filter_map(|players| lineup_row(players, config))
        .collect();
    debug!("Computed {} optimal lineups", rows.len());
    rows
}

/// Per (year, owner) totals over the weekly rows.
pub fn season_efficiency(rows: &[OptimalLineupRow]) -> Vec<LineupEfficiency> {
    let mut seasons: BTreeMap<(u16, &str), (u32, f64, f64)> = BTreeMap::new();
    for row in rows {
        let totals = seasons.entry((row.year, row.owner.as_str())).or_default();
        totals.0 += 1;
        totals.1 += row.actual_points;
        totals.2 += row.optimal_points;
    }

    seasons
        .into_iter()
        .map(|((year, owner), (weeks, actual, optimal))| LineupEfficiency {
            year,
            owner: owner.to_string(),
            weeks,
            actual_points: round2(actual),
            optimal_points: round2(optimal),
            bench_points: round2(optimal - actual),
            efficiency: efficiency(actual, optimal),
        })
        .collect()
}
