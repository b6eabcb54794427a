//! Auction draft price-to-production rankings.

use crate::config::DraftConfig;
use crate::models::{DraftPick, DraftValueRow, RecordStore};

use super::round2;

fn value_row(pick: &DraftPick) -> DraftValueRow {
    DraftValueRow {
        year: pick.year,
        player_name: pick.player_name.clone(),
        position: pick.position.clone(),
        owner: pick.owner.clone(),
        team_name: pick.team_name.clone(),
        bid_amount: pick.bid_amount,
        total_points_scored: round2(pick.total_points_scored),
        value: pick.raw_value().map(round2),
    }
}

/// Every pick with its value, ordered by year then bid descending.
pub fn draft_rows(store: &RecordStore) -> Vec<DraftValueRow> {
    let mut picks: Vec<&DraftPick> = store.draft().iter().collect();
    picks.sort_by(|a, b| a.year.cmp(&b.year).then(b.bid_amount.cmp(&a.bid_amount)));
    picks.into_iter().map(value_row).collect()
}

/// Picks priced at or above the floor, with their unrounded value.
fn priced_picks<'a>(store: &'a RecordStore, config: &DraftConfig) -> Vec<(&'a DraftPick, f64)> {
    store
        .draft()
        .iter()
        .filter(|p| p.bid_amount >= config.min_bid)
        .filter_map(|p| p.raw_value().map(|v| (p, v)))
        .collect()
}

/// Top `top_n` picks by points per dollar. Equal values keep input order.
pub fn best_picks(store: &RecordStore, config: &DraftConfig) -> Vec<DraftValueRow> {
    let mut picks = priced_picks(store, config);
    picks.sort_by(|a, b| b.1.total_cmp(&a.1));
    picks.into_iter().take(config.top_n).map(|(p, _)| value_row(p)).collect()
}

/// Bottom `top_n` picks by points per dollar, worst first. Picks that
/// never scored are left out so injured players don't crowd the list.
pub fn worst_picks(store: &RecordStore, config: &DraftConfig) -> Vec<DraftValueRow> {
    let mut picks: Vec<_> = priced_picks(store, config)
        .into_iter()
        .filter(|(p, _)| p.total_points_scored > 0.0)
        .collect();
    picks.sort_by(|a, b| a.1.total_cmp(&b.1));
    picks.into_iter().take(config.top_n).map(|(p, _)| value_row(p)).collect()
}
