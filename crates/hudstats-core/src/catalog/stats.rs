use serde::{Deserialize, Serialize};

use self::StatKind::{Count, Money, Percent, Ratio};
use super::Section::{self, Flop, Postflop, Preflop, River, Showdown, Turn};

/// How a stat's raw value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    /// Frequency in percent, rendered with a `%` suffix
    Percent,
    /// Plain ratio (e.g., aggression factor)
    Ratio,
    /// Plain count (e.g., hands played)
    Count,
    /// Amount of money, rendered with a leading `$`
    Money,
}

/// A known statistic. Catalog entries never change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatDefinition {
    pub id: &'static str,
    pub section: Section,
    pub label: &'static str,
    /// Field on the player record that supplies the value
    pub source_field: &'static str,
    pub premium: bool,
    pub kind: StatKind,
    pub tooltip: &'static str,
}

const fn stat(
    id: &'static str,
    section: Section,
    label: &'static str,
    source_field: &'static str,
    premium: bool,
    kind: StatKind,
    tooltip: &'static str,
) -> StatDefinition {
    StatDefinition {
        id,
        section,
        label,
        source_field,
        premium,
        kind,
        tooltip,
    }
}

#[rustfmt::skip]
pub(super) const STATS: &[StatDefinition] = &[
    // Preflop
    stat("VPIP", Preflop, "VPIP", "vpip", false, Percent, "Voluntarily put money in pot"),
    stat("PFR", Preflop, "PFR", "pfr", false, Percent, "Preflop raise"),
    stat("3Bet", Preflop, "3-Bet", "three_bet", true, Percent, "Re-raise preflop when facing a raise"),
    stat("F3B", Preflop, "Fold to 3-Bet", "fold_to_three_bet", true, Percent, "Folds after raising and facing a 3-bet"),
    stat("4Bet", Preflop, "4-Bet", "four_bet", true, Percent, "Re-raise preflop when facing a 3-bet"),
    stat("ATS", Preflop, "Steal", "attempt_to_steal", true, Percent, "Open raise from CO, BTN or SB when folded to"),
    stat("FSt", Preflop, "Fold to Steal", "fold_to_steal", true, Percent, "Folds the blind against a steal attempt"),
    stat("Limp", Preflop, "Limp", "limp", true, Percent, "Open limps preflop"),
    stat("LF", Preflop, "Limp/Fold", "limp_fold", true, Percent, "Limps and then folds to a raise"),
    stat("CC", Preflop, "Cold Call", "cold_call", true, Percent, "Calls a raise without money already in the pot"),
    // Postflop
    stat("AF", Postflop, "Aggression", "aggression_factor", false, Ratio, "(Bets + raises) / calls after the flop"),
    stat("AFq", Postflop, "Agg. Frequency", "aggression_frequency", true, Percent, "Share of postflop actions that are bets or raises"),
    stat("WWSF", Postflop, "Won When Saw Flop", "won_when_saw_flop", false, Percent, "Pots won after seeing the flop"),
    stat("Hands", Postflop, "Hands", "hands", false, Count, "Hands in the sample"),
    stat("BB100", Postflop, "BB/100", "bb_per_100", true, Ratio, "Big blinds won per 100 hands"),
    stat("Win$", Postflop, "Winnings USD", "winnings_usd", false, Money, "Net winnings in US dollars"),
    // Flop
    stat("CB", Flop, "C-Bet Flop", "cbet_flop", false, Percent, "Continuation bets the flop as preflop aggressor"),
    stat("FCB", Flop, "Fold to C-Bet Flop", "fold_to_cbet_flop", true, Percent, "Folds to a flop continuation bet"),
    stat("XR", Flop, "Check-Raise Flop", "check_raise_flop", true, Percent, "Check-raises the flop"),
    stat("Donk", Flop, "Donk Flop", "donk_flop", true, Percent, "Leads into the preflop aggressor on the flop"),
    stat("Float", Flop, "Float Flop", "float_flop", true, Percent, "Calls a flop bet in position and bets the turn"),
    // Turn
    stat("CBT", Turn, "C-Bet Turn", "cbet_turn", true, Percent, "Continuation bets the turn"),
    stat("FCBT", Turn, "Fold to C-Bet Turn", "fold_to_cbet_turn", true, Percent, "Folds to a turn continuation bet"),
    stat("XRT", Turn, "Check-Raise Turn", "check_raise_turn", true, Percent, "Check-raises the turn"),
    stat("Probe", Turn, "Probe Turn", "probe_turn", true, Percent, "Bets the turn after the flop checks through"),
    // River
    stat("CBR", River, "C-Bet River", "cbet_river", true, Percent, "Continuation bets the river"),
    stat("FCBR", River, "Fold to C-Bet River", "fold_to_cbet_river", true, Percent, "Folds to a river continuation bet"),
    stat("BR", River, "Bet River", "bet_river", true, Percent, "Bets the river when checked to"),
    // Showdown
    stat("WTSD", Showdown, "Went to Showdown", "wtsd", false, Percent, "Reaches showdown after seeing the flop"),
    stat("WSD", Showdown, "Won at Showdown", "wsd", false, Percent, "Wins the pot when reaching showdown"),
    stat("WSDF", Showdown, "Showdown Fold", "showdown_fold", true, Percent, "Folds on the river when facing a bet"),
];
