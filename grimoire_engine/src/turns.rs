//! Turn-trigger and duration classification for over-time effects.

use grimoire_data::TurnTrigger;
use lazy_static::lazy_static;
use regex::Regex;

/// Duration assumed when the text gives no "for N minute/round" phrase.
pub const DEFAULT_DURATION_SECONDS: u32 = 60;

const SECONDS_PER_ROUND: u32 = 6;

lazy_static! {
    static ref TURN_TRIGGER: Regex = Regex::new(r"(?i)at the (start|end) of each").unwrap();
    static ref FOR_MINUTES: Regex = Regex::new(r"for (\d+) minute").unwrap();
    static ref FOR_ROUNDS: Regex = Regex::new(r"for (\d+) round").unwrap();
}

/// Whether the effect recurs at the start or end of each turn.
///
/// `None` means the text describes no recurring effect and the over-time
/// pipeline must leave the document unmodified.
pub fn turn_trigger(text: &str) -> Option<TurnTrigger> {
    let captures = TURN_TRIGGER.captures(text)?;
    match captures[1].to_lowercase().as_str() {
        "start" => Some(TurnTrigger::Start),
        _ => Some(TurnTrigger::End),
    }
}

/// Effect duration in seconds: "for N minute" wins, then "for N round",
/// then the 60-second default. Non-matching text silently uses the default.
pub fn duration_seconds(text: &str) -> u32 {
    if let Some(captures) = FOR_MINUTES.captures(text)
        && let Ok(minutes) = captures[1].parse::<u32>()
    {
        return minutes * 60;
    }
    if let Some(captures) = FOR_ROUNDS.captures(text)
        && let Ok(rounds) = captures[1].parse::<u32>()
    {
        return rounds * SECONDS_PER_ROUND;
    }
    DEFAULT_DURATION_SECONDS
}
