//! Generic saving-throw finder.
//!
//! Covers a broader grammar than the save-or-condition composite pattern:
//! any "DC N <Ability> saving throw" (or the reversed "<Ability> saving
//! throw ... DC N" order) anywhere in the text.

use grimoire_data::{Ability, ExtractedSave, SaveScaling};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DC_FIRST: Regex = Regex::new(r"(?i)DC (\d+) (\w+) saving throw").unwrap();
    static ref DC_LAST: Regex = Regex::new(r"(?i)(\w+) saving throw \(DC (\d+)\)").unwrap();
}

/// Find the first saving throw mentioned in `text`.
///
/// The ability word must resolve against the ability dictionary; a phrase
/// like "DC 15 death saving throw" yields `None` rather than a junk code.
pub fn find_save(text: &str) -> Option<ExtractedSave> {
    if let Some(captures) = DC_FIRST.captures(text) {
        return build_save(&captures[2], &captures[1]);
    }
    if let Some(captures) = DC_LAST.captures(text) {
        return build_save(&captures[1], &captures[2]);
    }
    None
}

fn build_save(ability_word: &str, dc_digits: &str) -> Option<ExtractedSave> {
    let ability = Ability::from_word(ability_word)?;
    let dc = dc_digits.parse::<u32>().ok()?;
    Some(ExtractedSave {
        dc,
        ability: ability.code().to_string(),
        scaling: SaveScaling::Flat,
    })
}
