//! Finds emote names in chat text and swaps them for the icon tags that the client draws inline.

pub mod triggers;

use std::borrow::Cow;

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub use triggers::TriggerDictionary;

/// Matches a single markup tag, such as `<col=ff0000>` or `</col>`.
static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("<[^>]*>").unwrap());

/// Matches every character that can't be part of an emote name. Digits and underscores are
/// included, so only ASCII letters survive.
static NON_LETTER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("[^A-Za-z]").unwrap());

/// Returns true for the characters that separate words within a message. The non-breaking space
/// is included because the client uses it in place of normal spaces in some messages.
fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{A0}')
}

/// Removes markup tags from `word`. The `<lt>` and `<gt>` escapes are kept, since they stand for
/// literal angle brackets rather than formatting.
pub fn remove_tags(word: &str) -> Cow<'_, str> {
    TAG_PATTERN.replace_all(word, |caps: &Captures| match &caps[0] {
        escape @ ("<lt>" | "<gt>") => escape.to_string(),
        _ => String::new(),
    })
}

/// Returns the emote name that `word` could refer to once tags, digits, punctuation and
/// underscores are ignored. The result may be empty.
fn trigger_candidate(word: &str) -> String {
    NON_LETTER_PATTERN
        .replace_all(&remove_tags(word), "")
        .into_owned()
}

/// Rewrites a single word. Returns `None` if the word doesn't name an emote.
///
/// A word that names an emote always yields `Some`, even when the emote's ID is 0 and the word
/// is left as it was.
fn rewrite_word(word: &str, triggers: &TriggerDictionary, base_id: u32) -> Option<String> {
    let trigger = trigger_candidate(word);

    if trigger.is_empty() {
        return None;
    }

    let index = triggers.lookup(&trigger)?;
    let emote_id = base_id.wrapping_add(index as u32);

    // ID 0 is never drawn, but the word still counts as an emote.
    if emote_id == 0 {
        return Some(word.to_string());
    }

    // The trigger is searched for in the original word, so surrounding tags and punctuation stay.
    Some(word.replacen(&trigger, &format!("<img={emote_id}>"), 1))
}

/// Replaces the emote names in `message` with `<img=N>` tags, where `N` is `base_id` plus the
/// emote's index in `triggers`.
///
/// Slashes split the message into segments that are matched separately, and whitespace splits
/// segments into words. When anything is rewritten, the words of every segment are joined back
/// together with single spaces, so runs of whitespace collapse.
///
/// Returns `None` if no word named an emote. Otherwise the rebuilt message is returned, even in
/// the case where it happens to be identical to the input.
pub fn rewrite(message: &str, triggers: &TriggerDictionary, base_id: u32) -> Option<String> {
    let mut edited = false;

    let rewritten = message
        .split('/')
        .map(|segment| {
            segment
                .split(is_word_separator)
                .filter(|word| !word.is_empty())
                .map(|word| match rewrite_word(word, triggers, base_id) {
                    Some(new_word) => {
                        edited = true;
                        new_word
                    }

                    None => word.to_string(),
                })
                .join(" ")
        })
        .join("/");

    if edited {
        Some(rewritten)
    } else {
        None
    }
}
