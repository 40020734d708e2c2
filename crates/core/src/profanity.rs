//! Profanity filtering for review comments.
//!
//! Matching is case-insensitive and whole-word only, so words that merely
//! contain a listed term ("scrap", "class") pass through untouched. Each
//! match is masked with one `*` per character.

use std::sync::LazyLock;

use regex::Regex;

/// Terms masked in review comments, including their common inflections.
pub const BLOCKED_TERMS: &[&str] = &[
    "arse",
    "arsehole",
    "ass",
    "asshole",
    "assholes",
    "bastard",
    "bastards",
    "bitch",
    "bitches",
    "bitching",
    "bollocks",
    "bullshit",
    "crap",
    "crappy",
    "cunt",
    "cunts",
    "damn",
    "damned",
    "dick",
    "dickhead",
    "fuck",
    "fucked",
    "fucker",
    "fuckers",
    "fucking",
    "fucks",
    "motherfucker",
    "piss",
    "pissed",
    "prick",
    "shit",
    "shits",
    "shitty",
    "slut",
    "twat",
    "wanker",
    "whore",
];

static BLOCKED_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = BLOCKED_TERMS
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("valid regex")
});

/// Replace every blocked term in `text` with asterisks of the same length.
pub fn censor(text: &str) -> String {
    BLOCKED_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            "*".repeat(caps[0].chars().count())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_is_unchanged() {
        let text = "A gorgeous, slow-burning thriller.";
        assert_eq!(censor(text), text);
    }

    #[test]
    fn blocked_term_is_masked() {
        assert_eq!(censor("what a shit ending"), "what a **** ending");
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(censor("Damn good film"), "**** good film");
        assert_eq!(censor("FUCKING brilliant"), "******* brilliant");
    }

    #[test]
    fn embedded_substrings_are_not_masked() {
        assert_eq!(censor("a classic assessment"), "a classic assessment");
        assert_eq!(censor("scrap the sequel"), "scrap the sequel");
    }

    #[test]
    fn punctuation_does_not_hide_terms() {
        assert_eq!(censor("crap!"), "****!");
        assert_eq!(censor("(bullshit)"), "(********)");
    }

    #[test]
    fn every_occurrence_is_masked() {
        let censored = censor("crap plot, crap acting");
        assert_eq!(censored, "**** plot, **** acting");
    }

    #[test]
    fn empty_text_is_empty() {
        assert_eq!(censor(""), "");
    }
}
