//! Rule-based English noun lemmatizer.
//!
//! Rules are applied in order, first hit wins:
//!
//! 1. irregular plurals (`mice` -> `mouse`)
//! 2. invariant words and words that only look plural (`hummus`, `glass`)
//! 3. `-ies` -> `-y`, except `-ie` nouns (`cookies` -> `cookie`)
//! 4. `-ves` -> `-f`/`-fe` for a fixed set, otherwise drop `s`
//! 5. `-oes` -> `-o` for a fixed set, otherwise drop `s`
//! 6. sibilant plurals drop `es` (`peaches`, `dishes`, `boxes`, `glasses`)
//! 7. drop a final `s`

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("mice", "mouse"),
        ("geese", "goose"),
        ("teeth", "tooth"),
        ("feet", "foot"),
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("people", "person"),
        ("oxen", "ox"),
        ("dice", "die"),
        ("fungi", "fungus"),
        ("cacti", "cactus"),
        ("buses", "bus"),
        ("knives", "knife"),
        ("wives", "wife"),
        ("lives", "life"),
        ("leaves", "leaf"),
        ("loaves", "loaf"),
        ("halves", "half"),
        ("calves", "calf"),
        ("shelves", "shelf"),
        ("wolves", "wolf"),
        ("thieves", "thief"),
        ("scarves", "scarf"),
        ("selves", "self"),
        ("sheaves", "sheaf"),
        ("tomatoes", "tomato"),
        ("potatoes", "potato"),
        ("mangoes", "mango"),
        ("heroes", "hero"),
        ("echoes", "echo"),
        ("mosquitoes", "mosquito"),
        ("buffaloes", "buffalo"),
        ("volcanoes", "volcano"),
    ]
    .into_iter()
    .collect()
});

/// Words ending in `s` that are already singular (or uncountable).
static INVARIANT: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "series", "species", "news", "molasses", "sheep", "fish", "deer", "salmon", "swiss",
        "lens", "chaos", "mathematics", "hummus", "couscous", "asparagus", "citrus", "octopus",
        "tennis", "analysis", "gas", "yes", "its", "this", "his",
    ]
    .into_iter()
    .collect()
});

/// Nouns whose singular ends in `-ie`, so `-ies` must not become `-y`.
static IE_NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "cookie", "brownie", "smoothie", "veggie", "movie", "calorie", "zombie", "hippie",
        "rookie", "selfie", "pixie", "genie", "beanie", "hoagie", "birdie", "sweetie", "auntie",
        "magpie", "pie", "tie", "lie", "die", "boogie", "goalie", "prairie", "eerie",
    ]
    .into_iter()
    .collect()
});

/// `-ches` words whose singular keeps the `e`.
static CHE_NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "quiche", "headache", "cache", "niche", "avalanche", "moustache", "mustache", "creche",
        "panache", "microfiche",
    ]
    .into_iter()
    .collect()
});

/// Returns the singular base form of a lowercase noun.
pub fn noun_lemma(word: &str) -> String {
    if let Some(lemma) = IRREGULAR.get(word) {
        return (*lemma).to_string();
    }
    if INVARIANT.contains(word) || !word.ends_with('s') || word.chars().count() <= 3 {
        return word.to_string();
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        let ie_form = &word[..word.len() - 1];
        if IE_NOUNS.contains(ie_form) {
            return ie_form.to_string();
        }
        return format!("{}y", stem);
    }

    if let Some(stem) = word.strip_suffix("es") {
        let e_form = &word[..word.len() - 1];
        if stem.ends_with("ch") && CHE_NOUNS.contains(e_form) {
            return e_form.to_string();
        }
        if stem.ends_with("ch")
            || stem.ends_with("sh")
            || stem.ends_with("ss")
            || stem.ends_with('x')
            || stem.ends_with("zz")
        {
            return stem.to_string();
        }
    }

    word[..word.len() - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(cases: &[(&str, &str)]) {
        for (word, expected) in cases {
            assert_eq!(noun_lemma(word), *expected, "lemma of {}", word);
        }
    }

    #[test]
    fn regular_plurals_drop_s() {
        check(&[
            ("apples", "apple"),
            ("bananas", "banana"),
            ("eggs", "egg"),
            ("cheeses", "cheese"),
            ("sauces", "sauce"),
            ("olives", "olive"),
            ("shoes", "shoe"),
        ]);
    }

    #[test]
    fn ies_plurals() {
        check(&[
            ("berries", "berry"),
            ("cherries", "cherry"),
            ("supplies", "supply"),
            ("cookies", "cookie"),
            ("brownies", "brownie"),
            ("pies", "pie"),
        ]);
    }

    #[test]
    fn sibilant_plurals_drop_es() {
        check(&[
            ("peaches", "peach"),
            ("sandwiches", "sandwich"),
            ("dishes", "dish"),
            ("boxes", "box"),
            ("glasses", "glass"),
            ("quiches", "quiche"),
        ]);
    }

    #[test]
    fn irregular_plurals() {
        check(&[
            ("tomatoes", "tomato"),
            ("potatoes", "potato"),
            ("loaves", "loaf"),
            ("knives", "knife"),
            ("children", "child"),
        ]);
    }

    #[test]
    fn singular_words_are_unchanged() {
        check(&[
            ("milk", "milk"),
            ("bread", "bread"),
            ("hummus", "hummus"),
            ("asparagus", "asparagus"),
            ("glass", "glass"),
            ("gas", "gas"),
            ("series", "series"),
            ("fish", "fish"),
        ]);
    }
}
