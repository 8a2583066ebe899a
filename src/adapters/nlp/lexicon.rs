//! Closed-class English lexicon and stop-word list.
//!
//! Open-class words (nouns, most adjectives) are not listed: anything the
//! lexicon does not know is tagged as a noun by the analyzer.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::domain::extraction::PartOfSpeech;

use PartOfSpeech::*;

/// Known word forms: surface form -> (tag, lemma).
static ENTRIES: &[(&str, PartOfSpeech, &str)] = &[
    // Determiners
    ("a", Determiner, "a"),
    ("an", Determiner, "an"),
    ("the", Determiner, "the"),
    ("this", Determiner, "this"),
    ("that", Determiner, "that"),
    ("these", Determiner, "these"),
    ("those", Determiner, "those"),
    ("some", Determiner, "some"),
    ("any", Determiner, "any"),
    ("every", Determiner, "every"),
    ("each", Determiner, "each"),
    ("no", Determiner, "no"),
    ("all", Determiner, "all"),
    ("both", Determiner, "both"),
    ("either", Determiner, "either"),
    ("neither", Determiner, "neither"),
    ("another", Determiner, "another"),
    ("much", Determiner, "much"),
    ("many", Determiner, "many"),
    ("more", Determiner, "more"),
    ("most", Determiner, "most"),
    ("few", Determiner, "few"),
    ("several", Determiner, "several"),
    ("my", Determiner, "my"),
    ("your", Determiner, "your"),
    ("his", Determiner, "his"),
    ("her", Determiner, "her"),
    ("its", Determiner, "its"),
    ("our", Determiner, "our"),
    ("their", Determiner, "their"),
    ("what", Determiner, "what"),
    ("which", Determiner, "which"),
    ("whatever", Determiner, "whatever"),
    // Pronouns
    ("i", Pronoun, "i"),
    ("me", Pronoun, "me"),
    ("you", Pronoun, "you"),
    ("he", Pronoun, "he"),
    ("him", Pronoun, "him"),
    ("she", Pronoun, "she"),
    ("it", Pronoun, "it"),
    ("we", Pronoun, "we"),
    ("us", Pronoun, "us"),
    ("they", Pronoun, "they"),
    ("them", Pronoun, "them"),
    ("myself", Pronoun, "myself"),
    ("yourself", Pronoun, "yourself"),
    ("ourselves", Pronoun, "ourselves"),
    ("themselves", Pronoun, "themselves"),
    ("mine", Pronoun, "mine"),
    ("yours", Pronoun, "yours"),
    ("who", Pronoun, "who"),
    ("whom", Pronoun, "whom"),
    ("something", Pronoun, "something"),
    ("anything", Pronoun, "anything"),
    ("nothing", Pronoun, "nothing"),
    ("everything", Pronoun, "everything"),
    ("someone", Pronoun, "someone"),
    ("anyone", Pronoun, "anyone"),
    ("everyone", Pronoun, "everyone"),
    ("i'm", Pronoun, "i"),
    ("i've", Pronoun, "i"),
    ("i'd", Pronoun, "i"),
    ("i'll", Pronoun, "i"),
    ("you're", Pronoun, "you"),
    ("we're", Pronoun, "we"),
    ("they're", Pronoun, "they"),
    ("it's", Pronoun, "it"),
    ("that's", Pronoun, "that"),
    ("what's", Pronoun, "what"),
    ("where's", Adverb, "where"),
    // Adpositions
    ("in", Adposition, "in"),
    ("on", Adposition, "on"),
    ("at", Adposition, "at"),
    ("for", Adposition, "for"),
    ("of", Adposition, "of"),
    ("with", Adposition, "with"),
    ("without", Adposition, "without"),
    ("from", Adposition, "from"),
    ("to", Adposition, "to"),
    ("into", Adposition, "into"),
    ("onto", Adposition, "onto"),
    ("about", Adposition, "about"),
    ("near", Adposition, "near"),
    ("by", Adposition, "by"),
    ("under", Adposition, "under"),
    ("over", Adposition, "over"),
    ("between", Adposition, "between"),
    ("like", Adposition, "like"),
    ("around", Adposition, "around"),
    ("through", Adposition, "through"),
    // Conjunctions
    ("and", Conjunction, "and"),
    ("or", Conjunction, "or"),
    ("but", Conjunction, "but"),
    ("nor", Conjunction, "nor"),
    ("so", Conjunction, "so"),
    ("plus", Conjunction, "plus"),
    ("if", Conjunction, "if"),
    ("because", Conjunction, "because"),
    ("then", Conjunction, "then"),
    // Auxiliaries
    ("am", Auxiliary, "be"),
    ("is", Auxiliary, "be"),
    ("are", Auxiliary, "be"),
    ("was", Auxiliary, "be"),
    ("were", Auxiliary, "be"),
    ("be", Auxiliary, "be"),
    ("been", Auxiliary, "be"),
    ("being", Auxiliary, "be"),
    ("do", Auxiliary, "do"),
    ("does", Auxiliary, "do"),
    ("did", Auxiliary, "do"),
    ("have", Auxiliary, "have"),
    ("has", Auxiliary, "have"),
    ("had", Auxiliary, "have"),
    ("can", Auxiliary, "can"),
    ("could", Auxiliary, "could"),
    ("will", Auxiliary, "will"),
    ("would", Auxiliary, "would"),
    ("shall", Auxiliary, "shall"),
    ("should", Auxiliary, "should"),
    ("may", Auxiliary, "may"),
    ("might", Auxiliary, "might"),
    ("must", Auxiliary, "must"),
    ("don't", Auxiliary, "do"),
    ("doesn't", Auxiliary, "do"),
    ("didn't", Auxiliary, "do"),
    ("can't", Auxiliary, "can"),
    ("won't", Auxiliary, "will"),
    ("isn't", Auxiliary, "be"),
    ("aren't", Auxiliary, "be"),
    ("wanna", Auxiliary, "want"),
    ("gonna", Auxiliary, "go"),
    // Verbs
    ("need", Verb, "need"),
    ("needs", Verb, "need"),
    ("needed", Verb, "need"),
    ("want", Verb, "want"),
    ("wants", Verb, "want"),
    ("wanted", Verb, "want"),
    ("buy", Verb, "buy"),
    ("buying", Verb, "buy"),
    ("bought", Verb, "buy"),
    ("get", Verb, "get"),
    ("getting", Verb, "get"),
    ("got", Verb, "get"),
    ("find", Verb, "find"),
    ("finding", Verb, "find"),
    ("found", Verb, "find"),
    ("look", Verb, "look"),
    ("looking", Verb, "look"),
    ("looked", Verb, "look"),
    ("search", Verb, "search"),
    ("searching", Verb, "search"),
    ("locate", Verb, "locate"),
    ("grab", Verb, "grab"),
    ("pick", Verb, "pick"),
    ("add", Verb, "add"),
    ("adding", Verb, "add"),
    ("make", Verb, "make"),
    ("making", Verb, "make"),
    ("cook", Verb, "cook"),
    ("bake", Verb, "bake"),
    ("show", Verb, "show"),
    ("tell", Verb, "tell"),
    ("help", Verb, "help"),
    ("give", Verb, "give"),
    ("love", Verb, "love"),
    ("go", Verb, "go"),
    ("going", Verb, "go"),
    ("see", Verb, "see"),
    ("know", Verb, "know"),
    ("think", Verb, "think"),
    ("shop", Verb, "shop"),
    ("shopping", Verb, "shop"),
    ("purchase", Verb, "purchase"),
    ("sell", Verb, "sell"),
    ("sells", Verb, "sell"),
    ("selling", Verb, "sell"),
    ("sold", Verb, "sell"),
    ("carry", Verb, "carry"),
    ("let", Verb, "let"),
    ("put", Verb, "put"),
    ("take", Verb, "take"),
    ("bring", Verb, "bring"),
    ("fetch", Verb, "fetch"),
    ("require", Verb, "require"),
    ("prepare", Verb, "prepare"),
    ("keep", Verb, "keep"),
    ("try", Verb, "try"),
    ("run", Verb, "run"),
    ("ran", Verb, "run"),
    ("out", Particle, "out"),
    ("up", Particle, "up"),
    ("not", Particle, "not"),
    // Adverbs
    ("where", Adverb, "where"),
    ("when", Adverb, "when"),
    ("how", Adverb, "how"),
    ("why", Adverb, "why"),
    ("also", Adverb, "also"),
    ("too", Adverb, "too"),
    ("very", Adverb, "very"),
    ("really", Adverb, "really"),
    ("just", Adverb, "just"),
    ("only", Adverb, "only"),
    ("again", Adverb, "again"),
    ("maybe", Adverb, "maybe"),
    ("today", Adverb, "today"),
    ("tonight", Adverb, "tonight"),
    ("now", Adverb, "now"),
    ("later", Adverb, "later"),
    ("soon", Adverb, "soon"),
    ("here", Adverb, "here"),
    ("there", Adverb, "there"),
    ("else", Adverb, "else"),
    // Adjectives
    ("fresh", Adjective, "fresh"),
    ("good", Adjective, "good"),
    ("great", Adjective, "great"),
    ("nice", Adjective, "nice"),
    ("big", Adjective, "big"),
    ("small", Adjective, "small"),
    ("large", Adjective, "large"),
    ("little", Adjective, "little"),
    ("new", Adjective, "new"),
    ("organic", Adjective, "organic"),
    ("ripe", Adjective, "ripe"),
    ("cheap", Adjective, "cheap"),
    ("other", Adjective, "other"),
    ("same", Adjective, "same"),
    ("favorite", Adjective, "favorite"),
    ("favourite", Adjective, "favourite"),
    ("best", Adjective, "good"),
    ("different", Adjective, "different"),
    ("available", Adjective, "available"),
    ("sure", Adjective, "sure"),
    // Interjections
    ("hi", Interjection, "hi"),
    ("hello", Interjection, "hello"),
    ("hey", Interjection, "hey"),
    ("howdy", Interjection, "howdy"),
    ("thanks", Interjection, "thanks"),
    ("thank", Interjection, "thank"),
    ("thx", Interjection, "thx"),
    ("ok", Interjection, "ok"),
    ("okay", Interjection, "okay"),
    ("yes", Interjection, "yes"),
    ("please", Interjection, "please"),
    ("oh", Interjection, "oh"),
    ("um", Interjection, "um"),
    ("uh", Interjection, "uh"),
    ("well", Interjection, "well"),
    ("bye", Interjection, "bye"),
    ("goodbye", Interjection, "goodbye"),
    ("wow", Interjection, "wow"),
    // Numerals
    ("one", Numeral, "one"),
    ("two", Numeral, "two"),
    ("three", Numeral, "three"),
    ("four", Numeral, "four"),
    ("five", Numeral, "five"),
    ("six", Numeral, "six"),
    ("seven", Numeral, "seven"),
    ("eight", Numeral, "eight"),
    ("nine", Numeral, "nine"),
    ("ten", Numeral, "ten"),
    ("dozen", Numeral, "dozen"),
    ("half", Numeral, "half"),
];

/// English stop words.
static STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "almost", "also", "am", "among",
    "an", "and", "another", "any", "anyone", "anything", "anyway", "are", "around", "as", "at",
    "be", "became", "because", "been", "before", "being", "below", "beside", "between", "both",
    "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "done", "down",
    "during", "each", "either", "else", "enough", "even", "ever", "every", "everyone",
    "everything", "few", "for", "from", "further", "get", "give", "go", "had", "has", "have",
    "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "however", "i",
    "if", "in", "into", "is", "it", "its", "itself", "just", "keep", "least", "less", "made",
    "make", "many", "may", "me", "might", "mine", "more", "most", "much", "must", "my",
    "myself", "neither", "never", "no", "nobody", "none", "nor", "not", "nothing", "now", "of",
    "off", "often", "on", "once", "one", "only", "onto", "or", "other", "others", "our",
    "ours", "ourselves", "out", "over", "own", "per", "perhaps", "please", "put", "quite",
    "rather", "really", "same", "say", "see", "seem", "several", "she", "should", "show",
    "since", "so", "some", "someone", "something", "still", "such", "take", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they", "thing",
    "this", "those", "though", "through", "thus", "to", "together", "too", "toward", "under",
    "until", "up", "upon", "us", "used", "using", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "where", "whether", "which", "while", "who", "whole", "whom",
    "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
    "yours", "yourself", "yourselves", "i'm", "i've", "i'd", "i'll", "you're", "we're",
    "they're", "it's", "that's", "what's", "where's", "don't", "doesn't", "didn't", "can't",
    "won't", "isn't", "aren't",
];

static LEXICON: Lazy<HashMap<&'static str, (PartOfSpeech, &'static str)>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|(form, pos, lemma)| (*form, (*pos, *lemma)))
        .collect()
});

static STOP_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Looks up a lowercase word form.
pub fn lookup(word: &str) -> Option<(PartOfSpeech, &'static str)> {
    LEXICON.get(word).copied()
}

/// Returns true if the lowercase word is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_SET.contains(word)
}
