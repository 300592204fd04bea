//! Dictionary-free noun lemmatizer.
//!
//! Applies the noun detachment rules of a morphological analyzer (`-ses`,
//! `-xes`, `-zes`, `-ches`, `-shes`, `-men`, `-ies`, `-oes`, `-s`) guarded by
//! an irregular-plural table and a keep list of words that only look plural.

use std::collections::HashMap;
use std::sync::LazyLock;

static IRREGULAR_PLURALS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("oxen", "ox"),
        ("lice", "louse"),
        ("data", "datum"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("analyses", "analysis"),
        ("crises", "crisis"),
        ("theses", "thesis"),
        ("hypotheses", "hypothesis"),
        ("diagnoses", "diagnosis"),
        ("buses", "bus"),
        ("gases", "gas"),
        ("viruses", "virus"),
        ("campuses", "campus"),
        ("lenses", "lens"),
        ("biases", "bias"),
        ("atlases", "atlas"),
        ("aliases", "alias"),
        ("canvases", "canvas"),
        ("bonuses", "bonus"),
        ("censuses", "census"),
        ("choruses", "chorus"),
        ("focuses", "focus"),
        ("statuses", "status"),
        ("surpluses", "surplus"),
        ("octopuses", "octopus"),
        ("consensuses", "consensus"),
        ("irises", "iris"),
        ("quizzes", "quiz"),
        ("leaves", "leaf"),
        ("lives", "life"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("wolves", "wolf"),
        ("halves", "half"),
        ("shelves", "shelf"),
        ("thieves", "thief"),
        ("calves", "calf"),
    ])
});

const KEEP_AS_IS: [&str; 41] = [
    "news", "series", "species", "means", "physics", "politics", "economics", "ethics",
    "mathematics", "statistics", "always", "perhaps", "yes", "thus", "plus", "texas", "kansas",
    "arkansas", "illinois", "atlas", "canvas", "alias", "bias", "chaos", "ethos", "cosmos",
    "pathos", "tennis", "lens", "christmas", "whereas", "overseas", "sometimes", "besides",
    "towards", "afterwards", "nowadays", "headquarters", "clothes", "mars", "paris",
];

/// Singulars ending in `-oe`; every other `-oes` plural drops `-es`.
const OE_NOUNS: [&str; 15] = [
    "shoe", "toe", "foe", "hoe", "doe", "roe", "floe", "sloe", "oboe", "canoe", "aloe", "throe",
    "tiptoe", "horseshoe", "mistletoe",
];

/// Reduces inflected nouns to their singular dictionary form.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lemmatizer;

impl Lemmatizer {
    /// Create the lemmatizer.
    pub fn new() -> Self {
        Self
    }

    /// Lemma of a lowercase token; unknown shapes come back unchanged.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = IRREGULAR_PLURALS.get(word) {
            return (*lemma).to_string();
        }
        if word.len() < 4 || KEEP_AS_IS.contains(&word) {
            return word.to_string();
        }
        detach_noun_suffix(word).unwrap_or_else(|| word.to_string())
    }
}

fn detach_noun_suffix(word: &str) -> Option<String> {
    if let Some(stem) = word.strip_suffix("sses") {
        return Some(format!("{stem}ss"));
    }
    if let Some(stem) = word.strip_suffix("xes") {
        return Some(format!("{stem}x"));
    }
    if let Some(stem) = word.strip_suffix("zzes") {
        return Some(format!("{stem}zz"));
    }
    if word.ends_with("aches") && !word.ends_with("eaches") {
        return Some(word[..word.len() - 1].to_string());
    }
    if let Some(stem) = word.strip_suffix("ches") {
        return Some(format!("{stem}ch"));
    }
    if let Some(stem) = word.strip_suffix("shes") {
        return Some(format!("{stem}sh"));
    }
    if is_compound_men(word) {
        let stem = &word[..word.len() - 3];
        return Some(format!("{stem}man"));
    }
    if let Some(stem) = word.strip_suffix("ies") {
        // Short forms are `-ie` nouns: ties, lies, pies.
        if word.len() <= 4 {
            return Some(format!("{stem}ie"));
        }
        return Some(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("oes") {
        let singular = format!("{stem}oe");
        if OE_NOUNS.contains(&singular.as_str()) {
            return Some(singular);
        }
        return Some(format!("{stem}o"));
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return None;
    }
    word.strip_suffix('s')
        .filter(|stem| stem.len() >= 3)
        .map(str::to_string)
}

fn is_compound_men(word: &str) -> bool {
    ["smen", "remen", "cemen", "rmen", "women"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str) -> String {
        Lemmatizer::new().lemmatize(word)
    }

    #[test]
    fn regular_plurals_drop_their_suffix() {
        assert_eq!(lemma("glaciers"), "glacier");
        assert_eq!(lemma("cities"), "city");
        assert_eq!(lemma("boxes"), "box");
        assert_eq!(lemma("churches"), "church");
        assert_eq!(lemma("headaches"), "headache");
        assert_eq!(lemma("beaches"), "beach");
        assert_eq!(lemma("wishes"), "wish");
        assert_eq!(lemma("classes"), "class");
        assert_eq!(lemma("houses"), "house");
        assert_eq!(lemma("sizes"), "size");
        assert_eq!(lemma("ties"), "tie");
    }

    #[test]
    fn irregular_and_compound_plurals_resolve() {
        assert_eq!(lemma("women"), "woman");
        assert_eq!(lemma("congressmen"), "congressman");
        assert_eq!(lemma("firemen"), "fireman");
        assert_eq!(lemma("wolves"), "wolf");
        assert_eq!(lemma("crises"), "crisis");
        assert_eq!(lemma("data"), "datum");
    }

    #[test]
    fn oes_plurals_split_between_o_and_oe_nouns() {
        assert_eq!(lemma("potatoes"), "potato");
        assert_eq!(lemma("heroes"), "hero");
        assert_eq!(lemma("volcanoes"), "volcano");
        assert_eq!(lemma("tornadoes"), "tornado");
        assert_eq!(lemma("goes"), "go");
        assert_eq!(lemma("shoes"), "shoe");
        assert_eq!(lemma("toes"), "toe");
        assert_eq!(lemma("canoes"), "canoe");
    }

    #[test]
    fn ses_plurals_of_s_final_nouns_resolve() {
        assert_eq!(lemma("lenses"), "lens");
        assert_eq!(lemma("biases"), "bias");
        assert_eq!(lemma("bonuses"), "bonus");
        assert_eq!(lemma("consensuses"), "consensus");
        assert_eq!(lemma("houses"), "house");
        assert_eq!(lemma("causes"), "cause");
    }

    #[test]
    fn singular_lookalikes_are_kept() {
        for word in ["news", "crisis", "virus", "glass", "gas", "specimen", "texas", "bus"] {
            assert_eq!(lemma(word), word, "{word}");
        }
    }

    #[test]
    fn non_nouns_pass_through() {
        assert_eq!(lemma("melting"), "melting");
        assert_eq!(lemma("warmer"), "warmer");
        assert_eq!(lemma(""), "");
    }
}
