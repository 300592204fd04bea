use stance_features::features::FeatureExtractor;
use stance_features::geo::find_us;
use stance_features::lexicon::{LexiconStore, parse_word_list};
use stance_features::normalize::{TextNormalizer, clean, expand_contractions};
use stance_features::tokenize::{PatternSpec, tokenize, untokenize};
use stance_features::Record;

const CORPUS: [&str; 10] = [
    "RT @user I CAN'T believe it! https://x.co #climate",
    "@EPA says CO2 levels are up 3%... pic.twitter.com/xyz",
    "We're DOOMED #ClimateChange https://t.co/a1b2",
    "Won't somebody think of the polar bears?!",
    "HTTPS://example.com is not a real link?",
    "hRTttps sneaky RT markers RTRT",
    "Don't     panic;\ttabs\nand newlines",
    "",
    "1234 5678",
    "Ünïcödé climate 🌍 change",
];

#[test]
fn cleaning_is_a_projection() {
    for raw in CORPUS {
        let once = clean(raw);
        assert_eq!(clean(&once), once, "input: {raw:?}");
        assert!(
            once.chars().all(|ch| ch.is_ascii_lowercase() || ch == ' '),
            "input: {raw:?} -> {once:?}"
        );
        assert!(!once.starts_with(' ') && !once.ends_with(' ') && !once.contains("  "));
    }
}

#[test]
fn letters_round_trip_is_lossy() {
    let source = "Ice,  caps\tmelt... 2 FAST!";
    let joined = untokenize(&tokenize(source, PatternSpec::Letters));
    assert_eq!(joined, "Ice caps melt FAST");
    assert_ne!(joined, source);
}

#[test]
fn contraction_table_applies_specific_forms_first() {
    assert_eq!(expand_contractions("won't"), "will not");
    assert_eq!(expand_contractions("can't"), "can not");
    assert_eq!(expand_contractions("isn't"), "is not");
}

#[test]
fn lemmatizer_respects_length_and_stopword_bounds_on_corpus() {
    let store = LexiconStore::load().unwrap();
    let normalizer = TextNormalizer::default();
    for raw in CORPUS {
        for source in [raw.to_string(), clean(raw)] {
            let lemmatized = normalizer.lemmatize(&source, &store.stopwords);
            for token in lemmatized.split_whitespace() {
                assert!(token.chars().count() > 2, "{raw:?} -> {token}");
                assert!(!store.stopwords.contains(token), "{raw:?} -> {token}");
            }
        }
    }
}

#[test]
fn feature_schema_is_stable_across_corpus() {
    let store = LexiconStore::load().unwrap();
    let extractor = FeatureExtractor::new();
    let mut key_sets = Vec::new();
    for (idx, raw) in CORPUS.iter().enumerate() {
        let features = extractor.extract(&Record::new(idx.to_string(), *raw), &store);
        let value = serde_json::to_value(&features).unwrap();
        let keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        key_sets.push(keys);
    }
    assert!(key_sets.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn presence_flags_for_percent_message() {
    let store = LexiconStore::load().unwrap();
    let features = FeatureExtractor::new().extract(&Record::new("p", "50% off!!"), &store);
    assert_eq!(features.percent_symbol, 1);
    assert_eq!(features.exclamation_point, 1);
    assert_eq!(features.dollar_sign, 0);
}

#[test]
fn association_count_iterates_the_lexicon() {
    let lexicon = parse_word_list("climate", "warming,co2,ice").unwrap();
    assert_eq!(lexicon.association_count("global warming melts ice caps"), 2);
}

#[test]
fn geo_tag_keeps_only_the_trailing_run() {
    let store = LexiconStore::load().unwrap();
    assert_eq!(find_us(&["ca", "zz", "ny"], &store.us_states), "notny");
}
