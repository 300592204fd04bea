use std::collections::HashSet;
use std::fs;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Value, json};

use stance_features::config::{PipelineConfig, TextColumn};
use stance_features::data::{Label, Record};
use stance_features::features::FeatureVector;
use stance_features::geo::filter_us_records;
use stance_features::lexicon::{LexiconStore, parse_word_list};
use stance_features::normalize::clean;
use stance_features::{Pipeline, PipelineError};

fn training_rows() -> Vec<IndexMap<String, Value>> {
    let raw = [
        (-1, "Climate change is a HOAX!!! @AlGore #fakenews", "1001"),
        (0, "What do you think about the weather today?", "1002"),
        (1, "RT @NASA: Global warming is real and man-made https://t.co/abc", "1003"),
        (2, "Senate votes on $2B carbon tax; 40% of voters agree http://cnn.it/x", "1004"),
    ];
    raw.iter()
        .map(|(label, message, tweetid)| {
            IndexMap::from([
                ("sentiment".to_string(), json!(label)),
                ("message".to_string(), json!(message)),
                ("tweetid".to_string(), json!(tweetid)),
            ])
        })
        .collect()
}

#[test]
fn training_table_produces_one_stable_row_per_record() {
    let pipeline = Pipeline::with_defaults().unwrap();
    let rows = pipeline.process_rows(&training_rows()).unwrap();

    assert_eq!(rows.len(), 4);
    let labels: Vec<Option<Label>> = rows.iter().map(|row| row.record.label).collect();
    assert_eq!(
        labels,
        vec![
            Some(Label::AntiManMade),
            Some(Label::Neutral),
            Some(Label::ManMade),
            Some(Label::News)
        ]
    );

    let anti = &rows[0].features;
    assert_eq!(anti.exclamation_point, 1);
    assert_eq!(anti.mention_count, 1);
    assert_eq!(anti.hashtag_count, 1);
    assert_eq!(anti.uppercase_present, 1);

    let news = &rows[3].features;
    assert_eq!(news.dollar_sign, 1);
    assert_eq!(news.percent_symbol, 1);
    assert_eq!(news.semi_colon, 1);
    assert_eq!(news.hyperlink_present, 1);
    assert_eq!(news.colon, 1);

    let man_made = &rows[2];
    assert_eq!(man_made.features.retweet_present, 1);
    assert_eq!(
        man_made.cleaned.as_deref(),
        Some("global warming is real and man made")
    );
    assert!(man_made.features.climate_association > 0);

    for row in &rows {
        assert_eq!(row.features.values().len(), FeatureVector::COLUMNS.len());
        assert_eq!(row.record.columns.keys().collect::<Vec<_>>(), vec!["tweetid"]);
        let cleaned = row.cleaned.as_deref().unwrap();
        assert_eq!(clean(cleaned), cleaned);
    }
}

#[test]
fn lemmatized_output_never_contains_short_tokens_or_stopwords() {
    let store = Arc::new(LexiconStore::load().unwrap());
    let pipeline = Pipeline::new(PipelineConfig::default(), Arc::clone(&store)).unwrap();
    let rows = pipeline.process_rows(&training_rows()).unwrap();
    for row in rows {
        let lemmatized = row.lemmatized.unwrap();
        for token in lemmatized.split_whitespace() {
            assert!(token.len() > 2, "{token}");
            assert!(!store.stopwords.contains(token), "{token}");
        }
    }
}

#[test]
fn location_table_binds_tweet_column_and_filters_us_rows() {
    let config = PipelineConfig {
        text_column: TextColumn::Tweet,
        label_column: None,
        ..PipelineConfig::default()
    };
    let store = Arc::new(LexiconStore::load().unwrap());
    let pipeline = Pipeline::new(config, Arc::clone(&store)).unwrap();
    let table = vec![
        IndexMap::from([
            ("tweet".to_string(), json!("Heat wave again in Austin")),
            ("user_location".to_string(), json!("Austin, TX")),
        ]),
        IndexMap::from([
            ("tweet".to_string(), json!("Rainy London")),
            ("user_location".to_string(), json!("London, England")),
        ]),
        IndexMap::from([
            ("tweet".to_string(), json!(17)),
            ("user_location".to_string(), Value::Null),
        ]),
    ];
    let rows = pipeline.process_rows(&table).unwrap();
    let records: Vec<Record> = rows.into_iter().map(|row| row.record).collect();
    let kept = filter_us_records(&records, "user_location", &store);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].text.as_deref(), Some("Heat wave again in Austin"));
}

#[test]
fn missing_columns_fail_the_table() {
    let pipeline = Pipeline::with_defaults().unwrap();
    let table = vec![IndexMap::from([("message".to_string(), json!("hi"))])];
    assert!(matches!(
        pipeline.process_rows(&table),
        Err(PipelineError::MissingColumn { ref column }) if column == "sentiment"
    ));
}

#[test]
fn rows_round_trip_through_jsonl_output() {
    let pipeline = Pipeline::with_defaults().unwrap();
    let rows = pipeline.process_rows(&training_rows()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("features.jsonl");
    let schema = pipeline.output_schema().unwrap();
    assert_eq!(schema.write_jsonl_file(&rows, &path).unwrap(), 4);

    let contents = fs::read_to_string(&path).unwrap();
    let mut key_sets = HashSet::new();
    for (line, row) in contents.lines().zip(&rows) {
        let value: Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["id"], json!(row.record.id));
        assert_eq!(value["message"], json!(row.record.text));
        assert_eq!(value["sentiment"], json!(row.record.label.map(Label::code)));
        assert_eq!(value["tweetid"], json!(row.record.columns["tweetid"]));
        assert_eq!(value["cleaned"], json!(row.cleaned));
        let keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        key_sets.insert(keys);
    }
    assert_eq!(key_sets.len(), 1);
}

#[test]
fn source_columns_named_like_features_fail_the_write() {
    let pipeline = Pipeline::with_defaults().unwrap();
    let table = vec![IndexMap::from([
        ("sentiment".to_string(), json!(1)),
        ("message".to_string(), json!("real message")),
        ("length".to_string(), json!("xyz")),
    ])];
    let rows = pipeline.process_rows(&table).unwrap();
    assert_eq!(rows[0].record.columns["length"], "xyz");

    let mut buffer = Vec::new();
    let err = pipeline
        .output_schema()
        .unwrap()
        .write_jsonl(&rows, &mut buffer)
        .unwrap_err();
    assert!(matches!(err, PipelineError::Configuration(ref msg) if msg.contains("'length'")));
}

#[test]
fn custom_lexicons_flow_into_association_counts() {
    let defaults = LexiconStore::load().unwrap();
    let store = LexiconStore {
        climate: parse_word_list("climate", "warming,co2,ice").unwrap(),
        ..defaults
    };
    let pipeline = Pipeline::new(PipelineConfig::default(), Arc::new(store)).unwrap();
    let row = pipeline.process(&Record::new("x", "Global warming melts ice caps"));
    assert_eq!(row.features.climate_association, 2);
}
