/// Constants used by the feature extractor and its fixed column schema.
pub mod features {
    /// Substring marking a hyperlink in raw text.
    pub const HYPERLINK_MARKER: &str = "http";
    /// Substring marking a retweet in raw text (case-sensitive).
    pub const RETWEET_MARKER: &str = "RT";
    /// Marker for a mention.
    pub const MENTION_MARKER: &str = "@";
    /// Marker for a hashtag.
    pub const HASHTAG_MARKER: &str = "#";

    /// Fixed feature column order shared by every `FeatureVector`.
    pub const FEATURE_COLUMNS: [&str; 20] = [
        "polarity",
        "subjectivity",
        "length",
        "hyperlink_present",
        "retweet_present",
        "mention_present",
        "mention_count",
        "hashtag_present",
        "hashtag_count",
        "exclamation_point",
        "question_mark",
        "dollar_sign",
        "percent_symbol",
        "colon",
        "semi_colon",
        "news_association",
        "climate_association",
        "democratic_association",
        "republican_association",
        "uppercase_present",
    ];
}

/// Constants used by the geo-tagger.
pub mod geo {
    /// Accumulator reset marker written whenever a token is not a state abbreviation.
    pub const NOT_US_MARKER: &str = "not";
    /// Sentinel substituted when a location value cannot be split into words.
    pub const NOT_US_SENTINEL: &str = "not us";
    /// Canonical upper-case US state (and DC) abbreviations.
    pub const STATE_ABBREVIATIONS: [&str; 51] = [
        "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
        "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
        "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
        "VT", "VA", "WA", "WV", "WI", "WY",
    ];
}

/// Constants used when decoding and rendering stance labels.
pub mod labels {
    /// Signed integer codes in `Label` declaration order.
    pub const LABEL_CODES: [i64; 4] = [-1, 0, 1, 2];
    /// Descriptive names in `Label` declaration order.
    pub const LABEL_NAMES: [&str; 4] = ["Anti Man-Made", "Neutral", "Man-Made", "News"];
    /// Default column carrying the label in training tables.
    pub const DEFAULT_LABEL_COLUMN: &str = "sentiment";
}

/// Constants used by the text normalizer.
pub mod normalize {
    /// Tokens shorter than this are dropped from lemmatized output.
    pub const DEFAULT_MIN_LEMMA_LEN: usize = 3;
}

/// Canonical lexicon names used in logs and errors.
pub mod lexicon {
    /// US state abbreviation lexicon.
    pub const US_STATES: &str = "us_states";
    /// News-association lexicon.
    pub const NEWS: &str = "news";
    /// Climate/topic-association lexicon.
    pub const CLIMATE: &str = "climate";
    /// Democratic-party-association lexicon.
    pub const DEMOCRATIC: &str = "democratic";
    /// Republican-party-association lexicon.
    pub const REPUBLICAN: &str = "republican";
    /// Tier-1 basic vocabulary used to find uncommon terms.
    pub const TIER_ONE: &str = "tier_one";
    /// English stopword list used by the lemmatizer.
    pub const STOPWORDS: &str = "stopwords";
}

/// Fixed keys of the JSON-lines output table.
pub mod output {
    /// Record identifier key.
    pub const ID_COLUMN: &str = "id";
    /// Cleaned-text key.
    pub const CLEANED_COLUMN: &str = "cleaned";
    /// Lemmatized-text key.
    pub const LEMMATIZED_COLUMN: &str = "lemmatized";
}

/// Constants used by the aggregate reporting layer.
pub mod reporting {
    /// Rendering used when a label subset is empty.
    pub const NOT_APPLICABLE: &str = "n/a";
    /// Decimal places kept in threshold shares.
    pub const SHARE_DECIMALS: i32 = 3;
}
