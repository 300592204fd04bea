/// Stable record identifier (row index or source id rendered as text).
/// Examples: `792927353886371840`, `row_17`
pub type RecordId = String;
/// Name of a column in the source table.
/// Examples: `message`, `tweet`, `sentiment`, `user_location`
pub type ColumnName = String;
/// Raw string value of a pass-through metadata column.
/// Example: `Austin, TX`
pub type ColumnValue = String;
/// One lowercase alphabetic token.
/// Example: `warming`
pub type Token = String;
/// Name of a lexicon in the store.
/// Examples: `us_states`, `climate`, `tier_one`
pub type LexiconName = String;
/// Lexicon entry; may be a multi-word phrase.
/// Examples: `co2`, `global warming`, `brand new`
pub type LexiconEntry = String;
/// Location tag produced by the geo-tagger.
/// Examples: `not`, `notny`, `tx`
pub type LocationTag = String;
