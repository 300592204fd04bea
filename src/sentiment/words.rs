//! Embedded sentiment lexicon: `(word, polarity, subjectivity)` triples.
//!
//! Mostly adjectives in the style of the pattern `en-sentiment` lexicon, plus
//! the nouns and verbs that carry stance in climate discussion ("hoax",
//! "scam", "denial"). Words with no entry do not contribute to a score.

/// Scored words.
pub(crate) const WORD_SCORES: &[(&str, f64, f64)] = &[
    // positive evaluation
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("nice", 0.6, 1.0),
    ("fine", 0.42, 0.5),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("wonderful", 1.0, 1.0),
    ("excellent", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("brilliant", 0.9, 1.0),
    ("perfect", 1.0, 1.0),
    ("superb", 1.0, 1.0),
    ("outstanding", 0.5, 0.5),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("remarkable", 0.75, 0.75),
    ("magnificent", 1.0, 1.0),
    ("marvelous", 1.0, 1.0),
    ("splendid", 1.0, 1.0),
    ("terrific", 1.0, 1.0),
    ("delightful", 1.0, 1.0),
    ("lovely", 0.5, 0.75),
    ("pleasant", 0.73, 0.97),
    ("enjoyable", 0.5, 0.5),
    ("fun", 0.3, 0.2),
    ("funny", 0.25, 1.0),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("cheerful", 0.35, 0.35),
    ("joyful", 0.8, 0.8),
    ("grateful", 0.65, 0.65),
    ("thankful", 0.5, 0.5),
    ("thanks", 0.2, 0.2),
    ("proud", 0.8, 1.0),
    ("excited", 0.38, 0.75),
    ("exciting", 0.3, 0.8),
    ("hopeful", 0.5, 0.5),
    ("optimistic", 0.4, 0.7),
    ("encouraging", 0.5, 0.75),
    ("inspiring", 0.6, 0.8),
    ("inspirational", 0.6, 0.8),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("hope", 0.3, 0.5),
    ("win", 0.8, 0.4),
    ("winning", 0.5, 0.75),
    ("success", 0.3, 0.0),
    ("successful", 0.75, 0.95),
    ("victory", 0.4, 0.3),
    ("progress", 0.2, 0.3),
    ("solution", 0.2, 0.2),
    ("benefit", 0.3, 0.3),
    ("beneficial", 0.5, 0.5),
    ("helpful", 0.5, 0.5),
    ("useful", 0.3, 0.0),
    ("valuable", 0.5, 0.5),
    ("worthy", 0.5, 0.5),
    ("effective", 0.6, 0.8),
    ("efficient", 0.5, 0.5),
    ("productive", 0.5, 0.5),
    ("positive", 0.23, 0.55),
    ("favorable", 0.5, 0.5),
    ("ideal", 0.9, 0.9),
    ("fair", 0.7, 0.9),
    ("honest", 0.6, 0.9),
    ("trustworthy", 0.5, 0.5),
    ("reliable", 0.5, 0.5),
    ("credible", 0.3, 0.5),
    ("accurate", 0.4, 0.57),
    ("correct", 0.0, 0.0),
    ("right", 0.29, 0.54),
    ("true", 0.35, 0.65),
    ("real", 0.2, 0.3),
    ("genuine", 0.4, 0.5),
    ("legitimate", 0.3, 0.4),
    ("valid", 0.3, 0.4),
    ("proven", 0.3, 0.4),
    ("factual", 0.2, 0.2),
    ("sound", 0.4, 0.4),
    ("smart", 0.21, 0.64),
    ("clever", 0.5, 1.0),
    ("wise", 0.7, 0.9),
    ("intelligent", 0.8, 0.9),
    ("sensible", 0.3, 0.5),
    ("reasonable", 0.2, 0.6),
    ("rational", 0.2, 0.5),
    ("responsible", 0.2, 0.5),
    ("brave", 0.8, 1.0),
    ("bold", 0.33, 0.67),
    ("strong", 0.43, 0.73),
    ("powerful", 0.3, 1.0),
    ("healthy", 0.5, 0.5),
    ("safe", 0.5, 0.5),
    ("secure", 0.4, 0.6),
    ("clean", 0.37, 0.69),
    ("fresh", 0.3, 0.5),
    ("pure", 0.21, 0.5),
    ("green", -0.2, 0.3),
    ("renewable", 0.2, 0.3),
    ("sustainable", 0.3, 0.4),
    ("warm", 0.6, 0.6),
    ("cool", 0.35, 0.65),
    ("calm", 0.3, 0.75),
    ("peaceful", 0.25, 0.25),
    ("kind", 0.6, 0.9),
    ("generous", 0.4, 0.75),
    ("friendly", 0.38, 0.5),
    ("caring", 0.5, 0.6),
    ("respectful", 0.5, 0.5),
    ("important", 0.4, 1.0),
    ("significant", 0.38, 0.88),
    ("essential", 0.0, 0.3),
    ("vital", 0.2, 0.5),
    ("crucial", 0.0, 1.0),
    ("critical", 0.0, 0.8),
    ("necessary", 0.0, 1.0),
    ("interesting", 0.5, 0.5),
    ("fascinating", 0.7, 0.85),
    ("informative", 0.5, 0.5),
    ("insightful", 0.5, 0.5),
    ("easy", 0.43, 0.83),
    ("simple", 0.0, 0.36),
    ("free", 0.4, 0.8),
    ("rich", 0.38, 0.63),
    ("popular", 0.6, 0.9),
    ("famous", 0.5, 1.0),
    ("cute", 0.5, 1.0),
    ("sweet", 0.35, 0.65),
    ("cheap", 0.4, 0.7),
    ("welcome", 0.8, 0.9),
    ("promising", 0.5, 0.75),
    ("innovative", 0.5, 0.5),
    ("exceptional", 0.67, 0.67),
    ("historic", 0.0, 0.0),
    ("landmark", 0.2, 0.3),
    // negative evaluation
    ("bad", -0.7, 0.67),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("horrific", -1.0, 1.0),
    ("horrendous", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("dreadful", -1.0, 1.0),
    ("appalling", -0.8, 1.0),
    ("atrocious", -1.0, 1.0),
    ("abysmal", -1.0, 1.0),
    ("pathetic", -1.0, 1.0),
    ("disgusting", -1.0, 1.0),
    ("disgraceful", -0.8, 1.0),
    ("shameful", -0.8, 1.0),
    ("shocking", -1.0, 1.0),
    ("outrageous", -0.8, 1.0),
    ("unacceptable", -0.7, 0.9),
    ("inexcusable", -0.7, 0.9),
    ("nasty", -1.0, 1.0),
    ("evil", -1.0, 1.0),
    ("wicked", -0.5, 1.0),
    ("vile", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("sad", -0.5, 1.0),
    ("tragic", -0.75, 0.75),
    ("heartbreaking", -0.8, 1.0),
    ("depressing", -0.6, 0.8),
    ("miserable", -1.0, 1.0),
    ("unhappy", -0.6, 0.9),
    ("upset", -0.4, 0.6),
    ("angry", -0.5, 1.0),
    ("furious", -0.8, 1.0),
    ("mad", -0.63, 1.0),
    ("annoying", -0.8, 0.9),
    ("frustrating", -0.4, 0.7),
    ("disappointing", -0.6, 0.7),
    ("disappointed", -0.75, 0.75),
    ("worried", -0.3, 0.6),
    ("worrying", -0.5, 0.8),
    ("worrisome", -0.5, 0.8),
    ("concerning", -0.3, 0.5),
    ("troubling", -0.5, 0.8),
    ("disturbing", -0.6, 1.0),
    ("alarming", -0.6, 0.9),
    ("frightening", -0.6, 1.0),
    ("terrifying", -0.8, 1.0),
    ("scary", -0.5, 1.0),
    ("afraid", -0.6, 0.9),
    ("fearful", -0.6, 1.0),
    ("nervous", -0.3, 0.9),
    ("anxious", -0.25, 0.75),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("hateful", -0.8, 0.9),
    ("hostile", -0.5, 0.8),
    ("cruel", -1.0, 1.0),
    ("brutal", -0.88, 1.0),
    ("violent", -0.8, 0.9),
    ("wrong", -0.5, 0.9),
    ("false", -0.4, 0.6),
    ("fake", -0.5, 1.0),
    ("phony", -0.5, 1.0),
    ("bogus", -0.6, 0.9),
    ("fraudulent", -0.8, 0.9),
    ("dishonest", -0.6, 0.9),
    ("deceptive", -0.6, 0.8),
    ("misleading", -0.5, 0.7),
    ("corrupt", -0.5, 0.5),
    ("biased", -0.4, 0.7),
    ("unreliable", -0.4, 0.6),
    ("dubious", -0.4, 0.8),
    ("questionable", -0.3, 0.6),
    ("doubtful", -0.3, 0.7),
    ("unproven", -0.3, 0.5),
    ("baseless", -0.5, 0.8),
    ("unfounded", -0.5, 0.7),
    ("stupid", -0.8, 1.0),
    ("dumb", -0.375, 0.5),
    ("idiotic", -0.8, 1.0),
    ("idiot", -0.8, 1.0),
    ("moronic", -0.8, 1.0),
    ("ignorant", -0.5, 0.8),
    ("foolish", -0.5, 0.9),
    ("silly", -0.5, 0.9),
    ("absurd", -0.5, 1.0),
    ("ludicrous", -0.6, 1.0),
    ("laughable", -0.4, 0.9),
    ("ridiculous", -0.33, 1.0),
    ("crazy", -0.6, 0.9),
    ("insane", -1.0, 1.0),
    ("delusional", -0.6, 0.9),
    ("hysterical", -0.5, 0.9),
    ("paranoid", -0.4, 0.8),
    ("irrational", -0.4, 0.8),
    ("irresponsible", -0.5, 0.7),
    ("reckless", -0.5, 0.8),
    ("careless", -0.4, 0.7),
    ("lazy", -0.25, 1.0),
    ("weak", -0.38, 0.63),
    ("poor", -0.4, 0.6),
    ("useless", -0.5, 0.2),
    ("pointless", -0.5, 0.5),
    ("worthless", -0.8, 0.9),
    ("hopeless", -0.6, 0.9),
    ("helpless", -0.4, 0.6),
    ("boring", -1.0, 1.0),
    ("tired", -0.4, 0.7),
    ("sick", -0.71, 0.86),
    ("ill", -0.5, 0.8),
    ("toxic", -0.5, 0.6),
    ("poisonous", -0.5, 0.5),
    ("polluted", -0.5, 0.6),
    ("filthy", -0.8, 1.0),
    ("dirty", -0.6, 0.8),
    ("harmful", -0.5, 0.5),
    ("damaging", -0.5, 0.6),
    ("destructive", -0.6, 0.7),
    ("devastating", -0.7, 0.9),
    ("devastated", -0.6, 0.9),
    ("disastrous", -0.8, 1.0),
    ("catastrophic", -0.8, 0.9),
    ("apocalyptic", -0.6, 0.8),
    ("dangerous", -0.6, 0.9),
    ("hazardous", -0.5, 0.6),
    ("risky", -0.3, 0.6),
    ("threatening", -0.5, 0.7),
    ("deadly", -0.5, 0.6),
    ("lethal", -0.5, 0.6),
    ("fatal", -0.6, 0.6),
    ("dead", -0.2, 0.4),
    ("dying", -0.4, 0.5),
    ("severe", -0.5, 0.7),
    ("dire", -0.6, 0.8),
    ("grim", -0.5, 0.7),
    ("bleak", -0.5, 0.8),
    ("gloomy", -0.5, 0.8),
    ("dark", -0.15, 0.4),
    ("painful", -0.6, 0.8),
    ("difficult", -0.5, 1.0),
    ("hard", -0.29, 0.54),
    ("tough", -0.39, 0.83),
    ("unfair", -0.5, 0.9),
    ("unjust", -0.5, 0.8),
    ("illegal", -0.5, 0.5),
    ("criminal", -0.4, 0.5),
    ("guilty", -0.5, 0.8),
    ("negative", -0.3, 0.4),
    ("serious", -0.33, 0.67),
    ("urgent", -0.2, 0.6),
    ("unprecedented", -0.1, 0.6),
    ("extreme", -0.125, 1.0),
    ("cold", -0.6, 1.0),
    ("hot", 0.25, 0.85),
    ("expensive", -0.5, 0.7),
    ("costly", -0.4, 0.6),
    ("broken", -0.4, 0.4),
    ("failed", -0.5, 0.3),
    ("failing", -0.5, 0.5),
    ("failure", -0.32, 0.3),
    ("crisis", -0.3, 0.4),
    ("disaster", -0.6, 0.7),
    ("catastrophe", -0.6, 0.7),
    ("tragedy", -0.5, 0.6),
    ("nightmare", -0.6, 0.8),
    ("mess", -0.4, 0.6),
    ("lie", -0.5, 0.7),
    ("lies", -0.5, 0.7),
    ("liar", -0.7, 0.9),
    ("liars", -0.7, 0.9),
    ("hoax", -0.6, 0.8),
    ("hoaxes", -0.6, 0.8),
    ("scam", -0.6, 0.8),
    ("scams", -0.6, 0.8),
    ("fraud", -0.6, 0.8),
    ("con", -0.3, 0.6),
    ("conspiracy", -0.4, 0.7),
    ("propaganda", -0.5, 0.7),
    ("nonsense", -0.6, 0.9),
    ("garbage", -0.6, 0.8),
    ("rubbish", -0.6, 0.8),
    ("bullshit", -0.7, 0.9),
    ("myth", -0.3, 0.6),
    ("alarmist", -0.4, 0.8),
    ("alarmism", -0.4, 0.8),
    ("denier", -0.4, 0.7),
    ("deniers", -0.4, 0.7),
    ("denial", -0.3, 0.6),
    ("threat", -0.4, 0.6),
    ("danger", -0.4, 0.6),
    ("fear", -0.4, 0.7),
    ("shame", -0.5, 0.8),
    ("sorry", -0.5, 1.0),
    ("unfortunate", -0.5, 0.9),
    ("unfortunately", -0.5, 1.0),
    ("sadly", -0.5, 1.0),
    ("terribly", -1.0, 1.0),
    // mostly objective or weakly polar
    ("huge", 0.4, 0.9),
    ("massive", 0.0, 1.0),
    ("big", 0.0, 0.1),
    ("large", 0.21, 0.43),
    ("small", -0.25, 0.4),
    ("tiny", -0.1, 0.8),
    ("little", -0.19, 0.5),
    ("high", 0.16, 0.54),
    ("low", 0.0, 0.3),
    ("new", 0.14, 0.45),
    ("old", 0.1, 0.2),
    ("young", 0.1, 0.4),
    ("long", -0.05, 0.4),
    ("short", 0.0, 0.3),
    ("fast", 0.2, 0.6),
    ("slow", -0.3, 0.39),
    ("quick", 0.33, 0.5),
    ("rapid", 0.0, 0.0),
    ("sudden", 0.0, 0.0),
    ("full", 0.35, 0.55),
    ("empty", -0.1, 0.5),
    ("sure", 0.5, 0.89),
    ("certain", 0.21, 0.57),
    ("clear", 0.1, 0.38),
    ("obvious", 0.0, 0.5),
    ("possible", 0.0, 1.0),
    ("impossible", -0.67, 1.0),
    ("likely", 0.0, 1.0),
    ("unlikely", -0.5, 0.5),
    ("probable", 0.0, 0.7),
    ("entire", 0.0, 0.62),
    ("whole", 0.2, 0.4),
    ("total", 0.0, 0.75),
    ("complete", 0.1, 0.4),
    ("major", 0.06, 0.5),
    ("minor", -0.1, 0.4),
    ("main", 0.17, 0.33),
    ("final", 0.0, 1.0),
    ("current", 0.0, 0.4),
    ("recent", 0.0, 0.25),
    ("modern", 0.2, 0.3),
    ("future", 0.0, 0.13),
    ("past", -0.25, 0.25),
    ("same", 0.0, 0.13),
    ("different", 0.0, 0.6),
    ("special", 0.36, 0.57),
    ("strange", 0.0, 0.15),
    ("weird", -0.5, 1.0),
    ("odd", -0.17, 0.33),
    ("normal", 0.15, 0.65),
    ("natural", 0.1, 0.4),
    ("human", 0.0, 0.1),
    ("political", 0.0, 0.1),
    ("public", 0.0, 0.07),
    ("federal", 0.0, 0.1),
    ("national", 0.0, 0.0),
    ("international", 0.0, 0.0),
    ("global", 0.0, 0.0),
    ("local", 0.0, 0.0),
    ("scientific", 0.0, 0.0),
    ("environmental", 0.0, 0.0),
    ("economic", 0.2, 0.2),
    ("financial", 0.0, 0.0),
    ("official", 0.0, 0.0),
    ("open", 0.0, 0.5),
    ("rising", 0.0, 0.0),
    ("early", 0.1, 0.3),
    ("late", -0.3, 0.6),
];

/// Adverbs that scale the next scored word.
pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.2),
    ("too", 1.2),
    ("extremely", 1.5),
    ("totally", 1.4),
    ("absolutely", 1.4),
    ("incredibly", 1.4),
    ("completely", 1.3),
    ("utterly", 1.4),
    ("highly", 1.3),
    ("deeply", 1.3),
    ("truly", 1.2),
    ("seriously", 1.2),
    ("super", 1.3),
    ("most", 1.3),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("rather", 1.1),
    ("fairly", 0.9),
    ("somewhat", 0.8),
    ("slightly", 0.6),
    ("barely", 0.5),
    ("hardly", 0.5),
];
