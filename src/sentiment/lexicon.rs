// Word tables backing the two built-in sentiment engines.
//
// The pattern engine reads (word, polarity, subjectivity) triples on a
// [-1, 1] / [0, 1] scale. The valence engine reads (word, valence) pairs on
// a roughly [-4, 4] scale. The tables are small curated lists, not trained
// artifacts — the engines behind them are swappable via the scorer traits.

/// (word, polarity in [-1, 1], subjectivity in [0, 1])
pub(crate) const POLARITY_LEXICON: &[(&str, f64, f64)] = &[
    // positive
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("brilliant", 0.9, 0.9),
    ("comfortable", 0.5, 0.6),
    ("delighted", 1.0, 1.0),
    ("delightful", 1.0, 1.0),
    ("enjoy", 0.4, 0.5),
    ("excellent", 1.0, 1.0),
    ("excited", 0.34, 0.7),
    ("exciting", 0.45, 0.8),
    ("fantastic", 0.4, 0.9),
    ("favorite", 0.6, 0.8),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("impressive", 1.0, 1.0),
    ("joy", 0.8, 0.9),
    ("love", 0.5, 0.6),
    ("lovely", 0.5, 0.7),
    ("nice", 0.6, 1.0),
    ("outstanding", 0.9, 0.9),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.73, 0.8),
    ("remarkable", 0.75, 0.75),
    ("satisfied", 0.5, 0.7),
    ("success", 0.5, 0.4),
    ("superb", 0.9, 0.9),
    ("thrilled", 0.6, 0.9),
    ("win", 0.8, 0.6),
    ("wonderful", 1.0, 1.0),
    // negative
    ("angry", -0.5, 0.8),
    ("annoying", -0.6, 0.8),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("boring", -0.6, 0.9),
    ("broken", -0.4, 0.4),
    ("disappointed", -0.6, 0.8),
    ("disappointing", -0.6, 0.8),
    ("disaster", -0.9, 0.8),
    ("dreadful", -0.9, 0.9),
    ("fail", -0.5, 0.5),
    ("failure", -0.5, 0.5),
    ("frustrating", -0.6, 0.8),
    ("hate", -0.8, 0.9),
    ("horrible", -1.0, 1.0),
    ("loss", -0.4, 0.4),
    ("nasty", -0.8, 0.9),
    ("pain", -0.7, 0.7),
    ("painful", -0.7, 0.7),
    ("poor", -0.4, 0.6),
    ("problem", -0.3, 0.3),
    ("sad", -0.5, 1.0),
    ("terrible", -1.0, 1.0),
    ("ugly", -0.7, 0.8),
    ("unhappy", -0.6, 0.8),
    ("upset", -0.4, 0.8),
    ("useless", -0.5, 0.6),
    ("worse", -0.5, 0.5),
    ("worst", -1.0, 0.3),
    ("wrong", -0.5, 0.5),
];

/// (word, valence on a roughly [-4, 4] scale)
pub(crate) const VALENCE_LEXICON: &[(&str, f64)] = &[
    // positive
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("brilliant", 2.8),
    ("cool", 1.3),
    ("delighted", 2.9),
    ("enjoy", 2.2),
    ("excellent", 2.7),
    ("excited", 2.2),
    ("fantastic", 2.6),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("impressive", 2.3),
    ("joy", 2.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("loves", 2.7),
    ("nice", 1.8),
    ("perfect", 2.7),
    ("success", 2.7),
    ("super", 2.9),
    ("thank", 1.9),
    ("thanks", 1.9),
    ("win", 2.8),
    ("wonderful", 2.7),
    // negative
    ("angry", -2.3),
    ("annoying", -1.8),
    ("awful", -3.3),
    ("bad", -2.5),
    ("boring", -1.3),
    ("broken", -1.6),
    ("disappointed", -2.2),
    ("disappointing", -2.2),
    ("disaster", -3.1),
    ("fail", -2.5),
    ("failure", -2.4),
    ("frustrating", -2.1),
    ("hate", -2.7),
    ("hated", -2.6),
    ("hates", -2.5),
    ("horrible", -2.5),
    ("nasty", -2.6),
    ("pain", -2.3),
    ("painful", -2.4),
    ("poor", -1.9),
    ("problem", -1.7),
    ("sad", -2.1),
    ("terrible", -3.1),
    ("ugly", -2.6),
    ("unhappy", -2.0),
    ("upset", -1.9),
    ("useless", -1.8),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

/// Tokens that invert the polarity of a following sentiment word.
///
/// The tokenizer splits contractions at the apostrophe, so "doesn't" arrives
/// as "doesn" + "t" — the contraction stems are listed directly. "won't" is
/// the known miss: its stem collides with the verb "won".
pub(crate) const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "nobody", "neither", "nor", "nowhere", "cannot",
    "aren", "couldn", "didn", "doesn", "don", "hasn", "haven", "isn", "shouldn", "wasn", "weren",
    "wouldn",
];

/// Multipliers applied by the pattern engine to the word that follows.
pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("really", 1.3),
    ("totally", 1.3),
    ("very", 1.3),
];

/// Valence increments applied by the valence engine to the word that follows.
/// Positive entries boost, negative entries damp.
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("barely", -0.293),
    ("extremely", 0.293),
    ("hardly", -0.293),
    ("highly", 0.293),
    ("incredibly", 0.293),
    ("really", 0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("totally", 0.293),
    ("very", 0.293),
];
