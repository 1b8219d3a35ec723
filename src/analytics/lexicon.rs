//! Fixed word and pattern lists for the keyword heuristics. Edit freely; the logic does not
//! depend on their contents.

pub const POSITIVE_WORDS: &[&str] = &[
    "achieve", "achieved", "advance", "agreement", "ambitious", "benefit", "boost", "breakthrough",
    "clean", "commit", "commitment", "cooperation", "effective", "expand", "growth", "improve",
    "improved", "innovation", "invest", "investment", "landmark", "opportunity", "progress",
    "promising", "protect", "reduce", "reduced", "renewable", "resilient", "success",
    "successful", "support", "sustainable", "win",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "backlash", "collapse", "concern", "controversial", "crisis", "damage", "decline", "delay",
    "delayed", "disaster", "drought", "fail", "failed", "failure", "fear", "flood", "fossil",
    "lawsuit", "loss", "oppose", "opposition", "pollution", "protest", "risk", "rollback",
    "setback", "threat", "undermine", "warming", "weak", "worse",
];

/// Policy instruments worth counting even when they do not look like a proper-noun phrase.
pub const KNOWN_POLICIES: &[&str] = &[
    "Paris Agreement",
    "Kyoto Protocol",
    "Green New Deal",
    "European Green Deal",
    "Inflation Reduction Act",
    "Fit for 55",
    "Clean Power Plan",
    "Montreal Protocol",
    "carbon tax",
    "cap-and-trade",
    "emissions trading",
    "net zero",
];

/// Closing nouns of a capitalized phrase that names a policy instrument.
pub const POLICY_SUFFIXES: &[&str] = &[
    "Act", "Agreement", "Accord", "Deal", "Plan", "Protocol", "Initiative", "Strategy", "Policy",
    "Framework", "Pact", "Directive", "Law",
];

pub const COUNTRIES: &[&str] = &[
    "United States", "China", "India", "Russia", "Japan", "Germany", "United Kingdom", "France",
    "Italy", "Canada", "Brazil", "Australia", "South Korea", "Mexico", "Indonesia",
    "Saudi Arabia", "South Africa", "Argentina", "Turkey", "Spain", "Netherlands", "Sweden",
    "Norway", "Denmark", "Poland", "Nigeria", "Egypt", "Kenya", "Pakistan", "Bangladesh",
    "Vietnam", "Philippines", "Thailand", "New Zealand", "Chile", "Colombia", "Peru", "Iran",
    "Ukraine", "Switzerland",
];
