//! Keyword patterns and fixed card sets for module detection

/// Keyword marking cascade-style cast triggers.
pub const CASCADE_KEYWORD: &str = "cascade";

/// Keywords that flag a spell-velocity deck on sight, no count needed.
pub const STORM_KEYWORDS: &[&str] = &["storm", "magecraft"];

/// Landfall payoff text.
pub const LANDFALL_PATTERN: &str = r"landfall|whenever a land (you control )?enters";

/// Extra-land-drop enablers.
pub const EXTRA_LAND_PATTERN: &str = r"play (an|two) additional land";

/// Repeatable sacrifice outlets: sacrifice-a-creature as an activation cost.
pub const SAC_OUTLET_PATTERN: &str = r"sacrifice (a|another) creature:";

/// One-shot outlets: sacrifice as an additional casting cost.
pub const SAC_COST_PATTERN: &str = r"additional cost[^.]*sacrifice";

/// Death-trigger payoffs.
pub const DEATH_TRIGGER_PATTERN: &str = r"whenever [^.]{0,60}?dies";

/// Graveyard recursion and self-mill text.
pub const RECURSION_PATTERN: &str =
    r"return [^.]*from your graveyard|from your graveyard to (your hand|the battlefield)|mills? (\d+|that many|half)";

/// Commanders whose presence alone marks a graveyard deck, regardless of
/// how little of the 99 the metadata cache can see. Canonical names.
pub const GRAVEYARD_COMMANDERS: &[&str] = &[
    "meren of clan nel toth",
    "muldrotha, the gravetide",
    "karador, ghost chieftain",
    "the mimeoplasm",
    "sidisi, brood tyrant",
    "tasigur, the golden fang",
    "the scarab god",
    "chainer, nightmare adept",
];
