// Single source of truth for all default values.

// --- Typo correction ---
pub const DEFAULT_MAX_TYPO_DISTANCE: usize = 2;
// Single letters ("i", "a") sit within two edits of nearly every short key.
pub const DEFAULT_MIN_FUZZY_LEN: usize = 2;

// --- Disambiguation ---
pub const DEFAULT_SHORT_INPUT_MAX_TOKENS: usize = 2;
pub const DEFAULT_FALLBACK_QUESTION: &str = "Could you tell me more about what you mean?";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
