//! Built-in implicit-meaning rules. Order is priority: the first match wins.

/// (pattern, meaning tag, undertone tag).
pub const IMPLICIT_RULES: &[(&str, &str, &str)] = &[
    (
        r"\b(i'?m|i am|it'?s|everything'?s|everything is) (fine|okay|ok)\b",
        "possibly_masking_distress",
        "guarded",
    ),
    (
        r"\b(no one|nobody) (cares|understands|gets it|listens)\b",
        "feeling_isolated",
        "lonely",
    ),
    (
        r"\b(never ?mind|nvm|forget it|doesn'?t matter)\b",
        "withdrawing",
        "discouraged",
    ),
    (r"\bwhatever\b", "dismissive_or_hurt", "frustrated"),
    (
        r"\b(just|so|really) (tired|exhausted|done|drained)\b",
        "possible_burnout",
        "weary",
    ),
    (
        r"\b(i was wondering|do you think|is it (normal|okay|bad) (to|that|if))\b",
        "seeking_validation",
        "tentative",
    ),
    (
        r"\b(maybe|perhaps|i guess|i suppose|kind of|sort of)\b",
        "uncertain",
        "hesitant",
    ),
    (
        r"\b(i don'?t know|idk|not sure)\b",
        "uncertain",
        "confused",
    ),
    (
        r"\b(always|never|every time|everyone|nobody)\b",
        "overgeneralizing",
        "frustrated",
    ),
    (
        r"\b(lol|haha+|lmao)\b.*\b(sad|hurt|cry|crying|alone|lonely|stressed)\b|\b(sad|hurt|cry|crying|alone|lonely|stressed)\b.*\b(lol|haha+|lmao)\b",
        "deflecting_with_humor",
        "masked",
    ),
];
