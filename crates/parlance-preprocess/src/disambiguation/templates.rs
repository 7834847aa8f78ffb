//! Built-in clarification triggers, in priority order, with their questions.
//! A trigger with no questions falls back to the configured generic question.

pub const CLARIFICATIONS: &[(&str, &[&str])] = &[
    (
        "overwhelmed",
        &[
            "When you say you're overwhelmed, is it mostly work, relationships, or life in general?",
            "Overwhelmed can come from a lot of places. Is this about work, relationships, or life overall?",
            "What's weighing on you most right now: work, relationships, or life in general?",
        ],
    ),
    (
        "fine",
        &[
            "When you say fine, do you mean things are genuinely okay, or just fine enough to get by?",
            "Fine can mean a lot of things. Is it a good fine or a getting-through-it fine?",
        ],
    ),
    (
        "nice",
        &[
            "Nice as in genuinely good news, or nice in a more sarcastic way?",
            "Is that a happy nice or a polite nice?",
        ],
    ),
    (
        "help",
        &[
            "I'd like to help. Is this about something practical, or more about how you're feeling?",
            "What kind of help would be most useful right now: advice, a plan, or someone to listen?",
        ],
    ),
    (
        "coding",
        &[
            "Are you stuck on a specific bug, or looking for help with how to approach the problem?",
            "Which language or project is this about, and what's going wrong?",
        ],
    ),
    (
        "just",
        &[
            "When you say just, is it smaller than it sounds, or more than it seems?",
            "It sounds like there might be more to it. Want to tell me what's behind the just?",
        ],
    ),
    (
        "life",
        &[
            "Life covers a lot. Is there a particular part of it on your mind?",
            "Is this about life in general, or something specific that's happening right now?",
        ],
    ),
    ("whatever", &[]),
];

/// Short-input special cases, checked in order; the first match wins.
pub const SHORT_INPUT_RULES: &[(super::ShortInputMatch, &str)] = &[
    (
        super::ShortInputMatch::Contains("overwhelm"),
        "That sounds like a lot. Is it work, relationships, or life in general that's piling up?",
    ),
    (
        super::ShortInputMatch::Exact("just life"),
        "Life can be a lot sometimes. Is there one part of it that's weighing on you most?",
    ),
    (
        super::ShortInputMatch::Exact("fine"),
        "When you say fine, do you mean things are genuinely okay, or just fine enough to get by?",
    ),
    (
        super::ShortInputMatch::Contains("wdym"),
        "Sorry if that was unclear! Which part should I explain differently?",
    ),
];
