//! Built-in context rules: (pattern, label, confidence weight).
//!
//! Table order only matters between rules of equal weight.

pub const CONTEXT_RULES: &[(&str, &str, f64)] = &[
    (
        r"\b(deadlines?|boss|coworkers?|office|meetings?|my job|at work|work|promotion|fired|layoffs?)\b",
        "work_stress",
        0.8,
    ),
    (
        r"\b(exams?|tests?|homework|assignments?|grades?|finals|school|college|class|studying)\b",
        "academic_pressure",
        0.8,
    ),
    (
        r"\b(boyfriend|girlfriend|partner|husband|wife|breakup|broke up|divorce|dating|crush)\b",
        "relationship",
        0.85,
    ),
    (
        r"\b(mom|dad|mother|father|parents?|sister|brother|family|siblings?)\b",
        "family",
        0.75,
    ),
    (
        r"\b(died|passed away|funeral|grieving|grief|lost my)\b",
        "grief",
        0.9,
    ),
    (
        r"\b(lonely|alone|isolated|no friends|no one to talk)\b",
        "loneliness",
        0.85,
    ),
    (
        r"\b(sick|doctor|hospital|pain|headache|diagnosis|health|illness)\b",
        "health",
        0.8,
    ),
    (
        r"\b(can'?t sleep|insomnia|tired|exhausted|no energy|burn(ed|t)? out)\b",
        "fatigue",
        0.65,
    ),
    (
        r"\b(code|coding|bugs?|programs?|programming|compile|compiler|errors?|functions?)\b",
        "coding_help",
        0.7,
    ),
    (
        r"\b(stress|stressed|stressful|anxious|anxiety|overwhelm(ed|ing)?|pressure|panic)\b",
        "emotional_distress",
        0.6,
    ),
    (
        r"\b(birthday|celebrate|celebrating|got the job|passed|engaged|graduated)\b",
        "celebration",
        0.75,
    ),
    (
        r"\b(movies?|games?|music|books?|shows?|hobby|hobbies)\b",
        "casual_interests",
        0.5,
    ),
    (r"^(hi|hello|hey|yo|sup)\b", "greeting", 0.4),
];
