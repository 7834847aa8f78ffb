//! Built-in slang table.

use parlance_core::models::SlangCategory::{self, Abbreviation, Expression, Informal};

/// (term, canonical meaning, category). Multi-word entries are scanned in
/// this order when no single token matches.
pub const SLANG: &[(&str, &str, SlangCategory)] = &[
    ("idk", "I don't know", Abbreviation),
    ("tbh", "to be honest", Abbreviation),
    ("imo", "in my opinion", Abbreviation),
    ("ngl", "not gonna lie", Abbreviation),
    ("lol", "laughing out loud", Abbreviation),
    ("lmao", "laughing my ass off", Abbreviation),
    ("brb", "be right back", Abbreviation),
    ("btw", "by the way", Abbreviation),
    ("omg", "oh my god", Abbreviation),
    ("smh", "shaking my head", Abbreviation),
    ("fr", "for real", Abbreviation),
    ("rn", "right now", Abbreviation),
    ("nvm", "never mind", Abbreviation),
    ("ikr", "I know, right?", Abbreviation),
    ("fomo", "fear of missing out", Abbreviation),
    ("irl", "in real life", Abbreviation),
    ("wdym", "what do you mean", Abbreviation),
    ("jk", "just kidding", Abbreviation),
    ("hmu", "hit me up", Abbreviation),
    ("ttyl", "talk to you later", Abbreviation),
    ("tfw", "that feeling when", Abbreviation),
    ("lowkey", "somewhat, quietly", Informal),
    ("highkey", "openly, very much", Informal),
    ("no cap", "no lie, for real", Expression),
    ("it is what it is", "there's nothing that can be done about it", Expression),
    ("touch grass", "go outside and take a break", Expression),
    ("vibe check", "a check on how someone is feeling", Expression),
];
