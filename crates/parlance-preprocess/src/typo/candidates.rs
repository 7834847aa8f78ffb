//! Merged fuzzy-match candidate pool.
//!
//! Correction-table keys and common words live in one list, each tagged with
//! its source. At equal distance a correction-table candidate beats a common
//! word. Within one source the candidate keeping more of the input's letters
//! wins, so a transposition ("stroy") lands on its anagram ("story"). Any
//! remaining tie goes to declaration order.

use std::collections::{HashMap, HashSet};

use crate::distance::levenshtein;

/// Where a candidate came from. Ordering is the tie-break priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CandidateSource {
    CorrectionTable,
    CommonWord,
}

/// A word the fuzzy matcher can land on.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Compared against the input word.
    pub word: String,
    /// Emitted on a match. For common words this is `word` itself.
    pub replacement: String,
    pub source: CandidateSource,
}

#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    pub fn new(corrections: &[(String, String)], common_words: &[String]) -> Self {
        let mut seen = HashSet::new();
        let mut candidates = Vec::with_capacity(corrections.len() + common_words.len());

        for (misspelling, canonical) in corrections {
            if seen.insert((CandidateSource::CorrectionTable, misspelling.as_str())) {
                candidates.push(Candidate {
                    word: misspelling.clone(),
                    replacement: canonical.clone(),
                    source: CandidateSource::CorrectionTable,
                });
            }
        }
        for word in common_words {
            if seen.insert((CandidateSource::CommonWord, word.as_str())) {
                candidates.push(Candidate {
                    word: word.clone(),
                    replacement: word.clone(),
                    source: CandidateSource::CommonWord,
                });
            }
        }

        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Closest candidate within `max_distance`, with its distance.
    ///
    /// Ranking key is `(distance, source, letter gap)`; the first candidate
    /// reaching the minimum key wins.
    pub fn best_match(&self, word: &str, max_distance: usize) -> Option<(&Candidate, usize)> {
        let word_len = word.chars().count();
        let mut best: Option<(&Candidate, (usize, CandidateSource, usize))> = None;

        for candidate in &self.candidates {
            let bound = best.map_or(max_distance, |(_, (d, _, _))| d);
            // Length difference is a lower bound on the distance.
            if candidate.word.chars().count().abs_diff(word_len) > bound {
                continue;
            }

            let distance = levenshtein(word, &candidate.word);
            if distance > max_distance {
                continue;
            }

            let key = (distance, candidate.source, letter_gap(word, &candidate.word));
            if best.map_or(true, |(_, current)| key < current) {
                best = Some((candidate, key));
                if key == (0, CandidateSource::CorrectionTable, 0) {
                    break;
                }
            }
        }

        best.map(|(candidate, (distance, _, _))| (candidate, distance))
    }
}

/// Bag distance: letters one word has that the other lacks, counted with
/// multiplicity, taking the larger side. Zero for anagrams.
fn letter_gap(a: &str, b: &str) -> usize {
    let mut counts: HashMap<char, isize> = HashMap::new();
    for c in a.chars() {
        *counts.entry(c).or_default() += 1;
    }
    for c in b.chars() {
        *counts.entry(c).or_default() -= 1;
    }
    let (surplus, deficit) = counts.values().fold((0, 0), |(s, d), &n| {
        if n > 0 {
            (s + n.unsigned_abs(), d)
        } else {
            (s, d + n.unsigned_abs())
        }
    });
    surplus.max(deficit)
}
