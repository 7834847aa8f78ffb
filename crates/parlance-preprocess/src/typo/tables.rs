//! Built-in correction table and common-word pool.

/// Known misspelling → canonical word. Declaration order is the tie-break
/// order among correction candidates at equal distance.
pub const CORRECTIONS: &[(&str, &str)] = &[
    // ── Transpositions and dropped letters ───────────────────────────────
    ("thier", "their"),
    ("teh", "the"),
    ("recieve", "receive"),
    ("definately", "definitely"),
    ("definetly", "definitely"),
    ("becuase", "because"),
    ("becasue", "because"),
    ("wierd", "weird"),
    ("freind", "friend"),
    ("freinds", "friends"),
    ("beleive", "believe"),
    ("realy", "really"),
    ("untill", "until"),
    ("tommorow", "tomorrow"),
    ("tomorow", "tomorrow"),
    ("seperate", "separate"),
    ("occured", "occurred"),
    ("truely", "truly"),
    ("basicly", "basically"),
    ("finaly", "finally"),
    ("wich", "which"),
    ("excercise", "exercise"),
    ("overwelmed", "overwhelmed"),
    ("overwhelmd", "overwhelmed"),
    ("stresed", "stressed"),
    ("anxeity", "anxiety"),
    ("relationshp", "relationship"),
    ("deadine", "deadline"),
    ("probaly", "probably"),
    ("enuff", "enough"),
    ("thnk", "think"),
    // ── Missing apostrophes ──────────────────────────────────────────────
    ("im", "i'm"),
    ("ive", "i've"),
    ("dont", "don't"),
    ("didnt", "didn't"),
    ("doesnt", "doesn't"),
    ("isnt", "isn't"),
    ("wasnt", "wasn't"),
    ("cant", "can't"),
    ("wont", "won't"),
    ("couldnt", "couldn't"),
    ("wouldnt", "wouldn't"),
    ("shouldnt", "shouldn't"),
    ("havent", "haven't"),
    ("youre", "you're"),
    ("theyre", "they're"),
    ("thats", "that's"),
    ("whats", "what's"),
    // ── Texting shorthand ────────────────────────────────────────────────
    ("u", "you"),
    ("ur", "your"),
    ("pls", "please"),
    ("plz", "please"),
    ("thx", "thanks"),
    ("ppl", "people"),
    ("cuz", "because"),
];

/// Frequent words used as the fuzzy-match fallback pool. Letters only.
pub const COMMON_WORDS: &[&str] = &[
    // ── Function words ───────────────────────────────────────────────────
    "about", "above", "after", "again", "against", "also", "always", "another", "anyone",
    "anything", "around", "because", "been", "before", "being", "both", "could", "does",
    "doing", "down", "during", "each", "either", "else", "even", "ever", "every", "everyone",
    "everything", "from", "have", "having", "here", "into", "just", "later", "like", "maybe",
    "more", "most", "much", "must", "never", "next", "nothing", "once", "only", "other",
    "over", "perhaps", "really", "same", "should", "since", "some", "someone", "something",
    "still", "such", "than", "that", "their", "them", "then", "there", "these", "they",
    "thing", "things", "this", "those", "though", "through", "together", "today", "tomorrow",
    "tonight", "very", "were", "what", "when", "where", "which", "while", "whatever", "with",
    "without", "would", "yeah", "your", "yours", "yourself", "myself", "cannot", "until",
    "enough", "already", "actually", "basically", "definitely", "probably", "finally",
    "literally", "seriously", "totally", "truly", "kind", "sort", "okay", "please", "thanks",
    "thank", "hello", "hey", "hi", "sorry",
    // ── Short words ──────────────────────────────────────────────────────
    "am", "an", "as", "at", "be", "by", "do", "go", "he", "if", "in", "is", "it", "me", "my",
    "no", "of", "oh", "ok", "on", "or", "so", "to", "up", "us", "we", "all", "and", "any",
    "are", "but", "can", "did", "get", "got", "had", "has", "her", "him", "his", "how", "its",
    "let", "lot", "may", "not", "now", "off", "one", "our", "out", "own", "see", "she", "too",
    "two", "was", "way", "who", "why", "yes", "yet", "ask", "bit", "end", "far", "few", "put",
    "run", "say", "saw", "set", "try", "use", "man", "mom", "dad", "guy", "guys", "kid", "sky",
    "due", "ago", "age", "eat", "ate", "fun", "new", "old", "top", "win", "lie", "sit", "boy",
    "girl", "men", "job", "yep", "nope", "guess", "away", "grief", "loss", "sample", "stage",
    "stages",
    // ── Common verbs ─────────────────────────────────────────────────────
    "want", "wanted", "need", "needed", "know", "knew", "think", "thought", "feel", "feeling",
    "feels", "felt", "make", "made", "take", "took", "come", "came", "going", "gonna", "give",
    "gave", "tell", "told", "said", "says", "look", "looking", "seem", "seems", "work",
    "working", "worked", "works", "help", "helps", "helped", "helping", "keep", "kept",
    "call", "called", "leave", "left", "lose", "lost", "find", "found", "talk", "talking",
    "tried", "trying", "wonder", "wondering", "believe", "receive", "happen", "happened",
    "happens", "understand", "mean", "means", "meant", "sleep", "sleeping", "study",
    "studying", "cares", "care", "hate", "love", "loved", "miss", "hope", "wish", "stop",
    "start", "started", "finish", "cry", "crying", "handle", "deal", "dealing", "broke",
    "died", "passed", "celebrate", "exercise", "forget", "remember", "kill", "killing",
    "dying", "drowning", "sinking", "burning", "occurred", "separate",
    // ── Nouns ────────────────────────────────────────────────────────────
    "life", "time", "people", "person", "friend", "friends", "family", "parents", "mother",
    "father", "sister", "brother", "partner", "boyfriend", "girlfriend", "husband", "wife",
    "relationship", "relationships", "breakup", "divorce", "boss", "coworker", "coworkers",
    "office", "meeting", "deadline", "deadlines", "project", "job", "career", "promotion",
    "school", "class", "exam", "exams", "test", "homework", "grade", "grades", "college",
    "code", "coding", "program", "programming", "function", "error", "errors", "bug",
    "bugs", "compile", "computer", "doctor", "hospital", "pain", "headache", "health",
    "birthday", "party", "money", "rent", "bills", "home", "house", "world", "heart",
    "mind", "head", "body", "week", "weekend", "night", "morning", "year", "years", "day",
    "days", "stuff", "question", "answer", "problem", "problems", "idea", "reason",
    "anxiety", "stress", "pressure", "funeral", "game", "games", "music", "movie", "book",
    "food", "dinner", "lunch", "weather", "phone", "message", "dog", "cat", "government",
    "environment",
    // ── Adjectives ───────────────────────────────────────────────────────
    "good", "great", "fine", "nice", "okay", "bad", "better", "best", "worse", "worst",
    "happy", "sad", "angry", "upset", "tired", "exhausted", "stressed", "anxious", "worried",
    "scared", "afraid", "lonely", "alone", "isolated", "overwhelmed", "overwhelming",
    "busy", "sick", "weird", "strange", "funny", "hard", "easy", "difficult", "important",
    "little", "small", "big", "huge", "new", "old", "real", "true", "right", "wrong", "sure",
    "serious", "excited", "proud", "calm", "awesome", "amazing", "terrible", "horrible",
    "different", "whole", "entire", "complete", "mild", "warm", "cold", "blue", "green",
    "dark", "bright", "quiet", "loud", "early", "late", "fast", "slow", "free", "full",
    "empty", "simple", "honest", "kidding", "normal", "ready", "stuck", "broken", "heavy",
    // ── Everyday vocabulary ──────────────────────────────────────────────
    "lots", "story", "stories", "shade", "taxes", "water", "coffee", "city", "town", "road",
    "trip", "travel", "holiday", "vacation", "class", "teacher", "student", "students",
    "team", "company", "manager", "client", "clients", "email", "emails", "chat", "text",
    "group", "plan", "plans", "goal", "goals", "change", "choice", "future", "past",
    "moment", "minute", "minutes", "hour", "hours", "month", "months", "place", "room",
    "window", "door", "table", "chair", "clothes", "shoes", "car", "train", "plane",
    "kids", "baby", "child", "children", "friendship", "advice", "support", "chance",
    "lately", "recently", "anymore", "somehow", "anyway", "instead", "almost", "enough",
    "shall", "might", "will", "would", "wonderful", "lovely", "terrified", "nervous",
    "annoyed", "frustrated", "confused", "grateful", "hopeful", "bored", "jealous",
    "guilty", "ashamed", "embarrassed", "relieved", "pumped", "vent", "venting", "fire",
    "cats", "dogs", "pets", "raining", "rain", "snow", "sunny", "cold", "warm", "hot",
    "weird", "crazy", "drive", "driving", "explain", "maybe", "movie", "movies", "show",
    "shows", "song", "songs", "band", "concert", "party", "dinner", "lunch", "breakfast",
    // ── Inflections and frequent forms ───────────────────────────────────
    "keeps", "last", "nobody", "texts", "yelling", "honestly", "failed", "fail", "pass",
    "studied", "finished", "stopped", "calling", "asked", "asking", "telling", "saying",
    "thinking", "looked", "played", "playing", "talked", "walked", "walking", "waited",
    "waiting", "liked", "hated", "missed", "missing", "losing", "won", "winning", "everybody",
    "somebody", "anybody", "nowhere", "usually", "sometimes", "often", "although", "unless",
    "across", "between", "behind", "beside", "under", "onto", "upon", "gets", "getting",
    "goes", "comes", "coming", "makes", "making", "takes", "taking", "gives", "giving",
    "keeping", "knows", "knowing", "meaning", "seemed", "happening", "understood", "forgot",
    "learn", "learned", "learning", "teach", "wrote", "write", "writing", "read", "reading",
    "watch", "watched", "watching", "listen", "listening", "hear", "heard", "guitar", "piano",
    "sports", "soccer", "football", "basketball", "books", "yesterday", "evening", "afternoon",
    "wedding", "graduation", "interview", "raise", "stomach", "awake", "grandma", "grandpa",
    "cousin", "aunt", "uncle", "inside", "falling", "invite", "invited", "apart", "focus",
    "worry", "worrying", "moved", "move", "moving", "throwing", "recursion", "script", "python",
];
