// Named lexical categories for the gaming-comment exclusion vocabulary.
//
// Each category is a separate constant (not one flat list) so a caller can
// audit *why* a token is excluded, and so the optional categories can be
// toggled without editing the category contents. All tokens are lowercase;
// multi-word phrases use underscores, matching the upstream tokenizer.
//
// Categories are disjoint in intent but may overlap in membership ("zelda"
// is both a character and a franchise). The aggregator collapses overlap
// via set semantics.

/// Generic chat and filler terms — carry no topic signal in any corpus.
pub const GENERIC_CHAT: &[&str] = &[
    "video", "game", "online", "youtube", "series", "pls", "lol", "omg", "xd",
    "people", "thing", "play", "playing", "make", "time", "love", "look", "want",
    "think", "watch", "know", "got", "use", "cant", "going", "never", "ever",
    "part", "help", "played", "getting", "doesnt", "bad", "pretty", "show",
    "fuck", "shit", "talk", "went", "comment", "cool", "amazing", "seen", "best",
    "like", "get", "one", "dont", "would", "first", "really", "see", "also",
    "way", "guy", "good", "say", "back", "much", "still", "even", "man", "thats",
    "need", "bro", "new", "kid", "every", "always", "could", "said", "please",
    "youre", "actually", "didnt", "feel", "ive", "dude", "name", "keep", "gon",
    "watching", "everyone", "hey", "someone", "made", "come", "great", "give",
    "well", "fun", "nice", "let", "right", "day", "friend", "thought", "work",
    "mean", "take", "vid", "lmao", "lot", "god", "something", "hope", "put",
    "cause", "literally", "since", "next", "hate", "used", "saying", "funny",
    "many", "vids", "tbh", "wtf", "ngl", "hell", "thank", "thanks", "maybe",
    "already", "oh", "real", "whole", "two", "old", "hour", "minute", "top",
    "last", "final", "big", "small", "long", "short", "fast", "slow", "soon",
    "later", "yeah", "yall", "wanna", "wont", "idk", "guess", "sometimes",
    "isnt", "easy", "point", "almost", "behind", "beginning", "true", "sure",
    "place", "reason", "whats", "talking", "hello", "hi",
];

/// YouTube/streaming platform metadata terms.
pub const PLATFORM_TERMS: &[&str] = &[
    "view", "stream", "watched", "bruh", "tho", "thumbnail", "sub", "channel",
    "content", "clip",
];

/// Gaming content creator names.
pub const CREATOR_NAMES: &[&str] = &[
    "ninja", "sypher", "sypherpk", "nick", "nickeh", "nickeh30", "nick_eh",
    "shroud", "jonas", "zylbrad", "brad", "arin", "dan", "delirious", "sunless",
    "sunlesskhan", "drake", "papa_moon", "papamoon",
];

/// In-game character names. Optional: excluded by default, but kept out of
/// the exclusion set when the analysis goal is narrative topics.
pub const CHARACTER_NAMES: &[&str] = &[
    // Red Dead Redemption 2
    "arthur", "john", "dutch", "micah", "hosea", "sadie", "abigail", "sean",
    "lenny", "javier", "bill", "charles", "pearson", "strauss", "trelawny",
    // Apex Legends
    "wraith", "pathfinder", "bloodhound", "gibraltar", "lifeline", "caustic",
    "mirage", "octane", "wattson", "crypto", "revenant", "loba", "rampart",
    "horizon", "fuse", "valkyrie", "seer", "ash", "mad_maggie", "newcastle",
    // Valorant
    "jett", "phoenix", "sage", "sova", "viper", "cypher", "reyna", "killjoy",
    "breach", "omen", "raze", "skye", "yoru", "astra", "kayo", "chamber",
    "neon", "fade", "harbor", "gekko",
    // Hollow Knight
    "hornet", "quirrel", "elderbug", "cornifer", "iselda", "myla",
    // Baldur's Gate 3
    "shadowheart", "gale", "astarion", "wyll", "karlach", "laezel",
    // Zelda BOTW
    "zelda", "ganon", "mipha", "daruk", "urbosa", "revali",
    // Other common names that appear
    "todd", "max", "jack",
];

/// Gaming metadata and ranking terms.
pub const GAMING_METADATA: &[&str] = &[
    "ranked", "rank", "season", "matchmaking", "mmr", "elo",
];

/// Additional common words from the extended stopword list, including bigram
/// tokens produced by the upstream phrase detector.
pub const EXTENDED_COMMON: &[&str] = &[
    "can_t", "so_much", "feel_like", "oh_yeah_oh_yeah", "sea_of_thief_sea",
    "of_thief", "wiggle_wiggle_wiggle_wiggle", "episode", "gonna", "anyone",
    "second", "little", "probably", "without", "everything", "another", "year",
    "stuff", "around", "wish", "life", "stop", "wait", "tell", "start", "leave",
    "hear", "saw", "call", "change", "remember", "maybe", "anyway", "already",
    "yet", "still", "even", "also", "else", "whole", "point", "true", "real",
    "finally", "big", "long", "short", "high", "low", "fast", "slow",
    "try", "find", "get", "got", "make", "take", "put", "use", "using", "see",
    "look", "watch", "watching", "know", "think", "say", "said", "want", "need",
];

/// Franchise/game-specific tokens. Optional: kept out of the exclusion set by
/// default so game names remain available for cross-game comparison.
pub const FRANCHISE_TOKENS: &[&str] = &[
    "fortnite", "apex", "valorant", "rocket_league", "dota", "zelda",
    "elden_ring", "hollow_knight", "red_dead_redemption", "red_dead_redemption_2",
    "baldur", "baldur_gate", "baldur_gate_3", "rdr", "rdr2",
];

/// Name → member-slice lookup for every fixed category, in report order.
pub const ALL_CATEGORIES: &[(&str, &[&str])] = &[
    ("generic_chat", GENERIC_CHAT),
    ("platform_terms", PLATFORM_TERMS),
    ("creator_names", CREATOR_NAMES),
    ("character_names", CHARACTER_NAMES),
    ("gaming_metadata", GAMING_METADATA),
    ("extended_common", EXTENDED_COMMON),
    ("franchise_tokens", FRANCHISE_TOKENS),
];
