//! Starter vocabulary
//!
//! Seeded on first run and after a reset.

pub const STARTER_WORDS: &[&str] = &[
    "acrobat", "Adriatic", "ahead", "ahoy", "ajar", "albatross", "alfalfa", "almanac",
    "amicable", "ancestral", "anguish", "anonymously", "answer", "apocalypse",
    "appointment", "archipelago", "aristocracy", "aroma", "artifacts", "asphalt", "asleep",
    "assignment", "atrium", "attacked", "Aubusson", "au revoir", "auxiliary", "avocado",
    "awkward", "baffling", "bait", "baklava", "barricade", "barrette", "basil", "baskets",
    "battlements", "bayonet", "beautician", "before", "begrudge", "beige", "belfry",
    "Berlin", "billowed", "blossoms", "boll weevil", "bombarded", "boulangerie",
    "boutique", "bracken", "brandished", "breakfast", "brilliant", "bronchitis", "brown",
    "bucket", "Buffalo", "bulletin", "burpees", "bursitis", "cadre", "cajolery", "camphor",
    "campaign", "candy", "cannelloni", "careened", "cartwheel", "cavorting", "chandelier",
    "chance", "Charolais", "chartreuse", "chassis", "chignon", "chimneys", "chlorine",
    "chocolate", "circus", "close", "cluster", "colossus", "commotion", "compassionate",
    "compunction", "comrades", "comfy", "concierge", "confreres", "conical", "conjure",
    "conscience", "contentious", "convulsively", "corbels", "coral", "cosmetics",
    "countess", "courier", "courtyard", "cozy", "crawdad", "cravenly", "crematorium",
    "crowd", "curious", "cycads", "cylinders", "dangerous", "deck", "deferential",
    "deflated", "delphine", "democracy", "depots", "dexterity", "dignitaries",
    "dimensional", "dinosaur", "diphtheria", "dirge", "disability", "discipline",
    "discoveries", "dismissal", "dissolving", "distress", "dollop", "draw", "dubious",
    "dulce", "eaten", "ebony", "eccentric", "elephant", "emphatically", "emporium",
    "encourages", "enormous", "ensemble", "enthusiastic", "equations", "equestrian",
    "Erie", "especially", "et cetera", "Everest", "exuberant", "fabulous", "faint",
    "faraway", "farmer", "February", "fiberglass", "fish", "fissures", "fluently", "focus",
    "foreign", "forepaw", "foreseeable", "forest", "formation", "formidable", "fraidycat",
    "fragments", "Frankenstein", "fräulein", "fruit", "frustration", "fugitive", "galleon",
    "gallop", "galore", "gangly", "garbage", "garbled", "garishly", "gaunt", "geranium",
    "giant", "gingham", "gleaned", "goats", "gorgeous", "graffitist", "grimace", "gusto",
    "guttural", "gyroplane", "heater", "hedgehog", "heron", "hesitate", "hibiscus",
    "hippies", "hockey", "hoist", "hold", "hollow", "hors d'oeuvres", "hyperventilated",
    "hypnosis", "hypocritical", "imitation", "immigrants", "incredible", "insects",
    "invincible", "jangle", "jeered", "journey", "junket", "khaki", "Kilimanjaro",
    "kitchen", "lacrosse", "language", "lanky", "lanyards", "lasagna", "latticework",
    "leaning", "leather", "lessons", "lilt", "limbs", "lo mein", "lure", "lurches",
    "lunacy", "lye", "magnanimous", "maître d'", "mango", "manticores", "maquisards",
    "maracas", "marauder", "marquee", "mascot", "melon", "memoirs", "mercantile",
    "mermaid", "message", "milk", "mind", "miniature", "minnows", "misanthrope", "moment",
    "monsoon", "monsieur", "mosque", "moustache", "muffler", "mulberry", "mysterious",
    "nautical", "Nehru", "neon", "nervous", "noggin", "nomad", "nomination", "oblivion",
    "officially", "ominous", "onslaught", "opalescent", "opportunist", "ostracism",
    "Oswego", "paltry", "paparazzi", "parachute", "parchment", "parent", "paste",
    "pâtisserie", "patriarchs", "pediatric", "peppercorn", "perfume", "peroxide",
    "pheromone", "piccolo", "pinioning", "pirates", "pistachio", "pizzeria", "plaid",
    "plaited", "plausible", "pogrom", "pond", "porridge", "prattling", "preamble",
    "precocious", "premises", "prestigious", "proficient", "prognosis", "promenade",
    "propaganda", "prototype", "protégé", "psyche", "puissance", "pumpernickel",
    "quandary", "quilt", "raise", "rakish", "ramshackle", "ratify", "ration", "receipts",
    "receptionist", "recipe", "reclusive", "remind", "renowned", "reprimanding",
    "repugnant", "residuals", "rickety", "riveted", "roam", "rotunda", "ruby", "ruefully",
    "rummage", "safari", "salvaged", "samosas", "sans serif", "sarape", "sardines",
    "satin", "savant", "scavenger", "schema", "scorcher", "scrub", "scrunch", "scurrying",
    "seep", "send", "señor", "sequins", "sharks", "shimmer", "shortcut", "shouting",
    "shuffle", "signal", "silhouette", "silver", "sinister", "sizzling", "skater",
    "skewer", "skirt", "skittish", "slime", "slough", "sluice", "snug", "solemnly",
    "spectators", "spinning", "sporadic", "squalor", "stay", "steeple", "streetlights",
    "stretch", "stucco", "stuck", "studded", "substantially", "sugar", "surprise",
    "suspicious", "swaggering", "swampy", "sweet", "syndrome", "tackle", "taffy", "tag",
    "tail", "talcum", "tamale", "tank", "teeth", "tender", "thesaurus", "tight", "tint",
    "toiletries", "tranquilizer", "traumatic", "trebuchets", "triple", "tuberculosis",
    "tulle", "turnout", "tuxedo", "twigs", "ultimatum", "unfamiliar", "unicorn", "unleash",
    "unparalleled", "unruly", "understand", "vacuum", "valentine", "verdict", "vidimus",
    "vigilance", "wainscoting", "want", "warlock", "weather", "wheels", "whinnying",
    "whittled", "window", "winsome", "wire", "wooden", "woozy", "writing", "yawn",
    "Yiddish", "zeal", "zombielike", "zooming",
];
