//! Locale-independent domain vocabulary.
//!
//! Filler words are lorem-ipsum vocabulary, chosen because they rarely form
//! registered second-level domains.
//!
//! The top-level domains are a curated subset of the IANA root zone, not the
//! full delegation list. They cover the country codes and a broad set of
//! generic delegations. Internationalized (`xn--`) entries are left out so
//! every label stays lowercase ASCII alphabetic, as are adult-content labels
//! that make poor fixture data.

/// Words used as the second-level label of generated domains.
pub const FILLER_WORDS: &[&str] = &[
    "a", "ab", "accusamus", "accusantium", "ad", "adipisci", "alias", "aliquam",
    "aliquid", "amet", "animi", "aperiam", "architecto", "asperiores", "aspernatur",
    "assumenda", "at", "atque", "aut", "autem", "beatae", "blanditiis", "commodi",
    "consectetur", "consequatur", "consequuntur", "corporis", "corrupti", "culpa",
    "cum", "cumque", "cupiditate", "debitis", "delectus", "deleniti", "deserunt",
    "dicta", "dignissimos", "distinctio", "dolor", "dolore", "dolorem", "doloremque",
    "dolores", "doloribus", "dolorum", "ducimus", "ea", "eaque", "earum", "eius",
    "eligendi", "enim", "eos", "error", "esse", "est", "et", "eum", "eveniet", "ex",
    "excepturi", "exercitationem", "expedita", "explicabo", "facere", "facilis", "fuga",
    "fugiat", "fugit", "harum", "hic", "id", "illo", "illum", "impedit", "in",
    "incidunt", "inventore", "ipsa", "ipsam", "ipsum", "iste", "itaque", "iure",
    "iusto", "labore", "laboriosam", "laborum", "laudantium", "libero", "magnam",
    "magni", "maiores", "maxime", "minima", "minus", "modi", "molestiae", "molestias",
    "mollitia", "nam", "natus", "necessitatibus", "nemo", "neque", "nesciunt", "nihil",
    "nisi", "nobis", "non", "nostrum", "nulla", "numquam", "obcaecati", "odio", "odit",
    "officia", "officiis", "omnis", "optio", "pariatur", "perferendis", "perspiciatis",
    "placeat", "porro", "possimus", "praesentium", "provident", "quae", "quaerat",
    "quam", "quas", "quasi", "qui", "quia", "quibusdam", "quidem", "quis", "quisquam",
    "quo", "quod", "quos", "ratione", "recusandae", "reiciendis", "rem", "repellat",
    "repellendus", "reprehenderit", "repudiandae", "rerum", "saepe", "sapiente", "sed",
    "sequi", "similique", "sint", "sit", "soluta", "sunt", "suscipit", "tempora",
    "tempore", "temporibus", "tenetur", "totam", "ullam", "unde", "ut", "vel", "velit",
    "veniam", "veritatis", "vero", "vitae", "voluptas", "voluptate", "voluptatem",
    "voluptates", "voluptatibus", "voluptatum",
];

/// Top-level domains appended to generated domains.
pub const TOP_LEVEL_DOMAINS: &[&str] = &[
    "aaa", "abb", "abbott", "abogado", "ac", "academy", "accountant", "accountants",
    "actor", "ad", "ae", "aero", "af", "ag", "agency", "ai", "airforce",
    "airport", "al", "alsace", "am", "amsterdam", "ao", "apartments", "app", "aq", "ar",
    "archi", "army", "art", "arte", "as", "asia", "associates", "at", "attorney", "au",
    "auction", "audio", "auto", "autos", "aw", "ax", "az", "ba", "baby", "band", "bank",
    "bar", "barcelona", "bargains", "baseball", "basketball", "bayern", "bb", "bd",
    "be", "beauty", "beer", "berlin", "best", "bet", "bf", "bg", "bh", "bi", "bible",
    "bike", "bingo", "bio", "biz", "bj", "black", "blackfriday", "blog", "blue", "bm",
    "bn", "bo", "boats", "bond", "boo", "book", "boston", "boutique", "box", "bq", "br",
    "broker", "brussels", "bs", "bt", "build", "builders", "business", "buzz", "bw",
    "by", "bz", "ca", "cab", "cafe", "cam", "camera", "camp", "capetown", "capital",
    "car", "cards", "care", "career", "careers", "cars", "casa", "cash", "casino",
    "cat", "catering", "cc", "cd", "center", "ceo", "cf", "cg", "ch", "charity", "chat",
    "cheap", "christmas", "church", "ci", "city", "ck", "cl", "claims", "cleaning",
    "click", "clinic", "clothing", "cloud", "club", "cm", "cn", "co", "coach", "codes",
    "coffee", "college", "cologne", "com", "community", "company", "computer", "condos",
    "construction", "consulting", "contact", "contractors", "cooking", "cool", "coop",
    "corsica", "country", "coupons", "courses", "cr", "credit", "creditcard", "cricket",
    "cruises", "cu", "cv", "cw", "cx", "cy", "cymru", "cz", "dance", "date", "dating",
    "de", "deals", "degree", "delivery", "democrat", "dental", "dentist", "design",
    "dev", "diamonds", "diet", "digital", "direct", "directory", "discount", "dj", "dk",
    "dm", "do", "doctor", "dog", "domains", "download", "dubai", "durban", "dz",
    "earth", "ec", "eco", "edu", "education", "ee", "eg", "email", "energy", "engineer",
    "engineering", "enterprises", "equipment", "er", "es", "estate", "et", "eu", "eus",
    "events", "exchange", "expert", "exposed", "express", "fail", "faith", "family",
    "fan", "fans", "farm", "fashion", "fi", "film", "finance", "financial", "fish",
    "fishing", "fit", "fitness", "fj", "fk", "flights", "florist", "flowers", "fly",
    "fm", "fo", "foo", "football", "forsale", "foundation", "fr", "frl", "fun", "fund",
    "furniture", "futbol", "fyi", "ga", "gallery", "game", "games", "garden", "gay",
    "gb", "gd", "ge", "gent", "gf", "gg", "gh", "gi", "gift", "gifts", "gives", "gl",
    "glass", "global", "gm", "gmbh", "gn", "gold", "golf", "gov", "gp", "gq", "gr",
    "graphics", "gratis", "green", "gripe", "group", "gs", "gt", "gu", "guide",
    "guitars", "guru", "gw", "gy", "hamburg", "health", "healthcare", "help",
    "helsinki", "hiphop", "hiv", "hk", "hm", "hn", "hockey", "holdings", "holiday",
    "homes", "horse", "hospital", "host", "hosting", "house", "how", "hr", "ht", "hu",
    "id", "ie", "il", "im", "immo", "immobilien", "in", "inc", "industries", "info",
    "ink", "institute", "insure", "int", "international", "investments", "io", "iq",
    "ir", "irish", "is", "istanbul", "it", "je", "jetzt", "jewelry", "jm", "jo", "jobs",
    "joburg", "jp", "juegos", "kaufen", "ke", "kg", "kh", "ki", "kim", "kitchen",
    "kiwi", "km", "kn", "koeln", "kp", "kr", "kw", "ky", "kyoto", "kz", "la", "land",
    "lat", "law", "lawyer", "lb", "lc", "lease", "legal", "lgbt", "li", "life",
    "lighting", "limited", "limo", "link", "live", "lk", "llc", "loan", "loans", "lol",
    "london", "love", "lr", "ls", "lt", "ltd", "lu", "luxe", "luxury", "lv", "ly", "ma",
    "madrid", "maison", "management", "market", "marketing", "mba", "mc", "md", "me",
    "media", "melbourne", "memorial", "men", "menu", "mg", "mh", "miami", "mil", "mk",
    "ml", "mm", "mn", "mo", "mobi", "moda", "moe", "mom", "money", "monster",
    "mortgage", "moscow", "motorcycles", "mov", "movie", "mp", "mq", "mr", "ms", "mt",
    "mu", "museum", "music", "mv", "mw", "mx", "my", "mz", "na", "nagoya", "name",
    "navy", "nc", "ne", "net", "network", "new", "news", "nexus", "nf", "ng", "ni", "ninja",
    "nl", "no", "np", "nr", "nrw", "nu", "nyc", "nz", "okinawa", "om", "one", "onl",
    "online", "ooo", "org", "organic", "osaka", "pa", "paris", "partners", "parts",
    "party", "pe", "pet", "pf", "pg", "ph", "photo", "photography", "photos", "pics",
    "pictures", "pink", "pizza", "pk", "pl", "place", "plumbing", "plus", "pm", "pn",
    "poker", "pr", "press", "pro", "productions", "promo", "properties",
    "property", "ps", "pt", "pub", "pw", "py", "qa", "quebec", "quest", "racing",
    "radio", "re", "realestate", "realty", "recipes", "red", "rehab", "reise", "reisen",
    "reit", "rent", "rentals", "repair", "report", "republican", "rest", "restaurant",
    "review", "reviews", "rich", "rio", "rip", "ro", "rocks", "rodeo", "rs", "ru",
    "rugby", "run", "rw", "sa", "saarland", "sale", "salon", "sarl", "sb", "sc",
    "school", "schule", "science", "scot", "sd", "se", "security", "services",
    "sg", "sh", "shiksha", "shoes", "shop", "shopping", "show", "si", "singles",
    "site", "sk", "ski", "sl", "sm", "sn", "so", "soccer", "social", "software",
    "solar", "solutions", "soy", "spa", "space", "sport", "sr", "ss", "st", "store",
    "stream", "studio", "study", "style", "su", "sucks", "supplies", "supply",
    "support", "surf", "surgery", "sv", "swiss", "sx", "sy", "sydney", "systems", "sz",
    "taipei", "tattoo", "tax", "taxi", "tc", "td", "team", "tech", "technology", "tel",
    "tennis", "tf", "tg", "th", "theater", "theatre", "tickets", "tienda", "tips",
    "tires", "tirol", "tj", "tk", "tl", "tm", "tn", "to", "today", "tokyo", "tools",
    "top", "tours", "town", "toys", "tr", "trade", "trading", "training", "travel",
    "tt", "tube", "tv", "tw", "tz", "ua", "ug", "uk", "university", "uno", "us", "uy",
    "uz", "va", "vacations", "vc", "ve", "vegas", "ventures", "vet", "vg", "vi",
    "viajes", "video", "villas", "vin", "vip", "vision", "vlaanderen", "vn", "vodka",
    "vote", "voting", "voto", "voyage", "vu", "wales", "wang", "watch", "webcam",
    "website", "wedding", "wf", "wien", "wiki", "win", "wine", "work", "works", "world",
    "ws", "wtf", "xyz", "ye", "yoga", "yokohama", "yt", "za", "zm", "zone",
    "zuerich", "zw",
];
