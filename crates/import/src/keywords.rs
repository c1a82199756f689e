//! Built-in keyword tables for Norwegian bank statements.
//!
//! Matching is case-insensitive substring containment, so short keywords
//! deliberately over-match ("ice" hits inside "service"); that behaviour is
//! relied on by existing statement data and must not be tightened to
//! word-boundary matching.

pub(crate) const TRANSFER_KEYWORDS: &[&str] = &[
    "overføring",
    "til konto",
    "fra konto",
    "egen konto",
    "dnb",
    "sparekonto",
    "transfer",
];

pub(crate) const INVESTMENT_KEYWORDS: &[&str] = &[
    "nordnet",
    "aksje",
    "fond",
    "etf",
    "sbanken invest",
    "stock",
    "fund",
];

/// Income groups, checked in this order: (subcategory, mid-level category,
/// keywords). Salary, refunds and gifts roll up to `earnings`; benefits and
/// investment returns to `other_income`.
pub(crate) const INCOME_GROUPS: &[(&str, &str, &[&str])] = &[
    (
        "salary",
        "earnings",
        &["lønn", "salary", "utbetaling", "fra arbeidsgiver", "arbeid"],
    ),
    (
        "benefits",
        "other_income",
        &["nav", "stipend", "stønad", "lånekassen", "scholarship"],
    ),
    (
        "refunds",
        "earnings",
        &["refusjon", "tilbakebetaling", "refund", "return"],
    ),
    (
        "gifts",
        "earnings",
        &["gave", "gift", "vipps fra", "vippsbetaling mottatt", "betaling fra"],
    ),
    (
        "investment_returns",
        "other_income",
        &["utbytte", "dividend", "rente", "interest", "avkastning", "return"],
    ),
];

/// Expense groups in evaluation order: (subcategory, parent category,
/// keywords).
pub(crate) const EXPENSE_GROUPS: &[(&str, &str, &[&str])] = &[
    (
        "groceries",
        "daily_living",
        &["kiwi", "bunnpris", "rema", "coop", "meny", "matkroken", "hagkaup", "mega", "joker"],
    ),
    (
        "dining_out",
        "daily_living",
        &[
            "espresso",
            "starbucks",
            "peppes",
            "pizzabakeren",
            "burger",
            "via napoli",
            "mc donalds",
            "kebab",
            "restaurant",
            "kafe",
        ],
    ),
    ("rent", "housing", &["leie", "husleie", "bolig"]),
    (
        "utilities",
        "housing",
        &["strøm", "elinett", "electric", "vann", "water", "renovasjon", "avfall", "kommunale avgifter"],
    ),
    (
        "public_transport",
        "transportation",
        &[
            "ruter",
            "vy",
            "ruterappen",
            "flytoget",
            "t-bane",
            "buss",
            "trikk",
            "tog",
            "train",
            "bus",
            "tram",
        ],
    ),
    ("taxis", "transportation", &["taxi", "bolt", "yango", "uber"]),
    (
        "car",
        "transportation",
        &["bensin", "drivstoff", "fuel", "bomring", "toll", "parkering", "parking", "bilservice", "verksted"],
    ),
    (
        "clothing",
        "shopping",
        &["zara", "h&m", "bikbok", "hm", "weekday", "monki", "cubus", "dress", "klær"],
    ),
    (
        "electronics",
        "shopping",
        &["elkjøp", "power", "komplett", "kjell", "apple store", "samsung"],
    ),
    (
        "home_goods",
        "shopping",
        &["ikea", "clas ohlson", "kid", "princess", "jysk", "nille", "jernia", "søstrene grene"],
    ),
    (
        "medical",
        "health",
        &[
            "lege",
            "legesenter",
            "doctor",
            "tannlege",
            "dentist",
            "fysioterapi",
            "kiropraktor",
            "apotek",
            "pharmacy",
            "vitusapotek",
        ],
    ),
    (
        "selfcare",
        "health",
        &["frisør", "jasmin frisor", "hudpleie", "spa", "massage", "massasje", "salon", "salong"],
    ),
    ("fitness", "health", &["sats", "elixia", "treningssenter", "gym", "trening"]),
    (
        "streaming",
        "entertainment",
        &["spotify", "netflix", "viaplay", "youtube", "hbo", "disney+", "amazon prime"],
    ),
    (
        "events",
        "entertainment",
        &[
            "kino",
            "nordisk film kino",
            "colosseum",
            "event",
            "konsert",
            "concert",
            "teater",
            "theater",
            "billetter",
            "tickets",
        ],
    ),
    (
        "hobbies",
        "entertainment",
        &["bøker", "books", "ark", "norli", "spill", "games", "hobby"],
    ),
    (
        "flights",
        "travel",
        &["sas", "norwegian", "widerøe", "ryanair", "lufthansa", "klm", "flight", "fly"],
    ),
    (
        "hotels",
        "travel",
        &["hotel", "hotell", "airbnb", "booking.com", "hotels.com", "expedia", "overnatting"],
    ),
    (
        "vacation",
        "travel",
        &["tour", "tur", "opplevelse", "experience", "sightseeing"],
    ),
    (
        "telecom",
        "subscriptions",
        &["ice", "telenor", "telia", "mobilabonnement", "phone", "internet", "mobil"],
    ),
    (
        "software",
        "subscriptions",
        &["google", "apple.com/bill", "microsoft", "app store", "play store", "adobe", "icloud"],
    ),
    (
        "insurance",
        "subscriptions",
        &["gjensidige", "if", "tryg", "fremtind", "forsikring", "insurance"],
    ),
];
