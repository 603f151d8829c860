//! 以国家为键的静态表
//!
//! 大部分表以 ISO 3166-1 alpha-2 代码为键；地标表以国家名称为键（与上游 `country` 字段一致）。
//! 每张表只覆盖部分国家，未命中时返回各自的默认值。

use super::LookupTable;

/// 区域指示符号与 ASCII 大写字母的码点差值（'A' → U+1F1E6）
const REGIONAL_INDICATOR_OFFSET: u32 = 127_397;

/// 无法生成国旗时的占位符
pub const FLAG_PLACEHOLDER: &str = "🏳️";

static CONTINENTS: LookupTable<&str> = LookupTable::new(
    &[
        ("US", "🌎 North America"),
        ("CA", "🌎 North America"),
        ("MX", "🌎 North America"),
        ("BR", "🌎 South America"),
        ("AR", "🌎 South America"),
        ("CL", "🌎 South America"),
        ("CO", "🌎 South America"),
        ("PE", "🌎 South America"),
        ("GB", "🌍 Europe"),
        ("DE", "🌍 Europe"),
        ("FR", "🌍 Europe"),
        ("IT", "🌍 Europe"),
        ("ES", "🌍 Europe"),
        ("NL", "🌍 Europe"),
        ("SE", "🌍 Europe"),
        ("NO", "🌍 Europe"),
        ("PL", "🌍 Europe"),
        ("CH", "🌍 Europe"),
        ("IE", "🌍 Europe"),
        ("RU", "🌍 Europe"),
        ("UA", "🌍 Europe"),
        ("CN", "🌏 Asia"),
        ("JP", "🌏 Asia"),
        ("KR", "🌏 Asia"),
        ("IN", "🌏 Asia"),
        ("SG", "🌏 Asia"),
        ("HK", "🌏 Asia"),
        ("TW", "🌏 Asia"),
        ("ID", "🌏 Asia"),
        ("TH", "🌏 Asia"),
        ("VN", "🌏 Asia"),
        ("AE", "🌏 Asia"),
        ("IL", "🌏 Asia"),
        ("TR", "🌏 Asia"),
        ("AU", "🌏 Oceania"),
        ("NZ", "🌏 Oceania"),
        ("ZA", "🌍 Africa"),
        ("NG", "🌍 Africa"),
        ("EG", "🌍 Africa"),
        ("KE", "🌍 Africa"),
        ("MA", "🌍 Africa"),
    ],
    "🌐 Unknown continent",
);

const LANGUAGE_ENTRIES: &[(&str, &[&str])] = &[
    ("US", &["English"]),
    ("CA", &["English", "French"]),
    ("MX", &["Spanish"]),
    ("BR", &["Portuguese"]),
    ("AR", &["Spanish"]),
    ("GB", &["English"]),
    ("IE", &["English", "Irish"]),
    ("DE", &["German"]),
    ("FR", &["French"]),
    ("IT", &["Italian"]),
    ("ES", &["Spanish"]),
    ("NL", &["Dutch"]),
    ("CH", &["German", "French", "Italian", "Romansh"]),
    ("SE", &["Swedish"]),
    ("RU", &["Russian"]),
    ("CN", &["Mandarin Chinese"]),
    ("JP", &["Japanese"]),
    ("KR", &["Korean"]),
    ("IN", &["Hindi", "English"]),
    ("SG", &["English", "Malay", "Mandarin Chinese", "Tamil"]),
    ("AU", &["English"]),
    ("NZ", &["English", "Māori"]),
    ("ZA", &["Zulu", "Xhosa", "Afrikaans", "English"]),
    ("EG", &["Arabic"]),
    ("AE", &["Arabic"]),
];

static LANGUAGES: LookupTable<&[&str]> = LookupTable::new(LANGUAGE_ENTRIES, &["Unknown"]);

static CURRENCIES: LookupTable<&str> = LookupTable::new(
    &[
        ("US", "💵 US Dollar (USD)"),
        ("CA", "🍁 Canadian Dollar (CAD)"),
        ("MX", "Mexican Peso (MXN)"),
        ("BR", "Brazilian Real (BRL)"),
        ("AR", "Argentine Peso (ARS)"),
        ("GB", "💷 Pound Sterling (GBP)"),
        ("DE", "💶 Euro (EUR)"),
        ("FR", "💶 Euro (EUR)"),
        ("IT", "💶 Euro (EUR)"),
        ("ES", "💶 Euro (EUR)"),
        ("NL", "💶 Euro (EUR)"),
        ("IE", "💶 Euro (EUR)"),
        ("CH", "Swiss Franc (CHF)"),
        ("SE", "Swedish Krona (SEK)"),
        ("RU", "Russian Ruble (RUB)"),
        ("CN", "Chinese Yuan (CNY)"),
        ("JP", "💴 Japanese Yen (JPY)"),
        ("KR", "South Korean Won (KRW)"),
        ("IN", "Indian Rupee (INR)"),
        ("SG", "Singapore Dollar (SGD)"),
        ("AU", "Australian Dollar (AUD)"),
        ("NZ", "New Zealand Dollar (NZD)"),
        ("ZA", "South African Rand (ZAR)"),
        ("AE", "UAE Dirham (AED)"),
    ],
    "💰 Unknown currency",
);

static CALLING_CODES: LookupTable<&str> = LookupTable::new(
    &[
        ("US", "+1"),
        ("CA", "+1"),
        ("MX", "+52"),
        ("BR", "+55"),
        ("AR", "+54"),
        ("GB", "+44"),
        ("DE", "+49"),
        ("FR", "+33"),
        ("IT", "+39"),
        ("ES", "+34"),
        ("NL", "+31"),
        ("IE", "+353"),
        ("CH", "+41"),
        ("SE", "+46"),
        ("RU", "+7"),
        ("CN", "+86"),
        ("JP", "+81"),
        ("KR", "+82"),
        ("IN", "+91"),
        ("SG", "+65"),
        ("AU", "+61"),
        ("NZ", "+64"),
        ("ZA", "+27"),
        ("AE", "+971"),
    ],
    "Unknown",
);

static REGIONAL_EMOJI: LookupTable<&str> = LookupTable::new(
    &[
        ("US", "🗽"),
        ("CA", "🍁"),
        ("MX", "🌮"),
        ("BR", "⚽"),
        ("GB", "💂"),
        ("FR", "🥐"),
        ("DE", "🥨"),
        ("IT", "🍕"),
        ("ES", "💃"),
        ("NL", "🌷"),
        ("CH", "🧀"),
        ("JP", "🗾"),
        ("CN", "🐉"),
        ("KR", "🥢"),
        ("IN", "🕌"),
        ("AU", "🦘"),
        ("NZ", "🥝"),
        ("EG", "🐪"),
        ("RU", "🪆"),
    ],
    "🌍",
);

/// 键为国家名称（不是代码）
const LANDMARK_ENTRIES: &[(&str, &[&str])] = &[
    (
        "United States",
        &["Statue of Liberty", "Grand Canyon", "Golden Gate Bridge"],
    ),
    ("Canada", &["Niagara Falls", "CN Tower", "Banff National Park"]),
    ("United Kingdom", &["Big Ben", "Stonehenge", "Tower Bridge"]),
    ("France", &["Eiffel Tower", "Louvre Museum", "Mont Saint-Michel"]),
    (
        "Germany",
        &["Brandenburg Gate", "Neuschwanstein Castle", "Cologne Cathedral"],
    ),
    ("Italy", &["Colosseum", "Leaning Tower of Pisa", "Venice Canals"]),
    ("Spain", &["Sagrada Família", "Alhambra", "Park Güell"]),
    ("Japan", &["Mount Fuji", "Fushimi Inari Shrine", "Tokyo Tower"]),
    ("China", &["Great Wall of China", "Forbidden City", "Terracotta Army"]),
    ("India", &["Taj Mahal", "Qutub Minar", "Golden Temple"]),
    ("Australia", &["Sydney Opera House", "Great Barrier Reef", "Uluru"]),
    ("Brazil", &["Christ the Redeemer", "Iguazu Falls", "Sugarloaf Mountain"]),
    ("Egypt", &["Pyramids of Giza", "Great Sphinx", "Valley of the Kings"]),
    ("Netherlands", &["Rijksmuseum", "Kinderdijk Windmills", "Anne Frank House"]),
];

static LANDMARKS: LookupTable<&[&str]> = LookupTable::new(
    LANDMARK_ENTRIES,
    &["No famous landmarks on record for this country"],
);

pub fn continent(country_code: Option<&str>) -> &'static str {
    CONTINENTS.get(country_code)
}

pub fn languages(country_code: Option<&str>) -> &'static [&'static str] {
    LANGUAGES.get(country_code)
}

pub fn currency(country_code: Option<&str>) -> &'static str {
    CURRENCIES.get(country_code)
}

pub fn calling_code(country_code: Option<&str>) -> &'static str {
    CALLING_CODES.get(country_code)
}

pub fn regional_emoji(country_code: Option<&str>) -> &'static str {
    REGIONAL_EMOJI.get(country_code)
}

pub fn landmarks(country_name: Option<&str>) -> &'static [&'static str] {
    LANDMARKS.get(country_name)
}

/// 两字母国家代码 → 国旗 emoji
///
/// 每个字符（转大写后）的码点加上固定偏移落入区域指示符号区；
/// 代码缺失、为空或偏移后不是合法码点时返回占位符。
pub fn country_flag(country_code: Option<&str>) -> String {
    let Some(code) = country_code.filter(|c| !c.is_empty()) else {
        return FLAG_PLACEHOLDER.to_string();
    };

    code.to_uppercase()
        .chars()
        .map(|c| char::from_u32(c as u32 + REGIONAL_INDICATOR_OFFSET))
        .collect::<Option<String>>()
        .unwrap_or_else(|| FLAG_PLACEHOLDER.to_string())
}
