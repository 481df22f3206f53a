//! Character-class predicates for script-restricted fields.
//!
//! All three predicates test every character of the string and reject the
//! empty string.

use std::sync::LazyLock;

use regex::Regex;

/// Hiragana, katakana, the prolonged sound mark, CJK ideographs and 々.
static FULL_WIDTH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\x{3041}-\x{3096}\x{309D}\x{309E}\x{30A1}-\x{30F7}\x{30FC}\x{4E00}-\x{9FA5}\x{3005}]+$")
        .expect("Invalid full-width regex")
});

/// Full-width katakana (ヰ and ヱ excluded) and the prolonged sound mark.
static KATAKANA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\x{30A1}-\x{30EF}\x{30F2}-\x{30F7}\x{30FC}]+$").expect("Invalid katakana regex")
});

/// Full-width punctuation accepted in free-text fields.
const FULL_WIDTH_SYMBOLS: &str = "！”＃＄％＆’（）＊＋，−．／：；＜＝＞？＠［￥］＾＿｀｛｜｝〜。、・「」";

/// ASCII punctuation accepted in free-text fields (backslash excluded).
const ASCII_SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[]^_`{|}~"##;

/// Half-width (JIS X 0201) punctuation: ｡ ､ ･ ｢ ｣
const HALF_WIDTH_SYMBOLS: &str = "｡､･｢｣";

/// Full-width Japanese script only (names).
pub fn is_full_width(value: &str) -> bool {
    FULL_WIDTH_REGEX.is_match(value)
}

/// Full-width katakana only (kana readings).
pub fn is_katakana(value: &str) -> bool {
    KATAKANA_REGEX.is_match(value)
}

/// Mixed full/half-width text accepted for addresses and company names.
pub fn is_valid_chars(value: &str) -> bool {
    !value.is_empty() && value.chars().all(is_valid_char)
}

fn is_valid_char(c: char) -> bool {
    matches!(
        c,
        // hiragana, ゝ ゞ, katakana, ー
        '\u{3041}'..='\u{3096}'
            | '\u{309D}'
            | '\u{309E}'
            | '\u{30A1}'..='\u{30F7}'
            | '\u{30FC}'
            // half-width katakana ｱ..ﾝ
            | '\u{FF71}'..='\u{FF9D}'
            // CJK ideographs, 々
            | '\u{4E00}'..='\u{9FA5}'
            | '\u{3005}'
            // full-width digits and latin letters, ideographic space
            | '\u{FF10}'..='\u{FF19}'
            | '\u{FF21}'..='\u{FF3A}'
            | '\u{FF41}'..='\u{FF5A}'
            | '\u{3000}'
            | ' '
    ) || c.is_ascii_alphanumeric()
        || ASCII_SYMBOLS.contains(c)
        || FULL_WIDTH_SYMBOLS.contains(c)
        || HALF_WIDTH_SYMBOLS.contains(c)
}
