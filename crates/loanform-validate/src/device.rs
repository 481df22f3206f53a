//! User-agent classification.
//!
//! The engine only needs a device family label, or a rejection when the
//! family cannot be determined. [`UserAgentClassifier`] is the default
//! implementation: an ordered table of patterns in the style of ua-parser's
//! device rules, first match wins.

use std::sync::LazyLock;

use regex::Regex;

/// Result of classifying a user agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceClass {
    Family(String),
    Unclassified,
}

/// Maps a raw user-agent string to a device family.
pub trait DeviceClassifier {
    fn classify(&self, user_agent: &str) -> DeviceClass;
}

impl<F> DeviceClassifier for F
where
    F: Fn(&str) -> DeviceClass,
{
    fn classify(&self, user_agent: &str) -> DeviceClass {
        self(user_agent)
    }
}

pub const SPIDER: &str = "Spider";
pub const IPHONE: &str = "iPhone";
pub const IPAD: &str = "iPad";
pub const IPOD: &str = "iPod";
pub const MAC: &str = "Mac";
pub const GENERIC_SMARTPHONE: &str = "Generic Smartphone";
pub const GENERIC_TABLET: &str = "Generic Tablet";
pub const GENERIC_FEATURE_PHONE: &str = "Generic Feature Phone";

/// Every family [`UserAgentClassifier`] can emit.
pub const FAMILIES: [&str; 8] = [
    SPIDER,
    IPHONE,
    IPAD,
    IPOD,
    MAC,
    GENERIC_SMARTPHONE,
    GENERIC_TABLET,
    GENERIC_FEATURE_PHONE,
];

static DEVICE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)bot\b|crawler|spider|slurp", SPIDER),
        (r"iPhone", IPHONE),
        (r"iPad", IPAD),
        (r"iPod", IPOD),
        (r"Android.*Mobile|Windows Phone|BlackBerry|BB10", GENERIC_SMARTPHONE),
        (r"Android|Kindle|Silk/|PlayBook", GENERIC_TABLET),
        (r"Macintosh", MAC),
        (
            r"(?i)^DoCoMo/|^KDDI-|^(SoftBank|Vodafone|J-PHONE)/|UP\.Browser",
            GENERIC_FEATURE_PHONE,
        ),
    ]
    .into_iter()
    .map(|(pattern, family)| (Regex::new(pattern).expect("Invalid device regex"), family))
    .collect()
});

/// Pattern-table classifier. Desktop browsers other than macOS and
/// unrecognised clients are unclassified.
///
/// A bare family label classifies to itself, so a normalized record can be
/// validated again.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserAgentClassifier;

impl UserAgentClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl DeviceClassifier for UserAgentClassifier {
    fn classify(&self, user_agent: &str) -> DeviceClass {
        if let Some(family) = FAMILIES.iter().find(|family| **family == user_agent) {
            return DeviceClass::Family((*family).to_string());
        }
        DEVICE_PATTERNS
            .iter()
            .find(|(pattern, _)| pattern.is_match(user_agent))
            .map_or(DeviceClass::Unclassified, |(_, family)| {
                DeviceClass::Family((*family).to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(user_agent: &str) -> DeviceClass {
        UserAgentClassifier::new().classify(user_agent)
    }

    #[test]
    fn known_families() {
        let cases = [
            (
                "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
                IPHONE,
            ),
            (
                "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1",
                IPAD,
            ),
            (
                "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36",
                GENERIC_SMARTPHONE,
            ),
            (
                "Mozilla/5.0 (Linux; Android 13; SM-X700) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
                GENERIC_TABLET,
            ),
            (
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15",
                MAC,
            ),
            ("DoCoMo/2.0 P903i(c100;TB;W24H12)", GENERIC_FEATURE_PHONE),
            (
                "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
                SPIDER,
            ),
        ];
        for (user_agent, expected) in cases {
            assert_eq!(
                family(user_agent),
                DeviceClass::Family(expected.to_string()),
                "{user_agent}"
            );
        }
    }

    #[test]
    fn family_labels_classify_to_themselves() {
        for label in FAMILIES {
            assert_eq!(family(label), DeviceClass::Family(label.to_string()), "{label}");
        }
        assert_eq!(family("generic smartphone"), DeviceClass::Unclassified);
    }

    #[test]
    fn unknown_clients_are_unclassified() {
        assert_eq!(family("curl/8.4.0"), DeviceClass::Unclassified);
        assert_eq!(
            family(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
            ),
            DeviceClass::Unclassified
        );
        assert_eq!(family(""), DeviceClass::Unclassified);
    }

    #[test]
    fn family_names_classify_to_themselves() {
        for name in [IPHONE, IPAD, IPOD, SPIDER] {
            assert_eq!(family(name), DeviceClass::Family(name.to_string()));
        }
    }

    #[test]
    fn closures_are_classifiers() {
        let fixed = |_: &str| DeviceClass::Family("Test".to_string());
        assert_eq!(
            fixed.classify("anything"),
            DeviceClass::Family("Test".to_string())
        );
    }
}
