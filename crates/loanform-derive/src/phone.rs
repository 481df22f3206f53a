//! Phone number segmentation.
//!
//! Numbers are split into area/carrier prefix, local exchange and subscriber
//! segments. Splits are clamped to the number's length: a short or empty
//! number yields short or empty segments, never an error.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhoneSegments {
    pub prefix: String,
    pub local: String,
    pub subscriber: String,
}

impl PhoneSegments {
    fn split(number: &str, local_start: usize, subscriber_start: usize, end: usize) -> Self {
        Self {
            prefix: slice(number, 0, local_start),
            local: slice(number, local_start, subscriber_start),
            subscriber: slice(number, subscriber_start, end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.local.is_empty() && self.subscriber.is_empty()
    }
}

/// Mobile numbers always split 3+4+4.
pub fn split_mobile(number: &str) -> PhoneSegments {
    PhoneSegments::split(number, 3, 7, 11)
}

/// IP phone numbers (050) split 3+4+4, landlines 3+3+4.
pub fn split_home(number: &str) -> PhoneSegments {
    if slice(number, 0, 3) == "050" {
        PhoneSegments::split(number, 3, 7, 11)
    } else {
        PhoneSegments::split(number, 3, 6, 10)
    }
}

/// Numbers with a `0X0` prefix split 3+4+4, others 3+3+4.
pub fn split_company(number: &str) -> PhoneSegments {
    if has_eleven_digit_prefix(number) {
        PhoneSegments::split(number, 3, 7, 11)
    } else {
        PhoneSegments::split(number, 3, 6, 10)
    }
}

fn has_eleven_digit_prefix(number: &str) -> bool {
    let mut chars = number.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some('0'), Some('1'..='9'), Some('0'))
    )
}

/// Characters `start..end`, clamped to the string.
fn slice(value: &str, start: usize, end: usize) -> String {
    value
        .chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn segments(prefix: &str, local: &str, subscriber: &str) -> PhoneSegments {
        PhoneSegments {
            prefix: prefix.to_string(),
            local: local.to_string(),
            subscriber: subscriber.to_string(),
        }
    }

    #[test]
    fn mobile_split() {
        assert_eq!(split_mobile("09012345678"), segments("090", "1234", "5678"));
    }

    #[test]
    fn home_split_by_prefix() {
        assert_eq!(split_home("05012345678"), segments("050", "1234", "5678"));
        assert_eq!(split_home("0312345678"), segments("031", "234", "5678"));
    }

    #[test]
    fn company_split_by_prefix() {
        assert_eq!(split_company("08012345678"), segments("080", "1234", "5678"));
        assert_eq!(split_company("0312345678"), segments("031", "234", "5678"));
        assert_eq!(split_company("0012345678"), segments("001", "234", "5678"));
    }

    #[test]
    fn short_numbers_are_clamped() {
        assert!(split_mobile("").is_empty());
        assert_eq!(split_home("0312"), segments("031", "2", ""));
        assert_eq!(split_mobile("09"), segments("09", "", ""));
    }

    proptest! {
        #[test]
        fn mobile_segments_rejoin(number in "0[7-9]0[0-9]{8}") {
            let parts = split_mobile(&number);
            prop_assert_eq!(format!("{}{}{}", parts.prefix, parts.local, parts.subscriber), number);
            prop_assert_eq!(parts.local.len(), 4);
            prop_assert_eq!(parts.subscriber.len(), 4);
        }

        #[test]
        fn landline_segments_rejoin(number in "0[1-46-9][0-9]{8}") {
            let parts = split_home(&number);
            prop_assert_eq!(format!("{}{}{}", parts.prefix, parts.local, parts.subscriber), number);
            prop_assert_eq!(parts.local.len(), 3);
        }

        #[test]
        fn any_input_is_split_without_panicking(number in "\\PC{0,20}") {
            let parts = split_company(&number);
            prop_assert!(parts.prefix.chars().count() <= 3);
            prop_assert!(parts.subscriber.chars().count() <= 4);
        }
    }
}
