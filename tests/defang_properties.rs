use defang_ip::{defang_ip_addr, defang_with_count, refang_ip_addr};
use proptest::prelude::*;

const PROPTEST_CASES: u32 = 256;

// Dotted-decimal IPv4 addresses
fn ipv4_strategy() -> impl Strategy<Value = String> {
    (0..=255u8, 0..=255u8, 0..=255u8, 0..=255u8)
        .prop_map(|(a, b, c, d)| format!("{}.{}.{}.{}", a, b, c, d))
}

// Free text biased towards dots and brackets
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        ".*",
        "[0-9.\\[\\]]{0,40}",
        "[a-z.]{0,30}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn output_has_no_dots(s in text_strategy()) {
        prop_assert!(!defang_ip_addr(&s).contains('.'));
    }

    #[test]
    fn matches_replace_all(s in text_strategy()) {
        prop_assert_eq!(defang_ip_addr(&s), s.replace('.', "[.]"));
    }

    #[test]
    fn refang_reconstructs_input(s in text_strategy()) {
        prop_assert_eq!(refang_ip_addr(&defang_ip_addr(&s)), s);
    }

    #[test]
    fn replacement_count_equals_dot_count(s in text_strategy()) {
        let dots = s.chars().filter(|&c| c == '.').count();
        let (out, replaced) = defang_with_count(&s);
        prop_assert_eq!(replaced, dots);
        prop_assert_eq!(out.len(), s.len() + 2 * dots);
    }

    #[test]
    fn dotless_input_unchanged(s in "[^.]{0,40}") {
        prop_assert_eq!(defang_ip_addr(&s), s);
    }

    #[test]
    fn ipv4_gets_three_markers(ip in ipv4_strategy()) {
        let defanged = defang_ip_addr(&ip);
        prop_assert_eq!(defanged.matches("[.]").count(), 3);
        prop_assert_eq!(refang_ip_addr(&defanged), ip);
    }
}

#[test]
fn known_examples() {
    assert_eq!(defang_ip_addr("1.1.1.1"), "1[.]1[.]1[.]1");
    assert_eq!(defang_ip_addr("255.100.50.0"), "255[.]100[.]50[.]0");
    assert_eq!(defang_ip_addr(""), "");
}
