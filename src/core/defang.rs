//! Address defanging: `.` becomes `[.]` so the address no longer resolves
//! or renders as a link.

pub const SEPARATOR: char = '.';
pub const DEFANGED_SEPARATOR: &str = "[.]";

/// Replace every `.` in `address` with `[.]`.
///
/// Accepts any string. No format checks are made.
///
/// ```
/// use defang_ip::defang_ip_addr;
///
/// assert_eq!(defang_ip_addr("255.100.50.0"), "255[.]100[.]50[.]0");
/// ```
pub fn defang_ip_addr(address: &str) -> String {
    defang_with_count(address).0
}

/// Same as [`defang_ip_addr`], also returning how many separators were replaced.
pub fn defang_with_count(address: &str) -> (String, usize) {
    let dots = address.matches(SEPARATOR).count();
    let mut defanged = String::with_capacity(address.len() + 2 * dots);

    for c in address.chars() {
        if c == SEPARATOR {
            defanged.push_str(DEFANGED_SEPARATOR);
        } else {
            defanged.push(c);
        }
    }

    (defanged, dots)
}

/// Undo [`defang_ip_addr`]: every `[.]` becomes `.` again.
pub fn refang_ip_addr(address: &str) -> String {
    refang_with_count(address).0
}

pub fn refang_with_count(address: &str) -> (String, usize) {
    let count = address.matches(DEFANGED_SEPARATOR).count();
    (address.replace(DEFANGED_SEPARATOR, "."), count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defang_examples() {
        assert_eq!(defang_ip_addr("1.1.1.1"), "1[.]1[.]1[.]1");
        assert_eq!(defang_ip_addr("255.100.50.0"), "255[.]100[.]50[.]0");
    }

    #[test]
    fn test_defang_empty_and_dotless() {
        assert_eq!(defang_ip_addr(""), "");
        assert_eq!(defang_ip_addr("localhost"), "localhost");
        assert_eq!(defang_ip_addr("::1"), "::1");
    }

    #[test]
    fn test_defang_replaces_every_dot() {
        assert_eq!(defang_ip_addr("..."), "[.][.][.]");
        assert_eq!(defang_ip_addr(".a."), "[.]a[.]");
        assert_eq!(defang_ip_addr("evil.example.com"), "evil[.]example[.]com");
    }

    #[test]
    fn test_defang_keeps_multibyte_text() {
        assert_eq!(defang_ip_addr("位址.1"), "位址[.]1");
    }

    #[test]
    fn test_defang_with_count() {
        let (out, n) = defang_with_count("10.0.0.1");
        assert_eq!(out, "10[.]0[.]0[.]1");
        assert_eq!(n, 3);

        let (out, n) = defang_with_count("");
        assert!(out.is_empty());
        assert_eq!(n, 0);
    }

    #[test]
    fn test_refang() {
        assert_eq!(refang_ip_addr("1[.]1[.]1[.]1"), "1.1.1.1");
        assert_eq!(refang_with_count("a[.]b").1, 1);
        assert_eq!(refang_ip_addr("no brackets"), "no brackets");
        assert_eq!(refang_ip_addr(&defang_ip_addr("a.[.]b")), "a.[.]b");
    }
}
