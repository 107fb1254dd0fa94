//! Label-wise helpers for fully-qualified, dot-terminated domain names.
//!
//! Zone containment is a suffix match on labels, not on strings:
//! `time.example.com.` is inside `example.com.` but `notexample.com.` is not.

/// Iterate the labels of an FQDN, left to right, skipping the empty root label.
fn labels(name: &str) -> impl DoubleEndedIterator<Item = &str> {
    name.strip_suffix('.')
        .unwrap_or(name)
        .split('.')
        .filter(|label| !label.is_empty())
}

/// Number of labels in `name` (the root label does not count).
pub fn label_count(name: &str) -> usize {
    labels(name).count()
}

/// The leftmost label of `name`, if it has one.
pub fn leftmost_label(name: &str) -> Option<&str> {
    labels(name).next()
}

/// True when `name` equals `zone` or is a proper subdomain of it.
///
/// Both arguments must already be lowercased; the comparison itself is exact.
pub fn is_subdomain(zone: &str, name: &str) -> bool {
    let mut zone_labels = labels(zone).rev();
    let mut name_labels = labels(name).rev();
    loop {
        match (zone_labels.next(), name_labels.next()) {
            (None, _) => return true,
            (Some(_), None) => return false,
            (Some(z), Some(n)) => {
                if z != n {
                    return false;
                }
            }
        }
    }
}

/// Syntactic FQDN check: dot-terminated, at least one label, no empty inner
/// labels, label length within 63 octets, total length within 255.
pub fn is_valid_fqdn(name: &str) -> bool {
    if name.len() < 2 || name.len() > 255 || !name.ends_with('.') {
        return false;
    }
    let body = &name[..name.len() - 1];
    body.split('.')
        .all(|label| !label.is_empty() && label.len() <= 63)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_count() {
        assert_eq!(label_count("example.com."), 2);
        assert_eq!(label_count("time.example.com."), 3);
        assert_eq!(label_count("."), 0);
    }

    #[test]
    fn test_leftmost_label() {
        assert_eq!(leftmost_label("time.example.com."), Some("time"));
        assert_eq!(leftmost_label("example.com."), Some("example"));
        assert_eq!(leftmost_label("."), None);
    }

    #[test]
    fn test_is_subdomain_exact_match() {
        assert!(is_subdomain("example.com.", "example.com."));
    }

    #[test]
    fn test_is_subdomain_proper_subdomain() {
        assert!(is_subdomain("example.com.", "time.example.com."));
        assert!(is_subdomain("example.com.", "deep.sub.example.com."));
    }

    #[test]
    fn test_is_subdomain_rejects_string_suffix() {
        assert!(!is_subdomain("example.com.", "notexample.com."));
        assert!(!is_subdomain("example.com.", "com."));
    }

    #[test]
    fn test_is_subdomain_unrelated() {
        assert!(!is_subdomain("example.com.", "example.org."));
    }

    #[test]
    fn test_is_valid_fqdn() {
        assert!(is_valid_fqdn("example.com."));
        assert!(is_valid_fqdn("a.b.c.d."));
        assert!(!is_valid_fqdn("example.com"));
        assert!(!is_valid_fqdn(""));
        assert!(!is_valid_fqdn("."));
        assert!(!is_valid_fqdn("example..com."));
    }

    #[test]
    fn test_is_valid_fqdn_label_length() {
        let long_label = "a".repeat(64);
        assert!(!is_valid_fqdn(&format!("{}.com.", long_label)));
        let max_label = "a".repeat(63);
        assert!(is_valid_fqdn(&format!("{}.com.", max_label)));
    }
}
