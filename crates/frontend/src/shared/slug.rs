/// URL slug derivation for post/tour/page forms: lowercase, drop punctuation,
/// collapse whitespace and underscores into dashes, trim edge dashes.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();

    let cleaned: String = lowered
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect();

    let mut out = String::with_capacity(cleaned.len());
    let mut pending_dash = false;
    for c in cleaned.chars() {
        if c.is_whitespace() || c == '_' {
            pending_dash = !out.is_empty();
        } else {
            if pending_dash {
                out.push('-');
                pending_dash = false;
            }
            out.push(c);
        }
    }

    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_punctuation_is_dropped() {
        assert_eq!(slugify("What's On: Spring 2026!"), "whats-on-spring-2026");
    }

    #[test]
    fn test_whitespace_and_underscores_collapse() {
        assert_eq!(slugify("  a   b _ c  "), "a-b-c");
    }

    #[test]
    fn test_edge_dashes_are_trimmed() {
        assert_eq!(slugify("-leading and trailing-"), "leading-and-trailing");
        assert_eq!(slugify("***"), "");
    }
}
