//! Positional message templates (`%1`, `%2`, ...)

/// Substitute `%1`, `%2`, ... in `template` with `args`, left to right.
///
/// Every occurrence of a placeholder is replaced. Substitution is sequential,
/// so `%1` also matches the head of `%10`. Placeholders without a matching
/// argument are left as written.
pub fn get_text<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    let mut text = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        text = text.replace(&format!("%{}", i + 1), arg.as_ref());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_placeholder() {
        assert_eq!(
            get_text("Invalid color: %1", &["notacolor"]),
            "Invalid color: notacolor"
        );
    }

    #[test]
    fn test_repeated_and_ordered_placeholders() {
        assert_eq!(get_text("%2 then %1, again %1", &["a", "b"]), "b then a, again a");
    }

    #[test]
    fn test_missing_argument_stays_literal() {
        assert_eq!(get_text("%1 and %2", &["x"]), "x and %2");
    }

    #[test]
    fn test_no_arguments() {
        let args: [&str; 0] = [];
        assert_eq!(get_text("plain %1", &args), "plain %1");
    }

    #[test]
    fn test_sequential_substitution_touches_two_digit_placeholders() {
        let args = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
        // %10 is hit by the %1 pass first
        assert_eq!(get_text("%10", &args), "a0");
    }
}
