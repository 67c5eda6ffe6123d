// Display-form normalization for extracted skills.

/// Title-case a skill string.
///
/// A letter that follows a non-letter (or starts the string) is upper-cased,
/// every other letter is lower-cased. "AWS" becomes "Aws", "ci/cd" becomes
/// "Ci/Cd" and "3d modeling" becomes "3D Modeling".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case("docker"), "Docker");
        assert_eq!(title_case("AWS"), "Aws");
        assert_eq!(title_case("machine LEARNING"), "Machine Learning");
    }

    #[test]
    fn test_title_case_after_punctuation_and_digits() {
        assert_eq!(title_case("ci/cd"), "Ci/Cd");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("3d"), "3D");
    }

    #[test]
    fn test_title_case_idempotent() {
        let once = title_case("KUBERNETES cluster-api");
        assert_eq!(title_case(&once), once);
    }
}
