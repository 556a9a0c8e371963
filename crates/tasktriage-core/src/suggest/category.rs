//! Category inference.

/// Ordered keyword -> category table. Iteration order is the priority among
/// overlapping keywords, so this stays a slice rather than a map.
const CATEGORY_KEYWORDS: &[(&str, &str)] = &[
    ("email", "Communication"),
    ("inbox", "Communication"),
    ("meeting", "Meetings"),
    ("schedule", "Meetings"),
    ("report", "Work"),
    ("assignment", "Work"),
    ("deploy", "DevOps"),
    ("bug", "Bugfix"),
    ("shopping", "Personal"),
    ("groceries", "Personal"),
];

/// Return the category of the first table keyword found in `text`
/// (substring match against the lowercased text), or `None`.
pub fn infer_category(text: &str) -> Option<&'static str> {
    let text = text.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|&&(keyword, _)| text.contains(keyword))
        .map(|&(_, category)| category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_table_match_wins() {
        // "deploy" precedes "bug" in the table
        assert_eq!(infer_category("deploy the bug fix"), Some("DevOps"));
        // "email" precedes "meeting"
        assert_eq!(infer_category("meeting about the email backlog"), Some("Communication"));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(infer_category("GROCERIES run"), Some("Personal"));
    }

    #[test]
    fn match_is_substring_based() {
        // "meeting" matches inside "meetings"
        assert_eq!(infer_category("too many meetings"), Some("Meetings"));
    }

    #[test]
    fn unknown_text_has_no_category() {
        assert_eq!(infer_category("water the plants"), None);
        assert_eq!(infer_category(""), None);
    }
}
