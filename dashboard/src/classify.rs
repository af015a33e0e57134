use asana::types::Project;

/// Name substrings that mark a project as a release. Matching is
/// case-insensitive, pure membership, no scoring.
pub const RELEASE_KEYWORDS: &[&str] = &[
    "release",
    "ep",
    "single",
    "album",
    "[release]",
    "[ep]",
    "[single]",
    "[album]",
];

/// Archived projects are never releases; otherwise the lower-cased name must
/// contain at least one keyword. Substring matching means a name like "EPIC"
/// qualifies via "ep" — that is the historical behavior and is kept as-is.
pub fn is_release_project(project: &Project) -> bool {
    if project.archived {
        return false;
    }

    let name = project.name.to_lowercase();
    RELEASE_KEYWORDS.iter().any(|keyword| name.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str, archived: bool) -> Project {
        Project {
            gid: "1".to_string(),
            name: name.to_string(),
            due_on: None,
            archived,
            owner: None,
            notes: String::new(),
            created_at: None,
        }
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert!(is_release_project(&project("Midnight Parade EP", false)));
        assert!(is_release_project(&project("ALBUM rollout", false)));
        assert!(is_release_project(&project("[Single] B-side", false)));
    }

    #[test]
    fn substring_match_includes_epic() {
        // Known false positive of the substring rule, preserved deliberately.
        assert!(is_release_project(&project("EPIC", false)));
    }

    #[test]
    fn unrelated_names_do_not_match() {
        assert!(!is_release_project(&project("Pineapple", false)));
        assert!(!is_release_project(&project("Merch restock", false)));
    }

    #[test]
    fn archived_projects_are_excluded() {
        assert!(!is_release_project(&project("Debut album", true)));
    }
}
