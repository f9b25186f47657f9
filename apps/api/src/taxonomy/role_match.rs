//! Resolves a free-text target role ("ML engineer", "frontend dev") to a
//! canonical catalog role name.

/// Whole-word abbreviations expanded before the last matching pass.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("dev", "developer"),
    ("ml", "machine learning"),
    ("fe", "frontend"),
    ("be", "backend"),
];

/// Match order: exact (case-insensitive), containment either way, then
/// containment after abbreviation expansion. Ties go to catalog order.
pub fn match_role(target_role: &str, available_roles: &[String]) -> Option<String> {
    let target = target_role.trim().to_lowercase();
    if target.is_empty() {
        return None;
    }

    if let Some(role) = available_roles.iter().find(|r| r.to_lowercase() == target) {
        return Some(role.clone());
    }

    if let Some(role) = find_containing(&target, available_roles) {
        return Some(role);
    }

    let expanded = expand_abbreviations(&target);
    if expanded != target {
        return find_containing(&expanded, available_roles);
    }

    None
}

fn find_containing(target: &str, available_roles: &[String]) -> Option<String> {
    available_roles
        .iter()
        .find(|r| {
            let role = r.to_lowercase();
            role.contains(target) || target.contains(role.as_str())
        })
        .cloned()
}

fn expand_abbreviations(target: &str) -> String {
    target
        .split_whitespace()
        .map(|word| {
            ABBREVIATIONS
                .iter()
                .find(|(short, _)| *short == word)
                .map(|(_, long)| *long)
                .unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
