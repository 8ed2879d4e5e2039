//! Snapshot comparison.

use figsync_tokens::{Category, TokenSnapshot};
use serde::Serialize;

/// Identifiers that changed within one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryDiff {
    pub added: Vec<String>,
    pub updated: Vec<String>,
    pub deleted: Vec<String>,
}

impl CategoryDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.deleted.is_empty()
    }

    pub fn counts(&self) -> ChangeCounts {
        ChangeCounts {
            added: self.added.len(),
            updated: self.updated.len(),
            deleted: self.deleted.len(),
        }
    }
}

/// Number of identifiers per kind of change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeCounts {
    pub added: usize,
    pub updated: usize,
    pub deleted: usize,
}

impl ChangeCounts {
    pub fn total(&self) -> usize {
        self.added + self.updated + self.deleted
    }
}

impl std::ops::Add for ChangeCounts {
    type Output = ChangeCounts;

    fn add(self, other: ChangeCounts) -> ChangeCounts {
        ChangeCounts {
            added: self.added + other.added,
            updated: self.updated + other.updated,
            deleted: self.deleted + other.deleted,
        }
    }
}

/// Per-category changes between two snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diff {
    pub colors: CategoryDiff,
    pub shadows: CategoryDiff,
    pub typography: CategoryDiff,
}

impl Diff {
    pub fn category(&self, category: Category) -> &CategoryDiff {
        match category {
            Category::Colors => &self.colors,
            Category::Shadows => &self.shadows,
            Category::Typography => &self.typography,
        }
    }

    fn category_mut(&mut self, category: Category) -> &mut CategoryDiff {
        match category {
            Category::Colors => &mut self.colors,
            Category::Shadows => &mut self.shadows,
            Category::Typography => &mut self.typography,
        }
    }

    pub fn has_changes(&self) -> bool {
        Category::ALL
            .iter()
            .any(|&category| !self.category(category).is_empty())
    }

    /// Counts summed over every category.
    pub fn counts(&self) -> ChangeCounts {
        Category::ALL
            .iter()
            .map(|&category| self.category(category).counts())
            .fold(ChangeCounts::default(), |sum, counts| sum + counts)
    }
}

/// Classify every identifier in either snapshot.
///
/// Added and updated follow the new snapshot's order; deleted follows the
/// old one. A token is updated when its serialized descriptor differs.
pub fn diff(old: &TokenSnapshot, new: &TokenSnapshot) -> Diff {
    let mut result = Diff::default();

    for category in Category::ALL {
        let before = old.serialized(category);
        let after = new.serialized(category);
        let changes = result.category_mut(category);

        for (id, value) in &after {
            match before.get(id) {
                None => changes.added.push((*id).to_string()),
                Some(previous) if previous != value => {
                    changes.updated.push((*id).to_string())
                }
                Some(_) => {}
            }
        }
        for id in before.keys() {
            if !after.contains_key(id) {
                changes.deleted.push((*id).to_string());
            }
        }

        let counts = changes.counts();
        log::info!(
            "{category}: {} added, {} updated, {} deleted",
            counts.added,
            counts.updated,
            counts.deleted
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use figsync_tokens::{HexColor, Token, TokenKind, TypographyValue};
    use pretty_assertions::assert_eq;

    fn with_colors(colors: &[(&str, &str)]) -> TokenSnapshot {
        let mut snapshot = TokenSnapshot::new();
        for (id, hex) in colors {
            snapshot.global.colors.insert(
                (*id).into(),
                Token::new(HexColor((*hex).into()), TokenKind::Color, *id),
            );
        }
        snapshot
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_old_everything_added() {
        let mut new = with_colors(&[("primary", "#3366cc"), ("secondary", "#ff0000")]);
        new.global.typography.insert(
            "body".into(),
            Token::new(
                TypographyValue {
                    font_family: "Inter".into(),
                    font_size: "1rem".into(),
                    font_weight: 400.0,
                    line_height: 1.0,
                    letter_spacing: "normal".into(),
                },
                TokenKind::Typography,
                "Body",
            ),
        );
        let result = diff(&TokenSnapshot::new(), &new);
        assert_eq!(result.colors.added, ids(&["primary", "secondary"]));
        assert_eq!(result.typography.added, ids(&["body"]));
        for category in Category::ALL {
            assert!(result.category(category).updated.is_empty());
            assert!(result.category(category).deleted.is_empty());
        }
        assert!(result.has_changes());
    }

    #[test]
    fn test_single_color_updated() {
        let old = with_colors(&[("primary", "#3366cc"), ("secondary", "#ff0000")]);
        let new = with_colors(&[("primary", "#3366cd"), ("secondary", "#ff0000")]);
        let result = diff(&old, &new);
        assert_eq!(
            result,
            Diff {
                colors: CategoryDiff {
                    added: vec![],
                    updated: ids(&["primary"]),
                    deleted: vec![],
                },
                ..Diff::default()
            }
        );
    }

    #[test]
    fn test_description_change_is_update() {
        let old = with_colors(&[("primary", "#3366cc")]);
        let mut new = old.clone();
        new.global.colors["primary"].description = "Brand".into();
        assert_eq!(diff(&old, &new).colors.updated, ids(&["primary"]));
    }

    #[test]
    fn test_deleted_in_old_order() {
        let old = with_colors(&[("c", "#000000"), ("a", "#000000"), ("b", "#000000")]);
        let new = with_colors(&[("a", "#000000")]);
        let result = diff(&old, &new);
        assert_eq!(result.colors.deleted, ids(&["c", "b"]));
        assert!(result.colors.added.is_empty());
    }

    #[test]
    fn test_identical_snapshots() {
        let snapshot = with_colors(&[("primary", "#3366cc")]);
        let result = diff(&snapshot, &snapshot);
        assert!(!result.has_changes());
        assert_eq!(result, Diff::default());
    }

    #[test]
    fn test_counts_per_category_and_total() {
        let old = with_colors(&[("a", "#000000"), ("b", "#111111"), ("c", "#222222")]);
        let mut new = with_colors(&[("a", "#000000"), ("b", "#121212"), ("d", "#333333")]);
        new.global.typography.insert(
            "body".into(),
            Token::new(
                TypographyValue {
                    font_family: "Inter".into(),
                    font_size: "1rem".into(),
                    font_weight: 400.0,
                    line_height: 1.0,
                    letter_spacing: "normal".into(),
                },
                TokenKind::Typography,
                "Body",
            ),
        );
        let result = diff(&old, &new);
        assert_eq!(
            result.colors.counts(),
            ChangeCounts {
                added: 1,
                updated: 1,
                deleted: 1,
            }
        );
        assert_eq!(result.shadows.counts(), ChangeCounts::default());
        assert_eq!(
            result.counts(),
            ChangeCounts {
                added: 2,
                updated: 1,
                deleted: 1,
            }
        );
        assert_eq!(result.counts().total(), 4);
    }

    #[test]
    fn test_identical_counts_are_zero() {
        let snapshot = with_colors(&[("primary", "#3366cc")]);
        assert_eq!(diff(&snapshot, &snapshot).counts().total(), 0);
    }

    #[test]
    fn test_serialized_shape() {
        let result = diff(&TokenSnapshot::new(), &with_colors(&[("primary", "#3366cc")]));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["colors"]["added"][0], "primary");
        assert_eq!(json["shadows"]["deleted"], serde_json::json!([]));
    }
}
