//! Recipes-by-tag page generation.

use std::collections::BTreeMap;

use crate::docgen::category::CategorizedRecipe;
use crate::docgen::recipe_page::finish;

/// Generate the recipes-by-tag page, or `None` if no recipe has tags.
///
/// Tags are sorted; recipes under each tag keep catalog order. Links are
/// prefixed with `link_prefix`, the recipes directory as seen from the
/// page (`recipes` for `reference/recipes-by-tag.md`).
#[must_use]
pub fn generate_tag_index(recipes: &[CategorizedRecipe<'_>], link_prefix: &str) -> Option<String> {
    let mut by_tag: BTreeMap<&str, Vec<&CategorizedRecipe<'_>>> = BTreeMap::new();
    for recipe in recipes {
        for tag in &recipe.descriptor.tags {
            by_tag.entry(tag.as_str()).or_default().push(recipe);
        }
    }

    if by_tag.is_empty() {
        return None;
    }

    let mut sections = vec!["# Recipes by tag".to_string(), String::new()];
    for (tag, tagged) in by_tag {
        sections.push(format!("### {tag}"));
        sections.push(String::new());
        for recipe in tagged {
            sections.push(format!(
                "* [{}]({link_prefix}/{})",
                recipe.descriptor.display_name,
                recipe.path.document()
            ));
        }
        sections.push(String::new());
    }

    Some(finish(sections))
}
