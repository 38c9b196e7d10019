//! Category index (`README.md`) generation.

use std::collections::BTreeSet;

use crate::docgen::category::{CategorizedRecipe, capitalize, category_title};
use crate::docgen::recipe_page::finish;

/// File name of every category index.
pub const INDEX_FILE: &str = "README.md";

/// Generate the index page for one category.
///
/// Direct recipes link by leaf file name, direct subcategories link to
/// their own index. Either section is omitted when empty.
#[must_use]
pub fn generate_index_page(
    category: &str,
    recipes: &[CategorizedRecipe<'_>],
    subcategories: &BTreeSet<&str>,
) -> String {
    let mut sections = vec![format!("# {}", category_title(category))];

    if !recipes.is_empty() {
        sections.push(String::new());
        sections.push("### Recipes".to_string());
        for recipe in recipes {
            sections.push(format!(
                "* [{}]({})",
                recipe.descriptor.display_name,
                recipe.path.file_name()
            ));
        }
    }

    if !subcategories.is_empty() {
        sections.push(String::new());
        sections.push("### Subcategories".to_string());
        for name in subcategories {
            sections.push(format!("* [{}]({name}/{INDEX_FILE})", capitalize(name)));
        }
    }

    finish(sections)
}
