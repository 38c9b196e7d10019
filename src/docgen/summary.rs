//! Navigation summary snippet generation.
//!
//! One flat markdown list for the whole tree, nesting encoded purely by
//! indentation so an external table-of-contents renderer can splice it in:
//!
//! ```text
//! * [Recipes](reference/recipes/README.md)
//!   * [Java](reference/recipes/java/README.md)
//!     * [Foo](reference/recipes/java/foo.md)
//!     * [Cleanup](reference/recipes/java/cleanup/README.md)
//!       * [Bar](reference/recipes/java/cleanup/bar.md)
//! ```

use crate::docgen::category::{CategoryTree, ROOT_CATEGORY, category_depth, category_title};
use crate::docgen::index_page::INDEX_FILE;
use crate::docgen::recipe_page::finish;

/// Indentation added per nesting level.
const INDENT: &str = "  ";

/// Generate the summary snippet.
///
/// `recipes_dir` is the recipes directory relative to the snippet's own
/// location and prefixes every link. Categories are walked depth-first with
/// children in lexical order, so every category is followed by its own
/// descendants (`java`, `java/cleanup`, then `java-x`).
#[must_use]
pub fn generate_summary(tree: &CategoryTree<'_>, recipes_dir: &str) -> String {
    let mut lines = Vec::new();
    push_category(&mut lines, tree, ROOT_CATEGORY, recipes_dir);
    finish(lines)
}

fn push_category(
    lines: &mut Vec<String>,
    tree: &CategoryTree<'_>,
    category: &str,
    recipes_dir: &str,
) {
    let indent = category_indent(category);
    let index_link = if category.is_empty() {
        format!("{recipes_dir}/{INDEX_FILE}")
    } else {
        format!("{recipes_dir}/{category}/{INDEX_FILE}")
    };
    lines.push(format!(
        "{indent}* [{}]({index_link})",
        category_title(category)
    ));

    for recipe in tree.recipes(category).unwrap_or_default() {
        lines.push(format!(
            "{indent}{INDENT}* [{}]({recipes_dir}/{})",
            recipe.descriptor.display_name,
            recipe.path.document()
        ));
    }

    for child in tree.subcategories(category) {
        let path = if category.is_empty() {
            child.to_string()
        } else {
            format!("{category}/{child}")
        };
        push_category(lines, tree, &path, recipes_dir);
    }
}

/// Root at column zero; a category with `n` separators sits `n + 1` levels in.
fn category_indent(category: &str) -> String {
    if category.is_empty() {
        String::new()
    } else {
        INDENT.repeat(category_depth(category) + 1)
    }
}
