//! Per-recipe markdown page generation.
//!
//! Layout, each section omitted when empty:
//! - `# <display name>`, the bold qualified name and the italic description
//! - `### Tags`
//! - `### Options`
//! - `### Recipe list` with configured option values
//! - `### Used by`

use std::collections::BTreeSet;

use crate::catalog::{OptionDescriptor, RecipeDescriptor};
use crate::docgen::error::DocsError;
use crate::docgen::path::{PathResolver, RecipePath};

/// A composite recipe that includes the page's recipe.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UsedBy {
    /// Display name of the composite.
    pub display_name: String,
    /// Document path of the composite.
    pub path: RecipePath,
}

/// Generate the markdown page for one recipe.
///
/// `path` is the recipe's own document path; links to nested recipes and
/// to `used_by` composites are made relative to it.
///
/// # Errors
///
/// Returns `DocsError` if a nested recipe's name cannot be resolved.
pub fn generate_recipe_page(
    recipe: &RecipeDescriptor,
    path: &RecipePath,
    resolver: &PathResolver,
    used_by: &BTreeSet<UsedBy>,
) -> Result<String, DocsError> {
    let mut sections = Vec::new();

    sections.push(format!("# {}", recipe.display_name));
    sections.push(String::new());
    sections.push(format!("**{}**  ", escape_underscores(&recipe.name)));
    if let Some(description) = recipe.description_text() {
        sections.push(format!("_{description}_"));
    }
    sections.push(String::new());

    render_tags(&mut sections, recipe);
    render_options(&mut sections, &recipe.options);
    render_recipe_list(&mut sections, recipe, path, resolver)?;
    render_used_by(&mut sections, path, used_by);

    Ok(finish(sections))
}

/// Escape `_` so markdown does not read it as emphasis.
#[must_use]
pub fn escape_underscores(text: &str) -> String {
    text.replace('_', "\\_")
}

fn render_tags(sections: &mut Vec<String>, recipe: &RecipeDescriptor) {
    if recipe.tags.is_empty() {
        return;
    }

    sections.push("### Tags".to_string());
    sections.push(String::new());
    for tag in &recipe.tags {
        sections.push(format!("* {tag}"));
    }
    sections.push(String::new());
}

fn render_options(sections: &mut Vec<String>, options: &[OptionDescriptor]) {
    if options.is_empty() {
        return;
    }

    sections.push("### Options".to_string());
    sections.push(String::new());
    for option in options {
        let marker = if option.required { "!" } else { "" };
        sections.push(format!("* {}: {}{marker}", option.name, option.type_name));
        if let Some(description) = option.description_text() {
            sections.push(format!("  * {description}"));
        }
    }
    sections.push(String::new());
}

fn render_recipe_list(
    sections: &mut Vec<String>,
    recipe: &RecipeDescriptor,
    path: &RecipePath,
    resolver: &PathResolver,
) -> Result<(), DocsError> {
    if !recipe.is_composite() {
        return Ok(());
    }

    sections.push("### Recipe list".to_string());
    sections.push(String::new());
    for nested in &recipe.recipe_list {
        let nested_path = resolver.resolve(&nested.name)?;
        sections.push(format!(
            "* [{}]({})",
            nested.display_name,
            nested_path.link_from(path)
        ));
        // Only configured values; declared-but-unset options are skipped.
        for option in &nested.options {
            if let Some(ref value) = option.value {
                sections.push(format!("  * {}: {value}", option.name));
            }
        }
    }
    sections.push(String::new());
    Ok(())
}

fn render_used_by(sections: &mut Vec<String>, path: &RecipePath, used_by: &BTreeSet<UsedBy>) {
    if used_by.is_empty() {
        return;
    }

    sections.push("### Used by".to_string());
    sections.push(String::new());
    for composite in used_by {
        sections.push(format!(
            "* [{}]({})",
            composite.display_name,
            composite.path.link_from(path)
        ));
    }
    sections.push(String::new());
}

/// Joins lines, dropping trailing blanks, ending with one newline.
pub(crate) fn finish(mut lines: Vec<String>) -> String {
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
