mod common;

use std::collections::BTreeMap;

use common::{fixture_path, read};
use recipedoc::catalog::{CatalogProvider, FileCatalog, OptionDescriptor, RecipeDescriptor, StaticCatalog};
use recipedoc::config::{ExistingFiles, GeneratorConfig};
use recipedoc::docgen::{DocsError, PathResolver, generate};

fn foo_and_bar() -> StaticCatalog {
    StaticCatalog::new(vec![
        RecipeDescriptor::new("org.openrewrite.java.Foo", "Foo"),
        RecipeDescriptor::new("org.openrewrite.java.cleanup.Bar", "Bar")
            .with_option(OptionDescriptor::new("maxCount", "int").required()),
    ])
}

#[test]
fn foo_and_bar_produce_nested_tree() {
    let dir = tempfile::tempdir().unwrap();
    let report = generate(&foo_and_bar(), dir.path(), &GeneratorConfig::default()).unwrap();
    let root = dir.path();

    assert_eq!(report.recipes_written, 2);
    assert_eq!(report.categories_written, 3);
    assert_eq!(report.tag_pages_written, 0);

    assert_eq!(
        read(root, "reference/recipes/java/foo.md"),
        "# Foo\n\n**org.openrewrite.java.Foo**  \n"
    );
    assert_eq!(
        read(root, "reference/recipes/java/cleanup/bar.md"),
        "# Bar\n\n**org.openrewrite.java.cleanup.Bar**  \n\n### Options\n\n* maxCount: int!\n"
    );
    assert_eq!(
        read(root, "reference/recipes/java/README.md"),
        "# Java\n\n### Recipes\n* [Foo](foo.md)\n\n### Subcategories\n* [Cleanup](cleanup/README.md)\n"
    );
    assert_eq!(
        read(root, "reference/recipes/java/cleanup/README.md"),
        "# Cleanup\n\n### Recipes\n* [Bar](bar.md)\n"
    );
    assert_eq!(
        read(root, "reference/recipes/README.md"),
        "# Recipes\n\n### Subcategories\n* [Java](java/README.md)\n"
    );
    assert!(!root.join("reference/recipes-by-tag.md").exists());
}

#[test]
fn summary_nests_cleanup_below_java() {
    let dir = tempfile::tempdir().unwrap();
    generate(&foo_and_bar(), dir.path(), &GeneratorConfig::default()).unwrap();

    let summary = read(dir.path(), "SUMMARY_snippet.md");
    assert_eq!(
        summary,
        "* [Recipes](reference/recipes/README.md)\n\
         \x20\x20* [Java](reference/recipes/java/README.md)\n\
         \x20\x20\x20\x20* [Foo](reference/recipes/java/foo.md)\n\
         \x20\x20\x20\x20* [Cleanup](reference/recipes/java/cleanup/README.md)\n\
         \x20\x20\x20\x20\x20\x20* [Bar](reference/recipes/java/cleanup/bar.md)\n"
    );

    let indent = |needle: &str| {
        summary
            .lines()
            .find(|l| l.contains(needle))
            .map(|l| l.len() - l.trim_start().len())
            .unwrap()
    };
    assert_eq!(indent("[Cleanup]"), indent("[Java]") + 2);
}

#[test]
fn rerun_overwrites_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::default();
    generate(&foo_and_bar(), dir.path(), &config).unwrap();

    let renamed = StaticCatalog::new(vec![RecipeDescriptor::new("org.openrewrite.java.Foo", "Foo renamed")]);
    generate(&renamed, dir.path(), &config).unwrap();

    assert_eq!(
        read(dir.path(), "reference/recipes/java/foo.md"),
        "# Foo renamed\n\n**org.openrewrite.java.Foo**  \n"
    );
}

#[test]
fn rerun_fails_when_configured() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        existing_files: ExistingFiles::Fail,
        ..GeneratorConfig::default()
    };
    generate(&foo_and_bar(), dir.path(), &config).unwrap();
    let err = generate(&foo_and_bar(), dir.path(), &config).unwrap_err();
    assert!(matches!(err, DocsError::AlreadyExists { .. }), "got {err}");
}

#[test]
fn unrecognized_namespace_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = FileCatalog::new(fixture_path("foreign_namespace.yaml"));
    let err = generate(&catalog, dir.path(), &GeneratorConfig::default()).unwrap_err();
    match err {
        DocsError::UnrecognizedNamespace { name, prefix } => {
            assert_eq!(name, "com.example.Other");
            assert_eq!(prefix, "org.openrewrite");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn file_catalog_renders_composites_tags_and_used_by() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = FileCatalog::new(fixture_path("catalog.yaml"));
    let report = generate(&catalog, dir.path(), &GeneratorConfig::default()).unwrap();
    let root = dir.path();

    assert_eq!(report.recipes_written, 4);
    assert_eq!(report.tag_pages_written, 1);

    assert_eq!(
        read(root, "reference/recipes/java/spring/boot3/upgradespringboot_3_4.md"),
        "# Upgrade to Spring Boot 3.4\n\n\
         **org.openrewrite.java.spring.boot3.UpgradeSpringBoot\\_3\\_4**  \n\n\
         ### Tags\n\n* spring\n* cleanup\n\n\
         ### Recipe list\n\n\
         * [Bar](../../../java/cleanup/bar.md)\n  * maxCount: 10\n\
         * [Change XML tag value](../../../xml/changetagvalue.md)\n  * elementName: /project/parent/version\n"
    );
    assert!(root.join("reference/recipes/xml/changetagvalue.md").is_file());

    let bar = read(root, "reference/recipes/java/cleanup/bar.md");
    assert!(bar.contains("\n_Caps the number of things._\n"));
    assert!(bar.ends_with(
        "### Used by\n\n* [Upgrade to Spring Boot 3.4](../../java/spring/boot3/upgradespringboot_3_4.md)\n"
    ));

    assert_eq!(
        read(root, "reference/recipes-by-tag.md"),
        "# Recipes by tag\n\n\
         ### cleanup\n\n\
         * [Bar](recipes/java/cleanup/bar.md)\n\
         * [Upgrade to Spring Boot 3.4](recipes/java/spring/boot3/upgradespringboot_3_4.md)\n\n\
         ### spring\n\n\
         * [Upgrade to Spring Boot 3.4](recipes/java/spring/boot3/upgradespringboot_3_4.md)\n"
    );

    assert_eq!(
        read(root, "reference/recipes/java/spring/README.md"),
        "# Spring\n\n### Subcategories\n* [Boot3](boot3/README.md)\n"
    );
}

#[test]
fn json_catalog_matches_yaml_catalog() {
    let json = FileCatalog::new(fixture_path("catalog.json"))
        .list_recipe_descriptors()
        .unwrap();
    let expected = foo_and_bar().list_recipe_descriptors().unwrap();
    assert_eq!(json, expected);
}

#[test]
fn custom_layout_and_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let mut overrides = BTreeMap::new();
    overrides.insert(
        "org.openrewrite.java.cleanup.Bar".to_string(),
        "java/cleanup/bar-limits".to_string(),
    );
    let config = GeneratorConfig {
        recipes_dir: "docs/recipes".to_string(),
        summary_file: "docs/SUMMARY.md".to_string(),
        path_overrides: overrides,
        ..GeneratorConfig::default()
    };
    generate(&foo_and_bar(), dir.path(), &config).unwrap();

    let root = dir.path();
    assert!(root.join("docs/recipes/java/cleanup/bar-limits.md").is_file());
    assert_eq!(
        read(root, "docs/recipes/java/cleanup/README.md"),
        "# Cleanup\n\n### Recipes\n* [Bar](bar-limits.md)\n"
    );
    assert!(read(root, "docs/SUMMARY.md").starts_with("* [Recipes](recipes/README.md)\n"));
}

#[test]
fn every_page_link_points_at_a_generated_file() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = FileCatalog::new(fixture_path("catalog.yaml"));
    let config = GeneratorConfig::default();
    generate(&catalog, dir.path(), &config).unwrap();

    let recipes_root = dir.path().join(&config.recipes_dir);
    let resolver = PathResolver::from_config(&config);
    let mut checked = 0;
    for recipe in catalog.list_recipe_descriptors().unwrap() {
        let document = recipes_root.join(resolver.resolve(&recipe.name).unwrap().document());
        let page_dir = document.parent().unwrap();
        for line in std::fs::read_to_string(&document).unwrap().lines() {
            let Some((_, rest)) = line.split_once("](") else {
                continue;
            };
            let link = rest.trim_end_matches(')');
            assert!(
                page_dir.join(link).is_file(),
                "{} links to missing {link}",
                recipe.name
            );
            checked += 1;
        }
    }
    assert_eq!(checked, 4, "two recipe-list links and two used-by links");
}

#[test]
fn summary_inside_recipes_dir_keeps_links_relative() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = FileCatalog::new(fixture_path("catalog.yaml"));
    let config = GeneratorConfig {
        recipes_dir: "docs".to_string(),
        summary_file: "docs/SUMMARY.md".to_string(),
        ..GeneratorConfig::default()
    };
    generate(&catalog, dir.path(), &config).unwrap();

    let root = dir.path();
    let summary = read(root, "docs/SUMMARY.md");
    assert!(summary.starts_with("* [Recipes](./README.md)\n"), "{summary}");

    for (page, page_dir) in [
        ("docs/SUMMARY.md", root.join("docs")),
        ("docs-by-tag.md", root.to_path_buf()),
    ] {
        let mut links = 0;
        for line in read(root, page).lines() {
            let Some((_, rest)) = line.split_once("](") else {
                continue;
            };
            let link = rest.trim_end_matches(')');
            assert!(!link.starts_with('/'), "{page} has absolute link {link}");
            assert!(page_dir.join(link).is_file(), "{page} links to missing {link}");
            links += 1;
        }
        assert!(links > 0, "{page} has no links");
    }
}

#[test]
fn recipes_colliding_on_case_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = StaticCatalog::new(vec![
        RecipeDescriptor::new("org.openrewrite.java.Foo", "Foo"),
        RecipeDescriptor::new("org.openrewrite.java.FOO", "Shouting foo"),
    ]);
    let err = generate(&catalog, dir.path(), &GeneratorConfig::default()).unwrap_err();
    assert!(matches!(err, DocsError::InvalidPath { ref path, .. } if path == "java/foo"), "got {err}");
    assert!(!dir.path().join("reference/recipes/java/foo.md").exists());
}
