//! Fixture-driven render tests
//!
//! Every `.json` file in `tests/fixtures/` is rendered with the shared
//! stylesheet and checked for document structure.

use std::fs;
use std::path::Path;

use resume_renderer::{render_with_config, RenderConfig, Stylesheet};

const FIXTURES: &str = "tests/fixtures";

fn fixture_paths() -> Vec<std::path::PathBuf> {
    let mut paths: Vec<_> = fs::read_dir(FIXTURES)
        .expect("fixtures directory should exist")
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    paths
}

fn stylesheet() -> Stylesheet {
    Stylesheet::from_file(&Path::new(FIXTURES).join("resume.css")).expect("stylesheet fixture")
}

fn render_fixture(path: &Path) -> (serde_json::Value, String) {
    let source = fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&source).unwrap();
    let config = RenderConfig::new().with_stylesheet(stylesheet());
    let html = render_with_config(&source, &config)
        .unwrap_or_else(|e| panic!("failed to render {}: {}", path.display(), e));
    (value, html)
}

#[test]
fn test_all_fixtures_render() {
    let paths = fixture_paths();
    assert!(paths.len() >= 3, "expected fixture files in {FIXTURES}");

    for path in paths {
        let (_, html) = render_fixture(&path);
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"), "{}", path.display());
        assert!(html.ends_with("</body>\n</html>"), "{}", path.display());
    }
}

#[test]
fn test_fixtures_are_balanced() {
    for path in fixture_paths() {
        let (_, html) = render_fixture(&path);
        for tag in ["div", "section", "ul", "span"] {
            let opened = html.matches(&format!("<{tag}>")).count()
                + html.matches(&format!("<{tag} ")).count();
            let closed = html.matches(&format!("</{tag}>")).count();
            assert_eq!(opened, closed, "unbalanced <{tag}> in {}", path.display());
        }
    }
}

#[test]
fn test_sections_follow_keys() {
    for path in fixture_paths() {
        let (value, html) = render_fixture(&path);
        assert!(html.contains("<h2>EXPERIENCE</h2>"));
        for (key, heading) in [
            ("projects", "<h2>PROJECTS</h2>"),
            ("education", "<h2>EDUCATION</h2>"),
            ("skills", "<h2>SKILLS</h2>"),
        ] {
            assert_eq!(
                value.get(key).is_some(),
                html.contains(heading),
                "{key} section mismatch in {}",
                path.display()
            );
        }
    }
}

#[test]
fn test_stylesheet_round_trips() {
    let css = stylesheet();
    for path in fixture_paths() {
        let (_, html) = render_fixture(&path);
        assert!(html.contains(&format!("<style>\n{}\n  </style>", css.as_str())));
    }
}

#[test]
fn test_full_fixture_content() {
    let (_, html) = render_fixture(&Path::new(FIXTURES).join("full.json"));

    // GitHub comes from profiles, website on its own line
    assert!(html.contains("<p>grace@example.com ⋄ https://github.com/grace</p>"));
    assert!(html.contains("<p>https://grace.example.com</p>"));

    // Multi-position aggregate range and per-position ranges
    assert!(html.contains(r#"<span class="job-date">June 1949 - Present</span>"#));
    assert!(html.contains("Director of Automatic Programming (January 1954 - Present)"));
    assert!(html.contains("Senior Mathematician (June 1949 - December 1953)"));
    assert_eq!(html.matches("Philadelphia, PA").count(), 1);

    // Highlights are verbatim
    assert!(html.contains("<li>Led the team behind <b>FLOW-MATIC</b></li>"));
    assert!(html.contains("<li>Coined the term \"bug\" & kept the moth</li>"));

    // Single-position entry next to the multi-position one
    assert!(html.contains(r#"<span class="job-date">July 1944 - May 1949</span>"#));

    // Projects: link only when non-empty
    assert_eq!(html.matches(r#"class="project-link""#).count(), 1);

    // Numeric graduation year
    assert!(html.contains(r#"<span class="edu-date">1934</span>"#));
    assert!(html.contains(r#"<div class="edu-degree">PhD in Mathematics</div>"#));

    assert!(html.contains(
        r#"<span class="skills-category">Languages:</span> COBOL, FLOW-MATIC, Assembly"#
    ));
}

#[test]
fn test_sparse_fixture_degrades() {
    let (_, html) = render_fixture(&Path::new(FIXTURES).join("sparse.json"));

    assert!(html.contains("<h1>Alan Turing</h1>"));
    assert!(html.contains("  <div class=\"contact-info\">\n    <p>https://turing.example.org</p>\n  </div>"));
    assert!(html.contains(r#"<span class="job-company">Bletchley Park</span>"#));
    assert!(html.contains(r#"<span class="job-company">NPL</span>"#));
    assert_eq!(html.matches(r#"<span class="job-date"> - </span>"#).count(), 2);
    assert!(html.contains("<h2>SKILLS</h2>"));
}
