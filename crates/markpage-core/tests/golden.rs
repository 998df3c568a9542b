use std::fs;
use std::path::{Path, PathBuf};

use markpage_core::{convert, emit_html};
use pretty_assertions::assert_eq;

#[test]
fn golden_fixtures() -> Result<(), Box<dyn std::error::Error>> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let fixtures_dir = root.join("tests/fixtures");
    let expect_dir = root.join("tests/expect");

    let mut fixtures = collect_fixtures(&fixtures_dir)?;
    fixtures.sort_by(|a, b| file_name(a).cmp(file_name(b)));
    assert!(!fixtures.is_empty(), "no fixtures found in {:?}", fixtures_dir);

    for fixture in fixtures {
        let name = file_stem(&fixture)?;
        let source = fs::read_to_string(&fixture)?;
        let html = emit_html(&source)?;

        let html_path = expect_dir.join(format!("{}.html", name));
        let expected = fs::read_to_string(&html_path)
            .map_err(|err| format!("missing expectation for fixture {}: {}", name, err))?;
        assert_eq!(
            html.trim_end(),
            expected.trim_end(),
            "HTML mismatch for fixture {}",
            name
        );
    }

    Ok(())
}

#[test]
fn rendering_is_deterministic() -> Result<(), Box<dyn std::error::Error>> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    for fixture in collect_fixtures(&root.join("tests/fixtures"))? {
        let source = fs::read_to_string(&fixture)?;
        let first = convert(&source).render()?;
        let second = convert(&source).render()?;
        assert_eq!(first, second, "non-deterministic output for {:?}", fixture);
    }
    Ok(())
}

fn collect_fixtures(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut fixtures = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("md") {
            fixtures.push(path);
        }
    }
    Ok(fixtures)
}

fn file_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("")
}

fn file_stem(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|value| value.to_string())
        .ok_or_else(|| "fixture name is not valid UTF-8".into())
}
