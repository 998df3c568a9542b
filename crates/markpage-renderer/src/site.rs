//! Static site generation: asset copying and content tree rendering.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::error::PageError;
use crate::template::Template;
use crate::Renderer;

const DEFAULT_STYLESHEET: &str = include_str!("../assets/index.css");

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SiteReport {
    pub static_files: usize,
    pub generated: Vec<PathBuf>,
    /// Markdown files skipped because they have no `# ` title.
    pub skipped: Vec<PathBuf>,
}

/// Replaces `dest` with a recursive copy of `src`. Returns the number of files copied.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize, PageError> {
    clear_dir(dest)?;
    copy_dir(src, dest)
}

fn clear_dir(dir: &Path) -> Result<(), PageError> {
    if dir.exists() {
        log::debug!("removing {}", dir.display());
        fs::remove_dir_all(dir).map_err(|err| PageError::io(dir, err))?;
    }
    fs::create_dir_all(dir).map_err(|err| PageError::io(dir, err))
}

fn copy_dir(src: &Path, dest: &Path) -> Result<usize, PageError> {
    fs::create_dir_all(dest).map_err(|err| PageError::io(dest, err))?;
    let mut copied = 0;
    for path in sorted_entries(src)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dest.join(name);
        if path.is_dir() {
            copied += copy_dir(&path, &target)?;
        } else {
            log::debug!("copying {} -> {}", path.display(), target.display());
            fs::copy(&path, &target).map_err(|err| PageError::io(&path, err))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Writes the built-in stylesheet as `index.css` into `out_dir`.
pub fn write_default_assets(out_dir: &Path) -> Result<(), PageError> {
    fs::create_dir_all(out_dir).map_err(|err| PageError::io(out_dir, err))?;
    let path = out_dir.join("index.css");
    fs::write(&path, DEFAULT_STYLESHEET).map_err(|err| PageError::io(&path, err))
}

/// Renders one markdown file to an HTML file, creating parent directories as needed.
pub fn generate_page(from: &Path, dest: &Path, renderer: &Renderer) -> Result<(), PageError> {
    log::info!("generating page {} -> {}", from.display(), dest.display());
    let markdown = fs::read_to_string(from).map_err(|err| PageError::io(from, err))?;
    let page = renderer.render_page(&markdown)?;
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|err| PageError::io(parent, err))?;
    }
    fs::write(dest, page).map_err(|err| PageError::io(dest, err))
}

/// Mirrors every `*.md` file under `content_dir` to an `.html` file under `dest_dir`.
pub fn generate_pages_recursive(
    content_dir: &Path,
    dest_dir: &Path,
    renderer: &Renderer,
) -> Result<SiteReport, PageError> {
    let mut report = SiteReport::default();
    generate_dir(content_dir, dest_dir, renderer, &mut report)?;
    Ok(report)
}

fn generate_dir(
    src: &Path,
    dest: &Path,
    renderer: &Renderer,
    report: &mut SiteReport,
) -> Result<(), PageError> {
    for path in sorted_entries(src)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dest.join(name);
        if path.is_dir() {
            generate_dir(&path, &target, renderer, report)?;
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
            log::debug!("ignoring non-markdown file {}", path.display());
            continue;
        }
        let target = target.with_extension("html");
        match generate_page(&path, &target, renderer) {
            Ok(()) => report.generated.push(target),
            Err(PageError::NoTitleFound) => {
                log::warn!("skipping {}: no `# ` title", path.display());
                report.skipped.push(path);
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// Builds the whole site described by `config`.
///
/// Without a static directory the output is still cleared and receives the built-in
/// stylesheet. Without a template file the built-in template is used.
pub fn build_site(config: &SiteConfig) -> Result<SiteReport, PageError> {
    let static_files = if config.static_dir.is_dir() {
        copy_static(&config.static_dir, &config.output_dir)?
    } else {
        log::warn!(
            "static directory {} not found, writing default stylesheet",
            config.static_dir.display()
        );
        clear_dir(&config.output_dir)?;
        write_default_assets(&config.output_dir)?;
        1
    };

    let template = if config.template.is_file() {
        Template::from_file(&config.template)?
    } else {
        log::warn!(
            "template {} not found, using built-in template",
            config.template.display()
        );
        Template::default()
    };
    let renderer = Renderer::new(template).with_base_path(config.base_path.clone());

    let mut report = generate_pages_recursive(&config.content_dir, &config.output_dir, &renderer)?;
    report.static_files = static_files;
    log::info!(
        "built {} page(s), skipped {}, copied {} static file(s)",
        report.generated.len(),
        report.skipped.len(),
        report.static_files
    );
    Ok(report)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, PageError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|err| PageError::io(dir, err))? {
        let entry = entry.map_err(|err| PageError::io(dir, err))?;
        entries.push(entry.path());
    }
    entries.sort();
    Ok(entries)
}
