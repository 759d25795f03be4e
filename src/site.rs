//! Static site generation around the markdown converter: template
//! substitution, page generation and copying of static assets.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::{extract_title, markdown_to_html};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Fill the first `{{ Title }}` and then the first `{{ Content }}` in
/// `template`. A missing placeholder leaves the template unchanged there.
pub fn substitute(template: &str, title: &str, content: &str) -> String {
    let mut page = template.to_string();
    for (placeholder, value) in [(TITLE_PLACEHOLDER, title), (CONTENT_PLACEHOLDER, content)] {
        if page.contains(placeholder) {
            page = page.replacen(placeholder, value, 1);
        } else {
            warn!("template has no {placeholder} placeholder");
        }
    }
    page
}

/// Point root-relative `href="/` and `src="/` links at `base_path`.
pub fn apply_base_path(html: &str, base_path: &str) -> String {
    if base_path.is_empty() || base_path == "/" {
        return html.to_string();
    }
    html.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}

/// Render one markdown file into `dest` using the HTML template at `template_path`.
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path, base_path: &str) -> Result<()> {
    info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = fs::read_to_string(from).map_err(Error::io(from))?.replace("\r\n", "\n");
    let template = fs::read_to_string(template_path).map_err(Error::io(template_path))?;

    let content = markdown_to_html(&markdown)?;
    let title = extract_title(&markdown)?;
    let page = apply_base_path(&substitute(&template, &title, &content), base_path);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(Error::io(parent))?;
    }
    fs::write(dest, page).map_err(Error::io(dest))
}

/// Every `.md` file under `content_dir`, walked in file-name order.
pub fn markdown_sources(content_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for entry in WalkDir::new(content_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "md") {
            sources.push(path.to_path_buf());
        } else {
            debug!("skipping non-markdown file {}", path.display());
        }
    }
    Ok(sources)
}

/// Generate a page for every `.md` file under `content_dir`, mirroring the
/// directory structure under `dest_dir`. Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<usize> {
    if !content_dir.is_dir() {
        return Err(Error::io(content_dir)(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "content directory does not exist or is not a directory",
        )));
    }

    let sources = markdown_sources(content_dir)?;
    for source in &sources {
        let dest = dest_dir
            .join(relative_to(source, content_dir)?)
            .with_extension("html");
        generate_page(source, template_path, &dest, base_path)?;
    }
    Ok(sources.len())
}

/// Replace the contents of `dest` with a recursive copy of `src`.
/// Returns the number of files copied.
///
/// Fails without touching anything when one directory contains the other,
/// since clearing `dest` would then delete the source.
pub fn copy_dir(src: &Path, dest: &Path) -> Result<usize> {
    let src = src.canonicalize().map_err(Error::io(src))?;
    let resolved_dest = resolve(dest)?;
    if resolved_dest.starts_with(&src) || src.starts_with(&resolved_dest) {
        return Err(Error::OverlappingDirs {
            src,
            dest: dest.to_path_buf(),
        });
    }

    if dest.exists() {
        debug!("clearing {}", dest.display());
        let stale = WalkDir::new(dest)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        for entry in stale {
            let path = entry.path();
            if entry.file_type().is_dir() {
                fs::remove_dir_all(path).map_err(Error::io(path))?;
            } else {
                fs::remove_file(path).map_err(Error::io(path))?;
            }
        }
    } else {
        fs::create_dir_all(dest).map_err(Error::io(dest))?;
    }

    let mut copied = 0;
    for entry in WalkDir::new(&src).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let target = dest.join(relative_to(entry.path(), &src)?);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(Error::io(&target))?;
        } else {
            info!("Copying {} to {}", entry.path().display(), target.display());
            fs::copy(entry.path(), &target).map_err(Error::io(entry.path()))?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn relative_to<'a>(path: &'a Path, root: &Path) -> Result<&'a Path> {
    path.strip_prefix(root).map_err(|_| Error::Io {
        path: path.to_path_buf(),
        source: std::io::Error::other(format!("not under {}", root.display())),
    })
}

/// Canonical form of `path`, which may not exist yet: the deepest existing
/// ancestor is canonicalized and the missing components appended.
fn resolve(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(Error::io(path))?;
    for ancestor in absolute.ancestors() {
        if let Ok(canonical) = ancestor.canonicalize() {
            let missing = absolute.strip_prefix(ancestor).unwrap_or(Path::new(""));
            return Ok(canonical.join(missing));
        }
    }
    Ok(absolute)
}
