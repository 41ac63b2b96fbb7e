//! Text document rendering from templates.
//!
//! Two templates make a document: a per-entry *image* template, rendered
//! once per validated entry, and a *body* template that receives the
//! concatenated image blocks.
//!
//! | Placeholder | Template | Value |
//! |---|---|---|
//! | `{postUrl}` | image | submission link |
//! | `{imageUrl}` | image | thumbnail link (real or fallback) |
//! | `{author}` | image | entry author |
//! | `{images}` | body | all rendered image blocks |
//!
//! Placeholders are replaced literally; any other braces in a template are
//! left as they are. In HTML mode the substituted values are escaped.
//!
//! Rendering is pure: the same templates and entries always produce the same
//! text. Only [`Templates::load`] and [`save_document`] touch the disk.

use crate::types::ValidatedEntry;
use maud::html;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Template missing or empty: {0}")]
    MissingTemplate(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Output flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Html,
    Markdown,
}

impl DocumentFormat {
    pub fn from_html_flag(html: bool) -> Self {
        if html { Self::Html } else { Self::Markdown }
    }

    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "md",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "md",
        }
    }

    pub fn body_template_name(self) -> String {
        format!("template_{}_body.tpl", self.key())
    }

    pub fn image_template_name(self) -> String {
        format!("template_{}_image.tpl", self.key())
    }
}

/// A body template and a per-entry template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    pub body: String,
    pub image: String,
}

impl Templates {
    /// Read both templates for `format` from `dir`.
    ///
    /// A missing or empty file is [`DocumentError::MissingTemplate`].
    pub fn load(dir: &Path, format: DocumentFormat) -> Result<Self, DocumentError> {
        Ok(Self {
            body: read_template(&dir.join(format.body_template_name()))?,
            image: read_template(&dir.join(format.image_template_name()))?,
        })
    }

    /// Templates shipped with the binary.
    pub fn stock(format: DocumentFormat) -> Self {
        let (body, image) = match format {
            DocumentFormat::Html => (
                include_str!("../templates/template_html_body.tpl"),
                include_str!("../templates/template_html_image.tpl"),
            ),
            DocumentFormat::Markdown => (
                include_str!("../templates/template_md_body.tpl"),
                include_str!("../templates/template_md_image.tpl"),
            ),
        };
        Self {
            body: body.to_string(),
            image: image.to_string(),
        }
    }
}

fn read_template(path: &Path) -> Result<String, DocumentError> {
    match fs::read_to_string(path) {
        Ok(content) if !content.is_empty() => Ok(content),
        Ok(_) => Err(DocumentError::MissingTemplate(path.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(DocumentError::MissingTemplate(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Substitute `entries` into `templates`.
pub fn render_document(
    templates: &Templates,
    entries: &[ValidatedEntry],
    format: DocumentFormat,
) -> String {
    let value = |raw: &str| match format {
        DocumentFormat::Html => html! { (raw) }.into_string(),
        DocumentFormat::Markdown => raw.to_string(),
    };

    let images: String = entries
        .iter()
        .map(|entry| {
            templates
                .image
                .replace("{postUrl}", &value(&entry.submission_url))
                .replace("{imageUrl}", &value(&entry.image_url))
                .replace("{author}", &value(&entry.author))
        })
        .collect();

    templates.body.replace("{images}", &images)
}

/// Load the templates from `dir` and render.
pub fn render(
    dir: &Path,
    entries: &[ValidatedEntry],
    format: DocumentFormat,
) -> Result<String, DocumentError> {
    let templates = Templates::load(dir, format)?;
    Ok(render_document(&templates, entries, format))
}

pub fn save_document(content: &str, path: &Path) -> Result<(), DocumentError> {
    fs::write(path, content)?;
    Ok(())
}

/// Write the stock templates into `dir`, leaving existing files alone.
///
/// Returns the paths that were written.
pub fn write_stock_templates(dir: &Path) -> Result<Vec<PathBuf>, DocumentError> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for format in [DocumentFormat::Html, DocumentFormat::Markdown] {
        let stock = Templates::stock(format);
        for (name, content) in [
            (format.body_template_name(), stock.body),
            (format.image_template_name(), stock.image),
        ] {
            let path = dir.join(name);
            if path.exists() {
                continue;
            }
            fs::write(&path, content)?;
            written.push(path);
        }
    }
    Ok(written)
}
