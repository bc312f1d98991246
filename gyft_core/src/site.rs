//! Rendering of complete documents, and export of the whole site to a
//! directory so it can be hosted by any static file server.

use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    assets::{asset_names, Asset, ASSET_PREFIX},
    components::{layout::root_layout, page::home},
    metadata::METADATA,
    GyftError,
};

pub const INDEX_FILE: &str = "index.html";

/// Renders the complete document for `/`.
pub fn render_home() -> String {
    root_layout(&METADATA, home()).into_string()
}

/// A file of the exported site. `path` is relative to the site root.
#[derive(Debug, Clone)]
pub struct SiteFile {
    pub path: PathBuf,
    pub contents: Cow<'static, [u8]>,
}

/// Returns every file that makes up the site: the rendered landing page and
/// the embedded stylesheets.
pub fn site_files() -> Vec<SiteFile> {
    let mut files = vec![SiteFile {
        path: PathBuf::from(INDEX_FILE),
        contents: Cow::Owned(render_home().into_bytes()),
    }];

    for name in asset_names() {
        if let Some(file) = Asset::get(&name) {
            files.push(SiteFile {
                path: Path::new(ASSET_PREFIX).join(name.as_ref()),
                contents: file.data,
            });
        }
    }

    files
}

/// What an export wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub files: Vec<PathBuf>,
    pub bytes: usize,
}

/// Writes the site into `dir`, creating it if necessary. If any of the files
/// already exist and `overwrite` is false then nothing is written and
/// `GyftError::FileExists` is returned.
pub fn export_site<P: AsRef<Path>>(dir: P, overwrite: bool) -> Result<ExportSummary, GyftError> {
    let dir = dir.as_ref();
    let files = site_files();

    if !overwrite {
        if let Some(existing) = files.iter().map(|f| dir.join(&f.path)).find(|p| p.exists()) {
            return Err(GyftError::FileExists(existing));
        }
    }

    let mut summary = ExportSummary::default();

    for file in files {
        let path = dir.join(&file.path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| GyftError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&path, &file.contents).map_err(|source| GyftError::CreateFile {
            path: path.clone(),
            source,
        })?;

        debug!("Wrote {} bytes to {:?}", file.contents.len(), path);
        summary.bytes += file.contents.len();
        summary.files.push(path);
    }

    info!(
        "Exported {} files ({} bytes) to {:?}",
        summary.files.len(),
        summary.bytes,
        dir
    );

    Ok(summary)
}
