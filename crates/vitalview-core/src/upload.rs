//! Upload surface state. Selected files are held by reference only; their
//! contents are never opened.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::consts::ACCEPTED_EXTENSIONS;

/// Scan type guessed from the file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanKind {
    Dicom,
    Nifti,
    NiftiGz,
    Png,
    Jpeg,
    Other,
}

impl ScanKind {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        if name.ends_with(".nii.gz") {
            Self::NiftiGz
        } else if name.ends_with(".nii") {
            Self::Nifti
        } else if name.ends_with(".dcm") {
            Self::Dicom
        } else if name.ends_with(".png") {
            Self::Png
        } else if name.ends_with(".jpg") || name.ends_with(".jpeg") {
            Self::Jpeg
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for ScanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dicom => write!(f, "DICOM"),
            Self::Nifti => write!(f, "NIfTI"),
            Self::NiftiGz => write!(f, "NIfTI (gzip)"),
            Self::Png => write!(f, "PNG"),
            Self::Jpeg => write!(f, "JPEG"),
            Self::Other => write!(f, "Unknown"),
        }
    }
}

/// Advisory extension filter offered to the file dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct AcceptFilter {
    extensions: Vec<String>,
}

impl Default for AcceptFilter {
    fn default() -> Self {
        Self::new(ACCEPTED_EXTENSIONS.iter().map(|e| e.to_string()))
    }
}

impl AcceptFilter {
    /// Extensions may be given with or without the leading dot.
    pub fn new(extensions: impl IntoIterator<Item = String>) -> Self {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| {
                    let e = e.trim().to_ascii_lowercase();
                    if e.starts_with('.') {
                        e
                    } else {
                        format!(".{e}")
                    }
                })
                .collect(),
        }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether the file name ends with one of the extensions. Case-insensitive.
    pub fn matches(&self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        self.extensions.iter().any(|e| name.ends_with(e.as_str()))
    }

    /// Extensions without the leading dot, as native file dialogs expect.
    /// Compound extensions stay whole (`nii.gz`), so the dialog never
    /// offers every `.gz` archive.
    pub fn dialog_extensions(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for ext in &self.extensions {
            let bare = ext.trim_start_matches('.').to_string();
            if !bare.is_empty() && !out.contains(&bare) {
                out.push(bare);
            }
        }
        out
    }

    /// `.dcm, .nii, ...` for display.
    pub fn hint(&self) -> String {
        self.extensions.join(", ")
    }
}

/// Handle to a user-selected scan file.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub path: Option<PathBuf>,
    pub kind: ScanKind,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, path: Option<PathBuf>) -> Self {
        let name = name.into();
        let kind = match path {
            Some(ref p) => ScanKind::from_path(p),
            None => ScanKind::from_path(Path::new(&name)),
        };
        Self { name, path, kind }
    }

    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(name, Some(path.to_path_buf()))
    }
}

/// The upload prompt's state: either waiting for a file or holding one.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    filter: AcceptFilter,
    file: Option<UploadedFile>,
}

impl UploadState {
    pub fn new(filter: AcceptFilter) -> Self {
        Self { filter, file: None }
    }

    pub fn filter(&self) -> &AcceptFilter {
        &self.filter
    }

    /// Accept `file` unconditionally, replacing any previous selection.
    pub fn select(&mut self, file: UploadedFile) {
        let matches = file
            .path
            .as_deref()
            .map(|p| self.filter.matches(p))
            .unwrap_or_else(|| self.filter.matches(Path::new(&file.name)));
        if !matches {
            warn!(name = %file.name, accepted = %self.filter.hint(), "File does not match accepted types");
        }
        info!(name = %file.name, kind = %file.kind, "Scan selected");
        self.file = Some(file);
    }

    pub fn clear(&mut self) {
        self.file = None;
    }

    pub fn is_complete(&self) -> bool {
        self.file.is_some()
    }

    pub fn file(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }
}
