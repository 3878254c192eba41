use std::path::{Path, PathBuf};

use vitalview_core::upload::{AcceptFilter, ScanKind, UploadState, UploadedFile};

#[test]
fn test_default_filter_extensions() {
    let filter = AcceptFilter::default();
    assert_eq!(
        filter.extensions(),
        &[".dcm", ".nii", ".nii.gz", ".png", ".jpg", ".jpeg"]
    );
    assert_eq!(filter.hint(), ".dcm, .nii, .nii.gz, .png, .jpg, .jpeg");
}

#[test]
fn test_filter_matching_is_case_insensitive() {
    let filter = AcceptFilter::default();
    assert!(filter.matches(Path::new("/scans/CHEST.DCM")));
    assert!(filter.matches(Path::new("brain.nii.gz")));
    assert!(filter.matches(Path::new("xray.Jpeg")));
    assert!(!filter.matches(Path::new("notes.txt")));
    assert!(!filter.matches(Path::new("archive.gz")));
}

#[test]
fn test_filter_normalizes_extensions() {
    let filter = AcceptFilter::new(["DCM".to_string(), " .Png ".to_string()]);
    assert_eq!(filter.extensions(), &[".dcm", ".png"]);
}

#[test]
fn test_dialog_extensions_strip_dots_and_dedupe() {
    let filter = AcceptFilter::new([".nii".into(), "nii".into(), ".png".into()]);
    assert_eq!(filter.dialog_extensions(), vec!["nii", "png"]);
}

#[test]
fn test_dialog_extensions_keep_compound_whole() {
    let extensions = AcceptFilter::default().dialog_extensions();
    assert_eq!(extensions, vec!["dcm", "nii", "nii.gz", "png", "jpg", "jpeg"]);
    assert!(!extensions.iter().any(|e| e == "gz"));
}

#[test]
fn test_scan_kind_from_path() {
    assert_eq!(ScanKind::from_path(Path::new("a.dcm")), ScanKind::Dicom);
    assert_eq!(ScanKind::from_path(Path::new("a.nii")), ScanKind::Nifti);
    assert_eq!(ScanKind::from_path(Path::new("a.NII.GZ")), ScanKind::NiftiGz);
    assert_eq!(ScanKind::from_path(Path::new("a.png")), ScanKind::Png);
    assert_eq!(ScanKind::from_path(Path::new("a.jpg")), ScanKind::Jpeg);
    assert_eq!(ScanKind::from_path(Path::new("a.bin")), ScanKind::Other);
}

#[test]
fn test_select_completes_upload() {
    let mut state = UploadState::default();
    assert!(!state.is_complete());

    state.select(UploadedFile::from_path(Path::new("/data/scan01.dcm")));
    assert!(state.is_complete());

    let file = state.file().unwrap();
    assert_eq!(file.name, "scan01.dcm");
    assert_eq!(file.kind, ScanKind::Dicom);
    assert_eq!(file.path, Some(PathBuf::from("/data/scan01.dcm")));
}

#[test]
fn test_select_accepts_mismatched_types() {
    let mut state = UploadState::default();
    state.select(UploadedFile::new("report.pdf", None));
    assert!(state.is_complete());
    assert_eq!(state.file().unwrap().kind, ScanKind::Other);
}

#[test]
fn test_select_replaces_and_clear_resets() {
    let mut state = UploadState::default();
    state.select(UploadedFile::new("first.png", None));
    state.select(UploadedFile::new("second.nii", None));
    assert_eq!(state.file().unwrap().name, "second.nii");

    state.clear();
    assert!(!state.is_complete());
    assert!(state.file().is_none());
}
