
use std::env;
use std::fs;
use std::path::PathBuf;

#[allow(dead_code)]
pub fn is_base_dir(cwd: &PathBuf) -> Option<PathBuf> {
    if ! cwd.join("Cargo.toml").is_file() {
        return None;
    }
    let mut test_tmp = cwd.clone();
    test_tmp.push("tests");
    if ! test_tmp.is_dir() {
        return None;
    }
    test_tmp.push("tmp");
    fs::create_dir_all(&test_tmp).ok()?;
    Some(test_tmp)
}

/// Directory for images written by tests
#[allow(dead_code)]
pub fn find_output_dir() -> Option<PathBuf> {
    // First check current directory
    let cwd = env::current_dir().ok()?;
    if let Some(v) = is_base_dir(&cwd) {
        return Some(v);
    }
    // Search backwards from current executable path
    let mut exec = env::current_exe().ok()?;
    while let Some(dir) = exec.parent() {
        if let Some(v) = is_base_dir(&dir.to_path_buf()) {
            return Some(v);
        }
        exec = dir.to_path_buf();
    }
    None
}

/// Opaque white Argb8888 image
#[allow(dead_code)]
pub fn opaque_image(width: usize, height: usize) -> scanclip::ImageInfo {
    let mut img = scanclip::ImageInfo::new(width, height, scanclip::ColorMode::Argb8888);
    img.fill_argb([255, 255, 255, 255]);
    img
}
