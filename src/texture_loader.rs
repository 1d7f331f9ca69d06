use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Image files directly inside `dir_path`, sorted by file name.
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("failed to read directory {}", dir_path.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if path.is_file() && IMAGE_EXTENSIONS.contains(&extension_of(&path).as_str()) {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        bail!("no image files found in directory {}", dir_path.display());
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// EXIF orientation tag of a JPEG, or 1 (upright) when absent or unreadable.
pub fn read_exif_orientation(file_bytes: &[u8]) -> u16 {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            warn!("could not read EXIF data: {e}");
            return 1;
        }
    };

    match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
        Some(Value::Short(values)) => values.first().copied().unwrap_or(1),
        _ => 1,
    }
}

// 3 = 180°, 6 = 90° clockwise, 8 = 90° counter-clockwise. Flipped variants are ignored.
fn apply_orientation(image: &mut Image, orientation: u16) {
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => return,
    }
    debug!(orientation, "applied EXIF rotation");
}

/// Reads an image file, rotates it upright and uploads it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read file {}", image_path.display()))?;

    let extension = extension_of(image_path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_exif_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode {}: {e}", image_path.display()))?;
    apply_orientation(&mut image, orientation);

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("failed to create texture for {}: {e}", image_path.display()))?;
    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        fs::write(dir.path().join(name), b"x").unwrap();
    }

    #[test]
    fn finds_images_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "c.png");
        touch(&dir, "a.JPG");
        touch(&dir, "b.gif");
        touch(&dir, "notes.txt");
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let names: Vec<_> = load_sorted_image_paths(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.gif", "c.png"]);
    }

    #[test]
    fn directory_without_images_is_an_error() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "readme.md");
        let err = load_sorted_image_paths(dir.path()).unwrap_err();
        assert!(err.to_string().contains("no image files"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_sorted_image_paths(&dir.path().join("gone")).is_err());
    }

    #[test]
    fn bytes_without_exif_are_upright() {
        assert_eq!(read_exif_orientation(b"definitely not a jpeg"), 1);
    }
}
