use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;

/// What a slide shows. The carousel never looks inside.
pub enum SlideContent {
    Image(Texture2D),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Image,
    Text,
}

/// Rotation needed to display an image upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Half,
    Clockwise,
    CounterClockwise,
}

pub fn slide_kind(path: &Path) -> Option<SlideKind> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "png" | "jpg" | "jpeg" | "bmp" | "gif" => Some(SlideKind::Image),
        "txt" => Some(SlideKind::Text),
        _ => None,
    }
}

/// Slide files in `dir`, sorted by file name.
pub fn list_slide_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if path.is_file() && slide_kind(&path).is_some() {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

// EXIF orientations 1, 3, 6 and 8. The mirrored ones are shown as stored.
pub fn rotation_for(orientation: u16) -> Rotation {
    match orientation {
        3 => Rotation::Half,
        6 => Rotation::Clockwise,
        8 => Rotation::CounterClockwise,
        _ => Rotation::None,
    }
}

fn exif_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
            Some(Value::Short(values)) => values.first().copied().unwrap_or(1),
            _ => 1,
        },
        Err(e) => {
            debug!("No EXIF data for {}: {}", path.display(), e);
            1
        }
    }
}

pub fn load_texture_with_exif_rotation(rl: &mut RaylibHandle, thread: &RaylibThread, path: &Path) -> Result<Texture2D> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let rotation = if extension == "jpg" || extension == "jpeg" {
        rotation_for(exif_orientation(path, &bytes))
    } else {
        Rotation::None
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes)
        .map_err(|e| anyhow!("Failed to decode {}: {}", path.display(), e))?;

    match rotation {
        Rotation::Half => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Rotation::Clockwise => image.rotate_cw(),
        Rotation::CounterClockwise => image.rotate_ccw(),
        Rotation::None => {}
    }
    if rotation != Rotation::None {
        debug!("Rotated {} ({:?})", path.display(), rotation);
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("Failed to create texture for {}: {}", path.display(), e))
}

/// Reads a text slide. NUL bytes are dropped; raylib cannot draw them.
pub fn read_text_slide(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(text.replace('\0', "").trim().to_string())
}

/// Loads every slide in `dir`. Files that fail to load are skipped.
pub fn load_slides(rl: &mut RaylibHandle, thread: &RaylibThread, dir: &Path) -> Result<Vec<SlideContent>> {
    let mut slides = Vec::new();

    for path in list_slide_paths(dir)? {
        let loaded = match slide_kind(&path) {
            Some(SlideKind::Image) => load_texture_with_exif_rotation(rl, thread, &path).map(SlideContent::Image),
            Some(SlideKind::Text) => read_text_slide(&path).map(SlideContent::Text),
            None => continue,
        };
        match loaded {
            Ok(slide) => slides.push(slide),
            Err(e) => warn!("Skipping slide: {:#}", e),
        }
    }

    if slides.is_empty() {
        warn!("No slides found in {}", dir.display());
    }
    Ok(slides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_extension() {
        assert_eq!(slide_kind(Path::new("a/photo.JPG")), Some(SlideKind::Image));
        assert_eq!(slide_kind(Path::new("b.gif")), Some(SlideKind::Image));
        assert_eq!(slide_kind(Path::new("notes.txt")), Some(SlideKind::Text));
        assert_eq!(slide_kind(Path::new("video.mp4")), None);
        assert_eq!(slide_kind(Path::new("README")), None);
    }

    #[test]
    fn orientation_mapping() {
        assert_eq!(rotation_for(1), Rotation::None);
        assert_eq!(rotation_for(3), Rotation::Half);
        assert_eq!(rotation_for(6), Rotation::Clockwise);
        assert_eq!(rotation_for(8), Rotation::CounterClockwise);
        assert_eq!(rotation_for(5), Rotation::None);
    }

    #[test]
    fn lists_slides_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.txt", "a.png", "b.jpeg", "skip.md"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let names: Vec<_> = list_slide_paths(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.png", "b.jpeg", "c.txt"]);
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_slide_paths(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_slide_paths(&dir.path().join("gone")).unwrap_err();
        assert!(err.to_string().contains("Failed to read directory"));
    }

    #[test]
    fn text_slides_are_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.txt");
        fs::write(&path, "\n  Ad 1 text \n\n").unwrap();
        assert_eq!(read_text_slide(&path).unwrap(), "Ad 1 text");
    }

    #[test]
    fn text_slides_drop_nul_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nul.txt");
        fs::write(&path, "Ad\0 2\0\n").unwrap();

        let text = read_text_slide(&path).unwrap();
        assert_eq!(text, "Ad 2");
        assert!(!text.contains('\0'));
    }
}
