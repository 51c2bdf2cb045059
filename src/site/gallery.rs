use std::path::Path;
use tracing::{debug, warn};

/// Public path of a static image, e.g. `/gallery/chase-red.jpg`
pub type ImageReference = String;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "avif"];

/// Public URL prefix the gallery directory is served under
const GALLERY_URL_PREFIX: &str = "/gallery";

pub const FALLBACK_IMAGES: &[&str] = &[
    "/gallery/chase-orca.jpg",
    "/gallery/chase-red.jpg",
    "/gallery/chase-tree.jpg",
    "/gallery/chase-f-letter.jpg",
    "/gallery/chase-cat-toilet.jpg",
    "/gallery/chase-gold.jpg",
];

pub fn is_image_file(name: &str) -> bool {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return false;
    };
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| ext.eq_ignore_ascii_case(known))
}

pub fn fallback_images() -> Vec<ImageReference> {
    FALLBACK_IMAGES.iter().map(|s| s.to_string()).collect()
}

/// Images for the hero marquee. Never fails: an unreadable or empty
/// directory yields the fallback list.
pub async fn resolve_gallery(dir: &Path) -> Vec<ImageReference> {
    match list_images(dir).await {
        Ok(images) if !images.is_empty() => images,
        Ok(_) => {
            debug!(dir = %dir.display(), "Gallery has no images, using fallback");
            fallback_images()
        }
        Err(error) => {
            warn!(dir = %dir.display(), %error, "Error reading gallery directory");
            fallback_images()
        }
    }
}

async fn list_images(dir: &Path) -> std::io::Result<Vec<ImageReference>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut images = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if is_image_file(&name) {
            images.push(format!("{GALLERY_URL_PREFIX}/{name}"));
        }
    }

    // read_dir order is platform dependent
    images.sort();
    Ok(images)
}
