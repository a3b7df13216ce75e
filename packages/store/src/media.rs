//! Helpers for note media: where a stored path is served from, whether it
//! renders as video, and what to call it when downloaded.

const VIDEO_EXTS: &[&str] = &["mp4", "webm", "ogg"];
const IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("blob:")
        || url.starts_with("data:")
}

/// Full URL for a media entry. Absolute URLs pass through; server-relative
/// paths (possibly with Windows separators) are joined onto `base`.
pub fn resolve_url(base: &str, path: &str) -> String {
    if is_absolute(path) {
        return path.to_string();
    }
    let normalized = path.replace('\\', "/");
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        normalized.trim_start_matches('/')
    )
}

/// Lowercased extension of the last path segment, ignoring query strings.
pub fn extension(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let name = path.rsplit('/').next()?;
    let (_, ext) = name.rsplit_once('.')?;
    Some(ext.to_lowercase())
}

pub fn is_video(url: &str) -> bool {
    extension(url).is_some_and(|ext| VIDEO_EXTS.contains(&ext.as_str()))
}

pub fn mime_from_url(url: &str) -> String {
    match extension(url) {
        Some(ext) if VIDEO_EXTS.contains(&ext.as_str()) => format!("video/{ext}"),
        Some(ext) if IMAGE_EXTS.contains(&ext.as_str()) => format!("image/{ext}"),
        _ => "application/octet-stream".to_string(),
    }
}

/// File name offered when the user downloads a media entry.
pub fn download_name(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() && !name.contains(':') => name.to_string(),
        _ => "downloaded_file".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_paths() {
        assert_eq!(
            resolve_url("http://localhost:5123/", "/uploads/a.png"),
            "http://localhost:5123/uploads/a.png"
        );
        assert_eq!(
            resolve_url("http://localhost:5123", "uploads\\b.mp4"),
            "http://localhost:5123/uploads/b.mp4"
        );
    }

    #[test]
    fn test_resolve_keeps_absolute_urls() {
        let url = "https://cdn.example.com/x.png";
        assert_eq!(resolve_url("http://localhost:5123", url), url);
        assert_eq!(resolve_url("http://localhost", "blob:abc"), "blob:abc");
    }

    #[test]
    fn test_video_detection() {
        assert!(is_video("uploads/clip.MP4"));
        assert!(is_video("https://x/y.webm?token=1"));
        assert!(!is_video("uploads/photo.png"));
        assert!(!is_video("uploads/noext"));
    }

    #[test]
    fn test_mime_from_url() {
        assert_eq!(mime_from_url("a/b.jpeg"), "image/jpeg");
        assert_eq!(mime_from_url("a/b.ogg"), "video/ogg");
        assert_eq!(mime_from_url("a/b.pdf"), "application/octet-stream");
    }

    #[test]
    fn test_download_name() {
        assert_eq!(download_name("http://x/uploads/cat.png?v=2"), "cat.png");
        assert_eq!(download_name("http://x/uploads/"), "downloaded_file");
    }
}
