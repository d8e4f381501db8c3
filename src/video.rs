//! Video references parsed from user-supplied YouTube links.

use crate::error::{Result, TldwError};

/// Extract the video ID from a YouTube URL.
///
/// Two URL shapes are recognised:
/// - anything containing `v=` (`https://www.youtube.com/watch?v=ID&t=5s`)
/// - `youtu.be` short links (`https://youtu.be/ID?si=...`)
///
/// Scheme and host are not validated.
pub fn extract_video_id(url: &str) -> Option<String> {
    let url = url.trim();

    let id = if let Some((_, rest)) = url.split_once("v=") {
        rest.split('&').next().unwrap_or_default()
    } else if url.contains("youtu.be") {
        let last = url.rsplit('/').next().unwrap_or_default();
        last.split('?').next().unwrap_or_default()
    } else {
        return None;
    };

    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// A video identified by the user, along with the link it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference {
    id: String,
    url: String,
}

impl VideoReference {
    /// Parse a URL into a video reference.
    pub fn parse(url: &str) -> Result<Self> {
        let id = extract_video_id(url)
            .ok_or_else(|| TldwError::InvalidUrl(url.trim().to_string()))?;

        Ok(Self {
            id,
            url: url.trim().to_string(),
        })
    }

    /// The YouTube video ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The URL as the user entered it.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Canonical watch URL.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }

    /// URL for the embeddable player.
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=abc123&t=5s"),
            Some("abc123".to_string())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=abc123&list=PL1&index=2"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_extract_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?si=xyz"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_v_marker_takes_precedence() {
        // A short link that still carries v= follows the v= rule.
        assert_eq!(
            extract_video_id("https://youtu.be/ignored?v=real"),
            Some("real".to_string())
        );
    }

    #[test]
    fn test_extract_not_found() {
        assert_eq!(extract_video_id("https://vimeo.com/123456789"), None);
        assert_eq!(extract_video_id("not a url"), None);
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v="), None);
        assert_eq!(extract_video_id("https://youtu.be/"), None);
    }

    #[test]
    fn test_no_host_validation() {
        assert_eq!(
            extract_video_id("ftp://example.com/?v=anything"),
            Some("anything".to_string())
        );
    }

    #[test]
    fn test_video_reference() {
        let video = VideoReference::parse("  https://youtu.be/abc123?si=tracker ").unwrap();
        assert_eq!(video.id(), "abc123");
        assert_eq!(video.url(), "https://youtu.be/abc123?si=tracker");
        assert_eq!(video.watch_url(), "https://www.youtube.com/watch?v=abc123");
        assert_eq!(video.embed_url(), "https://www.youtube.com/embed/abc123");

        let err = VideoReference::parse("https://example.com").unwrap_err();
        assert!(matches!(err, TldwError::InvalidUrl(_)));
    }
}
