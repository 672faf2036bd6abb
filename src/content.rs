//! Bundled blog content
//!
//! Post documents consumed as given: the publishing pipeline that turns
//! Markdown sources into these structured documents is not part of this
//! application. The whole set is embedded at compile time and validated
//! once at startup — the reader refuses to start on malformed content
//! rather than render something wrong.

use crate::error::{NotesError, Result, ResultExt};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;

/// Embedded content set
const BUNDLED_POSTS: &str = include_str!("../content/posts.toml");

/// Number of posts shown on the home page
pub const HOME_POST_COUNT: usize = 3;

/// One blog post document
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    /// Stable URL-style identifier, unique across the set
    pub slug: String,

    /// Post title (content language, not localized)
    pub title: String,

    /// Publication date
    pub date: NaiveDate,

    /// Short teaser shown in listings
    pub summary: String,

    /// Body segments in reading order
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl Post {
    /// Code segments with their position in the segment list, in the shape
    /// the highlight worker consumes
    pub fn code_blocks(&self) -> Vec<(usize, &str, &str)> {
        self.segments
            .iter()
            .enumerate()
            .filter_map(|(index, segment)| match segment {
                Segment::Code { language, source } => {
                    Some((index, language.as_str(), source.as_str()))
                }
                Segment::Paragraph { .. } => None,
            })
            .collect()
    }
}

/// One body segment
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Plain prose
    Paragraph { text: String },
    /// A fenced code block with its language tag
    Code { language: String, source: String },
}

#[derive(Debug, Deserialize)]
struct PostSet {
    posts: Vec<Post>,
}

/// The loaded content set, newest post first
#[derive(Debug, Clone)]
pub struct Site {
    posts: Vec<Post>,
}

impl Site {
    /// Parse and validate the embedded content set
    pub fn bundled() -> Result<Self> {
        Self::from_toml(BUNDLED_POSTS).context("Loading bundled posts")
    }

    fn from_toml(raw: &str) -> Result<Self> {
        let set: PostSet = toml::from_str(raw)
            .map_err(|e| NotesError::Content(format!("Failed to parse bundled posts: {}", e)))?;

        let mut posts = set.posts;
        let mut seen = HashSet::new();
        for post in &posts {
            if post.slug.is_empty() || post.title.is_empty() {
                return Err(NotesError::Content(format!(
                    "Post with empty slug or title (slug: {:?})",
                    post.slug
                )));
            }
            if !seen.insert(post.slug.clone()) {
                return Err(NotesError::Content(format!(
                    "Duplicate post slug: {:?}",
                    post.slug
                )));
            }
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(Site { posts })
    }

    /// All posts, newest first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// The posts shown on the home page
    pub fn latest(&self) -> &[Post] {
        &self.posts[..self.posts.len().min(HOME_POST_COUNT)]
    }

    /// Look up a post by slug
    pub fn find(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses_and_validates() {
        let site = Site::bundled().unwrap();
        assert!(!site.posts().is_empty());
        assert!(site.latest().len() <= HOME_POST_COUNT);
    }

    #[test]
    fn posts_are_newest_first() {
        let site = Site::bundled().unwrap();
        let dates: Vec<_> = site.posts().iter().map(|p| p.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn find_by_slug() {
        let site = Site::bundled().unwrap();
        let first = &site.posts()[0];
        assert_eq!(site.find(&first.slug).unwrap().slug, first.slug);
        assert!(site.find("no-such-post").is_none());
    }

    #[test]
    fn code_blocks_keep_segment_positions() {
        let site = Site::bundled().unwrap();
        let post = site.find("rust-worker-channels").unwrap();
        let blocks = post.code_blocks();
        assert!(!blocks.is_empty());
        for (index, language, source) in blocks {
            match &post.segments[index] {
                Segment::Code { language: l, source: s } => {
                    assert_eq!(l, language);
                    assert_eq!(s, source);
                }
                Segment::Paragraph { .. } => panic!("index {} is not a code segment", index),
            }
        }
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let raw = r#"
            [[posts]]
            slug = "a"
            title = "One"
            date = "2024-01-01"
            summary = "s"

            [[posts]]
            slug = "a"
            title = "Two"
            date = "2024-01-02"
            summary = "s"
        "#;
        assert!(Site::from_toml(raw).is_err());
    }

    #[test]
    fn unknown_segment_kind_is_rejected() {
        let raw = r#"
            [[posts]]
            slug = "a"
            title = "One"
            date = "2024-01-01"
            summary = "s"

            [[posts.segments]]
            kind = "video"
            url = "x"
        "#;
        assert!(Site::from_toml(raw).is_err());
    }
}
