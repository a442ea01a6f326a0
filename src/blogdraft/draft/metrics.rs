//! Numbers derived from a draft: word count, reading time, progress score and
//! a plain-text preview. Nothing here is stored; everything is recomputed from
//! the current content.

use crate::model::Post;

pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;
pub const DEFAULT_PREVIEW_CHARS: usize = 150;
pub const PREVIEW_PLACEHOLDER: &str = "Your blog content preview will appear here...";

const TITLE_POINTS: u8 = 20;
const IMAGE_POINTS: u8 = 20;
// (upper word bound, points); counts at or past the last bound get the remainder.
const CONTENT_BRACKETS: [(usize, u8); 3] = [(100, 10), (300, 20), (600, 30)];
const LONG_CONTENT_POINTS: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSettings {
    pub words_per_minute: u32,
    pub preview_chars: usize,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

/// Snapshot of every derived value, as shown next to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftMetrics {
    pub has_title: bool,
    pub has_image: bool,
    pub word_count: usize,
    /// `None` while there is no content at all.
    pub reading_minutes: Option<u32>,
    pub progress: u8,
    pub preview: String,
}

impl DraftMetrics {
    pub fn compute(post: &Post, settings: &MetricsSettings) -> Self {
        let has_image = post.image.as_ref().is_some_and(|img| !img.is_empty());
        Self {
            has_title: !post.title.trim().is_empty(),
            has_image,
            word_count: word_count(&post.content),
            reading_minutes: reading_time(&post.content, settings.words_per_minute),
            progress: progress(&post.title, has_image, &post.content),
            preview: content_preview(&post.content, settings.preview_chars),
        }
    }
}

pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Minutes to read `content`, at least one. `None` for empty content.
pub fn reading_time(content: &str, words_per_minute: u32) -> Option<u32> {
    if content.is_empty() {
        return None;
    }
    let words = word_count(content) as u32;
    Some(words.div_ceil(words_per_minute.max(1)).max(1))
}

/// Coarse 0..=100 completion score. Content points come from fixed word-count
/// brackets, not interpolation.
pub fn progress(title: &str, has_image: bool, content: &str) -> u8 {
    let mut score: u8 = 0;
    if !title.trim().is_empty() {
        score += TITLE_POINTS;
    }
    if has_image {
        score += IMAGE_POINTS;
    }
    if !content.trim().is_empty() {
        let words = word_count(content);
        score += CONTENT_BRACKETS
            .iter()
            .find(|(bound, _)| words < *bound)
            .map(|(_, points)| *points)
            .unwrap_or(LONG_CONTENT_POINTS);
    }
    score.min(100)
}

/// Plain-text preview: markup tags become spaces, then the text is cut to
/// `max_chars` characters with `...` appended when something was cut.
pub fn content_preview(content: &str, max_chars: usize) -> String {
    if content.is_empty() {
        return PREVIEW_PLACEHOLDER.to_string();
    }
    let text = strip_tags(content);
    if text.chars().count() > max_chars {
        let mut cut: String = text.chars().take(max_chars).collect();
        cut.push_str("...");
        cut
    } else {
        text
    }
}

/// Replaces every `<...>` run with a single space. An unterminated `<` is kept.
pub fn strip_tags(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push(' ');
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ImageRef;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn word_count_splits_on_whitespace_runs() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("one  two\tthree\nfour"), 4);
        assert_eq!(word_count("  padded words  "), word_count("padded words"));
    }

    #[test]
    fn word_count_grows_as_tokens_are_appended() {
        let mut content = String::new();
        let mut last = 0;
        for i in 0..20 {
            content.push_str(&format!(" token{}", i));
            let count = word_count(&content);
            assert!(count > last);
            last = count;
        }
    }

    #[test]
    fn reading_time_rounds_up_with_one_minute_floor() {
        assert_eq!(reading_time("", 200), None);
        assert_eq!(reading_time("   ", 200), Some(1));
        assert_eq!(reading_time("hello", 200), Some(1));
        assert_eq!(reading_time(&words(200), 200), Some(1));
        assert_eq!(reading_time(&words(201), 200), Some(2));
        assert_eq!(reading_time(&words(1000), 200), Some(5));
    }

    #[test]
    fn reading_time_tolerates_zero_speed() {
        assert_eq!(reading_time(&words(3), 0), Some(3));
    }

    #[test]
    fn progress_brackets() {
        assert_eq!(progress("", false, ""), 0);
        assert_eq!(progress("T", false, ""), 20);
        assert_eq!(progress("T", true, ""), 40);
        assert_eq!(progress("", false, &words(99)), 10);
        assert_eq!(progress("", false, &words(100)), 20);
        assert_eq!(progress("", false, &words(299)), 20);
        assert_eq!(progress("", false, &words(300)), 30);
        assert_eq!(progress("", false, &words(600)), 40);
        assert_eq!(progress("T", true, &words(5000)), 80);
    }

    #[test]
    fn progress_is_monotonic_across_brackets() {
        let mut last = 0;
        for n in [0, 1, 99, 100, 101, 299, 300, 599, 600, 601, 2000] {
            let score = progress("T", true, &words(n));
            assert!(score >= last, "{} words scored {} < {}", n, score, last);
            assert!(score <= 100);
            last = score;
        }
    }

    #[test]
    fn preview_strips_markup() {
        assert_eq!(
            content_preview("<p>Hello <b>world</b></p>", 150),
            " Hello  world  "
        );
        assert_eq!(strip_tags("a < b"), "a < b");
    }

    #[test]
    fn preview_truncates_with_ellipsis() {
        let long = "x".repeat(200);
        let preview = content_preview(&long, 150);
        assert_eq!(preview.chars().count(), 153);
        assert!(preview.ends_with("..."));

        let exact = "y".repeat(150);
        assert_eq!(content_preview(&exact, 150), exact);
    }

    #[test]
    fn preview_placeholder_for_empty_content() {
        assert_eq!(content_preview("", 150), PREVIEW_PLACEHOLDER);
    }

    #[test]
    fn compute_combines_everything() {
        let mut post = Post::blank();
        post.title = "Hello".into();
        post.image = Some(ImageRef::trusted("cover.png"));
        post.content = format!("<p>{}</p>", words(150));

        let metrics = DraftMetrics::compute(&post, &MetricsSettings::default());
        assert!(metrics.has_title);
        assert!(metrics.has_image);
        assert_eq!(metrics.word_count, 150);
        assert_eq!(metrics.reading_minutes, Some(1));
        assert_eq!(metrics.progress, 60);
        assert!(metrics.preview.ends_with("..."));
    }
}
