use blogdraft::api::{CmdMessage, MessageLevel};
use blogdraft::config::Theme;
use blogdraft::draft::categories::{Category, CategoryRegistry};
use blogdraft::draft::metrics::DraftMetrics;
use blogdraft::draft::tips;
use blogdraft::model::Post;
use blogdraft::session::SessionContext;
use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use std::time::Duration;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const CARD_TAGS: usize = 2;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_warning(text: &str) {
    println!("{}", text.yellow());
}

pub(super) fn print_heading(text: &str, ctx: &SessionContext) {
    println!("\n{}", accent(text, ctx.theme).bold());
}

/// The stats panel shown next to the editor.
pub(super) fn print_sidebar(metrics: &DraftMetrics, ctx: &SessionContext) {
    println!("{}", accent("Progress", ctx.theme).bold());
    println!("  {}", progress_bar(metrics.progress));
    println!("  Title           {}", status(metrics.has_title, "Complete"));
    println!(
        "  Featured Image  {}",
        status(metrics.has_image, "Uploaded")
    );

    let words = if metrics.word_count == 0 {
        "No content".to_string()
    } else {
        format!("{} words", metrics.word_count)
    };
    println!("  Word Count      {}", words);

    let reading = match metrics.reading_minutes {
        Some(1) => "1 min".to_string(),
        Some(n) => format!("{} mins", n),
        None => "N/A".to_string(),
    };
    println!("  Reading Time    {}", reading);

    println!("{}", accent("Preview", ctx.theme).bold());
    println!("  {}", metrics.preview.dimmed());

    let since_epoch = Duration::from_secs(Utc::now().timestamp().max(0) as u64);
    println!("{}", accent("Writing Tip", ctx.theme).bold());
    println!("  {}", tips::tip_at(since_epoch).italic());
    println!("{}", accent("Inspiration", ctx.theme).bold());
    println!("  \"{}\"", tips::quote_at(since_epoch).italic());
    println!();
}

pub(super) fn print_cards(posts: &[Post], ctx: &SessionContext) {
    if posts.is_empty() {
        return;
    }

    for post in posts {
        let category = format!("[{}] ", category_label(&post.category));
        let time_ago = format_time_ago(post.created_at);
        let by = format!(" by {}", post.author.name);

        let fixed_width = category.width() + by.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title = truncate_to_width(&post.title, available);
        let padding = available.saturating_sub(title.width());

        println!(
            "{}{}{}{}{}",
            accent(&category, ctx.theme),
            title.bold(),
            by.dimmed(),
            " ".repeat(padding),
            time_ago.dimmed()
        );

        let tags: Vec<String> = post
            .tags
            .iter()
            .take(CARD_TAGS)
            .map(|t| format!("#{}", t))
            .collect();
        let id = post.id.to_string();
        if tags.is_empty() {
            println!("    {}", id.dimmed());
        } else {
            println!("    {}  {}", id.dimmed(), tags.join(" ").cyan());
        }
    }
}

pub(super) fn print_post(post: &Post, ctx: &SessionContext) {
    println!("{}", post.title.bold());
    println!(
        "{} {} {}",
        accent(&category_label(&post.category), ctx.theme),
        "·".dimmed(),
        post.created_at.format("%B %-d, %Y").to_string().dimmed()
    );
    if let Some(image) = &post.image {
        println!("{} {}", "Image:".dimmed(), image);
    }
    println!("--------------------------------");
    println!("{}", post.content);
    println!("--------------------------------");
    println!("{}", post.author.name.bold());
    if !post.author.bio.is_empty() {
        println!("{}", post.author.bio.dimmed());
    }
    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("{}", tags.join(" ").cyan());
    }
}

pub(super) fn print_categories(categories: &[Category]) {
    let width = categories.iter().map(|c| c.id.width()).max().unwrap_or(0);
    for category in categories {
        println!(
            "  {:<width$}  {}",
            category.id.yellow(),
            category.name,
            width = width
        );
    }
}

/// Display name for a registry id; custom ids are shown as they are.
fn category_label(id: &str) -> String {
    CategoryRegistry::new()
        .find(id)
        .map(|c| c.name)
        .unwrap_or_else(|| id.to_string())
}

fn accent(text: &str, theme: Theme) -> ColoredString {
    match theme {
        Theme::Dark => text.bright_magenta(),
        Theme::Light | Theme::System => text.blue(),
    }
}

fn status(done: bool, label: &str) -> ColoredString {
    if done {
        label.green()
    } else {
        "Missing".red()
    }
}

fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) / 5;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(20 - filled),
        percent
    )
}

/// Fits `s` into `max_width` terminal columns, ending in `…` when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut cut: String = s
        .chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    cut.push('…');
    cut
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_titles() {
        assert_eq!(truncate_to_width("Hello", 10), "Hello");
    }

    #[test]
    fn truncate_keeps_exact_fit() {
        assert_eq!(truncate_to_width("Hello", 5), "Hello");
        assert_eq!(truncate_to_width("Hello!", 5), "Hell…");
    }

    #[test]
    fn truncate_counts_wide_chars() {
        assert_eq!(truncate_to_width("日本語のタイトル", 7), "日本語…");
    }

    #[test]
    fn progress_bar_fills_in_steps_of_five() {
        assert_eq!(progress_bar(40), "[########------------] 40%");
        assert_eq!(progress_bar(100), "[####################] 100%");
    }
}
