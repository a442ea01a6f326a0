//! Command handlers for the binary. Each handler turns parsed arguments into
//! API calls and hands the results to [`print`].

mod print;

use crate::args::{Cli, Commands, CreateArgs};
use blogdraft::api::{ConfigAction, DateRange, FilterCriteria};
use blogdraft::config::CONFIG_KEYS;
use blogdraft::draft::categories::CategoryRegistry;
use blogdraft::error::{BlogError, Result};
use blogdraft::init::{self, BlogContext};
use blogdraft::model::ImageRef;
use blogdraft::session::SessionContext;
use clap::Parser;
use std::fs;
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log filter override, e.g. `BLOGDRAFT_LOG=blogdraft=trace`.
const LOG_ENV: &str = "BLOGDRAFT_LOG";

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init::initialize()?;

    match cli.command {
        Some(Commands::Create(args)) => handle_create(&mut ctx, args),
        Some(Commands::Explore {
            category,
            author,
            from,
            to,
        }) => handle_explore(&ctx, category, author, from, to).await,
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "blogdraft=debug"
    } else {
        "blogdraft=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn handle_create(ctx: &mut BlogContext, args: CreateArgs) -> Result<()> {
    let content = match (args.content, args.content_file) {
        (Some(content), _) => content,
        (None, Some(path)) => fs::read_to_string(&path)?,
        (None, None) => String::new(),
    };
    let image = args.image.as_deref().map(image_from_path).transpose()?;
    let author_image = args.author_image.as_deref().map(image_from_path).transpose()?;

    let context = SessionContext::from_config(&ctx.config);
    let print_ctx = context.clone();
    let mut session = ctx.api.start_session(context);

    if let Some(title) = args.title {
        session.set_title(title);
    }
    if let Some(name) = args.author {
        session.set_author_name(name);
    }
    if let Some(bio) = args.bio {
        session.set_author_bio(bio);
    }
    session.set_author_image(author_image);
    if let Some(id) = args.category {
        if !session.categories().contains(&id) {
            return Err(BlogError::Api(format!(
                "Unknown category: {} (see `blogdraft categories`)",
                id
            )));
        }
        session.select_category(id);
    }
    if let Some(name) = args.new_category {
        if session.add_category(&name).is_none() {
            print::print_warning("Ignoring empty category name");
        }
    }
    if let Some(tags) = args.tags {
        session.add_tags(&tags);
    }
    if let Some(image) = image {
        session.attach_image(image);
    }
    session.set_content(content);

    let metrics = session.metrics();
    let outcome = session.submit();
    session.close();

    print::print_sidebar(&metrics, &print_ctx);
    print::print_messages(&outcome.into_result().messages);
    Ok(())
}

async fn handle_explore(
    ctx: &BlogContext,
    category: Option<String>,
    author: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> Result<()> {
    let mut criteria = FilterCriteria::new();
    if let Some(category) = category {
        criteria = criteria.category(category);
    }
    if let Some(author) = author {
        criteria = criteria.author(author);
    }
    if let (Some(from), Some(to)) = (from, to) {
        let start = blogdraft::commands::explore::parse_date(&from)?;
        let end = blogdraft::commands::explore::parse_date(&to)?;
        criteria = criteria.date_range(DateRange::new(start, end));
    }

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let print_ctx = SessionContext::from_config(&ctx.config);
    match ctx
        .api
        .explore_with_latency(&criteria, ctx.config.explore_latency(), &cancel)
        .await?
    {
        Some(result) => {
            print::print_cards(&result.listed_posts, &print_ctx);
            print::print_messages(&result.messages);
        }
        None => print::print_warning("Cancelled."),
    }
    Ok(())
}

fn handle_show(ctx: &BlogContext, id: &str) -> Result<()> {
    let result = ctx.api.show_post(id)?;
    let print_ctx = SessionContext::from_config(&ctx.config);
    for post in &result.affected_posts {
        print::print_post(post, &print_ctx);
    }
    if !result.related_posts.is_empty() {
        print::print_heading("Related Articles", &print_ctx);
        print::print_cards(&result.related_posts, &print_ctx);
    }
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &BlogContext) -> Result<()> {
    let result = ctx.api.list_posts()?;
    let print_ctx = SessionContext::from_config(&ctx.config);
    print::print_cards(&result.listed_posts, &print_ctx);
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &BlogContext) -> Result<()> {
    let result = ctx.api.categories(&CategoryRegistry::new())?;
    print::print_categories(&result.categories);
    Ok(())
}

fn handle_config(ctx: &BlogContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for key in CONFIG_KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print::print_messages(&result.messages);
    Ok(())
}

fn image_from_path(path: &Path) -> Result<ImageRef> {
    if !path.exists() {
        return Err(BlogError::InvalidImage(format!(
            "{} does not exist",
            path.display()
        )));
    }
    let content_type = guess_content_type(path);
    ImageRef::from_upload(path.display().to_string(), content_type)
}

fn guess_content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_from_extension() {
        assert_eq!(guess_content_type(Path::new("a/cover.JPG")), "image/jpeg");
        assert_eq!(guess_content_type(Path::new("b.webp")), "image/webp");
        assert_eq!(
            guess_content_type(Path::new("notes.txt")),
            "application/octet-stream"
        );
        assert_eq!(
            guess_content_type(Path::new("noext")),
            "application/octet-stream"
        );
    }
}
