use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blogdraft")]
#[command(version, about = "Write, save and browse blog posts locally", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write and save a new blog post
    #[command(alias = "n")]
    Create(CreateArgs),

    /// Browse sample and saved posts, optionally filtered
    #[command(alias = "x")]
    Explore {
        /// Category id to match (see `blogdraft categories`)
        #[arg(short, long)]
        category: Option<String>,

        /// Exact author name to match
        #[arg(short, long)]
        author: Option<String>,

        /// First day of the date range (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Last day of the date range (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<String>,
    },

    /// Show one post and related posts
    #[command(alias = "v")]
    Show {
        /// Post id
        id: String,
    },

    /// List saved posts
    #[command(alias = "ls")]
    List,

    /// List the predefined categories
    Categories,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., reset-delay-ms, theme)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct CreateArgs {
    /// Post title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Author name
    #[arg(short, long)]
    pub author: Option<String>,

    /// Short author bio
    #[arg(short, long)]
    pub bio: Option<String>,

    /// Author picture
    #[arg(long)]
    pub author_image: Option<PathBuf>,

    /// Category id (see `blogdraft categories`)
    #[arg(short, long, conflicts_with = "new_category")]
    pub category: Option<String>,

    /// Create a custom category with this name and use it
    #[arg(long)]
    pub new_category: Option<String>,

    /// Tags, separated by commas or spaces
    #[arg(long)]
    pub tags: Option<String>,

    /// Featured image
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// Post body (markup allowed)
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read the post body from a file
    #[arg(long)]
    pub content_file: Option<PathBuf>,
}
