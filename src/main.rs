use clap::{Parser, Subcommand};
use contest_thumbnailer::config::{self, ContestConfig};
use contest_thumbnailer::document::{self, DocumentFormat};
use contest_thumbnailer::feed::HiveClient;
use contest_thumbnailer::imaging::HttpImageSource;
use contest_thumbnailer::pipeline::{self, RunError};
use contest_thumbnailer::types::{PostLocator, RawComment};
use contest_thumbnailer::{naming, output};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The contest announcement whose replies are collected.
#[derive(clap::Args, Clone)]
struct PostArgs {
    /// Announcement post: "@author/permlink" or a full post URL
    #[arg(short = 'a', long, value_parser = parse_post)]
    post: PostLocator,
}

fn parse_post(input: &str) -> Result<PostLocator, String> {
    PostLocator::parse(input).ok_or_else(|| format!("expected @author/permlink, got {input:?}"))
}

#[derive(Parser)]
#[command(name = "contest-thumbnailer")]
#[command(about = "Collect contest entries from the replies to a Hive post")]
#[command(long_about = "\
Collect contest entries from the replies to a Hive post

Every reply that links a post on peakd.com, hive.blog or ecency.com is an
entry candidate. Candidates from blocklisted authors, or whose post has no
vote from a moderator account, are dropped. What is left is rendered either
as a thumbnail poster (PNG) or as an HTML/Markdown sheet from templates.

Templates (in the templates directory):

  template_html_body.tpl    {images}
  template_html_image.tpl   {postUrl} {imageUrl} {author}
  template_md_body.tpl      {images}
  template_md_image.tpl     {postUrl} {imageUrl} {author}

Run 'contest-thumbnailer gen-config' to generate a documented contest.toml,
and 'contest-thumbnailer gen-templates' to write the stock templates.")]
#[command(version)]
struct Cli {
    /// Contest config file
    #[arg(long, default_value = "contest.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the accepted entries
    Entries {
        #[command(flatten)]
        post: PostArgs,
        /// Print the accepted entries as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Render an HTML or Markdown sheet of the entries
    Document {
        #[command(flatten)]
        post: PostArgs,
        /// HTML instead of Markdown
        #[arg(long)]
        html: bool,
        /// Output file (default: <MM-DD-YYYY-HH-MM>-GeneratedImageSheet.<ext>)
        #[arg(long)]
        filename: Option<PathBuf>,
    },
    /// Render a thumbnail poster of the entries
    Poster {
        #[command(flatten)]
        post: PostArgs,
        /// Thumbnails per row
        #[arg(long)]
        columns: Option<u32>,
        /// Thumbnail width in pixels
        #[arg(long)]
        thumb_width: Option<u32>,
        /// Output file (default: poster.output from the config)
        #[arg(long)]
        filename: Option<PathBuf>,
    },
    /// Print a stock contest.toml with all options documented
    GenConfig,
    /// Write the stock templates into the templates directory
    GenTemplates,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "contest_thumbnailer=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), RunError> {
    match cli.command {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenTemplates => {
            let config = config::load_config(&cli.config)?;
            let dir = &config.document.templates_dir;
            let written = document::write_stock_templates(dir)
                .map_err(|e| RunError::Setup(format!("Couldn't write templates: {e}")))?;
            for line in output::format_templates_written(dir, &written) {
                println!("{}", line);
            }
        }
        Command::Entries { post, json } => {
            let config = config::load_config(&cli.config)?;
            let feed = hive_client(&config)?;

            let comments = fetch(&feed, &post.post)?;
            let collected = pipeline::collect_entries(&feed, &config, &comments)?;

            if json {
                let rendered = serde_json::to_string_pretty(&collected.report.accepted)
                    .map_err(|e| RunError::Setup(e.to_string()))?;
                println!("{}", rendered);
            } else {
                output::print_filter_report(&collected.report, true);
            }
        }
        Command::Document {
            post,
            html,
            filename,
        } => {
            let config = config::load_config(&cli.config)?;
            let feed = hive_client(&config)?;
            let format = DocumentFormat::from_html_flag(html);

            let comments = fetch(&feed, &post.post)?;
            println!("Parsing comments...");
            let collected = pipeline::collect_entries(&feed, &config, &comments)?;
            output::print_filter_report(&collected.report, false);

            println!("Generating document...");
            let entries = &collected.report.accepted;
            let content =
                pipeline::render_document(&config.document.templates_dir, entries, format)?;

            let path = naming::document_path(
                filename.as_deref(),
                chrono::Local::now().naive_local(),
                format,
            );
            pipeline::save_document(&content, &path)?;
            output::print_document_output(entries.len(), &path);
        }
        Command::Poster {
            post,
            columns,
            thumb_width,
            filename,
        } => {
            let mut config = config::load_config(&cli.config)?;
            apply_poster_overrides(&mut config, columns, thumb_width)?;
            let feed = hive_client(&config)?;
            let images = HttpImageSource::new(config.poster.image_proxy.as_str())
                .map_err(|e| RunError::Setup(format!("Couldn't set up image client: {e}")))?;

            let comments = fetch(&feed, &post.post)?;
            println!("Parsing comments...");
            let collected = pipeline::collect_entries(&feed, &config, &comments)?;
            output::print_filter_report(&collected.report, false);

            println!("Downloading images...");
            let poster = pipeline::build_poster(
                &images,
                &collected.report.accepted,
                &config.poster,
                |event| {
                    for line in output::format_acquire_event(event) {
                        println!("{}", line);
                    }
                },
            );

            let path = naming::poster_path(filename.as_deref(), &config.poster.output);
            pipeline::write_poster(&poster, &path)?;
            output::print_poster_output(&poster, &path);
        }
    }

    Ok(())
}

fn hive_client(config: &ContestConfig) -> Result<HiveClient, RunError> {
    HiveClient::new(config.feed.node.as_str())
        .map_err(|e| RunError::Setup(format!("Couldn't set up feed client: {e}")))
}

fn fetch(
    feed: &HiveClient,
    post: &PostLocator,
) -> Result<Vec<RawComment>, RunError> {
    println!("Fetching comments...");
    let comments = pipeline::fetch_comments(feed, post)?;
    output::print_comments_found(comments.len());
    Ok(comments)
}

/// Command-line values override the config for this run only.
fn apply_poster_overrides(
    config: &mut ContestConfig,
    columns: Option<u32>,
    thumb_width: Option<u32>,
) -> Result<(), RunError> {
    if let Some(columns) = columns {
        config.poster.columns = columns;
    }
    if let Some(width) = thumb_width {
        config.poster.thumbnail_width = width;
    }
    config.validate()?;
    Ok(())
}
