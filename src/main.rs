mod cli;

use postforge::{
    classify::{classify, classify_all},
    config,
    drive::{self, DriveClient, MetadataResolver},
    markup::{post_title, MarkupRenderer, PostModel},
    metadata::{poster_url, PosterSize, TitleSource, TmdbProvider, MAX_POSTERS},
    session::Session,
};
use postforge_common::size::format_optional_size;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{BuildArgs, Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "postforge=trace,postforge_common=debug".to_string()
        } else {
            "postforge=info".to_string()
        }
    });

    // Markup goes to stdout, so logs must not
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Extract { url } => extract_link(&url),
        Commands::Classify { names } => classify_names(&names),
        Commands::Resolve { url } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(resolve_link(&url, config_path))
        }
        Commands::Fetch {
            media_type,
            id,
            json,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(fetch_title(&id, media_type, json, config_path))
        }
        Commands::Build(args) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(build_post(args, config_path))
        }
        Commands::Render { input, out } => render_file(&input, out.as_deref(), config_path),
        Commands::Validate {
            config: validate_path,
        } => {
            let path = validate_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("postforge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn extract_link(url: &str) -> Result<()> {
    let reference = drive::extract(url).ok_or_else(|| postforge_common::Error::parse(url))?;
    println!("{reference}");
    Ok(())
}

fn classify_names(names: &[String]) -> Result<()> {
    for name in names {
        let link = classify(&drive::RawEntry::new("", name.as_str()));
        println!("{}\t{}", link.summary(), name);
    }
    Ok(())
}

async fn resolve_link(url: &str, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let reference = drive::extract(url).ok_or_else(|| postforge_common::Error::parse(url))?;

    let client = DriveClient::new(&config.drive);
    if !client.is_available() {
        anyhow::bail!(
            "Drive API key is not configured (set drive.api_key or {})",
            config::DRIVE_API_KEY_ENV
        );
    }

    let entries = client.resolve(&reference).await?;
    let links = classify_all(&entries);
    println!("{reference}: {} file(s)", links.len());
    for (i, link) in links.iter().enumerate() {
        println!("{:>3}. {}", i + 1, link.file_name);
        println!("     {} | {}", link.summary(), format_optional_size(link.size));
        println!("     {}", link.url);
    }
    Ok(())
}

async fn fetch_title(
    id: &str,
    media_type: postforge_common::MediaType,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let tmdb = TmdbProvider::new(&config.tmdb);
    if !tmdb.is_available() {
        anyhow::bail!(
            "TMDB API key is not configured (set tmdb.api_key or {})",
            config::TMDB_API_KEY_ENV
        );
    }

    let metadata = tmdb.fetch_title(id, media_type).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        return Ok(());
    }

    println!("Title: {}", metadata.title);
    if let Some(ref original) = metadata.original_title {
        println!("Original title: {original}");
    }
    if let Some(year) = metadata.year() {
        println!("Year: {year}");
    }
    if !metadata.genres.is_empty() {
        println!("Genres: {}", metadata.genres.join(", "));
    }
    if let Some(minutes) = metadata.runtime_minutes {
        println!("Runtime: {minutes} min");
    }
    if let Some(ref imdb) = metadata.imdb_id {
        println!("IMDb: {imdb}");
    }
    println!("\nPosters: {}", metadata.poster_paths.len());
    for (i, path) in metadata.poster_paths.iter().take(MAX_POSTERS).enumerate() {
        println!(
            "  [{i}] {}",
            poster_url(&config.tmdb.image_base_url, path, PosterSize::W500)
        );
    }
    match metadata.trailer_url() {
        Some(url) => println!("\nTrailer: {url}"),
        None => println!("\nTrailer: none"),
    }
    Ok(())
}

async fn build_post(args: BuildArgs, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let mut session = Session::new(&config);
    session.set_media_type(args.media_type);

    if let Some(ref id) = args.id {
        let tmdb = TmdbProvider::new(&config.tmdb);
        session
            .load_title(&tmdb, id, args.media_type)
            .await
            .with_context(|| format!("Failed to fetch title {id}"))?;
        if args.poster > 0 {
            session.select_poster(args.poster)?;
        }
    }

    if !args.links.is_empty() {
        let drive = DriveClient::new(&config.drive);
        for link in &args.links {
            session.set_link_input(link.as_str());
            session
                .add_link(&drive)
                .await
                .with_context(|| format!("Failed to add link {link}"))?;
        }
    }

    if let Some(trailer) = args.trailer {
        session.set_trailer_url(trailer);
    }

    let attributes = session.attributes_mut();
    if let Some(resolution) = args.resolution {
        attributes.select_resolution(resolution);
    }
    if let Some(codec) = args.codec {
        attributes.select_codec(codec);
    }
    for extra in args.extras {
        if !attributes.extras.contains(&extra) {
            attributes.toggle_extra(extra);
        }
    }

    let model = session.post_model();
    tracing::info!("Post title: {}", post_title(&model, &config.post));

    let output = if args.json {
        serde_json::to_string_pretty(&model)?
    } else {
        session.render()
    };
    write_output(&output, args.out.as_deref())
}

fn render_file(input: &Path, out: Option<&Path>, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read post model: {:?}", input))?;
    let model: PostModel = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse post model: {:?}", input))?;

    let markup = MarkupRenderer::new(config.post).render(&model);
    write_output(&markup, out)
}

fn write_output(content: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output: {:?}", path))?;
            println!("Wrote {} bytes to {}", content.len(), path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let key_state = |key: &str| if key.is_empty() { "not set" } else { "set" };

    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            config::Config::default()
        }
    };

    println!("  TMDB: {} ({})", config.tmdb.base_url, config.tmdb.language);
    println!("    API key: {}", key_state(&config.tmdb.api_key));
    println!(
        "  Drive: {} (timeout {}s)",
        config.drive.base_url, config.drive.timeout_secs
    );
    println!("    API key: {}", key_state(&config.drive.api_key));
    println!(
        "  Post: {} [{}] season {}",
        config.post.site_name, config.post.languages, config.post.season
    );
    Ok(())
}
