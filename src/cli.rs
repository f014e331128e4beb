use clap::{Parser, Subcommand};
use postforge_common::{Codec, Extra, MediaType, Resolution};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "postforge")]
#[command(author, version, about = "Release post builder for hosted media links")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the file or folder id from a hosting link
    Extract {
        /// Link to parse
        url: String,
    },

    /// Classify file names by quality, print type and audio
    Classify {
        /// File names to classify
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Look up a hosting link and list its classified files
    Resolve {
        /// File or folder link
        url: String,
    },

    /// Fetch title metadata from TMDB
    Fetch {
        /// Media type: movie or tv
        #[arg(long = "type", default_value = "movie")]
        media_type: MediaType,

        /// TMDB id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a complete post from a title id and hosting links
    Build(BuildArgs),

    /// Render a post model JSON file to markup
    Render {
        /// Post model file
        #[arg(required = true)]
        input: PathBuf,

        /// Write markup to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

#[derive(clap::Args)]
pub struct BuildArgs {
    /// Media type: movie or tv
    #[arg(long = "type", default_value = "movie")]
    pub media_type: MediaType,

    /// TMDB id of the title
    #[arg(long)]
    pub id: Option<String>,

    /// Hosting link to add; repeat for several, order is kept
    #[arg(short, long = "link")]
    pub links: Vec<String>,

    /// Override the trailer URL
    #[arg(long)]
    pub trailer: Option<String>,

    /// Index of the poster to use
    #[arg(long, default_value_t = 0)]
    pub poster: usize,

    /// Resolution tag for the post title
    #[arg(long)]
    pub resolution: Option<Resolution>,

    /// Codec tag for the post title
    #[arg(long)]
    pub codec: Option<Codec>,

    /// Extra tag for the post title; repeat for several
    #[arg(long = "extra")]
    pub extras: Vec<Extra>,

    /// Write markup to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the post model as JSON instead of markup
    #[arg(long)]
    pub json: bool,
}
