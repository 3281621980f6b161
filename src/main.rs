use anyhow::Result;
use clap::Parser;
use fillr_icons::icon_gen::{self, DEFAULT_SIZES};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "fillr-icons",
    about = "Draw the Fillr extension icons (Lightning Fill design)"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "./icons")]
    output: PathBuf,

    /// Icon sizes to generate, written as icon<SIZE>.png.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_values_t = DEFAULT_SIZES
    )]
    sizes: Vec<u32>,

    /// Tile color (CSS color format)
    #[clap(long, value_name = "COLOR")]
    background: Option<String>,

    /// Color of the gradient at the top of the tile (CSS color format)
    #[clap(long, value_name = "COLOR")]
    highlight: Option<String>,

    /// Lightning bolt color (CSS color format)
    #[clap(long, value_name = "COLOR")]
    bolt: Option<String>,

    /// Also bundle the generated sizes (up to 256px) into icon.ico
    #[clap(long)]
    ico: bool,

    /// Also write manifest-icons.json with the manifest "icons" entries
    #[clap(long)]
    manifest: bool,
}

impl From<Args> for icon_gen::Args {
    fn from(args: Args) -> Self {
        Self {
            output: args.output,
            sizes: args.sizes,
            background: args.background,
            highlight: args.highlight,
            bolt: args.bolt,
            ico: args.ico,
            manifest: args.manifest,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    icon_gen::generate_icons(args.into())
}
