use crate::design::{draw_icon, Palette};
use crate::manifest::{write_manifest_icons, ManifestIcons};
use anyhow::{Context, Result};
use image::{
    codecs::{
        ico::{IcoEncoder, IcoFrame},
        png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    },
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use log::{debug, warn};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

/// Sizes a Chrome extension needs: toolbar, extensions page, store/install
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Largest icon the generator will draw
pub const MAX_SIZE: u32 = 1024;

/// Largest frame an ICO file can hold
const MAX_ICO_SIZE: u32 = 256;

// Library-side mirror of the CLI arguments
#[derive(Debug, Clone)]
pub struct Args {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub background: Option<String>,
    pub highlight: Option<String>,
    pub bolt: Option<String>,
    pub ico: bool,
    pub manifest: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from("./icons"),
            sizes: DEFAULT_SIZES.to_vec(),
            background: None,
            highlight: None,
            bolt: None,
            ico: false,
            manifest: false,
        }
    }
}

/// File name used for an icon of the given size
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

pub fn generate_icons(args: Args) -> Result<()> {
    let sizes = normalize_sizes(&args.sizes)?;
    let palette = build_palette(&args)?;

    // Ensure the output directory exists
    std::fs::create_dir_all(&args.output).context("Can't create output directory")?;

    println!("Generating Fillr icons with Lightning Fill design...");
    println!("{}", "=".repeat(50));

    let prefix = manifest_prefix(&args.output);
    let mut manifest = ManifestIcons::default();
    let mut ico_images = Vec::new();

    for size in sizes {
        let filename = icon_file_name(size);
        print!("Creating {filename} ({size}x{size})... ");
        std::io::stdout().flush().ok();

        let icon = draw_icon(size, &palette)
            .with_context(|| format!("Failed to draw {size}x{size} icon"))?;
        let file_size = save_png(&icon, &args.output.join(&filename))?;
        println!("OK ({} bytes)", format_thousands(file_size));

        manifest.add_icon(size, &prefix, &filename);
        if args.ico {
            if size <= MAX_ICO_SIZE {
                ico_images.push(icon);
            } else {
                warn!("{filename} is larger than {MAX_ICO_SIZE}px, leaving it out of icon.ico");
            }
        }
    }

    if args.ico {
        generate_ico(&ico_images, &args.output)?;
    }

    if args.manifest {
        let path = write_manifest_icons(&args.output, &manifest)?;
        println!("✓ Generated {}", path.display());
    }

    let location = std::fs::canonicalize(&args.output).unwrap_or_else(|_| args.output.clone());

    println!("{}", "=".repeat(50));
    println!("All icons generated successfully!");
    println!("Location: {}", location.display());
    println!("\nNext steps:");
    println!("1. Go to chrome://extensions/");
    println!("2. Click 'Reload' on the Fillr extension");
    println!("3. The new icons should appear!");

    Ok(())
}

/// Validate requested sizes, dropping repeats while keeping first-seen order
pub fn normalize_sizes(sizes: &[u32]) -> Result<Vec<u32>> {
    if sizes.is_empty() {
        anyhow::bail!("At least one icon size is required");
    }

    let mut unique = Vec::with_capacity(sizes.len());
    for &size in sizes {
        if size == 0 || size > MAX_SIZE {
            anyhow::bail!("Icon size must be between 1 and {}, got {}", MAX_SIZE, size);
        }
        if !unique.contains(&size) {
            unique.push(size);
        }
    }
    Ok(unique)
}

/// Parse a CSS color into an RGBA pixel.
///
/// The alpha component of the CSS color is ignored: palette colors are always
/// opaque, and translucency comes from the design itself (gradient, glow).
pub fn parse_color(color: &str) -> Result<Rgba<u8>> {
    let srgb = css_color::Srgb::from_str(color)
        .map_err(|_| anyhow::anyhow!("Invalid CSS color: {}", color))?;

    Ok(Rgba([
        (srgb.red * 255.).round() as u8,
        (srgb.green * 255.).round() as u8,
        (srgb.blue * 255.).round() as u8,
        255,
    ]))
}

fn build_palette(args: &Args) -> Result<Palette> {
    let mut palette = Palette::default();

    if let Some(color) = &args.background {
        palette.background = parse_color(color).context("Bad --background")?;
    }
    if let Some(color) = &args.highlight {
        palette.highlight = parse_color(color).context("Bad --highlight")?;
    }
    if let Some(color) = &args.bolt {
        palette.bolt = parse_color(color).context("Bad --bolt")?;
    }

    debug!("Using palette {palette:?}");
    Ok(palette)
}

/// Directory name the manifest should reference the icons under.
///
/// Paths without a final name (`.`, `..`, `/`) are treated as the extension
/// root, so the manifest lists bare file names.
fn manifest_prefix(out_dir: &Path) -> String {
    out_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Write `image` as PNG and return the size of the written file in bytes
fn save_png(image: &RgbaImage, path: &Path) -> Result<u64> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_png(image.as_raw(), &mut out, image.width(), image.height())
        .context("Failed to write PNG")?;
    out.flush()?;

    let len = std::fs::metadata(path)
        .with_context(|| format!("Failed to read size of {}", path.display()))?
        .len();
    debug!("Wrote {} ({} bytes)", path.display(), len);
    Ok(len)
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, width: u32, height: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, ColorType::Rgba8)?;
    Ok(())
}

fn generate_ico(images: &[RgbaImage], out_dir: &Path) -> Result<()> {
    if images.is_empty() {
        warn!("No sizes fit in an ICO file, skipping icon.ico");
        return Ok(());
    }

    let mut frames = Vec::with_capacity(images.len());
    for image in images {
        frames.push(IcoFrame::as_png(
            image.as_raw(),
            image.width(),
            image.height(),
            ColorType::Rgba8,
        )?);
    }

    let path = out_dir.join("icon.ico");
    let mut out_file = BufWriter::new(File::create(&path).context("Failed to create icon.ico")?);
    let encoder = IcoEncoder::new(&mut out_file);
    encoder
        .encode_images(&frames)
        .context("Failed to encode icon.ico")?;
    out_file.flush()?;

    println!("✓ Generated icon.ico ({} frames)", frames.len());
    Ok(())
}

/// Format a byte count with thousands separators, e.g. `12,345`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
