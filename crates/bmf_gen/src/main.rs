use std::path::{Path, PathBuf};

use anyhow::Context;
use bmf_engine::{
    import_strip, rasterize_sizes, Font, FontdueEngine, MonoImage, RasterOptions, RenderMode, Sequence, MAX_NAME_LEN, STANDARD_SIZES,
};
use bmf_engine_edit::BmfEditState;
use clap::{Args, Parser, Subcommand};
use flexi_logger::Logger;

use crate::config::{name_from_path, GenConfig};

mod config;

#[derive(Parser)]
#[command(version, about = "Converts TrueType fonts and glyph strips to BMF bitmap fonts.")]
pub struct Cli {
    #[arg(help = "TOML file with default settings.", long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct OutputArgs {
    #[arg(help = "Output file [default: output.bmf]", short, long)]
    output: Option<PathBuf>,

    #[arg(help = "Font name stored in the header [default: input file name]", short, long)]
    name: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Rasterize a TrueType/OpenType font, one sequence per size")]
    Ttf {
        #[arg(help = "Font file to rasterize.")]
        font: PathBuf,

        #[arg(help = "Pixel sizes to generate.", required_unless_present = "standard")]
        sizes: Vec<u8>,

        #[command(flatten)]
        output: OutputArgs,

        #[arg(help = "Render anti-aliased and keep pixels with at least this coverage (0-255).", long)]
        threshold: Option<u8>,

        #[arg(help = "Draw glyphs at their origin without bearing padding.", long, default_value_t = false)]
        no_padding: bool,

        #[arg(help = "Generate the standard sizes 10, 12, 14, 16, 18, 24 and 32.", long, default_value_t = false)]
        standard: bool,

        #[arg(help = "Widen space glyphs narrower than this.", long)]
        space_min_width: Option<u8>,
    },

    #[command(about = "Import a 16x16 glyph grid from an image")]
    Strip {
        #[arg(help = "Image holding 256 glyphs in a 16x16 grid.")]
        image: PathBuf,

        #[arg(help = "Glyph cell width in pixels.")]
        width: u8,

        #[arg(help = "Glyph cell height in pixels.")]
        height: u8,

        #[command(flatten)]
        output: OutputArgs,
    },

    #[command(about = "Show header and sequence metrics of a BMF file")]
    Info { path: PathBuf },

    #[command(about = "Render text with a BMF file as ASCII art")]
    Preview { path: PathBuf, point_size: u8, text: String },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => GenConfig::load(path).with_context(|| format!("reading config {}", path.display()))?,
        None => GenConfig::default(),
    };

    let _logger = Logger::try_with_env_or_str(&config.log_level)?.log_to_stderr().start()?;

    match args.command {
        Commands::Ttf {
            font,
            sizes,
            output,
            threshold,
            no_padding,
            standard,
            space_min_width,
        } => {
            let mut options = config.raster.clone();
            if let Some(threshold) = threshold {
                options.mode = RenderMode::Threshold;
                options.threshold = threshold;
            }
            if no_padding {
                options.bearing_padding = false;
            }
            let sizes = collect_sizes(&sizes, standard);
            let (out, name) = resolve_output(&config, output, &font);
            generate_from_ttf(&font, &sizes, &options, space_min_width.or(config.space_min_width), &out, &name)
        }
        Commands::Strip { image, width, height, output } => {
            let (out, name) = resolve_output(&config, output, &image);
            generate_from_strip(&image, width, height, &out, &name)
        }
        Commands::Info { path } => show_info(&path),
        Commands::Preview { path, point_size, text } => preview(&path, point_size, &text),
    }
}

/// Explicit sizes follow the standard set, duplicates are dropped.
fn collect_sizes(sizes: &[u8], standard: bool) -> Vec<u8> {
    let mut result = if standard { STANDARD_SIZES.to_vec() } else { Vec::new() };
    for size in sizes {
        if !result.contains(size) {
            result.push(*size);
        }
    }
    result
}

fn resolve_output(config: &GenConfig, args: OutputArgs, input: &Path) -> (PathBuf, String) {
    let output = args.output.unwrap_or_else(|| config.output.clone());
    let name = args.name.or_else(|| config.name.clone()).unwrap_or_else(|| name_from_path(input));
    if name.len() > MAX_NAME_LEN {
        log::warn!("Font name '{name}' is longer than {MAX_NAME_LEN} bytes and will be truncated");
    }
    (output, name)
}

fn generate_from_ttf(
    font_path: &Path,
    sizes: &[u8],
    options: &RasterOptions,
    space_min_width: Option<u8>,
    output: &Path,
    name: &str,
) -> anyhow::Result<()> {
    log::info!("Generating BMF from {}", font_path.display());
    log::info!("Sizes: {sizes:?}");

    let engine = FontdueEngine::open(font_path).with_context(|| format!("loading {}", font_path.display()))?;
    let sequences = rasterize_sizes(&engine, sizes, options, |progress| {
        log::info!("Rendering size {} ({}/{})", progress.size, progress.index + 1, progress.total);
    })?;

    let mut state = BmfEditState::from_font(Font::from_sequences(name, sequences)?);
    if let Some(min_width) = space_min_width {
        state.fix_space_width(min_width)?;
    }
    state.save_as(output).with_context(|| format!("writing {}", output.display()))?;

    println!("Successfully generated {} ({} sizes)", output.display(), sizes.len());
    Ok(())
}

fn generate_from_strip(image_path: &Path, width: u8, height: u8, output: &Path, name: &str) -> anyhow::Result<()> {
    log::info!("Generating BMF from {}", image_path.display());
    log::info!("Glyph size: {width}x{height}");

    let image = MonoImage::open(image_path).with_context(|| format!("loading {}", image_path.display()))?;
    let sequence = import_strip(&image, width, height)?;
    Font::with_sequence(name, sequence)
        .save(output)
        .with_context(|| format!("writing {}", output.display()))?;

    println!("Successfully generated {}", output.display());
    Ok(())
}

fn show_info(path: &Path) -> anyhow::Result<()> {
    let font = Font::load(path).with_context(|| format!("reading {}", path.display()))?;
    println!("Name:      {}", font.name());
    println!("Version:   {}", font.version());
    println!("Flags:     {:#04x}", font.flags());
    println!("Sequences: {}", font.sequence_count());
    for (index, sequence) in font.sequences().iter().enumerate() {
        let (min, max) = width_range(sequence);
        println!(
            "  #{index}: {}pt, height {}, baseline {}, glyph width {min}-{max}",
            sequence.point_size(),
            sequence.height(),
            sequence.baseline()
        );
    }
    Ok(())
}

fn width_range(sequence: &Sequence) -> (u8, u8) {
    sequence
        .glyphs()
        .iter()
        .fold((u8::MAX, u8::MIN), |(min, max), glyph| (min.min(glyph.width()), max.max(glyph.width())))
}

fn preview(path: &Path, point_size: u8, text: &str) -> anyhow::Result<()> {
    let font = Font::load(path).with_context(|| format!("reading {}", path.display()))?;
    let Some(sequence) = font.sequence_for_point_size(point_size) else {
        let available: Vec<u8> = font.sequences().iter().map(Sequence::point_size).collect();
        anyhow::bail!("no sequence for {point_size}pt, available: {available:?}");
    };
    print!("{}", sequence.render_text(text).ascii_art());
    Ok(())
}
