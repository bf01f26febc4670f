use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "covermesh", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a single cover SVG.
    Generate(GenerateArgs),
    /// Regenerate a cover inside every entry directory under a content root.
    Batch(BatchArgs),
    /// Generate a cover and rasterize it to a PNG preview.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Generator seed.
    #[arg(long)]
    seed: u64,

    /// Identifier scoping the output's ids/classes (defaults to the seed).
    #[arg(long)]
    id: Option<String>,

    /// Config JSON overriding the default canvas.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Content root; every child directory is one entry, named by its slug.
    #[arg(long)]
    dir: PathBuf,

    /// Config JSON overriding the default canvas.
    #[arg(long)]
    config: Option<PathBuf>,

    /// File name written inside each entry directory.
    #[arg(long, default_value = "cover.svg")]
    file_name: String,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Generator seed.
    #[arg(long)]
    seed: u64,

    /// Identifier scoping the output's ids/classes (defaults to the seed).
    #[arg(long)]
    id: Option<String>,

    /// Config JSON overriding the default canvas.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Raster scale factor.
    #[arg(long, default_value_t = 1.0)]
    zoom: f32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Batch(args) => cmd_batch(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<covermesh::CoverConfig> {
    match path {
        Some(p) => Ok(covermesh::CoverConfig::from_path(p)?),
        None => Ok(covermesh::CoverConfig::default()),
    }
}

fn write_text(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let svg = covermesh::generate(&cfg, args.seed, args.id.as_deref());
    write_text(&args.out, &svg)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;

    let mut entries: Vec<(String, PathBuf)> = Vec::new();
    let rd = std::fs::read_dir(&args.dir)
        .with_context(|| format!("read content root '{}'", args.dir.display()))?;
    for ent in rd {
        let ent = ent.with_context(|| format!("scan '{}'", args.dir.display()))?;
        if !ent.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        let Some(slug) = ent.file_name().to_str().map(str::to_string) else {
            tracing::warn!(path = %ent.path().display(), "skipping non-unicode entry name");
            continue;
        };
        entries.push((slug, ent.path()));
    }
    entries.sort();

    // Each generation call is self-contained, so entries fan out freely.
    let written: usize = entries
        .par_iter()
        .map(|(slug, dir)| {
            let seed = covermesh::seed_for_identifier(slug);
            let svg = covermesh::generate(&cfg, seed, Some(slug.as_str()));
            let target = dir.join(&args.file_name);
            match std::fs::write(&target, &svg) {
                Ok(()) => 1,
                Err(err) => {
                    tracing::warn!(slug = %slug, error = %err, "skipping entry");
                    0
                }
            }
        })
        .sum();

    eprintln!(
        "regenerated {written}/{} covers under {}",
        entries.len(),
        args.dir.display()
    );
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let svg = covermesh::generate(&cfg, args.seed, args.id.as_deref());

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(&svg, &opts).context("parse generated svg")?;

    let width = ((cfg.width as f32) * args.zoom).ceil().max(1.0) as u32;
    let height = ((cfg.height as f32) * args.zoom).ceil().max(1.0) as u32;
    let mut pixmap =
        resvg::tiny_skia::Pixmap::new(width, height).context("allocate preview pixmap")?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    let mut rgba = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        &rgba,
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
