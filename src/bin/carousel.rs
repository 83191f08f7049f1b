use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "carousel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose and export a single slide as a JPEG.
    Render(RenderArgs),
    /// Export every slide of a JSON manifest, paced like a batch download.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input image path.
    #[arg(long)]
    image: PathBuf,

    /// Headline text drawn over the gradient.
    #[arg(long, default_value = "")]
    title: String,

    /// Body text drawn below the headline.
    #[arg(long, default_value = "")]
    body: String,

    /// Font file used for the title (a bold face).
    #[arg(long)]
    title_font: PathBuf,

    /// Font file used for the body (a regular face).
    #[arg(long)]
    body_font: PathBuf,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Optional output spec JSON overriding the 1080x1350 defaults.
    #[arg(long)]
    spec: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Manifest JSON listing slides (image path, title, body) and spec.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Font file used for titles (a bold face).
    #[arg(long)]
    title_font: PathBuf,

    /// Font file used for bodies (a regular face).
    #[arg(long)]
    body_font: PathBuf,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Debug, serde::Deserialize)]
struct Manifest {
    #[serde(default)]
    spec: Option<carousel::ExportSpec>,
    slides: Vec<ManifestSlide>,
}

#[derive(Debug, serde::Deserialize)]
struct ManifestSlide {
    image: PathBuf,
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn read_spec_json(path: &Path) -> anyhow::Result<carousel::ExportSpec> {
    let f = File::open(path).with_context(|| format!("open spec '{}'", path.display()))?;
    let r = BufReader::new(f);
    let spec: carousel::ExportSpec =
        serde_json::from_reader(r).with_context(|| "parse spec JSON")?;
    Ok(spec)
}

fn load_slide(
    store: &mut carousel::SlideStore,
    image: &Path,
    title: &str,
    body: &str,
) -> anyhow::Result<carousel::SlideId> {
    let bytes =
        std::fs::read(image).with_context(|| format!("read image '{}'", image.display()))?;
    let name = image.display().to_string();
    let payload = carousel::ingest_file(&name, bytes)?;
    let report = store.add(vec![payload])?;
    let id = *report
        .added
        .first()
        .ok_or_else(|| anyhow::anyhow!("slide for '{name}' was not added"))?;
    store.update(
        id,
        carousel::SlidePatch::default().title(title).body(body),
    );
    Ok(id)
}

fn export_and_report(
    store: &carousel::SlideStore,
    fonts: carousel::FontSet,
    spec: &carousel::ExportSpec,
    out: &Path,
) -> anyhow::Result<()> {
    let mut compositor = carousel::Compositor::new(fonts);
    let mut sink = carousel::DirSink::new(out)?;
    let report = carousel::export_all_to_dir(&mut compositor, store.slides(), spec, &mut sink);

    for (id, file_name) in &report.exported {
        println!("slide {id}: {}", sink.root().join(file_name).display());
    }
    for (id, err) in &report.failed {
        eprintln!("slide {id} failed: {err}");
    }
    if report.exported.is_empty() && !report.failed.is_empty() {
        anyhow::bail!("no slide exported successfully");
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let spec = match &args.spec {
        Some(path) => read_spec_json(path)?,
        None => carousel::ExportSpec::default(),
    };
    let fonts = carousel::FontSet::from_paths(&args.title_font, &args.body_font)?;

    let mut store = carousel::SlideStore::new();
    load_slide(&mut store, &args.image, &args.title, &args.body)?;
    export_and_report(&store, fonts, &spec, &args.out)
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let f = File::open(&args.in_path)
        .with_context(|| format!("open manifest '{}'", args.in_path.display()))?;
    let manifest: Manifest =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse manifest JSON")?;
    if manifest.slides.is_empty() {
        anyhow::bail!("manifest lists no slides");
    }

    let spec = manifest.spec.unwrap_or_default();
    let fonts = carousel::FontSet::from_paths(&args.title_font, &args.body_font)?;
    let manifest_root = args.in_path.parent().unwrap_or_else(|| Path::new("."));

    let mut store = carousel::SlideStore::new();
    for slide in &manifest.slides {
        let image = if slide.image.is_absolute() {
            slide.image.clone()
        } else {
            manifest_root.join(&slide.image)
        };
        load_slide(&mut store, &image, &slide.title, &slide.body)?;
    }
    export_and_report(&store, fonts, &spec, &args.out)
}
