use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use lcdpage::{
    Document, PageRenderer, PixelPlane, RenderOpts, ScaleFactors, SubpixelOrder, Surface,
    SurfaceFormat, parse_subpixel_setting,
};

#[derive(Parser, Debug)]
#[command(name = "lcdpage", version)]
struct Cli {
    /// Log rendering decisions to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single page as a PNG.
    Render(RenderArgs),
    /// Print page sizes and their pixel size at the document zoom.
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Page index (0-based).
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Subpixel order: hrgb, hbgr, vrgb, vbgr or none. Defaults to $LCDPAGE_SUBPIXEL_ORDER, then hrgb.
    #[arg(long, value_parser = parse_subpixel_arg)]
    subpixel: Option<SubpixelArg>,

    /// Override the document zoom.
    #[arg(long)]
    zoom: Option<f64>,

    /// Render into a WIDTHxHEIGHT surface instead of at the document zoom.
    #[arg(long, value_parser = parse_size)]
    surface: Option<(u32, u32)>,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

/// `--subpixel` value; `None` disables LCD antialiasing.
#[derive(Clone, Copy, Debug)]
struct SubpixelArg(Option<SubpixelOrder>);

fn parse_subpixel_arg(s: &str) -> Result<SubpixelArg, String> {
    parse_subpixel_setting(s).map(SubpixelArg).ok_or_else(|| {
        format!("unknown subpixel order '{s}' (expected hrgb, hbgr, vrgb, vbgr or none)")
    })
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: u32 = w.trim().parse().map_err(|e| format!("width: {e}"))?;
    let h: u32 = h.trim().parse().map_err(|e| format!("height: {e}"))?;
    Ok((w, h))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Info(args) => cmd_info(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut doc = Document::from_path(&args.in_path)?;
    if let Some(zoom) = args.zoom {
        doc = doc.with_zoom(zoom);
    }

    let mut opts = RenderOpts::from_env();
    if let Some(SubpixelArg(order)) = args.subpixel {
        opts = opts.with_subpixel_order(order);
    }
    let mut renderer = PageRenderer::cpu(opts);
    let page = doc.page(args.page);

    let (rgb, width, height) = match args.surface {
        Some((w, h)) => {
            let mut surface = Surface::new(SurfaceFormat::Rgb24, w, h)?;
            renderer
                .render_into_surface_buffer(page, &mut surface)
                .with_context(|| format!("render page {} into {w}x{h} surface", args.page))?;
            let plane = surface
                .plane()
                .context("rendered surface has no color plane")?;
            (plane_to_rgb8(plane), w, h)
        }
        None => {
            let plane = renderer
                .render_to_owned_buffer(&doc, page)
                .with_context(|| format!("render page {}", args.page))?;
            (plane_to_rgb8(&plane), plane.width(), plane.height())
        }
    };

    write_png(&args.out, &rgb, width, height)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let doc = Document::from_path(&args.in_path)?;
    let scale = ScaleFactors::uniform(doc.zoom());
    println!("zoom {}", doc.zoom());
    for (i, page) in doc.pages().iter().enumerate() {
        let (w, h) = scale.pixel_size(page.width, page.height)?;
        println!("page {i}: {}x{} units -> {w}x{h} px", page.width, page.height);
    }
    Ok(())
}

fn plane_to_rgb8(plane: &PixelPlane) -> Vec<u8> {
    let mut out = Vec::with_capacity(plane.width() as usize * plane.height() as usize * 3);
    for y in 0..plane.height() {
        for px in plane.row(y).chunks_exact(plane.components()) {
            out.extend_from_slice(&[px[2], px[1], px[0]]);
        }
    }
    out
}

fn write_png(path: &Path, rgb: &[u8], width: u32, height: u32) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        rgb,
        width,
        height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
