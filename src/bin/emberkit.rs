use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use emberkit::{BaseDirection, BidiContext, Color, DefaultConfig};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "emberkit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve bidi levels for a paragraph and print its visual order as JSON.
    Bidi(BidiArgs),
    /// Composite one pixel over another.
    Blend(BlendArgs),
    /// Convert a colour to RGB565 and back.
    Convert(ConvertArgs),
}

#[derive(Parser, Debug)]
struct BidiArgs {
    /// Paragraph text.
    #[arg(long)]
    text: String,

    /// Paragraph direction.
    #[arg(long, value_enum, default_value_t = DirChoice::Auto)]
    dir: DirChoice,

    /// Apply Arabic shaping, assuming every presentation form is available.
    #[arg(long)]
    shape: bool,

    /// Mirror brackets and other mirrored characters at RTL levels.
    #[arg(long)]
    mirror: bool,
}

#[derive(Parser, Debug)]
struct BlendArgs {
    /// Destination colour, `RRGGBB[AA]`.
    #[arg(long)]
    dst: String,

    /// Source colour, `RRGGBB[AA]`.
    #[arg(long)]
    src: String,

    /// Extra opacity applied to the source (0-255).
    #[arg(long, default_value_t = 255)]
    opacity: u8,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Colour to convert, `RRGGBB[AA]`.
    #[arg(long)]
    native: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirChoice {
    Auto,
    Ltr,
    Rtl,
}

impl From<DirChoice> for BaseDirection {
    fn from(choice: DirChoice) -> Self {
        match choice {
            DirChoice::Auto => BaseDirection::Auto,
            DirChoice::Ltr => BaseDirection::Ltr,
            DirChoice::Rtl => BaseDirection::Rtl,
        }
    }
}

#[derive(Serialize)]
struct BidiReport {
    paragraph_level: u8,
    rtl: bool,
    needs_bidi: bool,
    levels: Vec<u8>,
    visual: String,
}

#[derive(Serialize)]
struct BlendReport {
    native: String,
    color: String,
}

#[derive(Serialize)]
struct ConvertReport {
    native: String,
    rgb565: String,
    reconstructed: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Bidi(args) => cmd_bidi(args),
        Command::Blend(args) => cmd_blend(args),
        Command::Convert(args) => cmd_convert(args),
    }
}

fn parse_color(s: &str) -> anyhow::Result<Color> {
    Color::from_hex(s).with_context(|| format!("parse colour '{s}' (expected RRGGBB or RRGGBBAA)"))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("serialize report")?;
    println!("{out}");
    Ok(())
}

fn cmd_bidi(args: BidiArgs) -> anyhow::Result<()> {
    let mut text: Vec<char> = args.text.chars().collect();
    let mut ctx = BidiContext::new(text.len()).context("create bidi context")?;
    ctx.init(&text, args.dir.into()).context("classify text")?;
    ctx.process(&text).context("resolve levels")?;

    if args.shape {
        let all_glyphs = |_: char| true;
        ctx.apply_shaping(&mut text, None, &[&all_glyphs])
            .context("shape text")?;
    }
    if args.mirror {
        ctx.mirror_glyphs(&mut text).context("mirror text")?;
    }

    let row = 0..text.len();
    ctx.complete_row(row.clone()).context("complete row")?;
    let levels: Vec<u8> = ctx.levels().collect();
    ctx.reorder_chars(row, &mut text).context("reorder row")?;

    print_json(&BidiReport {
        paragraph_level: ctx.paragraph_level(),
        rtl: ctx.is_rtl(),
        needs_bidi: ctx.is_bidi_needed(),
        levels,
        visual: text.into_iter().collect(),
    })
}

fn cmd_blend(args: BlendArgs) -> anyhow::Result<()> {
    let dst = parse_color(&args.dst)?.to_native::<DefaultConfig>();
    let src = parse_color(&args.src)?.to_native::<DefaultConfig>();
    let out = emberkit::blend_with_opacity::<DefaultConfig>(dst, src, args.opacity);
    print_json(&BlendReport {
        native: format!("{out:#010x}"),
        color: Color::from_native::<DefaultConfig>(out).to_string(),
    })
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let native = parse_color(&args.native)?.to_native::<DefaultConfig>();
    let rgb565 = emberkit::native_to_rgb565::<DefaultConfig>(native);
    let back = emberkit::rgb565_to_native_opaque::<DefaultConfig>(rgb565);
    print_json(&ConvertReport {
        native: format!("{native:#010x}"),
        rgb565: format!("{rgb565:#06x}"),
        reconstructed: Color::from_native::<DefaultConfig>(back).to_string(),
    })
}
