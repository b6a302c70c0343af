use std::io::Write as _;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tguy", version, about = "Trash guy text animation")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a single frame.
    Frame(FrameArgs),
    /// Print every frame in order.
    Play(PlayArgs),
    /// Print frame count and buffer size as JSON.
    Info(InputArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Text to animate; every code point becomes one item.
    text: Option<String>,

    /// Explicit item, used verbatim. Repeat for more items.
    #[arg(long = "item", conflicts_with = "text")]
    items: Vec<String>,

    /// Config JSON; command-line values override it.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Space sprites between slots.
    #[arg(long)]
    spacing: Option<u32>,

    /// Empty-slot sprite.
    #[arg(long)]
    space: Option<String>,

    /// Trash can sprite.
    #[arg(long)]
    can: Option<String>,

    /// Mover sprite while carrying.
    #[arg(long)]
    right: Option<String>,

    /// Mover sprite after the last drop.
    #[arg(long)]
    left: Option<String>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,
}

#[derive(Args, Debug)]
struct PlayArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Pause between frames, in milliseconds.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Redraw frames in place instead of one per line.
    #[arg(long, default_value_t = false)]
    inline: bool,

    /// Render frames on a thread pool before printing.
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Play(args) => cmd_play(args),
        Command::Info(args) => cmd_info(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: InputArgs) -> anyhow::Result<tguy::TrashConfig> {
    let file = match &args.in_path {
        Some(path) => Some(
            tguy::TrashConfig::from_path(path)
                .with_context(|| format!("load config '{}'", path.display()))?,
        ),
        None => None,
    };

    let text = if let Some(text) = args.text {
        Some(tguy::InputDef::Text(text))
    } else if !args.items.is_empty() {
        Some(tguy::InputDef::Items(args.items))
    } else {
        None
    };

    let sprites = tguy::SpriteOverrides {
        space: args.space,
        can: args.can,
        right: args.right,
        left: args.left,
    };

    let cfg = match (file, text) {
        (Some(mut cfg), text) => {
            if let Some(text) = text {
                cfg.text = text;
            }
            cfg.sprites = sprites.or(cfg.sprites);
            if let Some(spacing) = args.spacing {
                cfg.spacing = spacing;
            }
            cfg
        }
        (None, Some(text)) => tguy::TrashConfig {
            text,
            spacing: args.spacing.unwrap_or(tguy::DEFAULT_SPACING),
            sprites,
        },
        (None, None) => anyhow::bail!("nothing to animate: pass TEXT, --item or --in"),
    };
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut state = load_config(args.input)?.build()?;
    state.set_frame(tguy::FrameIndex(args.frame))?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", state.current_str()).context("write frame")?;
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let state = load_config(args.input)?.build()?;

    let layout = if args.inline {
        tguy::FrameLayout::Inline
    } else {
        tguy::FrameLayout::Lines
    };
    let mut sink = tguy::WriterSink::new(std::io::stdout(), layout);
    if args.delay_ms > 0 {
        sink = sink.with_delay(Duration::from_millis(args.delay_ms));
    }

    let opts = tguy::RenderOpts {
        parallel: args.parallel,
        ..Default::default()
    };
    let stats = state.render_range(tguy::FrameRange::all(state.frame_count()), opts, &mut sink)?;
    tracing::debug!(frames = stats.frames_total, "played");
    Ok(())
}

fn cmd_info(args: InputArgs) -> anyhow::Result<()> {
    let state = load_config(args)?.build()?;
    let info = serde_json::json!({
        "frames": state.frame_count(),
        "items": state.items().len(),
        "max_frame_len": state.max_frame_len(),
        "buffer_size": state.buffer_size(),
    });
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
