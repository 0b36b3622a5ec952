use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use pitchglow::{
    AnnotationRequest, Canvas, GlowTheme, MatchEvents, RenderOpts, render_pass_map, write_png,
};

#[derive(Parser, Debug)]
#[command(name = "pitchglow", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the team names found in an event file.
    Teams(TeamsArgs),
    /// Render one team's completed passes as a glow pass map PNG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct TeamsArgs {
    /// StatsBomb event JSON file.
    #[arg(long)]
    events: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// StatsBomb event JSON file.
    #[arg(long)]
    events: PathBuf,

    /// Team to plot. Defaults to the first team in the file.
    #[arg(long)]
    team: Option<String>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Theme JSON file. Defaults to the cyberpunk theme.
    #[arg(long)]
    theme: Option<PathBuf>,

    /// TTF/OTF font for the title and credit. Without it no text is drawn.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Title text (requires --font). Defaults to "{team} passes versus {opponent}".
    #[arg(long)]
    title: Option<String>,

    /// Credit text for the bottom-right corner (requires --font).
    #[arg(long)]
    credit: Option<String>,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 960)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Teams(args) => cmd_teams(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_teams(args: TeamsArgs) -> anyhow::Result<()> {
    let events = MatchEvents::from_path(&args.events)?;
    for name in events.team_names() {
        println!("{name}");
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let events = MatchEvents::from_path(&args.events)?;

    let team = match args.team {
        Some(t) => t,
        None => events
            .team_names()
            .into_iter()
            .next()
            .context("event file contains no teams")?,
    };

    let theme = match &args.theme {
        Some(path) => GlowTheme::from_path(path)?,
        None => GlowTheme::default(),
    };

    let annotations = args.font.map(|font_path| {
        let mut ann = AnnotationRequest::new(font_path);
        ann.title = args.title;
        ann.credit = args.credit;
        ann
    });

    let opts = RenderOpts {
        canvas: Canvas {
            width: args.width,
            height: args.height,
        },
        annotations,
        ..RenderOpts::default()
    };

    let frame = render_pass_map(&events, &team, &theme, &opts)?;
    write_png(&frame, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
