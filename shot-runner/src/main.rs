//! Strikes the cue ball of a scene and prints the table after every segment
//! of the shot, or at evenly spaced frames, until all balls rest.
//!
//! Example:
//!   cargo run -p shot-runner -- --preset break --log-level debug
//!   cargo run -p shot-runner -- --scene scenes/bank.ron --frames --frame-rate 0.5

mod scenes;
use scenes::*;

use std::{ path::PathBuf, str::FromStr };

use anyhow::{ Context, Result, bail };
use clap::Parser;
use itertools::Itertools;
use log::{ LevelFilter, info };
use log4rs::{
    Config,
    append::console::{ ConsoleAppender, Target },
    config::{ Appender, Root },
    encode::pattern::PatternEncoder,
};
use ordered_float::OrderedFloat as OF;
use pool_engine::{
    SegmentOutcome,
    config::SceneConfig,
    shot::{ FRAME_RATE, Shot, ShotOptions },
};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulate a pool shot until every ball rests", long_about = None)]
struct Args {
    /// RON scene file
    #[arg(long, conflicts_with = "preset")]
    scene: Option<PathBuf>,
    /// Built-in scene
    #[arg(long)]
    preset: Option<String>,
    /// Print evenly spaced frames instead of one table per segment
    #[arg(long)]
    frames: bool,
    /// Seconds between two frames
    #[arg(long, default_value_t = FRAME_RATE)]
    frame_rate: f64,
    /// Run every built-in scene and print one summary line for each
    #[arg(long, conflicts_with_all = ["scene", "preset"])]
    all_presets: bool,
    /// Print the scene as RON instead of playing it
    #[arg(long)]
    print_scene: bool,
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) -> Result<()> {
    let level = LevelFilter::from_str(level)
        .ok()
        .with_context(|| format!("unknown log level {level:?}"))?;

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn load_scene(args: &Args) -> Result<SceneConfig> {
    match (&args.scene, &args.preset) {
        (Some(path), _) => SceneConfig::load_from_file(path)
            .with_context(|| format!("loading scene {}", path.display())),
        (None, Some(name)) => get_all_scenes()
            .into_iter()
            .find(|scene| scene.name() == name)
            .map(|scene| scene.create_scene())
            .with_context(|| format!(
                "unknown preset {name:?}, expected one of {}",
                get_all_scenes().iter().map(|scene| scene.name()).join(", "),
            )),
        (None, None) => bail!("one of --scene, --preset or --all-presets is required"),
    }
}

/// Numbers of the balls that dropped into a hole during the shot
fn potted(shot: &Shot) -> Vec<u8> {
    let last = shot.final_table();
    shot.initial.objects()
        .filter_map(|(_, object)| object.ball_number())
        .filter(|&number| last.find_ball(number).is_none())
        .map(|number| number.value())
        .sorted()
        .collect()
}

fn summary(name: &str, shot: &Shot) -> String {
    let timed_out = shot.segments.iter()
        .filter(|segment| segment.outcome == SegmentOutcome::TimedOut)
        .count();
    let potted = potted(shot);
    format!(
        "{name:<10} {:>4} segments {:>9.4}s  potted: {}{}",
        shot.segments.len(),
        shot.duration(),
        if potted.is_empty() { "-".to_owned() } else { potted.iter().join(",") },
        if timed_out > 0 { format!("  ({timed_out} timed out)") } else { String::new() },
    )
}

fn run_all_presets() -> Result<()> {
    let mut shots = get_all_scenes()
        .into_par_iter()
        .map(|scene| -> Result<_> {
            let table = scene.create_scene()
                .struck_table()
                .with_context(|| format!("setting up preset {}", scene.name()))?;
            info!("playing preset {}", scene.name());
            Ok((scene.name(), Shot::play(table)))
        })
        .collect::<Result<Vec<_>>>()?;

    shots.sort_by_key(|(_, shot)| OF(shot.duration()));
    for (name, shot) in &shots {
        println!("{}", summary(name, shot));
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;
    let options = ShotOptions::with_frame_rate(args.frame_rate)?;

    if args.all_presets {
        return run_all_presets();
    }

    let scene = load_scene(&args)?;
    if args.print_scene {
        println!("{}", scene.to_ron_string()?);
        return Ok(());
    }

    let table = scene.struck_table().context("setting up the scene")?;
    let shot = Shot::play(table);
    info!("{}", summary("shot", &shot));

    if args.frames {
        for frame in shot.frames(&options) {
            println!("{frame}");
        }
        println!("{}", shot.final_table());
    }
    else {
        println!("{}", shot.initial);
        for segment in &shot.segments {
            info!("{:?} at t = {:.4}s", segment.outcome, segment.table.time());
            println!("{}", segment.table);
        }
    }
    Ok(())
}
