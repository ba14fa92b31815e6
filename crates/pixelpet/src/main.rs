use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use pixelpet::{PetConfig, Script, Session};
use pixelpet_life::LifeVariant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Rule set: classic or evolving (overrides config)
    #[arg(long)]
    variant: Option<LifeVariant>,

    /// Seed for a reproducible run (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated seconds to run
    #[arg(long, default_value = "120")]
    duration: f32,

    /// Simulated seconds per update
    #[arg(long, default_value = "0.1")]
    step: f32,

    /// Player input, e.g. "feed@8,play@9,rest@30"
    #[arg(long, default_value = "")]
    script: String,

    /// Write the final frame's primitives to this file as RON
    #[arg(long)]
    dump_frame: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = PetConfig::load()?;
    if let Some(variant) = args.variant {
        config.simulation.variant = variant;
    }
    if args.seed.is_some() {
        config.simulation.seed = args.seed;
    }

    let verbose = args.verbose || config.debug.verbose_logging;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "info" }),
    )
    .init();

    if args.step.is_nan() || args.step <= 0.0 {
        anyhow::bail!("--step must be positive, got {}", args.step);
    }

    let mut script = Script::parse(&args.script).context("Failed to parse --script")?;
    let mut session = Session::new(&config)?;

    run(&mut session, &mut script, args.duration, args.step);

    if let Some(path) = args.dump_frame {
        dump_frame(&mut session, &path)?;
    }

    Ok(())
}

fn run(session: &mut Session, script: &mut Script, duration: f32, step: f32) {
    let mut last = session.creature().clone();
    println!("{}", session.status_line());

    while session.elapsed() < duration {
        for command in script.due(session.elapsed()) {
            session.apply(command);
        }
        for effect in session.drain_events() {
            log::debug!("{} at x={:.0}", effect.kind.name(), effect.x_offset);
        }

        session.update(step);

        if *session.creature() != last {
            println!("{}", session.status_line());
            last = session.creature().clone();
        }

        if session.creature().is_dead() && script.is_finished() {
            log::info!("Nothing left to do, stopping at {:.1}s", session.elapsed());
            break;
        }
    }
}

fn dump_frame(session: &mut Session, path: &Path) -> Result<()> {
    let stage = session.creature().stage;
    let primitives = session
        .render()
        .with_context(|| format!("No body to dump while the pet is {stage}"))?;

    let text = ron::ser::to_string_pretty(&primitives, ron::ser::PrettyConfig::default())
        .context("Failed to serialize frame")?;
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Wrote {} primitives to {}", primitives.len(), path.display());
    Ok(())
}
