use std::path::PathBuf;

use itertools::Itertools;
use strum::IntoEnumIterator;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use crate::meter::config::{IoMode, MAX_OUTPUTS};
use crate::meter::control::FaceAction;
use crate::meter::orientation::Orientation;
use crate::meter::Meter;
use crate::nbt::ToNBT;
use crate::world::direction::Direction;
use crate::world::side::FaceLabel;
use crate::world::{parse_direction, parse_face_label};

pub mod meter;
pub mod nbt;
pub mod world;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "energy-meter",
    about = "Inspect and edit the side configuration of energy meters"
)]
struct Opt {
    /// Log every translation and transition
    #[structopt(short, long)]
    verbose: bool,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Print which world direction each side maps to
    Translate {
        #[structopt(long, parse(try_from_str = parse_direction))]
        facing: Direction,
        #[structopt(long, default_value = "down", parse(try_from_str = parse_direction))]
        bottom: Direction,
    },
    /// Write a freshly placed meter with every side off
    Place {
        #[structopt(parse(from_os_str))]
        file: PathBuf,
        #[structopt(long, parse(try_from_str = parse_direction))]
        facing: Direction,
        #[structopt(long, default_value = "down", parse(try_from_str = parse_direction))]
        bottom: Direction,
    },
    /// Print the side configuration of a meter
    Show {
        #[structopt(parse(from_os_str))]
        file: PathBuf,
        /// Dump the stored document as JSON
        #[structopt(long)]
        json: bool,
    },
    /// Click one side of a meter and save the result
    Click {
        #[structopt(parse(from_os_str))]
        file: PathBuf,
        #[structopt(parse(try_from_str = parse_face_label))]
        side: FaceLabel,
        /// Force the side off (shift click)
        #[structopt(long)]
        reset: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_translation(orientation: &Orientation) {
    println!(
        "facing: {}, bottom: {}{}",
        orientation.facing(),
        orientation.bottom(),
        if orientation.is_tipped() { " (tipped)" } else { "" }
    );

    for side in FaceLabel::iter() {
        println!("{:>6} -> {}", side, orientation.translate(side));
    }
}

fn print_meter(meter: &Meter) {
    let config = meter.side_config();
    print_translation(meter.orientation());
    println!();

    for control in meter.controls() {
        println!("{:>6}: {}", control.side(), control.mode());
    }
    println!(
        "{:>6}: {} (fixed)",
        FaceLabel::Front,
        config.get_side(FaceLabel::Front)
    );

    let orientation = meter.orientation();
    let list = |mode: IoMode| {
        config
            .directions_with(mode)
            .map(|dir| format!("{} ({})", dir, orientation.side_of(dir)))
            .join(", ")
    };
    println!();
    println!("inputs: {} [{}]", config.has_input(), list(IoMode::In));
    println!(
        "outputs: {} [{}] ({}/{})",
        config.has_output(),
        list(IoMode::Out),
        config.output_count(),
        MAX_OUTPUTS
    );
}

fn main() -> eyre::Result<()> {
    let opt = Opt::from_args();
    init_tracing(opt.verbose);

    match opt.cmd {
        Command::Translate { facing, bottom } => {
            print_translation(&Orientation::new(facing, bottom)?);
        }
        Command::Place {
            file,
            facing,
            bottom,
        } => {
            eyre::ensure!(!file.exists(), "{} already exists", file.display());

            Meter::place(facing, bottom)?.save(&file)?;
        }
        Command::Show { file, json } => {
            let meter = Meter::load(&file)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&meter.to_nbt())?);
            } else {
                print_meter(&meter);
            }
        }
        Command::Click { file, side, reset } => {
            let mut meter = Meter::load(&file)?;
            let action = if reset {
                FaceAction::Reset
            } else {
                FaceAction::Advance
            };

            let update = meter.click(side, action)?;
            println!("{}", serde_json::to_string(&update)?);

            meter.save(&file)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unittest_cli_parses_directions() {
        let opt = Opt::from_iter([
            "energy-meter",
            "translate",
            "--facing",
            "UP",
            "--bottom",
            "south",
        ]);

        let Command::Translate { facing, bottom } = opt.cmd else {
            unreachable!();
        };
        assert_eq!(facing, Direction::Up);
        assert_eq!(bottom, Direction::South);
    }

    #[test]
    fn unittest_cli_rejects_unknown_side() {
        let result = Opt::from_iter_safe(["energy-meter", "click", "meter.nbt", "inside"]);

        assert!(result.is_err());
    }

    #[test]
    fn unittest_cli_click_defaults_to_advance() {
        let opt = Opt::from_iter(["energy-meter", "click", "meter.nbt", "left"]);

        let Command::Click { side, reset, .. } = opt.cmd else {
            unreachable!();
        };
        assert_eq!(side, FaceLabel::Left);
        assert!(!reset);
    }
}
