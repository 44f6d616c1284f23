//! ff - fractal flame point math on the command line
//!
//! Evaluates the ff-core point operations on points given as comma
//! separated components, in 32 or 64 bit precision.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use ff_core::NormKind;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "ff")]
#[command(author, version, about = "Fractal flame point math")]
#[command(long_about = "
Evaluates point and vector operations used by the fractal flame renderer.
Points are comma separated components, 1 to 8 of them.

Examples:
  ff norm 3,4                          # Euclidean length
  ff norm 1,-2,3 --norm p=3            # L3 norm
  ff norm 1,-2,3 --norm l1 --power-sum
  ff dot 1.4,-3.5,0.7,-0.3 -1.6,-2,1,1.7
  ff angle 0,1,0 0,1,1.7320508
  ff cross 1,0,0 0,1,0
  ff rotate 1.8 1.8 1.5707963 --precision 32
  ff const pi:2/3
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Float precision in bits
    #[arg(long, global = true, value_enum, default_value = "64")]
    precision: Precision,
}

/// Float precision of a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Precision {
    /// 32 bit floats
    #[value(name = "32")]
    Single,
    /// 64 bit floats
    #[value(name = "64")]
    Double,
}

#[derive(Subcommand)]
enum Commands {
    /// Norm or power sum of a point
    #[command(visible_alias = "n")]
    Norm(NormArgs),

    /// Dot product of two points
    Dot(PairArgs),

    /// Angle between two vectors, in radians
    Angle(AngleArgs),

    /// Cross product (2D: scalar, 3D: vector)
    Cross(PairArgs),

    /// Linear interpolation a + t * (b - a)
    Lerp(LerpArgs),

    /// Midpoint (a + b) / 2
    Midpoint(PairArgs),

    /// Projection of a point onto a vector
    Project(ProjectArgs),

    /// Reflection of a point across the line along a vector
    Reflect(ProjectArgs),

    /// Counterclockwise rotation of (x, y)
    Rotate(RotateArgs),

    /// Sine, cosine and radius of (x, y)
    Polar(PolarArgs),

    /// Nearest representable value of a tabulated constant
    #[command(name = "const")]
    Const(ConstArgs),
}

#[derive(Args)]
struct NormArgs {
    /// Point, e.g. 3,4
    #[arg(allow_hyphen_values = true)]
    point: String,

    /// Norm: l1, l2, inf, p=<int> or p=<float>
    #[arg(short, long, default_value = "l2")]
    norm: NormKind,

    /// Print the power sum instead of the norm
    #[arg(long)]
    power_sum: bool,
}

#[derive(Args)]
struct PairArgs {
    /// First point
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second point
    #[arg(allow_hyphen_values = true)]
    b: String,
}

#[derive(Args)]
struct AngleArgs {
    /// First vector
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second vector
    #[arg(allow_hyphen_values = true)]
    b: String,

    /// Treat both vectors as unit length
    #[arg(long)]
    unit: bool,
}

#[derive(Args)]
struct LerpArgs {
    /// Start point
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// End point
    #[arg(allow_hyphen_values = true)]
    b: String,

    /// Interpolation parameter
    #[arg(allow_hyphen_values = true)]
    t: String,
}

#[derive(Args)]
struct ProjectArgs {
    /// Point to transform
    #[arg(allow_hyphen_values = true)]
    point: String,

    /// Direction vector
    #[arg(allow_hyphen_values = true)]
    direction: String,

    /// Treat the direction as unit length
    #[arg(long)]
    unit: bool,
}

#[derive(Args)]
struct RotateArgs {
    /// X coordinate
    #[arg(allow_hyphen_values = true)]
    x: String,

    /// Y coordinate
    #[arg(allow_hyphen_values = true)]
    y: String,

    /// Angle in radians
    #[arg(allow_hyphen_values = true)]
    angle: String,
}

#[derive(Args)]
struct PolarArgs {
    /// X coordinate
    #[arg(allow_hyphen_values = true)]
    x: String,

    /// Y coordinate
    #[arg(allow_hyphen_values = true)]
    y: String,
}

#[derive(Args)]
struct ConstArgs {
    /// eps, e, pi, pi:<n>/<d>, invpi:<n>/<d>, sqrt:<n>, invsqrt:<n>, cbrt:<n>, invcbrt:<n>
    name: String,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<String> {
    let p = cli.precision;
    match cli.command {
        Commands::Norm(args) => commands::norm::run(args, p),
        Commands::Dot(args) => commands::products::run_dot(args, p),
        Commands::Angle(args) => commands::products::run_angle(args, p),
        Commands::Cross(args) => commands::products::run_cross(args, p),
        Commands::Lerp(args) => commands::interp::run_lerp(args, p),
        Commands::Midpoint(args) => commands::interp::run_midpoint(args, p),
        Commands::Project(args) => commands::project::run_project(args, p),
        Commands::Reflect(args) => commands::project::run_reflect(args, p),
        Commands::Rotate(args) => commands::plane::run_rotate(args, p),
        Commands::Polar(args) => commands::plane::run_polar(args, p),
        Commands::Const(args) => commands::constant::run(args, p),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = run(cli)?;
    println!("{output}");
    Ok(())
}
