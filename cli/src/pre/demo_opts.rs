use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(
    version = "0.1.0",
    author = "Alexander Heilmeier <alexander.heilmeier@tum.de>",
    name = "circbuf-demo",
    about = "Fills a fixed-capacity ring buffer and evaluates its statistics"
)]
pub struct DemoOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug printing of the buffer content
    #[arg(short, long)]
    pub debug: bool,

    /// Use a floating-point buffer instead of an integer buffer
    #[arg(short, long)]
    pub float: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set buffer capacity (overridden by the capacity in the parameter file, if given there)
    #[arg(short, long, default_value_t = 100)]
    pub capacity: usize,

    /// Set number of generated values pushed to the buffer
    #[arg(short, long, default_value_t = 125)]
    pub no_values: usize,

    /// Set seed of the pseudo-random value generator
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// Set upper limit of the generated values, values are drawn from [0, max_value]
    #[arg(short, long, default_value_t = 100)]
    pub max_value: u32,

    /// Set time index (0 is the oldest value) of the value to be printed
    #[arg(short, long, default_value_t = 5)]
    pub time_idx: usize,

    /// Set path to a JSON parameter file whose values replace the generated ones
    #[arg(short, long)]
    pub parfile_path: Option<PathBuf>,
}
