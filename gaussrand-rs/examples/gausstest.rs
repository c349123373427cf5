use clap::Parser;
use gaussrand_rs::{Gaussian, uniform};
use log::{Level, LevelFilter, Metadata, Record};
use rand::{SeedableRng, rngs::StdRng};

const NBINS: usize = 100;
const WIDTH_SDS: f64 = 5.0;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of samples to draw
    #[arg(short, long)]
    iterations: usize,

    /// Seed for an explicit-state generator (thread-local generator if unset)
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, default_value_t = 0.0)]
    mean: f64,

    #[arg(short = 'd', long, default_value_t = 1.0)]
    std_dev: f64,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct MinimalLogger;

impl log::Log for MinimalLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.level() > Level::Error {
            println!("{:<5} {}", record.level(), record.args())
        } else {
            eprintln!("{:<5} {}", record.level(), record.args())
        }
    }

    fn flush(&self) {}
}

static MINIMAL_LOGGER: MinimalLogger = MinimalLogger;

fn main() {
    let args = Args::parse();

    let _ = log::set_logger(&MINIMAL_LOGGER);
    log::set_max_level(match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });

    let mut gauss = match Gaussian::new(args.mean, args.std_dev) {
        Ok(gauss) => gauss,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    let mut rng = args.seed.map(StdRng::seed_from_u64);
    let low = args.mean - WIDTH_SDS * args.std_dev;
    let bin_width = 2.0 * WIDTH_SDS * args.std_dev / NBINS as f64;

    let mut hist = [0usize; NBINS];
    let mut outside = 0usize;
    let mut sum = 0.0;
    let mut sum_sq = 0.0;

    for _i in 0..args.iterations {
        let x = match rng.as_mut() {
            Some(rng) => gauss.sample_rng(rng),
            None => gauss.sample(uniform),
        };
        sum += x;
        sum_sq += x * x;

        let bin = if bin_width > 0.0 {
            ((x - low) / bin_width).floor()
        } else {
            -1.0
        };
        if bin >= 0.0 && (bin as usize) < NBINS {
            hist[bin as usize] += 1;
        } else {
            outside += 1;
        }
    }

    for (i, count) in hist.iter().enumerate() {
        println!("{} {}", low + i as f64 * bin_width, count);
    }

    let n = args.iterations.max(1) as f64;
    let mean = sum / n;
    let variance = sum_sq / n - mean * mean;
    log::info!("mean={mean} variance={variance}");

    #[cfg(feature = "diagnostic-print")]
    log::debug!(
        "{} samples, {} outside the histogram, seed={:?}",
        args.iterations,
        outside,
        args.seed
    );
    #[cfg(not(feature = "diagnostic-print"))]
    let _ = outside;
}
