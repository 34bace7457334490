mod demo;
mod post;
mod pre;

use crate::demo::handle_demo::handle_demo;
use crate::pre::check_demo_opts::{check_demo_opts, check_demo_pars};
use crate::pre::demo_opts::DemoOpts;
use crate::pre::read_demo_pars::read_demo_pars;
use circbuf::buffer::Element;
use clap::Parser;
use log::info;
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Display};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get demo options from the command line arguments and check them
    let demo_opts: DemoOpts = DemoOpts::parse();
    check_demo_opts(&demo_opts)?;

    // EXECUTION -----------------------------------------------------------------------------------
    let t_start = Instant::now();

    if demo_opts.float {
        let max_value = demo_opts.max_value as f32;
        run_demo(&demo_opts, |rng| rng.f32() * max_value)?;
    } else {
        let max_value = demo_opts.max_value as i32;
        run_demo(&demo_opts, |rng| rng.i32(0..=max_value))?;
    }

    info!("Execution time (total): {}ms", t_start.elapsed().as_millis());

    Ok(())
}

/// run_demo loads (or generates) the values for the inserted element type, runs the demo and
/// prints its results.
fn run_demo<T, F>(demo_opts: &DemoOpts, gen_value: F) -> anyhow::Result<()>
where
    T: Element + Debug + Display + DeserializeOwned,
    F: FnMut(&mut fastrand::Rng) -> T,
{
    let (capacity, vals) = load_values(demo_opts, gen_value)?;

    info!(
        "Running demo with {} {} values and a buffer capacity of {}",
        vals.len(),
        if demo_opts.float { "float" } else { "integer" },
        capacity
    );

    let demo_result = handle_demo(capacity, &vals, demo_opts.time_idx, demo_opts.debug)?;

    // POST-PROCESSING -----------------------------------------------------------------------------
    demo_result.print_results();
    Ok(())
}

/// load_values returns the buffer capacity and the values to be pushed, either read from the
/// parameter file or drawn from a generator seeded with the inserted seed.
fn load_values<T, F>(demo_opts: &DemoOpts, mut gen_value: F) -> anyhow::Result<(usize, Vec<T>)>
where
    T: DeserializeOwned,
    F: FnMut(&mut fastrand::Rng) -> T,
{
    match &demo_opts.parfile_path {
        Some(parfile_path) => {
            let demo_pars = read_demo_pars::<T>(parfile_path.as_path())?;
            check_demo_pars(&demo_pars)?;
            info!(
                "Read {} values from {}",
                demo_pars.values.len(),
                parfile_path.display()
            );
            Ok((
                demo_pars.capacity.unwrap_or(demo_opts.capacity),
                demo_pars.values,
            ))
        }
        None => {
            let mut rng = fastrand::Rng::with_seed(demo_opts.seed);
            let vals = (0..demo_opts.no_values)
                .map(|_| gen_value(&mut rng))
                .collect();
            Ok((demo_opts.capacity, vals))
        }
    }
}

#[cfg(test)]
mod cli_tests {
    use crate::demo::handle_demo::handle_demo;
    use crate::load_values;
    use crate::pre::check_demo_opts::{check_demo_opts, check_demo_pars};
    use crate::pre::demo_opts::DemoOpts;
    use crate::pre::read_demo_pars::{read_demo_pars, DemoPars};
    use approx::assert_ulps_eq;
    use clap::Parser;
    use std::io::Write;

    fn parse(args: &[&str]) -> DemoOpts {
        DemoOpts::try_parse_from(std::iter::once("circbuf-demo").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_default_opts() {
        let demo_opts = parse(&[]);
        assert_eq!(demo_opts.capacity, 100);
        assert_eq!(demo_opts.no_values, 125);
        assert_eq!(demo_opts.seed, 0);
        assert_eq!(demo_opts.time_idx, 5);
        assert!(!demo_opts.float);
        assert!(check_demo_opts(&demo_opts).is_ok());
    }
    #[test]
    fn test_check_demo_opts_capacity() {
        let demo_opts = parse(&["--capacity", "0"]);
        assert!(check_demo_opts(&demo_opts).is_err());
    }
    #[test]
    fn test_check_demo_opts_no_values() {
        let demo_opts = parse(&["-n", "0"]);
        assert!(check_demo_opts(&demo_opts).is_err());
    }
    #[test]
    fn test_check_demo_opts_max_value() {
        let demo_opts = parse(&["--max-value", "0"]);
        assert!(check_demo_opts(&demo_opts).is_err());
    }
    #[test]
    fn test_check_demo_pars() {
        let demo_pars: DemoPars<i32> = DemoPars {
            capacity: Some(0),
            values: vec![1],
        };
        assert!(check_demo_pars(&demo_pars).is_err());

        let demo_pars: DemoPars<i32> = DemoPars {
            capacity: None,
            values: vec![],
        };
        assert!(check_demo_pars(&demo_pars).is_err());
    }

    #[test]
    fn test_load_generated_values() {
        let demo_opts = parse(&["-c", "10", "-n", "30", "-m", "50"]);
        let (capacity, vals) = load_values(&demo_opts, |rng| rng.i32(0..=50)).unwrap();
        assert_eq!(capacity, 10);
        assert_eq!(vals.len(), 30);
        assert!(vals.iter().all(|&val| (0..=50).contains(&val)));

        // same seed, same sequence
        let (_, vals_again) = load_values(&demo_opts, |rng| rng.i32(0..=50)).unwrap();
        assert_eq!(vals, vals_again);
    }
    #[test]
    fn test_load_parfile_values() {
        let mut parfile = tempfile::NamedTempFile::new().unwrap();
        write!(parfile, r#"{{"capacity": 3, "values": [1.5, 2.5, 4.0, 0.5]}}"#).unwrap();

        let demo_opts = parse(&["--float", "-p", parfile.path().to_str().unwrap()]);
        let (capacity, vals) = load_values(&demo_opts, |rng| rng.f32()).unwrap();
        assert_eq!(capacity, 3);
        assert_eq!(vals, vec![1.5_f32, 2.5, 4.0, 0.5]);
    }
    #[test]
    fn test_read_demo_pars_invalid() {
        let mut parfile = tempfile::NamedTempFile::new().unwrap();
        write!(parfile, r#"{{"values": [1.5]}}"#).unwrap();
        assert!(read_demo_pars::<i32>(parfile.path()).is_err());

        let demo_pars = read_demo_pars::<f64>(parfile.path()).unwrap();
        assert!(demo_pars.capacity.is_none());
    }

    #[test]
    fn test_handle_demo() {
        let demo_result = handle_demo(5, &[10, 20, 30, 50, 40, 45], 1, false).unwrap();
        assert_eq!(demo_result.value_at_time_idx, 30);
        assert_eq!(demo_result.min, 20);
        assert_eq!(demo_result.max, 50);
        assert_ulps_eq!(demo_result.mean, 37.0);
        assert_eq!(demo_result.argmax_storage_idx, 3);
        assert_eq!(demo_result.argmax_time_idx, 2);
        assert_eq!(demo_result.len_after_removal, 4);
        assert_eq!(demo_result.max_after_removal, Some(45));
    }
    #[test]
    fn test_handle_demo_time_idx_out_of_range() {
        assert!(handle_demo(5, &[1, 2], 5, false).is_err());
    }
}
