extern crate clap;
extern crate crossbeam;
extern crate failure;
extern crate fractalgen;
extern crate image;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use fractalgen::{load_jobs, JobSpec, PixelGrid};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const CONFIG: &str = "config";
const OUTDIR: &str = "outdir";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("fractgen")
        .version("0.1.0")
        .about("Batch fractal renderer")
        .arg(
            Arg::with_name(CONFIG)
                .required(false)
                .long(CONFIG)
                .short("c")
                .takes_value(true)
                .default_value("fractals.json")
                .help("JSON batch configuration file"),
        )
        .arg(
            Arg::with_name(OUTDIR)
                .required(false)
                .long(OUTDIR)
                .short("o")
                .takes_value(true)
                .default_value(".")
                .help("Directory that receives the bitmaps"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of worker threads for the batch"),
        )
        .get_matches()
}

fn write_bitmap(path: &Path, grid: &PixelGrid) -> Result<(), std::io::Error> {
    image::save_buffer(
        path,
        grid.as_bytes(),
        grid.width(),
        grid.height(),
        image::ColorType::RGB(8),
    )
}

/// Validate, render, and persist one job.  The job's position in
/// the batch is its id, which names the output file.
fn run_job(id: usize, job: &JobSpec, outdir: &Path) -> Result<(), failure::Error> {
    let request = job.request()?;
    println!(
        "Generating fractal {} with settings: Seed {}, Width {}, Height {}, Fractal {} ({}), JuliaReal {}, JuliaImag {}, MaxIterations {}",
        id,
        job.seed,
        job.width,
        job.height,
        job.fractal,
        request.fractal.name(),
        job.julia_real,
        job.julia_imag,
        job.max_iterations,
    );

    let grid = fractalgen::render(&request)?;
    let path = outdir.join(format!("fractal_{}_seed_{}.bmp", id, job.seed));
    write_bitmap(&path, &grid)?;
    println!("Fractal {} saved as {}", id, path.display());
    Ok(())
}

fn main() {
    let matches = args();
    let outdir = PathBuf::from(matches.value_of(OUTDIR).unwrap());
    let threads = usize::from_str(matches.value_of(THREADS).unwrap())
        .expect("Could not parse thread count.");

    let jobs = match load_jobs(matches.value_of(CONFIG).unwrap()) {
        Ok(jobs) => jobs,
        Err(e) => {
            eprintln!("Could not read batch configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Jobs are embarrassingly parallel: each worker owns a private
    // grid and only finished images reach the disk, so a shared
    // iterator behind a mutex is all the coordination needed.  A
    // failing job is reported and counted, never fatal to siblings.
    let failures = Arc::new(Mutex::new(0usize));
    {
        let queue = Arc::new(Mutex::new(jobs.iter().enumerate()));
        let outdir = &outdir;
        crossbeam::scope(|spawner| {
            for _ in 0..threads {
                let queue = queue.clone();
                let failures = failures.clone();
                spawner.spawn(move |_| loop {
                    let job = { queue.lock().unwrap().next() };
                    match job {
                        Some((id, job)) => {
                            if let Err(e) = run_job(id, job, outdir) {
                                eprintln!("Fractal {} failed: {}", id, e);
                                *failures.lock().unwrap() += 1;
                            }
                        }
                        None => {
                            break;
                        }
                    }
                });
            }
        })
        .unwrap();
    }

    let failures = *failures.lock().unwrap();
    if failures > 0 {
        eprintln!("{} of {} fractals failed", failures, jobs.len());
        std::process::exit(1);
    }
}
