extern crate clap;
extern crate escapetime;
extern crate image;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use escapetime::{FractalVariant, RenderRequest, Renderer};
use num::Complex;
use image::png::PNGEncoder;
use image::ColorType;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

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

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const FRACTAL: &str = "fractal";
const PARAMETER: &str = "parameter";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("escape")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Escape-time fractal renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file (PNG)"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("750x750")
                .validator(|s| validate_pair::<u32>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(FRACTAL)
                .required(false)
                .long(FRACTAL)
                .short("f")
                .takes_value(true)
                .default_value("julia")
                .help("Fractal to render: julia, mandel, or ship (anything else means julia)"),
        )
        .arg(
            Arg::with_name(PARAMETER)
                .required(false)
                .long(PARAMETER)
                .short("p")
                .takes_value(true)
                .default_value("-0.15,0.65")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse complex parameter"))
                .help("Julia parameter as re,im (ignored by mandel and ship)"),
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
                .help("Number of threads to use in renderer"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("500")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration cutoff",
                        "Iteration cutoff must be between 1 and 1000000",
                    )
                })
                .help("Iteration cutoff per pixel"),
        )
        .get_matches()
}

fn write_image(outfile: &str, pixels: &[u8], bounds: (u32, u32)) -> Result<(), std::io::Error> {
    let path = Path::new(outfile);
    let output = File::create(&path)?;
    PNGEncoder::new(output).encode(pixels, bounds.0, bounds.1, ColorType::RGBA(8))?;
    Ok(())
}

fn main() {
    let matches = args();
    let image_size: (u32, u32) =
        parse_pair(matches.value_of(SIZE).unwrap(), 'x').expect("Error parsing image dimensions");
    let parameter: (f64, f64) = parse_pair(matches.value_of(PARAMETER).unwrap(), ',')
        .expect("Error parsing complex parameter");
    let threads =
        usize::from_str(matches.value_of(THREADS).unwrap()).expect("Could not parse thread count");
    let iterations = u32::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Could not parse iteration cutoff");

    let request = RenderRequest {
        width: image_size.0,
        height: image_size.1,
        variant: FractalVariant::from_selector(matches.value_of(FRACTAL).unwrap()),
        parameter: Complex::new(parameter.0, parameter.1),
        cutoff: iterations,
    };

    match Renderer::new(request) {
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
        Ok(renderer) => {
            let pixels = renderer.render_threaded(threads);
            if let Err(e) = write_image(matches.value_of(OUTPUT).unwrap(), &pixels, image_size) {
                eprintln!("Could not write image: {}", e);
                std::process::exit(1);
            }
        }
    }
}
