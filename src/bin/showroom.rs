//! Showroom CLI
//!
//! Assembles cars and prints them:
//! 1. With no presets, runs the full tour: three hand-assembled cars, the two
//!    director presets, and three cars finalized from one reused builder.
//! 2. With presets, builds each one through the director, each on a fresh builder
//!    unless `--shared` is given.
//!
//! Usage:
//!   showroom
//!   showroom sport suv
//!   showroom --shared sport suv
//!
//! Set `RUST_LOG=car_builder=trace` to watch each part being installed.

use car_builder::{CarBuilder, CarDirector, Preset, all_aliased};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "showroom")]
#[command(about = "Assemble cars with chained builders and preset directors")]
struct Args {
    /// Presets to build (sport, suv). Runs the full tour when empty.
    presets: Vec<Preset>,

    /// Build every preset on one builder, so all printed cars alias one car
    #[arg(long)]
    shared: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    if args.presets.is_empty() {
        tour();
        return Ok(());
    }

    let director = CarDirector::new();
    let mut shared_builder = CarBuilder::new();
    let mut cars = Vec::with_capacity(args.presets.len());
    for preset in &args.presets {
        let car = if args.shared {
            director.construct(*preset, &mut shared_builder)
        } else {
            director.construct(*preset, &mut CarBuilder::new())
        };
        cars.push((*preset, car));
    }

    for (preset, car) in &cars {
        println!("{preset:>6}: {car}");
    }
    if args.shared {
        println!("all aliased: {}", all_aliased(cars.iter().map(|(_, car)| car)));
    }

    Ok(())
}

fn tour() {
    println!("== hand assembled");
    let ferrari = CarBuilder::new()
        .set_body("Ferrari")
        .set_engine("V8")
        .set_wheels("Michelin")
        .finalize();
    let porsche = CarBuilder::new()
        .set_body("Porsche")
        .set_engine("V6")
        .set_wheels("Continental")
        .finalize();
    let tesla = CarBuilder::new()
        .set_body("Tesla")
        .set_engine("Electric")
        .set_wheels("Michelin")
        .finalize();
    for car in [&ferrari, &porsche, &tesla] {
        println!("{car}");
    }

    println!("== directed");
    let director = CarDirector::new();
    println!("{}", director.build_sport_configuration(&mut CarBuilder::new()));
    println!("{}", director.build_suv_configuration(&mut CarBuilder::new()));

    println!("== one builder, three cars");
    let mut builder = CarBuilder::new();
    let car1 = builder.set_body("Ferrari").finalize();
    let car2 = builder.set_body("Tesla").finalize();
    let car3 = builder.set_body("Porsche").finalize();
    for car in [&car1, &car2, &car3] {
        println!("{car}");
    }
    println!("all aliased: {}", all_aliased([&car1, &car2, &car3]));
}
