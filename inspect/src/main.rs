mod cli;

use clap::Parser;
use cli::{Cli, Command};
use dt_quantity::{
    quantity::QuantityBuilder, Amount, Bound, Duration, Interval, Ordered, OrderedValue, Quantity,
    Result,
};

fn quantity(magnitude: f64, units: Option<&str>) -> QuantityBuilder {
    let builder = Quantity::builder(magnitude);
    match units {
        Some(units) => builder.units(units),
        None => builder,
    }
}

fn bound(magnitude: Option<f64>, units: Option<&str>) -> Result<Bound<OrderedValue>> {
    let value = magnitude
        .map(|magnitude| quantity(magnitude, units).build().map(OrderedValue::from))
        .transpose()?;
    Ok(value.into())
}

fn print_duration(duration: &Duration) {
    let components = duration.components();
    println!("{duration}");
    println!("seconds: {}", duration.magnitude_seconds());
    println!(
        "components: sign={:?} years={} months={} weeks={} days={} hours={} minutes={} seconds={} fraction={}",
        components.sign,
        components.years,
        components.months,
        components.weeks,
        components.days,
        components.hours,
        components.minutes,
        components.seconds,
        components.fractional_seconds,
    );
}

fn run(command: Command) -> Result<()> {
    tracing::info!(?command, "running");
    match command {
        Command::Duration { literal } => print_duration(&Duration::parse(&literal)?),
        Command::Seconds { seconds } => println!("{}", Duration::from_seconds(seconds)?),
        Command::Add { lhs, rhs } => {
            println!("{}", Duration::parse(&lhs)?.try_add(&Duration::parse(&rhs)?)?)
        }
        Command::Sub { lhs, rhs } => {
            println!("{}", Duration::parse(&lhs)?.try_sub(&Duration::parse(&rhs)?)?)
        }
        Command::Range {
            value,
            lower,
            upper,
            lower_excluded,
            upper_excluded,
            units,
        } => {
            let units = units.as_deref();
            let range = Interval::new(
                bound(lower, units)?,
                bound(upper, units)?,
                lower.is_some() && !lower_excluded,
                upper.is_some() && !upper_excluded,
            )?;
            let value = quantity(value, units).normal_range(range.clone()).build()?;
            let verdict = if value.is_normal()? { "normal" } else { "abnormal" };
            println!("{value} in {range}: {verdict}");
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run(cli.command) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
