use std::fmt::Display;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use polyarith::configuration::Configuration;
use polyarith::manager::managererror::ManagerError;
use polyarith::manager::manager::IManager;
use polyarith::math::polynomial::polynomial::Polynomial;
use polyarith::math::polynomial::polynomialerror::PolynomialError;

#[derive(Parser, Debug)]
#[command(name = "polyarith")]
#[command(version)]
#[command(about = "Arithmetic on dense real-coefficient polynomials")]
struct Args {
    /// JSON file with named polynomials and demo settings. Uses p = 2x**3 - 6x**2 + 15,
    /// q = 2x + 5 when omitted.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log division steps and configuration loading
    #[arg(short, long)]
    verbose: bool
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { Level::TRACE } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ManagerError> {
    let config = match &args.config {
        Some(path) => {
            let config = Configuration::new();
            config.from_reader(path)?;
            config
        },
        None => Configuration::sample()
    };

    let settings = config.demo_settings();
    let manager = config.polynomial_manager();
    let first_name = settings.first();
    let second_name = settings.second();
    let first = manager.get(first_name)?;
    let second = manager.get(second_name)?;

    println!("{}", first);
    println!("{}\n", second);

    println!("SUM:\nfirst way {}\nsecond way {}\n", first.sum(&second), second.sum(&first));
    println!(
        "DIFFERENCE:\nfirst way {}\nsecond way {}\n",
        first.difference(&second),
        second.difference(&first)
    );
    println!("PRODUCTION\nfirst way {}\nsecond way {}\n", first.prod(&second), second.prod(&first));

    println!("POWER");
    for &n in settings.powers() {
        println!("{} ** {}: {}", first_name, n, show(first.pow(n)));
        println!("{} ** {}: {}", second_name, n, show(second.pow(n)));
    }

    println!("\nDIVISION");
    println!("{}/{} {}", first_name, second_name, show_division(first.division(&second)));
    println!("{}/{} {}", second_name, first_name, show_division(second.division(&first)));

    println!("\nDIFF");
    for i in 1..=settings.max_derivative_order() {
        println!("for {} {}: {}", first_name, i, show(first.diff(i)));
    }

    println!("\nINTEGRAL");
    for bounds in settings.integrals() {
        for (name, polynomial) in [(first_name, &first), (second_name, &second)] {
            println!(
                "integrate {} from {} to {}: {}",
                name,
                bounds.left(),
                bounds.right(),
                polynomial.integrate(bounds.left(), bounds.right())
            );
        }
    }
    Ok(())
}

fn show<T: Display>(result: Result<T, PolynomialError>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(e) => format!("error: {}", e)
    }
}

fn show_division(result: Result<(Polynomial, Polynomial), PolynomialError>) -> String {
    match result {
        Ok((quotient, remainder)) => format!("div = {}, mod = {}", quotient, remainder),
        Err(e) => format!("error: {}", e)
    }
}
