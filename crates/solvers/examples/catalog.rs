//! Runs every method on the standard equations and prints the results.
//!
//! Set `RUST_LOG=debug` to see each iteration.

use std::error::Error;

use nlsolve_core::Catalog;
use nlsolve_solvers::{
    scalar::{Config, Kind, Method},
    system,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let catalog = Catalog::builtin();
    let brackets = [[1.0, 2.0], [0.0, 1.0], [-3.0, -2.0], [-3.0, -2.0]];

    let config = Config::from_epsilon(1e-5)?.with_log(true);

    for ((index, equation), [left, right]) in catalog.iter().zip(brackets) {
        println!("{index}. f(x) = {equation} on [{left}, {right}]");

        for kind in Kind::ALL {
            let method = if kind.is_bracketing() {
                Method::new(kind, equation, left, right, config)
            } else {
                Method::newton(equation, 0.5 * (left + right), config)
            };

            if let Err(error) = method.check() {
                println!("  {kind}: check failed: {error}");
                continue;
            }

            match method.solve() {
                Ok(solution) => {
                    let rendered = solution.to_string().replace('\n', ", ");
                    println!("  {kind}: {rendered}");
                }
                Err(error) => println!("  {kind}: {error}"),
            }
        }
    }

    let config = system::Config::new(1e-6)?.with_log(true);
    let seed = [1.0, 0.0];

    for (index, system) in catalog.systems() {
        println!("system {index}: {} from {seed:?}", system.label());
        system::check(system, seed)?;
        let solution = system::solve_unobserved(system, seed, &config)?;
        println!("{solution:.6}");
    }

    Ok(())
}
