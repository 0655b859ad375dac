//! Convergence comparison across the built-in rule catalog.
//!
//! Drives every catalog rule over ∫₀^π sin(x) dx = 2 at a doubling panel
//! schedule, then ranks the rules by the panel count they need for 1e-6
//! absolute error.
//!
//! Run with: cargo run --example convergence_table

use std::f64::consts::PI;

use cotes::prelude::*;

fn main() {
    println!("Composite Newton-Cotes quadrature: ∫₀^π sin(x) dx = 2\n");

    let schedule = [1, 2, 4, 8, 16, 32, 64, 128];

    println!("Absolute error by panel count:");
    print!("{:>12}", "rule");
    for panels in schedule {
        print!("{panels:>12}");
    }
    println!();

    for entry in BuiltinRule::ALL {
        let rule = entry.rule();
        let samples = convergence_scan(&f64::sin, 0.0, PI, 2.0, &rule, &schedule)
            .expect("schedule contains no zero panel count");

        print!("{:>12}", entry.name());
        for sample in samples {
            print!("{:>12.2e}", sample.abs_error);
        }
        println!();
    }

    println!("\nPanels needed for 1e-6 absolute error:");
    for entry in BuiltinRule::ALL {
        let rule = entry.rule();
        match panels_to_tolerance(&f64::sin, 0.0, PI, 2.0, &rule, 1e-6, 5000) {
            Some(panels) => println!("{:>12}: {panels}", entry.name()),
            None => println!("{:>12}: not reached within 5000 panels", entry.name()),
        }
    }

    println!("\nGenerated rules share the catalog's generator:");
    let simpson_38 = NewtonCotesRule::new(&[1.0, 3.0, 3.0, 1.0], false)
        .expect("valid coefficient vector");
    let estimate = composite(&f64::sin, 0.0, PI, 64, &simpson_38)
        .expect("panel count is positive");
    println!("  simpson 3/8, 64 panels: estimate {estimate:.12}, error {:.2e}",
        (estimate - 2.0).abs());
}
