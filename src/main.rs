use {
    cadre::{Certificate, Config, SatSolverIF, Solver},
    std::{process::exit, time::Instant},
    structopt::StructOpt,
};

fn main() {
    let config = match Config::from_args().override_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {e}");
            exit(1);
        }
    };
    let start = Instant::now();
    let mut solver = match Solver::build(&config) {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("ERROR: {e}");
            exit(1);
        }
    };
    if 1 <= config.log_level {
        println!(
            "read the problem and initialized the solver in: {:.2}s",
            start.elapsed().as_secs_f64()
        );
        if !solver.state.ok {
            println!("found a conflict while reading the problem");
        }
    }
    match solver.solve() {
        Ok(answer) => {
            if 1 <= config.log_level {
                println!("completed in: {:.2}s", start.elapsed().as_secs_f64());
            }
            match answer {
                Certificate::SAT(model) => {
                    println!("SATISFIABLE");
                    if config.proof {
                        let line = model
                            .iter()
                            .map(|v| v.to_string())
                            .collect::<Vec<String>>()
                            .join(" ");
                        println!("{line}");
                    }
                }
                Certificate::UNSAT => {
                    println!("UNSATISFIABLE");
                }
            }
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            exit(1);
        }
    }
}
