use clap::{App, Arg};
use lettersat::formula::notation::parse;
use lettersat::*;

fn main() {
    env_logger::init();

    let matches = App::new("lettersat")
        .about("Decides a CNF formula over the variables A-Z")
        .arg(
            Arg::with_name("CLAUSE")
                .help("one clause per argument, e.g. `Ab` for A or not B")
                .multiple(true)
                .index(1),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("print only the verdict"),
        )
        .get_matches();

    let clauses: Vec<&str> = matches
        .values_of("CLAUSE")
        .map(|v| v.collect())
        .unwrap_or_else(Vec::new);

    match parse(clauses) {
        Ok(f) => {
            let solver = Solver::new(f);

            let exit_code = match solver.solve() {
                SatResult::Satisfiable(model) => {
                    println!("SATISFIABLE");
                    if !matches.is_present("quiet") {
                        for (variable, value) in model.iter() {
                            println!("{} = {}", variable.name(), value);
                        }
                    }
                    0
                }
                SatResult::Unsatisfiable => {
                    println!("UNSATISFIABLE");
                    1
                }
            };
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("parse error: {}", e);
            std::process::exit(-1);
        }
    }
}
