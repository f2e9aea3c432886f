#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use clap::Parser;

use horn_sat::{
    config::{Config, HornDisjunction, Splitting},
    context::Context,
    formula::Formula,
    reports::Decision,
};

/// Formulas solved when no formula is given.
const DEMONSTRATION: [&str; 2] = ["~(p | q) & ~r", "~(p & q)"];

/// Determines whether propositional formulas are satisfiable, by propagation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The formulas to solve, each given as a single argument.
    formulas: Vec<String>,

    /// Display a model of each satisfiable formula.
    #[arg(short, long)]
    model: bool,

    /// How to rewrite a disjunction to Horn form: DeMorgan or Literal.
    #[arg(long, default_value_t = HornDisjunction::DeMorgan.to_string())]
    horn_disjunction: String,

    /// How often to scan for nodes to split on: SinglePass or Fixpoint.
    #[arg(long, default_value_t = Splitting::SinglePass.to_string())]
    splitting: String,

    /// The maximum number of splits for each formula, with zero for no limit.
    #[arg(long, default_value_t = 0)]
    split_limit: usize,
}

fn config_from_args(args: &Args) -> Config {
    let mut config = Config::default();

    match args.horn_disjunction.parse::<HornDisjunction>() {
        Ok(disjunction) => {
            config.horn_disjunction.set(disjunction);
        }
        Err(()) => {
            let (min, max) = config.horn_disjunction.min_max();
            println!(
                "c Unknown {} '{}', expected {min} or {max}",
                config.horn_disjunction.name, args.horn_disjunction
            );
            std::process::exit(1);
        }
    }

    match args.splitting.parse::<Splitting>() {
        Ok(splitting) => {
            config.splitting.set(splitting);
        }
        Err(()) => {
            let (min, max) = config.splitting.min_max();
            println!(
                "c Unknown {} '{}', expected {min} or {max}",
                config.splitting.name, args.splitting
            );
            std::process::exit(1);
        }
    }

    config.split_limit.set(args.split_limit);

    config
}

fn display_decision(procedure: &str, decision: &Decision, show_model: bool) {
    match decision {
        Decision::Sat(_) if show_model => println!("  {procedure}: {decision}"),
        _ => println!("  {procedure}: {}", decision.report()),
    }
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();
    let config = config_from_args(&args);

    let formulas = match args.formulas.is_empty() {
        true => DEMONSTRATION.iter().map(|text| text.to_string()).collect(),
        false => args.formulas.clone(),
    };

    let mut the_context = Context::from_config(config);
    let mut failed = false;

    for text in formulas {
        let formula = match Formula::parse(&text) {
            Ok(formula) => formula,
            Err(e) => {
                println!("c Error parsing \"{text}\": {e}");
                failed = true;
                continue;
            }
        };

        let mut horn = the_context.horn(&formula);

        println!("{formula}");
        println!("  Horn form: {horn}");

        match the_context.solve_linear(&mut horn) {
            Ok(decision) => display_decision("Linear", &decision, args.model),
            Err(e) => {
                println!("c Linear solve error: {e}");
                failed = true;
            }
        }

        match the_context.solve_cubic(&formula) {
            Ok(decision) => {
                display_decision("Cubic", &decision, args.model);
                if let Some(model) = decision.model() {
                    if formula.evaluate(model) != Ok(true) {
                        println!("c The model does not satisfy {formula}");
                    }
                }
            }
            Err(e) => {
                println!("c Cubic solve error: {e}");
                failed = true;
            }
        }

        println!(
            "  Splits (total): {}, Time: {:.2?}",
            the_context.counters.splits, the_context.counters.time
        );
    }

    if failed {
        std::process::exit(1);
    }
}
