use std::env;
use std::error::Error;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tinyrand::{Seeded, StdRand, Wyrand};
use tracing::{debug, info};

use gencomb::arrays::shuffle;
use gencomb::base_n::{base_n, base_n_unbounded};
use gencomb::cartesian::cartesian;
use gencomb::comb::combinations;
use gencomb::enumerator::{Enumerator, Walk};
use gencomb::factoradic::factoradic;
use gencomb::perm::permutations;
use gencomb::power::{permutations_of_combinations, power_set};
use gencomb::print::tabulate_counts;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand, Clone)]
enum Command {
    /// enumerate a combinatorial family over the given elements
    Enumerate {
        /// family of results to enumerate
        #[clap(value_enum)]
        family: Family,

        /// result size (defaults to the number of elements)
        #[clap(short = 's', long)]
        size: Option<usize>,

        /// maximum number of results to print
        #[clap(short = 'l', long)]
        limit: Option<usize>,

        /// print each result as a JSON array
        #[clap(short = 'j', long)]
        json: bool,

        elements: Vec<String>,
    },

    /// enumerate the cartesian product of comma-separated sets
    Cartesian {
        /// print each result as a JSON array
        #[clap(short = 'j', long)]
        json: bool,

        sets: Vec<String>,
    },

    /// tabulate the counts for choosing k from n
    Count { n: u64, k: u64 },

    /// print the factoradic digits of n, least-significant first
    Factoradic { n: u128 },

    /// shuffle the given elements
    Shuffle {
        /// seed for a repeatable shuffle
        #[clap(long)]
        seed: Option<u64>,

        elements: Vec<String>,
    },
}
impl Command {
    fn validate(&self) -> anyhow::Result<()> {
        if let Command::Enumerate {
            family,
            size,
            limit,
            ..
        } = self
        {
            if size.is_some() && !family.is_sized() {
                bail!("--size does not apply to {family:?}");
            }
            if *family == Family::BaseNUnbounded && limit.is_none() {
                bail!("--limit is required for an unbounded enumeration");
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Family {
    Combinations,
    Permutations,
    PowerSet,
    PermutationCombinations,
    BaseN,
    BaseNUnbounded,
}
impl Family {
    fn is_sized(&self) -> bool {
        matches!(
            self,
            Family::Combinations | Family::Permutations | Family::BaseN
        )
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.command.validate()?;
    debug!("args: {args:?}");

    match args.command {
        Command::Enumerate {
            family,
            size,
            limit,
            json,
            elements,
        } => {
            let size = size.unwrap_or(elements.len());
            let printed = match family {
                Family::Combinations => drain(combinations(&elements, size), limit, json)?,
                Family::Permutations => drain(permutations(&elements, size), limit, json)?,
                Family::PowerSet => drain(power_set(&elements), limit, json)?,
                Family::PermutationCombinations => {
                    drain(permutations_of_combinations(&elements), limit, json)?
                }
                Family::BaseN => drain(base_n(&elements, size), limit, json)?,
                Family::BaseNUnbounded => drain(base_n_unbounded(&elements), limit, json)?,
            };
            info!("enumerated {printed} result(s)");
        }
        Command::Cartesian { json, sets } => {
            let sets: Vec<Vec<String>> = sets
                .iter()
                .map(|set| set.split(',').map(String::from).collect())
                .collect();
            let printed = drain(cartesian(&sets), None, json)?;
            info!("enumerated {printed} tuple(s)");
        }
        Command::Count { n, k } => {
            let table = tabulate_counts(n, k);
            info!("\n{}", Console::default().render(&table));
        }
        Command::Factoradic { n } => {
            let digits = factoradic(n);
            println!("{}", serde_json::to_string(&digits)?);
        }
        Command::Shuffle { seed, mut elements } => {
            match seed {
                Some(seed) => shuffle(&mut elements, &mut Wyrand::seed(seed)),
                None => shuffle(&mut elements, &mut StdRand::default()),
            };
            println!("{}", render(&elements, false)?);
        }
    }
    Ok(())
}

/// Prints results from a shared-mode enumeration until it is exhausted or `limit` is reached.
fn drain<W: Walk<Item = String>>(
    mut enumerator: Enumerator<W>,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<usize> {
    let mut printed = 0;
    while limit.map_or(true, |limit| printed < limit) {
        let Some(result) = enumerator.pull() else {
            break;
        };
        println!("{}", render(&result, json)?);
        printed += 1;
    }
    Ok(printed)
}

fn render(result: &[String], json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string(result)?)
    } else {
        Ok(format!("[{}]", result.join(", ")))
    }
}
