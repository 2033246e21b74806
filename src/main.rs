use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Deserialize;

use exercises::list::{from_slice, merge_two_lists, to_vec};
use exercises::lookup::{num_jewels_in_stones, two_sum};
use exercises::scan::{sorted_and_rotated, special_array};

#[derive(Parser, Debug)]
#[command(version, about = "Runner for the LeetCode practice exercises", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Number lists are passed as one comma-separated argument, e.g. `1,2,4`.
#[derive(Subcommand, Debug)]
enum Command {
    /// Merge two sorted linked lists, e.g. `merge 1,2,4 1,3,4`
    Merge { list1: String, list2: String },
    /// Check whether an array is sorted and rotated, e.g. `rotated 3,4,5,1,2`
    Rotated { nums: String },
    /// Check whether adjacent elements alternate parity, e.g. `special 1,2,3`
    Special { nums: String },
    /// Find two indices summing to target, e.g. `two-sum 2,7,11,15 -t 9`
    TwoSum {
        nums: String,
        #[arg(short, long)]
        target: i32,
    },
    /// Count stones that are jewels, e.g. `jewels aA aAAbbbb`
    Jewels { jewels: String, stones: String },
    /// Run every case in a JSON case file, e.g. `run cases/cases.json`
    Run { file: PathBuf },
}

/// One entry of a JSON case file.
#[derive(Deserialize, Debug)]
#[serde(tag = "exercise", rename_all = "camelCase")]
enum Case {
    Merge { list1: Vec<i32>, list2: Vec<i32> },
    Rotated { nums: Vec<i32> },
    Special { nums: Vec<i32> },
    TwoSum { nums: Vec<i32>, target: i32 },
    Jewels { jewels: String, stones: String },
}

fn parse_nums(arg: &str) -> Result<Vec<i32>, String> {
    if arg.is_empty() {
        return Ok(Vec::new());
    }

    arg.split(',')
        .map(|part| {
            part.trim()
                .parse::<i32>()
                .map_err(|err| format!("invalid number {part:?}: {err}"))
        })
        .collect()
}

fn parse_nums_or_exit(arg: &str) -> Vec<i32> {
    parse_nums(arg).unwrap_or_else(|err| {
        eprintln!("Error happened : {err}");
        process::exit(1);
    })
}

fn run_case(case: &Case) -> String {
    match case {
        Case::Merge { list1, list2 } => {
            let merged = merge_two_lists(from_slice(list1), from_slice(list2));
            format!("{:?}", to_vec(&merged))
        }
        Case::Rotated { nums } => sorted_and_rotated(nums).to_string(),
        Case::Special { nums } => special_array(nums).to_string(),
        Case::TwoSum { nums, target } => match two_sum(nums, *target) {
            Ok(indices) => format!("{indices:?}"),
            Err(err) => format!("precondition failed: {err}"),
        },
        Case::Jewels { jewels, stones } => num_jewels_in_stones(jewels, stones).to_string(),
    }
}

/// Reads a case file and prints one result line per case.
fn run_case_file<P: AsRef<Path>>(path: P) -> Result<(), Box<dyn Error>> {
    let file = File::open(&path)?;
    let reader = BufReader::new(file);
    let cases: Vec<Case> = serde_json::from_reader(reader)?;

    tracing::info!("loaded {} cases from {}", cases.len(), path.as_ref().display());

    for (i, case) in cases.iter().enumerate() {
        tracing::debug!("running case {i}: {case:?}");
        println!("case {i}: {}", run_case(case));
    }

    Ok(())
}

fn main() {
    logging::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Merge { list1, list2 } => {
            let list1 = parse_nums_or_exit(&list1);
            let list2 = parse_nums_or_exit(&list2);
            let merged = merge_two_lists(from_slice(&list1), from_slice(&list2));
            println!("{:?}", to_vec(&merged));
        }
        Command::Rotated { nums } => {
            println!("{}", sorted_and_rotated(&parse_nums_or_exit(&nums)));
        }
        Command::Special { nums } => {
            println!("{}", special_array(&parse_nums_or_exit(&nums)));
        }
        Command::TwoSum { nums, target } => {
            match two_sum(&parse_nums_or_exit(&nums), target) {
                Ok(indices) => println!("{indices:?}"),
                Err(err) => {
                    eprintln!("precondition failed: {err}");
                    process::exit(1);
                }
            }
        }
        Command::Jewels { jewels, stones } => {
            println!("{}", num_jewels_in_stones(&jewels, &stones));
        }
        Command::Run { file } => {
            if let Err(err) = run_case_file(&file) {
                eprintln!("Error happened : {err}");
                process::exit(1);
            }
        }
    }
}
