//! CLI to grow, inspect, and apply ID3 decision trees.

use std::path::PathBuf;

use minitree::logging;
use minitree::{Classifier, Id3Builder, Id3Classifier, SampleReader};

fn main() {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(command) = parse_args(std::env::args().skip(1).collect())? else {
        return Ok(());
    };
    match command {
        Command::Train { data, attributes, out, delimiter } => {
            let sample = SampleReader::new()
                .file(&data)
                .attributes(&attributes[..])
                .delimiter(delimiter)
                .read()
                .map_err(|err| err.to_string())?;
            let tree = Id3Builder::new(&sample)
                .build()
                .fit()
                .map_err(|err| format!("Training failed: {err}"))?;
            tree.save(&out).map_err(|err| err.to_string())?;
            println!(
                "Saved a tree with {} leaves (depth {}) to {}",
                tree.leaf_count(),
                tree.depth(),
                out.display()
            );
        }
        Command::Classify { tree, record, delimiter } => {
            let tree = Id3Classifier::load(&tree).map_err(|err| err.to_string())?;
            let record = record
                .split(delimiter)
                .map(|field| field.trim().to_string())
                .collect::<Vec<_>>();
            let label = tree.predict(record.as_slice()).map_err(|err| err.to_string())?;
            println!("{label}");
        }
        Command::Show { tree, dot } => {
            let tree = Id3Classifier::load(&tree).map_err(|err| err.to_string())?;
            print!("{tree}");
            if let Some(dot) = dot {
                tree.to_dot_file(&dot).map_err(|err| err.to_string())?;
                println!("Wrote {}", dot.display());
            }
        }
    }
    Ok(())
}

enum Command {
    Train {
        data: PathBuf,
        attributes: Vec<String>,
        out: PathBuf,
        delimiter: char,
    },
    Classify {
        tree: PathBuf,
        record: String,
        delimiter: char,
    },
    Show {
        tree: PathBuf,
        dot: Option<PathBuf>,
    },
}

#[derive(Default)]
struct Options {
    data: Option<PathBuf>,
    attributes: Vec<String>,
    out: Option<PathBuf>,
    tree: Option<PathBuf>,
    record: Option<String>,
    dot: Option<PathBuf>,
    delimiter: Option<char>,
}

fn parse_args(args: Vec<String>) -> Result<Option<Command>, String> {
    let Some(subcommand) = args.first() else {
        println!("{}", help_text());
        return Ok(None);
    };
    let mut options = Options::default();
    let mut idx = 1usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                return Ok(None);
            }
            "--data" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--data requires a value".to_string())?;
                options.data = Some(PathBuf::from(value));
            }
            "--attributes" => {
                idx += 1;
                let value =
                    args.get(idx).ok_or_else(|| "--attributes requires a value".to_string())?;
                options.attributes = value
                    .split(',')
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect();
            }
            "--out" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--out requires a value".to_string())?;
                options.out = Some(PathBuf::from(value));
            }
            "--tree" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--tree requires a value".to_string())?;
                options.tree = Some(PathBuf::from(value));
            }
            "--record" => {
                idx += 1;
                let value =
                    args.get(idx).ok_or_else(|| "--record requires a value".to_string())?;
                options.record = Some(value.to_string());
            }
            "--dot" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--dot requires a value".to_string())?;
                options.dot = Some(PathBuf::from(value));
            }
            "--delimiter" => {
                idx += 1;
                let value =
                    args.get(idx).ok_or_else(|| "--delimiter requires a value".to_string())?;
                options.delimiter = Some(parse_delimiter(value)?);
            }
            unknown => {
                return Err(format!("Unknown argument: {unknown}\n\n{}", help_text()));
            }
        }
        idx += 1;
    }

    let delimiter = options.delimiter.unwrap_or('\t');
    let command = match subcommand.as_str() {
        "-h" | "--help" => {
            println!("{}", help_text());
            return Ok(None);
        }
        "train" => Command::Train {
            data: options.data.ok_or_else(|| "train requires --data".to_string())?,
            attributes: Some(options.attributes)
                .filter(|names| !names.is_empty())
                .ok_or_else(|| "train requires --attributes".to_string())?,
            out: options.out.ok_or_else(|| "train requires --out".to_string())?,
            delimiter,
        },
        "classify" => Command::Classify {
            tree: options.tree.ok_or_else(|| "classify requires --tree".to_string())?,
            record: options
                .record
                .ok_or_else(|| "classify requires --record".to_string())?,
            delimiter,
        },
        "show" => Command::Show {
            tree: options.tree.ok_or_else(|| "show requires --tree".to_string())?,
            dot: options.dot,
        },
        unknown => {
            return Err(format!("Unknown command: {unknown}\n\n{}", help_text()));
        }
    };
    Ok(Some(command))
}

fn parse_delimiter(value: &str) -> Result<char, String> {
    match value {
        "\\t" | "tab" => Ok('\t'),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(format!("Delimiter must be a single character, got `{other}`")),
            }
        }
    }
}

fn help_text() -> &'static str {
    "minitree <command> [options]\n\n\
Commands:\n\
  train      Grow a tree from a delimited file and save it as JSON\n\
  classify   Classify a single record with a saved tree\n\
  show       Print a saved tree (and optionally export it to dot)\n\n\
Options:\n\
  --data <path>          Training file, one record per line (train)\n\
  --attributes <a,b,..>  Attribute names in column order (train)\n\
  --out <path>           Where to save the tree (train)\n\
  --tree <path>          Saved tree (classify, show)\n\
  --record <text>        Delimited attribute values (classify)\n\
  --dot <path>           Export the tree in the dot language (show)\n\
  --delimiter <char>     Field delimiter, default tab\n\
  -h, --help             Show this help text"
}
