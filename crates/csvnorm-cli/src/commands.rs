use std::fs::File;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use csvnorm_core::{RunStats, normalize_stream};
use csvnorm_model::{CaseFolding, NormalizeOptions};
use csvnorm_transform::{RuleSet, TOTAL_DURATION};

use crate::cli::NormalizeArgs;
use crate::summary::apply_table_style;

pub fn run_normalize(args: &NormalizeArgs) -> Result<RunStats> {
    let case_folding = if args.no_fold_names {
        CaseFolding::Preserve
    } else {
        CaseFolding::Invariant
    };
    let options = NormalizeOptions::new()
        .with_case_folding(case_folding)
        .with_zones(args.source_zone, args.target_zone);
    let rules = RuleSet::default();

    let span = info_span!("normalize");
    let _guard = span.enter();

    let input: Box<dyn Read> = match &args.input {
        Some(path) if path.as_os_str() != "-" => Box::new(
            File::open(path).with_context(|| format!("open input {}", path.display()))?,
        ),
        _ => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("create output {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    normalize_stream(input, output, &rules, &options)
}

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Rule"]);
    apply_table_style(&mut table);
    for (column, rule) in RuleSet::default().entries() {
        table.add_row(vec![column, rule.description()]);
    }
    table.add_row(vec![
        TOTAL_DURATION,
        "derived: sum of FooDuration and BarDuration in seconds",
    ]);
    println!("{table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize_args(input: std::path::PathBuf, output: std::path::PathBuf) -> NormalizeArgs {
        NormalizeArgs {
            input: Some(input),
            output: Some(output),
            source_zone: chrono_tz::America::Los_Angeles,
            target_zone: chrono_tz::EST,
            no_fold_names: false,
            no_summary: true,
        }
    }

    #[test]
    fn normalizes_between_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.csv");
        std::fs::write(&input, "FullName,ZIP\nname1,1\n").expect("write input");

        let stats = run_normalize(&normalize_args(input, output.clone())).expect("run");
        assert_eq!(stats.rows_emitted, 1);
        let written = std::fs::read_to_string(&output).expect("read output");
        assert_eq!(written, "FullName,ZIP\nNAME1,00001\n");
    }

    #[test]
    fn missing_input_file_is_a_fatal_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let args = normalize_args(dir.path().join("absent.csv"), dir.path().join("out.csv"));
        let error = run_normalize(&args).unwrap_err();
        assert!(error.to_string().contains("open input"));
    }
}
