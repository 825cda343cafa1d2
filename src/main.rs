//! Hellwig: Variable Selection CLI Tool
//!
//! Finds the combination of independent variables with the greatest
//! integral information capacity (Hellwig's method).

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use console::{style, Term};
use indicatif::ProgressBar;

use hellwig::cli::{confirm_large_search, needs_confirmation, Cli};
use hellwig::pipeline::{
    compute_correlations, extract_numeric_columns, get_column_names, load_dataset,
    load_dataset_with_progress, run_search, search_space,
};
use hellwig::report::{display_selection, export_selection, format_plain, ExportParams};
use hellwig::utils::{
    create_progress_bar, create_search_bar, finish_with_success, finish_with_warning,
    print_banner, print_completion, print_config, print_count, print_info, print_step_header,
    print_step_time, print_success, ConfigCard,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    // Size bounds are checked before the dataset is opened
    let config = cli.search_config();
    config.validate()?;
    let csv_options = cli.csv_options()?;

    if !quiet {
        print_banner(env!("CARGO_PKG_VERSION"));
    }

    let columns = get_column_names(&cli.file, &csv_options)?;
    let pool = config.resolve_pool(&columns, &cli.dependent_variable)?;
    let bounds = config.bounds(pool.len())?;
    let total = search_space(pool.len(), bounds.sizes());

    if !quiet {
        let formula = config.formula.to_string();
        let parallelism = config.parallelism.to_string();
        print_config(&ConfigCard {
            input: &cli.file,
            dependent: &cli.dependent_variable,
            pool_size: pool.len(),
            min: bounds.min,
            max: bounds.max,
            formula: &formula,
            parallelism: &parallelism,
            search_space: total,
        });
    }

    if needs_confirmation(total, cli.confirm_threshold, cli.no_confirm) {
        if !Term::stdout().is_term() {
            anyhow::bail!(
                "Search space of {} combinations exceeds --confirm-threshold ({}). \
                 Narrow --min/--max or pass --no-confirm.",
                total,
                cli.confirm_threshold
            );
        }
        if !confirm_large_search(total)? {
            println!("Cancelled by user.");
            return Ok(());
        }
    }

    // Step 1: Load dataset
    let step_start = Instant::now();
    let df = if quiet {
        load_dataset(&cli.file, &csv_options)?
    } else {
        print_step_header(1, "Load Dataset");
        let (df, rows, cols, memory_mb) = load_dataset_with_progress(&cli.file, &csv_options)?;
        println!("\n    {} Dataset Statistics:", style("✧").cyan());
        println!("      Rows: {}", rows);
        println!("      Columns: {}", cols);
        println!("      Estimated memory: {:.2} MB", memory_mb);
        print_step_time(step_start.elapsed());
        df
    };

    let (dependent_column, independent_columns) =
        extract_numeric_columns(&df, &cli.dependent_variable, &pool, &csv_options)?;
    drop(df);

    // Step 2: Correlations
    if !quiet {
        print_step_header(2, "Correlation Analysis");
    }
    let step_start = Instant::now();
    let n = independent_columns.len() as u64;
    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        create_progress_bar(n * n.saturating_sub(1) / 2, "Correlating pairs")
    };
    let (matrix, dependent) = compute_correlations(&dependent_column, &independent_columns, &pb)
        .context("Failed to compute correlations")?;
    finish_with_success(&pb, "Correlation matrix ready");
    if !quiet {
        print_step_time(step_start.elapsed());
    }

    // Step 3: Combination search
    if !quiet {
        print_step_header(3, "Combination Search");
    }
    let step_start = Instant::now();
    let pb = create_search_bar(total, quiet);
    let selection = run_search(&matrix, &dependent, &config, bounds, &pb)?;
    let scored = format!("Scored {} combinations", selection.total_evaluated());
    if selection.total_degenerate() > 0 {
        finish_with_warning(&pb, &scored);
    } else {
        finish_with_success(&pb, &scored);
    }

    if quiet {
        println!("{}", format_plain(&selection));
    } else {
        if selection.total_degenerate() > 0 {
            print_count(
                "degenerate combination(s)",
                selection.total_degenerate(),
                Some("(zero capacity denominator, excluded)"),
            );
        }
        print_step_time(step_start.elapsed());
        display_selection(&selection, &matrix, &dependent);
    }

    if let Some(output) = &cli.output {
        let input_file = cli.file.display().to_string();
        export_selection(
            &selection,
            &matrix,
            &dependent,
            output,
            &ExportParams {
                input_file: &input_file,
                formula: config.formula,
                bounds,
            },
        )?;
        if !quiet {
            println!();
            print_success(&format!("Result written to {}", output.display()));
        }
    } else if !quiet {
        println!();
        print_info("Use -o/--output to save the result as JSON");
    }

    if !quiet {
        print_completion();
    }

    Ok(())
}
