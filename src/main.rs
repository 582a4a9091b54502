//! Report chart generator - renders the Chapter 3 figures as PNG files.

use std::path::Path;
use std::process::ExitCode;

use report_charts::batch;

fn main() -> ExitCode {
    println!("Generating charts for the AR try-on research report...");
    println!("{}", "=".repeat(50));

    let output_dir = Path::new(batch::OUTPUT_DIR);
    if let Err(err) = run(output_dir) {
        println!("Error generating charts: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(output_dir: &Path) -> anyhow::Result<()> {
    batch::run(output_dir)?;

    println!("{}", "=".repeat(50));
    println!("✓ All charts generated successfully!");
    let resolved = output_dir
        .canonicalize()
        .unwrap_or_else(|_| output_dir.to_path_buf());
    println!("Charts saved in: {}", resolved.display());

    println!();
    println!("Generated files:");
    for file in batch::list_outputs(output_dir)? {
        if let Some(name) = file.file_name() {
            println!("  - {}", name.to_string_lossy());
        }
    }
    Ok(())
}
