//! `figures` command handler.

use crate::cli::args::FiguresArgs;
use crate::error::BookkitError;
use crate::figures::dataset::FIGURES;
use crate::figures::render;

/// Execute `figures`.
///
/// Renders the three benchmark charts into the output directory,
/// creating it if absent. The charts share one guard: the first render
/// failure aborts the remaining ones.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or a
/// chart fails to render.
pub fn run(args: &FiguresArgs) -> Result<(), BookkitError> {
    eprintln!("Generating figures in {}...", args.output.display());

    render::ensure_output_dir(&args.output)?;

    for spec in &FIGURES {
        match render::render_figure(spec, &args.output) {
            Ok(_) => eprintln!("Generated {}", spec.file_name),
            Err(e) => {
                eprintln!("Error generating plots: {e}");
                eprintln!(
                    "Remaining charts were skipped; check that {} is writable",
                    args.output.display()
                );
                return Err(e.into());
            }
        }
    }

    Ok(())
}
