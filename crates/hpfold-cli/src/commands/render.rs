use crate::cli::RenderArgs;
use crate::error::{CliError, Result};
use crate::render;
use hpfold::core::energy::contact_energy;
use hpfold::core::models::monomer::HpSequence;
use hpfold::core::models::moves::parse_moves;
use hpfold::core::walk::build_walk;
use tracing::info;

pub fn run(args: RenderArgs) -> Result<()> {
    let sequence: HpSequence = args.sequence.parse()?;
    let moves = parse_moves(&args.moves)?;
    if moves.len() + 1 != sequence.len() {
        return Err(CliError::Argument(format!(
            "Expected {} moves for a {}-residue sequence, got {}",
            sequence.len() - 1,
            sequence.len(),
            moves.len()
        )));
    }

    let walk = build_walk(&moves).ok_or_else(|| {
        CliError::Argument("Move sequence folds the chain onto itself".to_string())
    })?;
    let energy = contact_energy(&sequence, &walk);
    info!(energy, "Rebuilt a valid walk of {} sites.", walk.len());

    println!("Sequence: {}", sequence);
    println!("Moves:    {}", args.moves.to_uppercase());
    println!("Energy:   {}", energy);

    match &args.output {
        Some(path) => {
            std::fs::write(path, render::svg_lattice(&sequence, &walk))?;
            println!("✓ Rendering written to: {}", path.display());
        }
        None => {
            println!();
            println!("{}", render::ascii_lattice(&sequence, &walk));
        }
    }

    Ok(())
}
