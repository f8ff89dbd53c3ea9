//! `fcdev refine`: clean up Lua templates in place.

use crate::cli::RefineArgs;
use crate::error::Result;
use crate::refine::{DEFAULT_PASSES, RefineOutcome, RefinePass, refine_path};

pub fn cmd_refine(args: RefineArgs) -> Result<()> {
    let passes = selected_passes(args.compact_tags);
    let outcomes = refine_path(&args.path, &args.extension, &passes)?;

    for outcome in &outcomes {
        println!("{}", describe(outcome));
    }

    let changed = outcomes.iter().filter(|o| o.changed()).count();
    println!("\n{} file(s) checked, {} updated", outcomes.len(), changed);
    Ok(())
}

fn selected_passes(compact_tags: bool) -> Vec<RefinePass> {
    let mut passes = Vec::with_capacity(DEFAULT_PASSES.len() + 1);
    if compact_tags {
        passes.push(RefinePass::CompactTags);
    }
    passes.extend(DEFAULT_PASSES);
    passes
}

fn describe(outcome: &RefineOutcome) -> String {
    if outcome.changed() {
        let names: Vec<_> = outcome.changed_passes.iter().map(|p| p.name()).collect();
        format!("Updated {} ({})", outcome.path.display(), names.join(", "))
    } else {
        format!("No changes in {}", outcome.path.display())
    }
}
