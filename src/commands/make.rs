//! `fcdev make`: build a native module.

use crate::build::run_make;
use crate::cli::MakeArgs;
use crate::error::Result;

pub fn cmd_make(args: MakeArgs) -> Result<()> {
    tracing::info!(target_dir = args.target.directory(), "running make");

    let output = run_make(&args.root, args.target)?;

    println!("Make command executed successfully:");
    print!("{}", output.stdout);
    Ok(())
}
