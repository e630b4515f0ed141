//! Command: a single routine.
use std::sync::Arc;

use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::logging::Logger;
use crate::tasks::{PresetOverrides, Routine};

use super::{CommandSetup, run_routines_to_completion};

/// Run one routine on its own.
///
/// # Errors
///
/// Returns an error if setup fails or the routine fails.
pub fn run(
    global: &GlobalOpts,
    routine: Box<dyn Routine>,
    presets: PresetOverrides,
    log: &Arc<Logger>,
) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let ctx = setup.context(global, presets, log);
    run_routines_to_completion(&[routine], &ctx, log)
}
