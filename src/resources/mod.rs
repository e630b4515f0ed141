//! Things a routine puts into the project, each able to report what is on
//! disk before anything is touched.
//!
//! - [`package`]: lock-file detection and install planning
//! - [`file`]: generated configuration files and their collision policies
//! - [`backup`]: the `.bak` chain that keeps replaced files
//! - [`package_json`]: the commitizen adapter key in `package.json`
pub mod backup;
pub mod file;
pub mod helpers;
pub mod package;
pub mod package_json;

use crate::error::SetupError;

/// What is at a target right now, compared with what a routine would put
/// there.
///
/// ```
/// use spellbookx_cli::resources::ResourceState;
///
/// let edited = ResourceState::Incorrect { current: "312 bytes".into() };
/// assert_ne!(edited, ResourceState::Correct);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Nothing there yet.
    Missing,
    /// Already holds the generated content.
    Correct,
    /// Holds something else, usually operator edits.
    Incorrect {
        /// Short description of what is there.
        current: String,
    },
    /// Cannot be written at all, e.g. the path is a directory.
    Invalid {
        /// Why.
        reason: String,
    },
}

/// Outcome of applying one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Written (after any backup the policy required).
    Applied,
    /// Identical content was already there; nothing written or backed up.
    AlreadyCorrect,
    /// Left as it was.
    Skipped {
        /// Why, e.g. `"kept existing"`.
        reason: String,
    },
}

/// A target that can be inspected without side effects.
///
/// Applying differs per target (generated files may prompt, `package.json`
/// is edited in place), so it lives on the concrete types.
pub trait Resource {
    /// Name used in log lines.
    fn description(&self) -> String;

    /// Inspect the target.
    ///
    /// # Errors
    ///
    /// Returns an error if the target exists but cannot be read.
    fn current_state(&self) -> Result<ResourceState, SetupError>;
}
