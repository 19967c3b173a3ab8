//! Generates target code from a schedule.

use crate::schedule::Schedule;

/// Generates target code.
pub trait Codegen {
    /// Rendered artifact of the backend.
    type Artifact: ToString;

    /// File extension of the artifact.
    const EXTENSION: &'static str;

    /// Generates the artifact for the given schedule.
    fn gen_schedule(&self, schedule: &Schedule) -> Self::Artifact;
}
