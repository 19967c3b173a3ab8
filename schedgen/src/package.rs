//! Package of schedules.

use std::fs;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::codegen::Codegen;
use crate::schedule::Schedule;

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("file system error: {error:?}")]
    Fs { error: io::Error },
}

/// Package.
#[derive(Debug, Default)]
pub struct Package {
    /// Schedules.
    pub schedules: Vec<Schedule>,
}

impl Package {
    /// Adds the given schedule to package.
    pub fn add(&mut self, schedule: Schedule) { self.schedules.push(schedule); }

    /// Writes one artifact file per schedule with the given backend.
    ///
    /// Generation is idempotent, so existing files are truncated.
    pub(crate) fn gen_artifact_files<C: Codegen>(&self, codegen: &C, path_dir: &Path) -> Result<(), PackageError> {
        fs::create_dir_all(path_dir).map_err(|error| PackageError::Fs { error })?;

        for schedule in &self.schedules {
            let path = path_dir.join(format!("sched{}.{}", schedule.num_pairs(), C::EXTENSION));
            let mut file = File::create(path).map_err(|error| PackageError::Fs { error })?;

            let artifact = codegen.gen_schedule(schedule);
            writeln!(file, "{}", artifact.to_string()).map_err(|error| PackageError::Fs { error })?;
        }

        Ok(())
    }
}
