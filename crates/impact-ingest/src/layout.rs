//! On-disk layout of a project directory.
//!
//! `<project>/data/reponses_<activity>/<phase>.csv`, one file per
//! (activity, phase) pair that has received at least one submission.

use std::path::{Path, PathBuf};

use impact_model::{ActivityType, Phase};

/// Directory prefix of every per-activity response folder.
pub const ACTIVITY_DIR_PREFIX: &str = "reponses_";

/// Name of the data root inside a project directory.
pub const DATA_DIR: &str = "data";

pub fn data_dir(project: &Path) -> PathBuf {
    project.join(DATA_DIR)
}

pub fn activity_dir(project: &Path, activity: ActivityType) -> PathBuf {
    data_dir(project).join(format!("{ACTIVITY_DIR_PREFIX}{}", activity.as_str()))
}

pub fn phase_file(project: &Path, activity: ActivityType, phase: Phase) -> PathBuf {
    activity_dir(project, activity).join(format!("{}.csv", phase.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_file_layout() {
        let path = phase_file(
            Path::new("/tmp/projet"),
            ActivityType::Secourisme,
            Phase::Suivi6Mois,
        );
        assert_eq!(
            path,
            Path::new("/tmp/projet/data/reponses_secourisme/suivi_6mois.csv")
        );
    }
}
