//! Semantic hover target IDs for the experience display.

/// Job labels occupy `JOB_LABEL_BASE..JOB_LABEL_BASE + MAX_JOB_LABELS`.
pub const JOB_LABEL_BASE: u16 = 100;
pub const MAX_JOB_LABELS: u16 = 100;

pub fn job_target(ordinal: usize) -> u16 {
    JOB_LABEL_BASE + ordinal as u16
}

pub fn job_ordinal(target_id: u16) -> Option<usize> {
    if (JOB_LABEL_BASE..JOB_LABEL_BASE + MAX_JOB_LABELS).contains(&target_id) {
        Some((target_id - JOB_LABEL_BASE) as usize)
    } else {
        None
    }
}
