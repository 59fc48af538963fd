//! Aggregate statistics over a set of students.

use crate::server::model::student::{Student, StudentStatistics, StudentStatus};

/// Counts students per status and averages their GPA.
///
/// Non-finite GPA values are left out of the average. The average is rounded to two
/// decimal places and is `0.0` when no GPA contributes.
pub fn compute_statistics(students: &[Student]) -> StudentStatistics {
    let mut stats = StudentStatistics {
        total: students.len() as u64,
        ..Default::default()
    };

    let mut gpa_sum = 0.0;
    let mut gpa_count = 0u32;

    for student in students {
        match student.status {
            StudentStatus::Active => stats.active += 1,
            StudentStatus::Graduated => stats.graduated += 1,
            StudentStatus::Suspended => stats.suspended += 1,
            StudentStatus::Withdrawn => stats.withdrawn += 1,
        }

        if student.gpa.is_finite() {
            gpa_sum += student.gpa;
            gpa_count += 1;
        }
    }

    if gpa_count > 0 {
        stats.average_gpa = round_to_cents(gpa_sum / f64::from(gpa_count));
    }

    stats
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
