//! Startup seeding of rooms and students.

use tracing::{debug, info};

use hostel_auth::PasswordHasher;
use hostel_core::config::SeedConfig;
use hostel_core::error::ErrorKind;
use hostel_core::result::AppResult;
use hostel_database::Repositories;
use hostel_entity::Student;

/// Counts from one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub rooms_added: usize,
    pub students_added: usize,
    /// Records that already existed.
    pub skipped: usize,
}

/// Insert every seeded room and student that does not exist yet.
///
/// Existing rooms keep their occupancy and existing students keep their
/// password, so applying the same seed again changes nothing.
pub async fn seed_on_startup(seed: &SeedConfig, repos: &Repositories) -> AppResult<SeedOutcome> {
    let mut outcome = SeedOutcome::default();

    if seed.is_empty() {
        info!(reason = "empty", "Seeding skipped");
        return Ok(outcome);
    }

    for room in seed.rooms.iter().map(|r| r.trim()).filter(|r| !r.is_empty()) {
        match repos.rooms.create(room).await {
            Ok(_) => outcome.rooms_added += 1,
            Err(e) if e.kind == ErrorKind::Conflict => {
                debug!(room = %room, "Seed room already present");
                outcome.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    let hasher = PasswordHasher::new();
    for student in &seed.students {
        let sid = student.sid.trim();
        if sid.is_empty() || student.password.is_empty() {
            debug!(sid = %sid, "Seed student without id or password ignored");
            continue;
        }

        if repos.students.find_by_sid(sid).await?.is_some() {
            debug!(sid = %sid, "Seed student already present");
            outcome.skipped += 1;
            continue;
        }

        let hash = hasher.hash_password(&student.password)?;
        match repos.students.create(Student::new(sid, hash)).await {
            Ok(_) => outcome.students_added += 1,
            Err(e) if e.kind == ErrorKind::Conflict => outcome.skipped += 1,
            Err(e) => return Err(e),
        }
    }

    info!(
        rooms_added = outcome.rooms_added,
        students_added = outcome.students_added,
        skipped = outcome.skipped,
        "Seed data applied"
    );
    Ok(outcome)
}
