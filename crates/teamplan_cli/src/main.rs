//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `teamplan_core` linkage.
//! - Run one create/search round against an in-memory store so the whole
//!   stack (db bootstrap, repos, services) is exercised end to end.

use std::error::Error;

use teamplan_core::db::open_db_in_memory;
use teamplan_core::{
    AssignmentDraft, AssignmentSearchRequest, AssignmentService, PersonDraft, PersonService,
    ScheduleDraft, ScheduleService, SqliteAssignmentRepository, SqlitePersonRepository,
    SqliteScheduleRepository, SqliteTaskRepository, TaskDraft, TaskService,
};

fn main() -> Result<(), Box<dyn Error>> {
    println!("teamplan_core version={}", teamplan_core::core_version());

    let conn = open_db_in_memory()?;

    let persons = PersonService::new(SqlitePersonRepository::try_new(&conn)?);
    let tasks = TaskService::new(SqliteTaskRepository::try_new(&conn)?);
    let schedules = ScheduleService::new(SqliteScheduleRepository::try_new(&conn)?);
    let assignments = AssignmentService::new(SqliteAssignmentRepository::try_new(&conn)?);

    let person = persons.create_person(&PersonDraft {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        rank: "senior".to_string(),
        kind: "member".to_string(),
    })?;
    let task = tasks.create_task(&TaskDraft {
        name: "smoke check".to_string(),
        description: "verify core wiring".to_string(),
    })?;
    let schedule = schedules.create_schedule(&ScheduleDraft {
        name: "probe window".to_string(),
        description: "one-week smoke window".to_string(),
        kind: "default".to_string(),
        start_date_text: "2025-04-01".to_string(),
        end_date_text: "2025-04-07".to_string(),
    })?;

    let created = assignments.create_assignment(&AssignmentDraft {
        person_id: person.uuid,
        task_id: task.uuid,
        schedule: Some(schedule),
    })?;
    println!(
        "created assignment={} window={}..{}",
        created.uuid, created.start_date, created.end_date
    );

    let hits = assignments.search_assignments(&AssignmentSearchRequest {
        start_date_text: Some("2025-04-01".to_string()),
        end_date_text: Some("2025-04-30".to_string()),
    })?;
    println!("search hits={}", hits.len());

    Ok(())
}
