use chrono::NaiveDate;
use rusqlite::Connection;
use teamplan_core::db::migrations::latest_version;
use teamplan_core::db::open_db_in_memory;
use teamplan_core::{
    PersonDraft, PersonService, RepoError, ScheduleDraft, ScheduleService, ScheduleServiceError,
    SqlitePersonRepository, SqliteScheduleRepository, SqliteTaskRepository, TaskDraft,
    TaskService,
};
use uuid::Uuid;

#[test]
fn person_create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let service = PersonService::new(SqlitePersonRepository::try_new(&conn).unwrap());

    let created = service
        .create_person(&PersonDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            rank: "senior".to_string(),
            kind: "member".to_string(),
        })
        .unwrap();
    assert_eq!(created.updated_on, None);

    let loaded = service.get_person(created.uuid).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn person_update_mutates_existing_record() {
    let conn = open_db_in_memory().unwrap();
    let service = PersonService::new(SqlitePersonRepository::try_new(&conn).unwrap());

    let created = service
        .create_person(&PersonDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            rank: "senior".to_string(),
            kind: "member".to_string(),
        })
        .unwrap();

    let updated = service
        .update_person(
            created.uuid,
            &PersonDraft {
                first_name: "Ada".to_string(),
                last_name: "King".to_string(),
                email: "ada.king@example.com".to_string(),
                rank: "lead".to_string(),
                kind: "member".to_string(),
            },
        )
        .unwrap();

    assert_eq!(updated.uuid, created.uuid);
    assert_eq!(updated.created_on, created.created_on);
    assert_eq!(updated.last_name, "King");
    assert_eq!(updated.rank, "lead");
    assert!(updated.updated_on.is_some());

    let loaded = service.get_person(created.uuid).unwrap().unwrap();
    assert_eq!(loaded, updated);
}

#[test]
fn person_update_unknown_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = PersonService::new(SqlitePersonRepository::try_new(&conn).unwrap());

    let missing = Uuid::new_v4();
    let err = service
        .update_person(missing, &PersonDraft::default())
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));
}

#[test]
fn task_crud_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let created = service
        .create_task(&TaskDraft {
            name: "triage".to_string(),
            description: "sort the queue".to_string(),
        })
        .unwrap();

    let updated = service
        .update_task(
            created.uuid,
            &TaskDraft {
                name: "triage".to_string(),
                description: "sort and label the queue".to_string(),
            },
        )
        .unwrap();
    assert!(updated.updated_on.is_some());

    let listed = service.list_tasks().unwrap();
    assert_eq!(listed, vec![updated]);
}

#[test]
fn schedule_create_parses_date_text_into_typed_window() {
    let conn = open_db_in_memory().unwrap();
    let service = ScheduleService::new(SqliteScheduleRepository::try_new(&conn).unwrap());

    let created = service
        .create_schedule(&ScheduleDraft {
            name: "april window".to_string(),
            description: "spring rotation".to_string(),
            kind: "rotation".to_string(),
            start_date_text: "2025-04-01".to_string(),
            end_date_text: "2025-04-30".to_string(),
        })
        .unwrap();

    assert_eq!(
        created.start_date,
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    );
    assert_eq!(
        created.end_date,
        NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()
    );

    let loaded = service.get_schedule(created.uuid).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn schedule_create_with_bad_date_text_persists_nothing() {
    let conn = open_db_in_memory().unwrap();
    let service = ScheduleService::new(SqliteScheduleRepository::try_new(&conn).unwrap());

    let err = service
        .create_schedule(&ScheduleDraft {
            name: "broken".to_string(),
            description: String::new(),
            kind: "rotation".to_string(),
            start_date_text: "04/01/2025".to_string(),
            end_date_text: "2025-04-30".to_string(),
        })
        .unwrap_err();

    assert!(matches!(err, ScheduleServiceError::InvalidDateText(_)));
    assert!(service.list_schedules().unwrap().is_empty());
}

#[test]
fn schedule_update_reparses_window() {
    let conn = open_db_in_memory().unwrap();
    let service = ScheduleService::new(SqliteScheduleRepository::try_new(&conn).unwrap());

    let created = service
        .create_schedule(&ScheduleDraft {
            name: "april window".to_string(),
            description: String::new(),
            kind: "rotation".to_string(),
            start_date_text: "2025-04-01".to_string(),
            end_date_text: "2025-04-30".to_string(),
        })
        .unwrap();

    let updated = service
        .update_schedule(
            created.uuid,
            &ScheduleDraft {
                name: "extended window".to_string(),
                description: String::new(),
                kind: "rotation".to_string(),
                start_date_text: "2025-04-01".to_string(),
                end_date_text: "2025-05-15".to_string(),
            },
        )
        .unwrap();

    assert_eq!(updated.uuid, created.uuid);
    assert_eq!(updated.name, "extended window");
    assert_eq!(
        updated.end_date,
        NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()
    );
    assert!(updated.updated_on.is_some());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqlitePersonRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteScheduleRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("schedules"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE tasks (
            uuid TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteTaskRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "tasks",
            column: "description"
        })
    ));
}
