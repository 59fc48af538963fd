use super::*;

/// Tests deleting a student that is no longer active.
///
/// Verifies that the student cannot be found afterwards.
///
/// Expected: Ok with the success message, then NotFound on lookup
#[tokio::test]
async fn deletes_inactive_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(StudentRepository::new(db));

    for status in ["graduated", "suspended", "withdrawn"] {
        let existing = factory::create_student_with_status(db, status).await?;
        let id = existing.id.to_string();

        let message = service.delete(&id).await.unwrap();
        assert_eq!(message, STUDENT_DELETED_MESSAGE);

        let err = student_error(service.get_by_id(&id).await);
        assert!(matches!(err, StudentError::NotFound(_)));
    }

    Ok(())
}

/// Tests the deletion guard for active students.
///
/// Expected: Err(StudentError::ActiveDeletion) and the student still exists
#[tokio::test]
async fn refuses_to_delete_active_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_student(db).await?;
    let id = existing.id.to_string();

    let service = StudentService::new(StudentRepository::new(db));
    let err = student_error(service.delete(&id).await);

    assert!(matches!(err, StudentError::ActiveDeletion));
    assert_eq!(
        err.to_string(),
        "Cannot delete active student. Change status first."
    );
    assert!(service.get_by_id(&id).await.is_ok());

    Ok(())
}

/// Tests deleting a student that does not exist.
///
/// Expected: Err(StudentError::NotFound)
#[tokio::test]
async fn fails_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(StudentRepository::new(db));
    let err = student_error(service.delete("31").await);

    assert!(matches!(err, StudentError::NotFound(31)));

    Ok(())
}

/// Tests that the guard runs before anything reaches the store.
///
/// Expected: Err(StudentError::ActiveDeletion) with no store write
#[tokio::test]
async fn guard_prevents_store_write() {
    let store = MemoryStore::with_students(vec![memory_student(1, StudentStatus::Active)]);
    let service = StudentService::new(store.clone());

    let err = student_error(service.delete("1").await);

    assert!(matches!(err, StudentError::ActiveDeletion));
    assert_eq!(store.writes(), 0);
}
