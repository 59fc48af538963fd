use super::*;

/// Tests listing with no filters.
///
/// Verifies that every student is returned, ordered by id.
///
/// Expected: Ok with all students in insertion order
#[tokio::test]
async fn returns_all_students_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::helpers::create_students(
        db,
        &[("active", 3.0), ("graduated", 3.5), ("withdrawn", 2.0)],
    )
    .await?;

    let repo = StudentRepository::new(db);
    let students = repo.find_all(&StudentFilter::default()).await.unwrap();

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    let expected: Vec<i32> = created.iter().map(|s| s.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests listing on an empty table.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_when_no_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let students = repo.find_all(&StudentFilter::default()).await.unwrap();

    assert!(students.is_empty());

    Ok(())
}

/// Tests filtering by major and status together.
///
/// Expected: Ok with only students matching both filters
#[tokio::test]
async fn filters_by_major_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::student::StudentFactory::new(db)
        .major("Data Science")
        .status("suspended")
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .major("Data Science")
        .status("active")
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .major("Computer Science")
        .status("suspended")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let students = repo
        .find_all(&StudentFilter {
            major: Some("Data Science".to_string()),
            status: Some(StudentStatus::Suspended),
        })
        .await
        .unwrap();

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, target.id);

    Ok(())
}

/// Tests that a stored status outside the recognized set is reported as an
/// internal error instead of being silently skipped.
///
/// Expected: Err(InternalError::InvalidStoredStatus)
#[tokio::test]
async fn fails_on_unrecognized_stored_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_student_with_status(db, "expelled").await?;

    let repo = StudentRepository::new(db);
    let result = repo.find_all(&StudentFilter::default()).await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::InvalidStoredStatus { .. }))
    ));

    Ok(())
}
