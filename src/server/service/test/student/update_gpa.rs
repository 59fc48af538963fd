use super::*;

/// Tests setting a GPA within range.
///
/// Expected: Ok with the new gpa
#[tokio::test]
async fn sets_gpa_within_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_student(db).await?;

    let service = StudentService::new(StudentRepository::new(db));
    let updated = service
        .update_gpa(&existing.id.to_string(), Some(GpaValue::Number(4.0)))
        .await
        .unwrap();

    assert_eq!(updated.gpa, 4.0);
    assert_eq!(updated.student_code, existing.student_code);

    Ok(())
}

/// Tests rejecting out-of-range and missing GPA values.
///
/// Expected: Err(StudentError::Validation) on the gpa field, stored gpa unchanged
#[tokio::test]
async fn rejects_invalid_gpa() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::student::StudentFactory::new(db)
        .gpa(2.5)
        .build()
        .await?;
    let id = existing.id.to_string();

    let service = StudentService::new(StudentRepository::new(db));

    for gpa in [
        Some(GpaValue::Number(4.5)),
        Some(GpaValue::Number(-1.0)),
        Some(GpaValue::Text("abc".to_string())),
        None,
    ] {
        let err = student_error(service.update_gpa(&id, gpa).await);
        assert!(matches!(err, StudentError::Validation(ref f) if f.field == "gpa"));
    }

    let unchanged = service.get_by_id(&id).await.unwrap();
    assert_eq!(unchanged.gpa, 2.5);

    Ok(())
}

/// Tests setting the GPA of a student that does not exist.
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
    let err = student_error(service.update_gpa("9", Some(GpaValue::Number(3.0))).await);

    assert!(matches!(err, StudentError::NotFound(9)));

    Ok(())
}
