use super::*;

/// Tests replacing the identity fields of a student.
///
/// Verifies that GPA and status are left untouched by a full update.
///
/// Expected: Ok with the new identity and the original gpa and status
#[tokio::test]
async fn replaces_identity_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::student::StudentFactory::new(db)
        .gpa(3.6)
        .status("suspended")
        .build()
        .await?;

    let service = StudentService::new(StudentRepository::new(db));
    let updated = service
        .update(
            &existing.id.to_string(),
            update_params("6509999", "somying.r@example.com"),
        )
        .await
        .unwrap();

    assert_eq!(updated.student_code, "6509999");
    assert_eq!(updated.first_name, "Somying");
    assert_eq!(updated.last_name, "Rakdee");
    assert_eq!(updated.email, "somying.r@example.com");
    assert_eq!(updated.major, "Data Science");
    assert_eq!(updated.gpa, 3.6);
    assert_eq!(updated.status, StudentStatus::Suspended);

    Ok(())
}

/// Tests keeping the same student code and email.
///
/// Verifies that a student's own unique values do not count as duplicates.
///
/// Expected: Ok
#[tokio::test]
async fn allows_unchanged_unique_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_student(db).await?;

    let service = StudentService::new(StudentRepository::new(db));
    let result = service
        .update(
            &existing.id.to_string(),
            update_params(&existing.student_code, &existing.email),
        )
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests changing the student code to one owned by another student.
///
/// Expected: Err(StudentError::Duplicate { field: "student_code" }), row unchanged
#[tokio::test]
async fn rejects_code_taken_by_another_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::create_student(db).await?;
    let existing = factory::create_student(db).await?;

    let service = StudentService::new(StudentRepository::new(db));
    let err = student_error(
        service
            .update(
                &existing.id.to_string(),
                update_params(&other.student_code, &existing.email),
            )
            .await,
    );

    assert!(matches!(
        err,
        StudentError::Duplicate {
            field: "student_code"
        }
    ));

    let unchanged = service.get_by_id(&existing.id.to_string()).await.unwrap();
    assert_eq!(unchanged.first_name, existing.first_name);

    Ok(())
}

/// Tests changing the email to one owned by another student.
///
/// Expected: Err(StudentError::Duplicate { field: "email" })
#[tokio::test]
async fn rejects_email_taken_by_another_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::create_student(db).await?;
    let existing = factory::create_student(db).await?;

    let service = StudentService::new(StudentRepository::new(db));
    let err = student_error(
        service
            .update(
                &existing.id.to_string(),
                update_params(&existing.student_code, &other.email),
            )
            .await,
    );

    assert!(matches!(err, StudentError::Duplicate { field: "email" }));

    Ok(())
}

/// Tests updating a student that does not exist.
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
    let err = student_error(
        service
            .update("77", update_params("6509999", "nobody@example.com"))
            .await,
    );

    assert!(matches!(err, StudentError::NotFound(77)));

    Ok(())
}

/// Tests rejecting an incomplete update payload.
///
/// Expected: Err(StudentError::Validation) naming the missing field
#[tokio::test]
async fn rejects_missing_identity_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_student(db).await?;

    let service = StudentService::new(StudentRepository::new(db));
    let err = student_error(
        service
            .update(
                &existing.id.to_string(),
                UpdateStudentParams {
                    major: None,
                    ..update_params("6509999", "somying.r@example.com")
                },
            )
            .await,
    );

    assert!(matches!(err, StudentError::Validation(ref f) if f.field == "major"));

    Ok(())
}
