//! End-to-end tests: request → rows → document → file.

use rowgen::{FileSink, GenerateError, GenerationService, RequestFile};
use rowgen_core::{FieldDeclaration, FieldType, GenerationRequest, OutputFormat};
use rowgen_emit::{EmitOptions, EscapeMode};
use rowgen_generator::IdCounter;
use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use std::thread;

fn decl(name: &str, field_type: FieldType) -> FieldDeclaration {
    FieldDeclaration::unbounded(name, field_type).unwrap()
}

fn all_fields() -> Vec<FieldDeclaration> {
    FieldType::ALL
        .into_iter()
        .map(|field_type| {
            let name = field_type.as_str().to_ascii_lowercase();
            if field_type.requires_range() {
                FieldDeclaration::new(name, field_type, 1, 4).unwrap()
            } else {
                decl(&name, field_type)
            }
        })
        .collect()
}

fn service(dir: &std::path::Path) -> GenerationService<FileSink> {
    GenerationService::new(FileSink::new(dir)).with_ids(Arc::new(IdCounter::new()))
}

fn ids_in_csv(text: &str) -> Vec<i64> {
    text.lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap().parse().unwrap())
        .collect()
}

#[test]
fn test_csv_example() {
    let dir = tempfile::tempdir().unwrap();
    let request = GenerationRequest::new(
        OutputFormat::Csv,
        "people",
        2,
        vec![
            decl("id", FieldType::Id),
            FieldDeclaration::new("age", FieldType::Age, 18, 30).unwrap(),
        ],
    )
    .unwrap();

    let outcome = service(dir.path()).process(&request).unwrap();

    assert!(outcome.path.is_absolute());
    assert!(outcome.path.ends_with("people.csv"));

    let text = fs::read_to_string(&outcome.path).unwrap();
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines[0], "id,age");
    assert_eq!(lines.len(), 3);
    assert_eq!(ids_in_csv(&text), vec![1, 2]);
    for line in &lines[1..] {
        let age: i64 = line.split(',').nth(1).unwrap().parse().unwrap();
        assert!((18..30).contains(&age));
    }
}

#[test]
fn test_json_round_trip_types() {
    let dir = tempfile::tempdir().unwrap();
    let fields = all_fields();
    let request =
        GenerationRequest::new(OutputFormat::Json, "everything", 4, fields.clone()).unwrap();

    let outcome = service(dir.path()).process(&request).unwrap();
    let text = fs::read_to_string(&outcome.path).unwrap();
    let parsed: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(&text).unwrap();

    assert_eq!(parsed.len(), 4);
    for object in &parsed {
        assert_eq!(object.len(), fields.len());
        for field in &fields {
            let value = &object[field.name()];
            match field.field_type() {
                FieldType::Id | FieldType::Age | FieldType::RandomInt => {
                    assert!(value.is_i64(), "{}: {value}", field.name())
                }
                _ => assert!(value.is_string(), "{}: {value}", field.name()),
            }
        }
    }
}

#[test]
fn test_zero_rows_every_format() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(dir.path());
    let fields = vec![decl("id", FieldType::Id), decl("email", FieldType::Email)];

    let expected = [
        (OutputFormat::Json, "[]"),
        (OutputFormat::Csv, "id,email"),
        (OutputFormat::Sql, ""),
    ];
    for (format, expected) in expected {
        let request = GenerationRequest::new(format, "empty", 0, fields.clone()).unwrap();
        let outcome = service.process(&request).unwrap();
        assert_eq!(fs::read_to_string(&outcome.path).unwrap(), expected);
    }
    assert_eq!(service.ids().last_issued(), 0);
}

#[test]
fn test_sql_statements() {
    let dir = tempfile::tempdir().unwrap();
    let service =
        service(dir.path()).with_options(EmitOptions::default().with_table_name("users"));
    let request = GenerationRequest::new(
        OutputFormat::Sql,
        "users",
        3,
        vec![decl("id", FieldType::Id), decl("gender", FieldType::Gender)],
    )
    .unwrap();

    let outcome = service.process(&request).unwrap();
    let text = fs::read_to_string(&outcome.path).unwrap();
    let lines: Vec<&str> = text.split('\n').collect();

    assert_eq!(lines.len(), 3);
    for (i, line) in lines.iter().enumerate() {
        let male = format!("INSERT INTO users (id, gender) VALUES ({}, 'MALE');", i + 1);
        let female = format!("INSERT INTO users (id, gender) VALUES ({}, 'FEMALE');", i + 1);
        assert!(*line == male || *line == female, "unexpected statement {line}");
    }
}

#[test]
fn test_sequential_requests_continue_ids() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(dir.path());
    let request =
        GenerationRequest::new(OutputFormat::Csv, "ids", 5, vec![decl("id", FieldType::Id)])
            .unwrap();

    let first = fs::read_to_string(service.process(&request).unwrap().path).unwrap();
    let second = fs::read_to_string(service.process(&request).unwrap().path).unwrap();

    assert_eq!(ids_in_csv(&first), vec![1, 2, 3, 4, 5]);
    assert_eq!(ids_in_csv(&second), vec![6, 7, 8, 9, 10]);
}

#[test]
fn test_concurrent_requests_get_disjoint_ids() {
    let dir = tempfile::tempdir().unwrap();
    let service = Arc::new(service(dir.path()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                let request = GenerationRequest::new(
                    OutputFormat::Csv,
                    format!("part_{i}"),
                    250,
                    vec![decl("id", FieldType::Id), decl("word", FieldType::Word)],
                )
                .unwrap();
                let (document, _) = service.render(&request).unwrap();
                ids_in_csv(document.as_str())
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        let ids = handle.join().unwrap();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        for id in ids {
            assert!(seen.insert(id), "duplicate id {id}");
        }
    }
    assert_eq!(seen.len(), 1000);
}

#[test]
fn test_escaped_csv_stays_parseable() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(dir.path())
        .with_options(EmitOptions::default().with_escape(EscapeMode::Escaped));
    let request = GenerationRequest::new(
        OutputFormat::Csv,
        "posts",
        20,
        vec![
            decl("id", FieldType::Id),
            FieldDeclaration::new("body", FieldType::PostBody, 1, 3).unwrap(),
        ],
    )
    .unwrap()
    .with_seed(5);

    let outcome = service.process(&request).unwrap();
    let text = fs::read_to_string(&outcome.path).unwrap();

    assert_eq!(text.lines().next(), Some("id,body"));
    assert_eq!(text.lines().count(), 21);
}

#[test]
fn test_paragraph_rows_stay_on_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(dir.path());
    let fields = vec![
        decl("id", FieldType::Id),
        decl("p", FieldType::Paragraph),
        FieldDeclaration::new("body", FieldType::PostBody, 2, 4).unwrap(),
    ];

    for (format, expected_lines) in [(OutputFormat::Csv, 3), (OutputFormat::Sql, 2)] {
        let request = GenerationRequest::new(format, "paragraphs", 2, fields.clone())
            .unwrap()
            .with_seed(17);
        let (document, _) = service.render(&request).unwrap();
        assert_eq!(
            document.as_str().lines().count(),
            expected_lines,
            "{format}: {}",
            document.as_str()
        );
    }
}

#[test]
fn test_persistence_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("occupied");
    fs::write(&blocker, "not a directory").unwrap();

    let request =
        GenerationRequest::new(OutputFormat::Json, "out", 1, vec![decl("id", FieldType::Id)])
            .unwrap();
    let err = service(&blocker).process(&request).unwrap_err();

    match err {
        GenerateError::Persistence(e) => assert!(e.path.starts_with(&blocker)),
        other => panic!("Expected persistence error, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
}

#[test]
fn test_request_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = r#"
format: sql
output: books
rows: 2
table_name: books
fields:
  - { name: id, type: ID }
  - { name: title, type: BOOK_TITLE }
  - { name: author, type: BOOK_AUTHOR }
"#;
    let settings = RequestFile::from_yaml(yaml)
        .unwrap()
        .into_settings(dir.path().to_path_buf())
        .unwrap();

    let service = GenerationService::new(FileSink::new(&settings.out_dir))
        .with_ids(Arc::new(IdCounter::new()))
        .with_options(settings.options);
    let outcome = service.process(&settings.request).unwrap();

    let text = fs::read_to_string(&outcome.path).unwrap();
    assert!(outcome.path.ends_with("books.sql"));
    assert!(text.starts_with("INSERT INTO books (id, title, author) VALUES (1, '"));
    assert_eq!(text.lines().count(), 2);
}
