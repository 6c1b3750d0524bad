//! CLI integration tests for the fundchunk binary.

use assert_cmd::Command;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use predicates::prelude::*;
use std::path::PathBuf;

fn fundchunk() -> Command {
    Command::cargo_bin("fundchunk").unwrap()
}

/// Write a minimal one-page PDF carrying the given text lines.
fn write_pdf(dir: &tempfile::TempDir, lines: &[&str]) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![50.into(), 750.into()]),
        Operation::new("TL", vec![28.into()]),
    ];
    for line in lines {
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let path = dir.path().join("offering.pdf");
    doc.save(&path).unwrap();
    path
}

#[test]
fn missing_input_file_prints_diagnostic_without_crash() {
    fundchunk()
        .arg("/nonexistent/offering.pdf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn invalid_map_id_is_rejected_at_parse() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = write_pdf(&dir, &["RISK FACTORS", "Some body text for the test."]);

    fundchunk()
        .arg(&pdf)
        .args(["--map-id", "not-a-number"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn fund_and_map_id_are_mutually_exclusive() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = write_pdf(&dir, &["RISK FACTORS", "Some body text for the test."]);

    fundchunk()
        .arg(&pdf)
        .args(["--fund", "Alpine", "--map-id", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn successful_run_writes_json_and_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let pdf = write_pdf(
        &dir,
        &[
            "RISK FACTORS",
            "An investment in the fund involves a substantial degree of risk and",
            "prospective investors may lose all committed capital.",
        ],
    );

    fundchunk()
        .arg(&pdf)
        .args(["--output-dir"])
        .arg(out.path())
        .args(["--chunk-size", "400", "--overlap", "80", "--min-chunk-size", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EXTRACTION COMPLETE"))
        .stdout(predicate::str::contains("chunks:"));

    let output_file = out.path().join("offering_chunks.json");
    assert!(output_file.exists());

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output_file).unwrap()).unwrap();
    assert_eq!(json["document_info"]["filename"], "offering.pdf");
    assert!(json["statistics"]["total_chunks"].as_u64().unwrap() >= 1);
    assert_eq!(json["document_info"]["fund"]["status"], "unavailable");
}

#[test]
fn fund_lookup_attaches_record_from_store() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let pdf = write_pdf(&dir, &["RISK FACTORS", "Some body text for the lookup test."]);

    let db = dir.path().join("funds.db");
    let conn = fundchunk_store::FundStore::create(&db).unwrap();
    conn.execute_batch(
        "INSERT INTO fund_mapping VALUES
            (42, 'Alpine Capital Partners', 'Alpine Global Macro Fund', 'Alpine Macro', 'Global Macro', 'USD');",
    )
    .unwrap();
    drop(conn);

    fundchunk()
        .arg(&pdf)
        .args(["--output-dir"])
        .arg(out.path())
        .args(["--map-id", "42", "--fund-db"])
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpine Global Macro Fund"));

    let json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(out.path().join("offering_chunks.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(json["document_info"]["fund"]["status"], "found");
    assert_eq!(json["document_info"]["fund"]["record"]["map_id"], 42);
}

#[test]
fn structure_import_drives_the_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let pdf = write_pdf(&dir, &["Unremarkable page scan text for fallback."]);

    let structure = dir.path().join("structure.json");
    std::fs::write(
        &structure,
        r#"[
            {"type": "title", "content": "FEES AND EXPENSES", "page": 1},
            {"type": "paragraph", "content": "The management fee accrues daily at 1.5% per annum on net assets.", "page": 1}
        ]"#,
    )
    .unwrap();

    fundchunk()
        .arg(&pdf)
        .args(["--output-dir"])
        .arg(out.path())
        .args(["--structure"])
        .arg(&structure)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(out.path().join("offering_chunks.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(
        json["document_info"]["extraction_config"]["structured_input_used"],
        true
    );
    assert_eq!(
        json["document_structure"][0]["title"],
        "FEES AND EXPENSES"
    );
}
