use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

const MAPPED_MODEL: &str = r#"{
  "object": "Body",
  "shapeKeys": [
    { "name": "Basis" },
    { "name": "face.ah" },
    { "name": "face.blink" }
  ],
  "settings": { "ah": "face.ah", "ch": "nope", "blink": "face.blink" }
}
"#;

#[test]
fn test_duplicate_dry_run() -> Result<()> {
    let test = CliTest::with_file("body.shapekeys.json", MAPPED_MODEL)?;

    let output = test.run(&["duplicate", "body.shapekeys.json"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Would add 3 shape key(s) to body.shapekeys.json:\n\
         \x20 + あ  (from face.ah)\n\
         \x20 + \" ^ MMD Visemes / Other v\"  (separator)\n\
         \x20 + まばたき  (from face.blink)\n\
         Run with --apply to add these shape keys.\n"
    );
    assert_eq!(test.read_file("body.shapekeys.json")?, MAPPED_MODEL);

    Ok(())
}

#[test]
fn test_duplicate_verbose_shows_skipped_slots() -> Result<()> {
    let test = CliTest::with_file("body.shapekeys.json", MAPPED_MODEL)?;

    let output = test.run(&["duplicate", "body.shapekeys.json", "-v"])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("  - い  (nope not found)"));

    Ok(())
}

#[test]
fn test_duplicate_apply_adds_keys() -> Result<()> {
    let test = CliTest::with_file("body.shapekeys.json", MAPPED_MODEL)?;

    let output = test.run(&["duplicate", "body.shapekeys.json", "--apply"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("Added 3 shape key(s) to body.shapekeys.json:\n"));
    assert_eq!(
        test.shape_key_names("body.shapekeys.json")?,
        vec![
            "Basis",
            "face.ah",
            "face.blink",
            "あ",
            " ^ MMD Visemes / Other v",
            "まばたき"
        ]
    );

    let model = test.read_json("body.shapekeys.json")?;
    let keys = &model["shapeKeys"];
    assert_eq!(keys[1]["value"], json!(0.0));
    assert_eq!(keys[3]["blend"], json!({ "face.ah": 1.0 }));
    assert!(keys[4].get("blend").is_none());
    assert_eq!(model["activeShapeKey"], json!(5));

    Ok(())
}

#[test]
fn test_duplicate_twice_adds_second_copy() -> Result<()> {
    let test = CliTest::with_file("body.shapekeys.json", MAPPED_MODEL)?;

    test.run(&["duplicate", "body.shapekeys.json", "--apply"])?;
    test.run(&["duplicate", "body.shapekeys.json", "--apply"])?;

    let names = test.shape_key_names("body.shapekeys.json")?;
    assert_eq!(names.iter().filter(|n| *n == "あ").count(), 2);

    Ok(())
}

#[test]
fn test_duplicate_chained_source_in_dry_run_and_apply() -> Result<()> {
    let test = CliTest::with_file(
        "body.shapekeys.json",
        r#"{
          "object": "Body",
          "shapeKeys": [{ "name": "Basis" }, { "name": "Blink" }],
          "settings": { "blink": "Blink", "blink_2": "まばたき" }
        }"#,
    )?;

    let output = test.run(&["duplicate", "body.shapekeys.json"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("  + 笑い  (from まばたき)\n"));

    let output = test.run(&["duplicate", "body.shapekeys.json", "--apply"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.shape_key_names("body.shapekeys.json")?,
        vec!["Basis", "Blink", " ^ MMD Visemes / Other v", "まばたき", "笑い"]
    );

    Ok(())
}

#[test]
fn test_duplicate_same_model_listed_twice() -> Result<()> {
    let test = CliTest::with_file("body.shapekeys.json", MAPPED_MODEL)?;

    let output = test.run(&[
        "duplicate",
        "body.shapekeys.json",
        "./body.shapekeys.json",
        "--apply",
    ])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).matches("Added 3 shape key(s)").count(), 1);
    assert_eq!(test.shape_key_names("body.shapekeys.json")?.len(), 6);

    Ok(())
}

#[test]
fn test_duplicate_separator_override() -> Result<()> {
    let test = CliTest::with_file(".mmdkeysrc.json", r#"{ "separatorName": "== MMD ==" }"#)?;
    test.write_file("body.shapekeys.json", MAPPED_MODEL)?;

    let output = test.run(&["duplicate", "body.shapekeys.json", "--apply"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let output = test.run(&[
        "duplicate",
        "body.shapekeys.json",
        "--apply",
        "--separator-name",
        "-- again --",
    ])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let names = test.shape_key_names("body.shapekeys.json")?;
    assert!(names.contains(&"== MMD ==".to_string()));
    assert!(names.contains(&"-- again --".to_string()));

    Ok(())
}

#[test]
fn test_duplicate_discovers_models() -> Result<()> {
    let test = CliTest::with_file("models/a.shapekeys.json", MAPPED_MODEL)?;
    test.write_file("models/b.shapekeys.json", MAPPED_MODEL)?;
    test.write_file("models/notes.json", "{}")?;

    let output = test.run(&["duplicate", "--apply"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("a.shapekeys.json"));
    assert!(out.contains("b.shapekeys.json"));
    assert!(!out.contains("notes.json"));
    for path in ["models/a.shapekeys.json", "models/b.shapekeys.json"] {
        assert_eq!(test.shape_key_names(path)?.len(), 6);
    }
    assert!(test.root().join("models/notes.json").exists());

    Ok(())
}

#[test]
fn test_duplicate_reports_failing_model() -> Result<()> {
    let test = CliTest::with_file("good.shapekeys.json", MAPPED_MODEL)?;
    test.write_file(
        "bad.shapekeys.json",
        r#"{ "object": null, "shapeKeys": [{ "name": "Basis" }] }"#,
    )?;

    let output = test.run(&["duplicate", "good.shapekeys.json", "bad.shapekeys.json", "--apply"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("bad.shapekeys.json: No active object with shape keys"));
    assert_eq!(test.shape_key_names("good.shapekeys.json")?.len(), 6);

    Ok(())
}

#[test]
fn test_duplicate_without_models_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["duplicate"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No model documents found"));

    Ok(())
}
