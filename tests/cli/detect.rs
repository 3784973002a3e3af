use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{BODY_MODEL, CliTest, stderr, stdout};

#[test]
fn test_detect_dry_run_leaves_model_untouched() -> Result<()> {
    let test = CliTest::with_file("body.shapekeys.json", BODY_MODEL)?;

    let output = test.run(&["detect", "body.shapekeys.json"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Detected prefix: \"face.\"\n\
         \x20 ah    <- face.ah\n\
         \x20 oh    <- face.oh\n\
         \x20 blink <- face.blink\n\
         Would fill 3 slot(s) in body.shapekeys.json (3 mapped in total)\n\
         Run with --apply to store the mapping.\n"
    );
    assert_eq!(test.read_file("body.shapekeys.json")?, BODY_MODEL);

    Ok(())
}

#[test]
fn test_detect_apply_stores_settings() -> Result<()> {
    let test = CliTest::with_file("body.shapekeys.json", BODY_MODEL)?;

    let output = test.run(&["detect", "body.shapekeys.json", "--apply"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Filled 3 slot(s)"));
    let model = test.read_json("body.shapekeys.json")?;
    assert_eq!(
        model["settings"],
        json!({
            "ah": "face.ah",
            "oh": "face.oh",
            "blink": "face.blink",
            "prefillExistingJpShapekeys": true
        })
    );

    Ok(())
}

#[test]
fn test_detect_keeps_user_mapping() -> Result<()> {
    let test = CliTest::with_file(
        "body.shapekeys.json",
        r#"{
          "object": "Body",
          "shapeKeys": [{ "name": "Basis" }, { "name": "face.ah" }, { "name": "smile" }],
          "settings": { "ah": "smile" }
        }"#,
    )?;

    let output = test.run(&["detect", "body.shapekeys.json", "--apply"])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("No new slots to fill"));
    let model = test.read_json("body.shapekeys.json")?;
    assert_eq!(model["settings"]["ah"], "smile");

    Ok(())
}

#[test]
fn test_detect_uses_config_prefill_default() -> Result<()> {
    let test = CliTest::with_file(".mmdkeysrc.json", r#"{ "prefillExistingJp": false }"#)?;
    test.write_file(
        "body.shapekeys.json",
        r#"{ "object": "Body", "shapeKeys": [{ "name": "Basis" }, { "name": "まばたき" }] }"#,
    )?;

    let output = test.run(&["detect", "body.shapekeys.json", "--apply"])?;

    assert!(output.status.success());
    let model = test.read_json("body.shapekeys.json")?;
    assert_eq!(model["settings"], json!({ "prefillExistingJpShapekeys": false }));

    Ok(())
}

#[test]
fn test_detect_without_active_object_fails() -> Result<()> {
    let test = CliTest::with_file(
        "body.shapekeys.json",
        r#"{ "shapeKeys": [{ "name": "Basis" }] }"#,
    )?;

    let output = test.run(&["detect", "body.shapekeys.json"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No active object with shape keys"));

    Ok(())
}
