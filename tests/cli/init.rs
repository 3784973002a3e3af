use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Created .mmdkeysrc.json\n");

    let content = test.read_file(".mmdkeysrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["separatorName"], " ^ MMD Visemes / Other v");
    assert_eq!(parsed["includes"][0], "**/*.shapekeys.json");
    assert_eq!(parsed["prefillExistingJp"], true);
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".mmdkeysrc.json", "{}")?;

    let output = test.run(&["init"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".mmdkeysrc.json already exists"));
    assert_eq!(test.read_file(".mmdkeysrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".mmdkeysrc.json", r#"{ "ignores": ["[bad"] }"#)?;
    test.write_file("body.shapekeys.json", crate::BODY_MODEL)?;

    let output = test.run(&["duplicate"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ignores"));

    Ok(())
}

#[test]
fn test_slots_lists_every_slot() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["slots"])?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 52);
    assert!(out.lines().next().unwrap_or_default().contains("あ"));
    assert!(out.lines().any(|l| l.starts_with("close_x") && l.contains("はぅ")));

    Ok(())
}
