use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_script_renders_plan() -> Result<()> {
    let test = CliTest::with_file(
        "body.shapekeys.json",
        r#"{
          "object": "Body",
          "shapeKeys": [{ "name": "Basis" }, { "name": "Mouth A" }, { "name": "あ" }],
          "settings": { "ah": "Mouth A", "blink": "missing" }
        }"#,
    )?;

    let output = test.run(&["script", "body.shapekeys.json", "--separator-name", "sep"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let script = stdout(&output);
    assert!(script.starts_with(
        "# Duplicate Shape Keys With MMD Names\n# object: \"Body\"\nimport bpy\n"
    ));
    assert!(script.ends_with(
        "copy_shapekey(\"Mouth A\", \"あ\")\n\
         bpy.ops.object.shape_key_add(from_mix=False)\n\
         obj.active_shape_key.name = \"sep\"\n"
    ));
    assert!(!script.contains("missing"));

    // The script only describes the work; the document is not modified
    assert!(!test.read_file("body.shapekeys.json")?.contains("sep"));

    Ok(())
}
