//! Render a duplication plan as a Blender Python script.
//!
//! The script performs the same call sequence the operator performs against
//! [`ShapeKeyHost`](super::ShapeKeyHost), so a plan prepared from an exported
//! model document can be replayed inside Blender.

use std::fmt::Write;

use crate::operator::{DuplicateOperator, Plan, Step, plan::py_string};

const SCRIPT_HEADER: &str = r#"import bpy

obj = bpy.context.object
if obj is None or obj.data.shape_keys is None:
    raise RuntimeError("No active object with shape keys")
key_blocks = obj.data.shape_keys.key_blocks


def copy_shapekey(source, target):
    shapekey = key_blocks.get(source)
    if shapekey is None or shapekey.name == target:
        return
    shapekey.value = 1
    bpy.ops.object.shape_key_add(from_mix=True)
    obj.active_shape_key.name = target
    shapekey.value = 0
"#;

/// Build a standalone script for `plan`.
///
/// `object` is recorded in a comment only; the script acts on the active
/// object.
pub fn render_bpy(plan: &Plan, object: Option<&str>) -> String {
    let mut script = String::new();
    let _ = writeln!(script, "# {}", DuplicateOperator::LABEL);
    if let Some(object) = object {
        let _ = writeln!(script, "# object: {}", py_string(object));
    }
    script.push_str(SCRIPT_HEADER);
    script.push('\n');

    for step in &plan.steps {
        for line in step.bpy_lines() {
            let _ = writeln!(script, "{}", line);
        }
    }

    script
}
