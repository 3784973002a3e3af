//! Process-wide registry of host commands.
//!
//! The host integration layer calls [`register`] once at start-up and
//! [`unregister`] at shutdown. Both are idempotent.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::operator::DuplicateOperator;

/// Object menu the operator is appended to.
pub const OBJECT_MENU: &str = "VIEW3D_MT_object";

/// A command exposed to the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub menu: &'static str,
}

static REGISTRY: Mutex<Vec<CommandEntry>> = Mutex::new(Vec::new());

fn entries() -> MutexGuard<'static, Vec<CommandEntry>> {
    REGISTRY.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Commands this crate provides.
pub fn commands() -> [CommandEntry; 1] {
    [CommandEntry {
        id: DuplicateOperator::ID,
        label: DuplicateOperator::LABEL,
        menu: OBJECT_MENU,
    }]
}

pub fn register() {
    let mut entries = entries();
    for command in commands() {
        if !entries.iter().any(|e| e.id == command.id) {
            entries.push(command);
        }
    }
}

pub fn unregister() {
    let ids = commands().map(|c| c.id);
    entries().retain(|e| !ids.contains(&e.id));
}

pub fn lookup(id: &str) -> Option<CommandEntry> {
    entries().iter().find(|e| e.id == id).copied()
}

/// Registered commands shown in `menu`, in registration order.
pub fn menu_entries(menu: &str) -> Vec<CommandEntry> {
    entries().iter().filter(|e| e.menu == menu).copied().collect()
}
