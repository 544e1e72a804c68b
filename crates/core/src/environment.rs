//! Effective-environment composition for spawned scenario commands

use std::collections::HashMap;

/// Overlay scenario-declared variables on the ambient process environment.
///
/// Scenario entries win on key collision. The result is exactly what the
/// spawned command sees; nothing here mutates the ambient environment.
pub fn effective_environment(overrides: &HashMap<String, String>) -> HashMap<String, String> {
    let mut env: HashMap<String, String> = std::env::vars().collect();
    for (key, value) in overrides {
        env.insert(key.clone(), value.clone());
    }
    env
}
