//! Plain-text rendering for CLI output.
//!
//! Every function returns the text to print so the formatting can be
//! tested without spawning the binary.

use permatrix_auth::{AccessPolicy, ColumnKey, PermissionRecord};
use permatrix_runtime::{NavigationGate, PermissionRegistry, RouteTable};

/// One line per visible route, then the landing line.
pub fn routes<P: AccessPolicy>(gate: &NavigationGate<'_, P>) -> String {
    let mut out = String::new();
    for route in gate.visible_routes() {
        out.push_str(&format!("{:<12} {}\n", route.as_str(), route.label()));
    }
    out.push_str(&format!("landing: {}\n", gate.default_route()));
    out
}

fn mark(granted: bool) -> &'static str {
    if granted {
        "x"
    } else {
        "-"
    }
}

fn row(out: &mut String, record: &PermissionRecord) {
    out.push_str(&format!(
        "  {:<24} {:<30} {:<9}",
        record.id.as_str(),
        record.name,
        record.kind.as_str()
    ));
    for (_, granted) in record.grants() {
        out.push_str(&format!(" {:^7}", mark(granted)));
    }
    out.push('\n');
}

/// The matrix grouped by module, optionally limited to one module.
///
/// Returns `None` when `module` names no module in the registry.
pub fn matrix(registry: &PermissionRegistry, module: Option<&str>) -> Option<String> {
    let modules = match module {
        Some(wanted) => {
            let found = registry
                .modules()
                .into_iter()
                .find(|m| m.eq_ignore_ascii_case(wanted))?;
            vec![found]
        }
        None => registry.modules(),
    };

    let mut out = format!("  {:<24} {:<30} {:<9}", "ID", "NAME", "KIND");
    for column in ColumnKey::ALL {
        out.push_str(&format!(" {:^7}", column.as_str()));
    }
    out.push('\n');

    for module in modules {
        out.push_str(&format!("[{module}]\n"));
        for record in registry.records_in(&module) {
            row(&mut out, &record);
        }
    }
    Some(out)
}

/// Consistency problems between the route table and the registry.
pub fn audit(registry: &PermissionRegistry, table: &RouteTable) -> Vec<String> {
    let mut problems: Vec<String> = table
        .audit(registry)
        .iter()
        .map(ToString::to_string)
        .collect();
    problems.extend(
        registry
            .duplicate_names()
            .into_iter()
            .map(|name| format!("permission name '{name}' is used by more than one record")),
    );
    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use permatrix_auth::{PermissionKind, Role};
    use permatrix_runtime::{AccessEvaluator, Route};
    use std::sync::Arc;

    fn builtin() -> Arc<PermissionRegistry> {
        Arc::new(PermissionRegistry::builtin().expect("builtin"))
    }

    #[test]
    fn routes_for_viewer() {
        let table = RouteTable::builtin();
        let viewer = AccessEvaluator::for_role(builtin(), Role::Viewer);
        let text = routes(&NavigationGate::new(&table, &viewer));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4, "got:\n{text}");
        assert!(lines[0].starts_with("crm"));
        assert_eq!(lines[3], "landing: crm");
    }

    #[test]
    fn routes_no_access() {
        let table = RouteTable::new().gated(Route::Settings, "Access Settings");
        let viewer = AccessEvaluator::for_role(builtin(), Role::Viewer);
        let text = routes(&NavigationGate::new(&table, &viewer));
        assert_eq!(text, "landing: no-access\n");
    }

    #[test]
    fn matrix_single_module() {
        let text = matrix(&builtin(), Some("hr")).expect("HR exists");
        assert!(text.contains("[HR]"));
        assert!(text.contains("View Salary Data"));
        assert!(!text.contains("[CRM]"));
    }

    #[test]
    fn matrix_unknown_module() {
        assert!(matrix(&builtin(), Some("Payroll")).is_none());
    }

    #[test]
    fn matrix_lists_every_module() {
        let registry = builtin();
        let text = matrix(&registry, None).expect("all modules");
        for module in registry.modules() {
            assert!(text.contains(&format!("[{module}]")), "{module}");
        }
    }

    #[test]
    fn audit_builtin_clean() {
        assert!(audit(&builtin(), &RouteTable::builtin()).is_empty());
    }

    #[test]
    fn audit_reports_duplicates() {
        let registry = PermissionRegistry::from_seed(vec![
            PermissionRecord::new("a", "M", PermissionKind::Feature, "Same"),
            PermissionRecord::new("b", "M", PermissionKind::Feature, "Same"),
        ])
        .expect("seed");
        let problems = audit(&registry, &RouteTable::new());
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("'Same'"));
    }
}
