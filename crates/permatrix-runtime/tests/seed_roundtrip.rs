//! Seed persistence: export → reload keeps every answer identical.

use permatrix_auth::{
    AccessPolicy, Actor, ColumnKey, PermissionId, PermissionKind, PermissionRecord, Role,
};
use permatrix_runtime::{AccessEvaluator, MatrixEditor, PermissionRegistry, SeedError, SeedFormat};
use std::sync::Arc;

fn answers(registry: &Arc<PermissionRegistry>) -> Vec<bool> {
    let names: Vec<String> = registry.snapshot().into_iter().map(|r| r.name).collect();
    Role::ALL
        .into_iter()
        .flat_map(|role| {
            let eval = AccessEvaluator::for_role(Arc::clone(registry), role);
            names
                .iter()
                .map(|name| eval.check_permission(name))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn edited_builtin() -> Arc<PermissionRegistry> {
    let registry = Arc::new(PermissionRegistry::builtin().expect("builtin"));
    let editor = MatrixEditor::new(Arc::clone(&registry));
    let admin = Actor::new(Role::Admin);
    for (id, role) in [
        ("hr-salary-view", Role::Manager),
        ("crm-access", Role::Viewer),
        ("set-access", Role::User),
    ] {
        editor
            .toggle_permission(&admin, &PermissionId::new(id), role)
            .expect("toggle");
    }
    registry
}

#[test]
fn file_roundtrip_preserves_answers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let original = edited_builtin();

    for file in ["matrix.json", "matrix.toml"] {
        let path = dir.path().join(file);
        original.save(&path).expect("save");

        let reloaded = Arc::new(PermissionRegistry::load(&path).expect("reload"));
        assert_eq!(reloaded.snapshot(), original.snapshot(), "{file}");
        assert_eq!(answers(&reloaded), answers(&original), "{file}");
    }
}

#[test]
fn export_text_reloads_identically() {
    let original = edited_builtin();
    for format in [SeedFormat::Json, SeedFormat::Toml] {
        let text = original.export(format).expect("export");
        let records = permatrix_runtime::seed::parse(&text, format).expect("parse");
        let reloaded = Arc::new(PermissionRegistry::from_seed(records).expect("seed"));
        assert_eq!(answers(&reloaded), answers(&original), "{format:?}");
    }
}

#[test]
fn toml_export_uses_permission_tables() {
    let registry = PermissionRegistry::from_seed(vec![PermissionRecord::new(
        "crm-access",
        "CRM",
        PermissionKind::Access,
        "Access CRM Module",
    )
    .allow(ColumnKey::Viewer)])
    .expect("seed");

    let text = registry.export(SeedFormat::Toml).expect("export");
    assert!(text.contains("[[permission]]"), "got:\n{text}");
    assert!(text.contains("name = \"Access CRM Module\""), "got:\n{text}");
    assert!(text.contains("viewer = true"), "got:\n{text}");
}

#[test]
fn load_rejects_admin_denial() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.json");
    std::fs::write(
        &path,
        r#"[{"id":"x","module":"M","kind":"Feature","name":"X","admin":false,"manager":true,"user":true,"viewer":true}]"#,
    )
    .expect("write");

    let err = PermissionRegistry::load(&path).expect_err("admin denied");
    assert!(matches!(err, SeedError::AdminDenied { .. }));
}

#[test]
fn load_rejects_unknown_extension() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("matrix.yaml");
    std::fs::write(&path, "[]").expect("write");

    let err = PermissionRegistry::load(&path).expect_err("unsupported");
    assert!(matches!(err, SeedError::UnsupportedFormat { .. }));
}

#[test]
fn duplicate_names_survive_roundtrip_with_first_match() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dupes.toml");
    let registry = PermissionRegistry::from_seed(vec![
        PermissionRecord::new("first", "M", PermissionKind::Feature, "Shared").allow_all(),
        PermissionRecord::new("second", "M", PermissionKind::Feature, "Shared"),
    ])
    .expect("seed");
    registry.save(&path).expect("save");

    let reloaded = Arc::new(PermissionRegistry::load(&path).expect("reload"));
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.duplicate_names(), vec!["Shared".to_string()]);
    let viewer = AccessEvaluator::for_role(reloaded, Role::Viewer);
    assert!(viewer.access_state("Shared").is_granted());
}
