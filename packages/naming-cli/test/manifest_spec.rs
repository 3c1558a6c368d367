use std::path::PathBuf;
use std::rc::Rc;

use module_naming::logging::{LogLevel, MemoryLogger, NullLogger};
use module_naming::RunMode;
use module_naming_cli::{run, run_json, BuildManifest};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test")
        .join("fixtures")
        .join(name)
}

fn pairs<'a>(map: impl IntoIterator<Item = (&'a String, &'a String)>) -> Vec<(&'a str, &'a str)> {
    map.into_iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

#[test]
fn should_report_app_manifest() {
    let manifest = BuildManifest::load(&fixture("app.json")).unwrap();
    let report = run(&manifest, None, Rc::new(NullLogger::new())).unwrap();

    assert_eq!(
        pairs(&report.ids),
        vec![
            ("widgets/button", "widgets/button"),
            ("shared/format", "shared/format"),
            ("settings", "app-settings"),
            ("views/home + 1 modules", "async!views/home"),
        ]
    );
    assert_eq!(pairs(&report.build_meta), pairs(&report.ids));
    assert_eq!(report.exports["shared/format"], vec!["formatDate"]);

    let format = &report.used_names["shared/format"];
    assert_eq!(format["formatDate"].as_deref(), Some("formatDate"));
    assert_eq!(format["formatTime"].as_deref(), Some("a"));
}

#[test]
fn should_keep_ids_in_meta_with_dll_override() {
    let manifest = BuildManifest::load(&fixture("app.json")).unwrap();
    let report = run(&manifest, Some(RunMode::Dll), Rc::new(NullLogger::new())).unwrap();

    assert!(report.ids.is_empty());
    assert_eq!(report.build_meta.len(), 4);
    assert_eq!(report.build_meta["settings"], "app-settings");
}

#[test]
fn should_fail_run_on_unnamed_module() {
    let manifest = BuildManifest::parse(
        r#"{
            "resolve": { "modules": ["/app/src"] },
            "modules": [
                { "identifier": "main", "resource": "/app/src/main.js" },
                { "identifier": "lost", "rawRequest": "../lost", "resource": "/elsewhere/lost.js" }
            ],
            "dependencies": [{ "from": "main", "to": "lost", "request": "../lost", "preserve": true }]
        }"#,
    )
    .unwrap();

    let err = run(&manifest, None, Rc::new(NullLogger::new())).unwrap_err();
    assert!(err
        .to_string()
        .starts_with("Can't figure out a normalized module name for ../lost"));
}

#[test]
fn should_run_from_json() {
    let content = std::fs::read_to_string(fixture("app.json")).unwrap();
    let logger = Rc::new(MemoryLogger::new());
    let json = run_json(&content, None, logger.clone()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["ids"]["settings"], "app-settings");
    assert_eq!(value["buildMeta"]["widgets/button"], "widgets/button");
    assert_eq!(value["exports"]["shared/format"][0], "formatDate");
    assert_eq!(value["usedNames"]["shared/format"]["formatTime"], "a");
    assert_eq!(
        logger.messages(LogLevel::Info),
        vec!["1 modules have preserved exports", "named 4 preserved modules"]
    );
}

#[test]
fn should_report_missing_manifest_path() {
    let err = BuildManifest::load(&fixture("missing.json")).unwrap_err();
    assert!(err.to_string().contains("missing.json"));
}
