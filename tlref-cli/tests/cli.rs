use std::fs;
use std::process::Command;

fn tlref() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tlref"))
}

const SCHEMA: &str = "\
// LAYER 181
inputPeerSelf#7da07ec9 = InputPeer;
inputPeerUser#dde8a54c user_id:long access_hash:long = InputPeer;
---functions---
messages.getHistory#4423e6c5 peer:InputPeer limit:int = messages.Messages;
";

#[test]
fn build_then_render() {
    let dir = tempfile::tempdir().unwrap();
    let schema = dir.path().join("api.tl");
    let model = dir.path().join("model.json");
    let site = dir.path().join("site");
    fs::write(&schema, SCHEMA).unwrap();

    let status = tlref()
        .args(["build", "--sequential", "-o"])
        .arg(&model)
        .arg(&schema)
        .status()
        .unwrap();
    assert!(status.success());

    let json = fs::read_to_string(&model).unwrap();
    assert!(json.contains("\"layer\": 181"));
    assert!(json.contains("\"display_name\": \"InputPeerUser\""));

    let status = tlref().arg("render").arg(&model).arg("-o").arg(&site).status().unwrap();
    assert!(status.success());
    assert!(site.join("methods/messages/getHistory.html").is_file());
}

#[test]
fn missing_schema_fails_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.tl");
    let out = tlref()
        .arg("build")
        .arg(&missing)
        .arg("-o")
        .arg(dir.path().join("model.json"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("missing.tl"));
}

#[test]
fn bad_registry_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let schema = dir.path().join("api.tl");
    let registry = dir.path().join("registry.json");
    fs::write(&schema, SCHEMA).unwrap();
    fs::write(&registry, "[1, 2").unwrap();

    let out = tlref()
        .arg("build")
        .arg(&schema)
        .arg("-r")
        .arg(&registry)
        .arg("-o")
        .arg(dir.path().join("model.json"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("registry.json") && stderr.contains("invalid JSON"), "{stderr}");
}
