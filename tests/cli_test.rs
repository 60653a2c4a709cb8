use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_market_groups_then_types_via_cli() {
    let dir = tempdir().unwrap();
    let types = dir.path().join("types.jsonl");
    let groups = dir.path().join("groups.jsonl");
    let icons = dir.path().join("icons.json");
    fs::write(
        &types,
        "{\"_key\": 34, \"name\": {\"en\": \"Tritanium\"}, \"marketGroupID\": 100}\n",
    )
    .unwrap();
    fs::write(&groups, "{\"_key\": 100, \"name\": {\"en\": \"Minerals\"}}\n").unwrap();
    fs::write(&icons, "{}").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_build-market-groups"))
        .args([&types, &groups, &icons])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout.clone()).unwrap(),
        r#"[{"id":100,"parentId":null,"childsId":[],"types":[34],"name":"Minerals","description":"","iconId":"0","iconAlt":""}]"#
    );

    let catalog = dir.path().join("market-groups.json");
    fs::write(&catalog, &output.stdout).unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_build-types"))
        .args([&types, &catalog])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        r#"[{"id":34,"name":"Tritanium","meta":1}]"#
    );
}

#[test]
fn test_wrong_argument_count_is_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_build-types"))
        .arg("types.jsonl")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_bad_region_dump_writes_nothing() {
    let dir = tempdir().unwrap();
    let regions = dir.path().join("regions.jsonl");
    fs::write(
        &regions,
        "{\"_key\": 10000002, \"name\": {\"en\": \"The Forge\"}}\n{\"_key\": 10000001}\n",
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_build-regions"))
        .arg(&regions)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("name.en"));
}
