use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

fn write_contacts(dir: &Path) -> PathBuf {
    let path = dir.join("contacts.json");
    let contacts = json!([
        {
            "name": "Alex Yeoh",
            "phone": "87438807",
            "email": "alexyeoh@example.com",
            "role": "ta",
            "modules": ["CS2103T"],
            "telegram": "@sourceacademy"
        },
        {
            "name": "Bernice Yu",
            "phone": "99272758",
            "email": "berniceyu@example.com",
            "role": "prof",
            "modules": ["CS2040S"],
            "favourite": true
        },
        {
            "name": "Charlotte Oliveiro",
            "phone": "93210283",
            "email": "charlotte@example.com",
            "role": "TA",
            "modules": ["CS2030S", "CS2103T"],
            "telegram": "@sourceacademy1"
        }
    ]);
    fs::write(&path, serde_json::to_vec_pretty(&contacts).expect("json")).expect("write contacts");
    path
}

fn run(dir: &Path, contacts: &Path, args: &[&str]) -> Output {
    cargo_bin_cmd!("profbook")
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .args(["--contacts", contacts.to_str().expect("contacts path")])
        .args(args)
        .output()
        .expect("run command")
}

fn run_json(dir: &Path, contacts: &Path, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = run(dir, contacts, &full);
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn names(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item["name"].as_str().expect("name").to_string())
        .collect()
}

#[test]
fn cli_find_combines_fields() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = write_contacts(temp.path());

    let found = run_json(temp.path(), &contacts, &["find", "--module", "CS2103T", "--role", "ta"]);
    assert_eq!(names(&found), vec!["Alex Yeoh", "Charlotte Oliveiro"]);
    assert_eq!(found[1]["index"], 3);

    let found = run_json(temp.path(), &contacts, &["find", "--name", "alex", "bernice"]);
    assert_eq!(names(&found), vec!["Alex Yeoh", "Bernice Yu"]);

    let found = run_json(temp.path(), &contacts, &["find", "--favourite", "Y"]);
    assert_eq!(names(&found), vec!["Bernice Yu"]);
    assert_eq!(found[0]["role"], "prof");
}

#[test]
fn cli_find_reports_keyword_errors() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = write_contacts(temp.path());

    let output = run(temp.path(), &contacts, &["find", "--phone", "12a"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("Phone keywords should only contain digits"), "{stderr}");

    let output = run(temp.path(), &contacts, &["find", "--favourite", "y", "n"]);
    assert_eq!(output.status.code(), Some(3));

    let output = run(temp.path(), &contacts, &["find"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_show_uses_index_list() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = write_contacts(temp.path());

    let shown = run_json(temp.path(), &contacts, &["show", "3", "1"]);
    assert_eq!(names(&shown), vec!["Charlotte Oliveiro", "Alex Yeoh"]);

    let output = run(temp.path(), &contacts, &["show", "1", "1"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("Duplicate index found: 1."), "{stderr}");

    let output = run(temp.path(), &contacts, &["show", "9"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn cli_check_prints_canonical_values() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = temp.path().join("missing.json");

    let output = run(temp.path(), &contacts, &["check", "name", "  Alex   Yeoh "]);
    assert!(output.status.success(), "command failed: {:?}", output);
    assert_eq!(String::from_utf8(output.stdout).expect("utf8"), "Alex Yeoh\n");

    let output = run(temp.path(), &contacts, &["check", "index", "0"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("Index is not a non-zero unsigned integer."), "{stderr}");
}

#[test]
fn cli_modules_counts_contacts_and_reads_config() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = write_contacts(temp.path());
    let config_dir = temp.path().join("config").join("profbook");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(
        config_dir.join("config.toml"),
        "[modules]\n[[modules.extra]]\ncode = \"CS4248\"\ntitle = \"Natural Language Processing\"\n",
    )
    .expect("write config");

    let modules = run_json(temp.path(), &contacts, &["modules"]);
    let items = modules.as_array().expect("array");
    let count = |code: &str| {
        items
            .iter()
            .find(|item| item["code"] == code)
            .map(|item| item["contacts"].as_u64().expect("count"))
    };
    assert_eq!(count("CS2103T"), Some(2));
    assert_eq!(count("CS2040S"), Some(1));
    assert_eq!(count("CS4248"), Some(0));
}

#[test]
fn cli_rejects_invalid_contact_records() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("contacts.json");
    let contacts = json!([
        {
            "name": "Alex Yeoh",
            "phone": "8743-8807",
            "email": "alexyeoh@example.com",
            "role": "ta"
        }
    ]);
    fs::write(&path, contacts.to_string()).expect("write contacts");

    let output = run(temp.path(), &path, &["list"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("contact #1: Phone numbers should only contain digits"), "{stderr}");
}

#[test]
fn cli_check_reports_field_message() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = temp.path().join("missing.json");

    let output = run(temp.path(), &contacts, &["check", "email", "foo"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("Emails should be of the format local-part@domain"), "{stderr}");
}

#[test]
fn cli_rejects_empty_data_dir() {
    let temp = TempDir::new().expect("temp dir");

    let output = cargo_bin_cmd!("profbook")
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("XDG_DATA_HOME", "")
        .args(["--verbose", "list"])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("invalid data path"), "{stderr}");
}

#[test]
fn cli_rejects_malformed_contacts_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("contacts.json");
    fs::write(&path, "{ not json").expect("write contacts");

    let output = run(temp.path(), &path, &["list"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("parse contacts file"), "{stderr}");
}
