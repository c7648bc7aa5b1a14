#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use sitecontrol::db::pool::DbPool;
use sitecontrol::db::store::load_state;
use sitecontrol::models::app_state::AppState;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Home directory used by every test run, so no real config file is read
pub fn test_home() -> PathBuf {
    let home = env::temp_dir().join("sitecontrol_test_home");
    fs::create_dir_all(&home).ok();
    home
}

pub fn sc() -> Command {
    let home = test_home();
    let mut cmd = cargo_bin_cmd!("sitecontrol");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sitecontrol.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run a command against `db_path` and require success
pub fn ok(db_path: &str, args: &[&str]) {
    sc().args(["--db", db_path]).args(args).assert().success();
}

pub fn init(db_path: &str) {
    ok(db_path, &["--test", "init"]);
}

pub fn login(db_path: &str, username: &str, pin: &str) {
    ok(db_path, &["login", username, "--pin", pin]);
}

/// Read the stored snapshot straight from the store
pub fn snapshot(db_path: &str) -> AppState {
    let pool = DbPool::open(db_path).expect("open db");
    load_state(&pool.conn)
        .expect("load snapshot")
        .expect("snapshot present")
}

/// Fresh store with supervisor `sam` (PIN 1234) created by the owner and
/// signed in.
pub fn supervisor_site(name: &str) -> String {
    let db_path = setup_test_db(name);
    init(&db_path);
    login(&db_path, "owner", "8888");
    ok(
        &db_path,
        &[
            "user", "add", "--name", "Sam Site", "--username", "sam", "--pin", "1234",
        ],
    );
    login(&db_path, "sam", "1234");
    db_path
}

/// Register a machine for the signed-in supervisor and return its id
pub fn add_machine(db_path: &str, name: &str) -> String {
    ok(db_path, &["machine", "add", name]);
    snapshot(db_path)
        .machines
        .iter()
        .rev()
        .find(|m| m.name == name)
        .map(|m| m.id.clone())
        .expect("machine stored")
}

/// A tiny file with an image extension for `--photo`
pub fn photo_file(name: &str) -> String {
    let p = temp_out(name, "png");
    fs::write(&p, [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]).expect("write photo");
    p
}
