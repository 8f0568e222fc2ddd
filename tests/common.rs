#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pnt() -> Command {
    cargo_bin_cmd!("pontolog")
}

/// Create a unique store path inside the system temp dir and remove any
/// existing store or log file left by a previous run.
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pontolog.csv", name));
    fs::remove_file(&path).ok();
    fs::remove_file(path.with_extension("log")).ok();
    fs::remove_file(path.with_extension("csv.tmp")).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid timestamp")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M:%S").expect("valid time")
}

/// Init a store via CLI and punch the given timestamps.
pub fn init_store_with_punches(store: &str, punches: &[&str]) {
    pnt()
        .args(["--store", store, "--test", "init"])
        .assert()
        .success();

    for at in punches {
        pnt()
            .args(["--store", store, "punch", "--at", at])
            .assert()
            .success();
    }
}
