#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that does not exist: the CLI falls back to defaults.
pub fn missing_config(name: &str) -> String {
    temp_path(&format!("{name}_cfg"), "conf")
}

pub fn write_file(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write temp file");
    p
}

/// March 2024 sample:
/// - 01.03 clean, 8:00 logged
/// - 02.03 weekend
/// - 04.03 two arrivals in a row (2 issues), 7:30 logged
/// - 05.03 starts with a departure (1 issue)
/// - 06.03 holiday
/// - 07.03 unknown label (day cannot be validated)
/// - 15.03 today, still open (1 issue)
pub const SAMPLE_JSON: &str = r#"{
  "days": [
    { "date": "01.03.24", "worked": "worked: 8:00",
      "events": [ { "label": "Příchod", "time": "08:00" },
                  { "label": "Odchod", "time": "16:30" } ] },
    { "date": "02.03.24", "kind": "weekend" },
    { "date": "04.03.24", "worked": "worked: 7:30",
      "events": [ { "label": "Příchod", "time": "08:00" },
                  { "label": "Příchod", "time": "12:00" } ] },
    { "date": "05.03.24",
      "events": [ { "label": "Odchod", "time": "16:00" } ] },
    { "date": "06.03.24", "kind": "holiday" },
    { "date": "07.03.24",
      "events": [ { "label": "Příchod", "time": "08:00" },
                  { "label": "Teleport", "time": "12:00" } ] },
    { "date": "15.03.24",
      "events": [ { "label": "Příchod", "time": "08:00" } ] }
  ]
}"#;

pub const SAMPLE_CSV: &str = "date,kind,label,time,date_tag,worked
01.03.24,work,Příchod,08:00,01,worked: 8:00
01.03.24,work,Odchod,16:30,01,
02.03.24,weekend,,,,
04.03.24,work,Příchod,08:00,04,worked: 7:30
04.03.24,work,Příchod,12:00,03,
05.03.24,,Odchod,16:00,,
";
