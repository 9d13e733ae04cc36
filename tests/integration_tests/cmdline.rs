use assert_cmd::{crate_name, Command};
use std::fs;
use std::io::Write;
use svgdata::cli::{run, Config};
use tempfile::NamedTempFile;

#[test]
fn test_cmdline_help() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = String::from_utf8(cmd.arg("-h").assert().success().get_output().stdout.clone())
        .expect("non-UTF8");
    assert!(output.contains("Usage"));
}

#[test]
fn test_cmdline_bad_arg() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.arg("--no-such-option").assert().failure().code(2);
}

#[test]
fn test_cmdline_path_data() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.args(["--path-data", "M 0,0 L 10,10 z"])
        .assert()
        .success()
        .stdout("M0 0L10 10z\n");

    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.args(["-d", "-1 -2 3 4"])
        .assert()
        .success()
        .stdout("L-1-2L3 4\n");

    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.args(["-d", "M 0 0 L 1"]).assert().failure();
}

#[test]
fn test_cmdline_stdin() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = cmd
        .write_stdin(r#"<svg><path d="M 1 2 L 3 4"/></svg>"#)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(
        String::from_utf8(output).expect("non-UTF8"),
        r#"<svg><path d="M1 2L3 4"/></svg>"#
    );
}

#[test]
fn test_cmdline_config() {
    let config = Config::from_cmdline(&format!("{} --help", crate_name!()));
    assert!(config.is_err());

    let mut tmpfile = NamedTempFile::new().expect("could not create tmpfile");
    write!(tmpfile, r#"<svg><line x2="1"/><line x1="1" x2="2"/></svg>"#)
        .expect("tmpfile write failed");
    let outfile = NamedTempFile::new().expect("could not create outfile");
    let config = Config::from_cmdline(&format!(
        "{} {} -o {} --join-lines",
        crate_name!(),
        tmpfile.path().to_str().unwrap(),
        outfile.path().to_str().unwrap()
    ))
    .expect("cmdline should be valid");
    run(config).expect("run failed");
    assert_eq!(
        fs::read_to_string(outfile.path()).unwrap(),
        r#"<svg><path d="M0 0L1 0L2 0"/></svg>"#
    );
}

#[test]
fn test_cmdline_same_input_output() {
    let tmpfile = NamedTempFile::new().expect("could not create tmpfile");
    let path = tmpfile.path().to_str().unwrap();
    let config = Config::from_cmdline(&format!("{} {path} -o {path}", crate_name!()));
    assert!(config.is_err());
}

#[test]
fn test_cmdline_failed_transform_keeps_output() {
    let mut tmpfile = NamedTempFile::new().expect("could not create tmpfile");
    write!(tmpfile, r#"<svg><path d="M 0 0 L"/></svg>"#).expect("tmpfile write failed");
    let mut outfile = NamedTempFile::new().expect("could not create outfile");
    write!(outfile, "previous").expect("outfile write failed");

    let config = Config::from_cmdline(&format!(
        "{} {} -o {}",
        crate_name!(),
        tmpfile.path().to_str().unwrap(),
        outfile.path().to_str().unwrap()
    ))
    .expect("cmdline should be valid");
    assert!(run(config).is_err());
    assert_eq!(fs::read_to_string(outfile.path()).unwrap(), "previous");
}
