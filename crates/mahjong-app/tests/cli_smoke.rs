use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn mjadvisor() -> Command {
    Command::cargo_bin("mjadvisor").expect("binary builds")
}

#[test]
fn advise_on_a_self_draw_recommends_a_discard() {
    mjadvisor()
        .args([
            "advise",
            "--hand",
            "W1 W2 W3 W5 T3 T3 T4 T7 S6 S7 Z1 Z1 Z2",
            "--draw",
            "T2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("advice: discard"))
        .stdout(predicate::str::contains("distance to win:"));
}

#[test]
fn advise_declares_a_win_on_the_completing_discard() {
    mjadvisor()
        .args([
            "advise",
            "--hand",
            "T1 T2 T3 B4 W6 W6 W6 E E E B7 B8 B9",
            "--discard",
            "B4",
            "--from",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("declare the win on B4"));
}

#[test]
fn advise_emits_machine_readable_json() {
    mjadvisor()
        .args([
            "advise",
            "--json",
            "--hand",
            "W1 W2 W3 W5 T3 T3 T4 T7 S6 S7 Z1 Z1 Z2",
            "--draw",
            "T2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"action\""))
        .stdout(predicate::str::contains("Discard"))
        .stdout(predicate::str::contains("\"distance_to_win\""));
}

#[test]
fn advise_rejects_unknown_tile_codes() {
    mjadvisor()
        .args(["advise", "--hand", "W1 XX W3", "--draw", "T2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tile code 'XX'"));
}

#[test]
fn advise_requires_a_trigger() {
    mjadvisor()
        .args(["advise", "--hand", "W1 W2 W3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--draw"));
}

#[test]
fn custom_tile_resource_is_honored() {
    let mut resource = tempfile::NamedTempFile::new().unwrap();
    // A deliberately tiny universe with renamed codes.
    write!(
        resource,
        r#"{{"ONE": ["WAN", 1], "TWO": ["WAN", 2], "THREE": ["WAN", 3], "RED": ["RED", 0]}}"#
    )
    .unwrap();

    mjadvisor()
        .args(["--tiles"])
        .arg(resource.path())
        .args(["advise", "--hand", "ONE TWO THREE RED", "--draw", "RED"])
        .assert()
        .success()
        .stdout(predicate::str::contains("advice:"));
}

#[test]
fn play_session_quits_cleanly() {
    mjadvisor()
        .args(["play"])
        .write_stdin("hand W1 W2 W3\nshow\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("mjadvisor interactive session"));
}
