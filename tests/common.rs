use assert_cmd::Command;

/// Returns a configured Command for `sqlfacade_rs`
pub fn sqlfacade_cmd() -> Command {
    Command::cargo_bin("sqlfacade_rs").expect("Binary not found")
}
