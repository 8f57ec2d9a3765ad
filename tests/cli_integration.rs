//! End-to-end tests driving the real `shelf` binary.
//!
//! The library loop is fed scripted commands over piped stdin; output
//! assertions match on substrings because log lines carry timestamps.

use assert_cmd::Command;
use predicates::prelude::*;

/// Command with config lookup pinned to a path that never exists, so a
/// developer's own config file cannot leak into assertions.
fn shelf() -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env("SHELF_CONFIG", "/nonexistent/shelfling-test-config.toml");
    cmd.env_remove("SHELF_LOG");
    cmd
}

mod library {
    use super::*;

    #[test]
    fn add_show_exit_round_trip() {
        shelf()
            .arg("library")
            .write_stdin("add\nDune\nFrank Herbert\n1965\nshow\nexit\n")
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Enter book title: ")
                    .and(predicate::str::contains(
                        "Book added: Title: Dune, Author: Frank Herbert, Year: 1965",
                    ))
                    .and(predicate::str::contains(
                        "Title: Dune, Author: Frank Herbert, Year: 1965",
                    ))
                    .and(predicate::str::contains("Exiting program...")),
            );
    }

    #[test]
    fn show_with_no_books() {
        shelf()
            .arg("library")
            .write_stdin("show\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("No books in the library."));
    }

    #[test]
    fn remove_absent_title_reports_not_found() {
        shelf()
            .arg("library")
            .write_stdin("remove\nDune\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Book not found: Dune"));
    }

    #[test]
    fn duplicate_titles_remove_earliest() {
        shelf()
            .arg("library")
            .write_stdin(
                "add\nDune\nHerbert\n1965\nadd\nDune\nX\n1970\nremove\nDune\nshow\nexit\n",
            )
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Book removed: Dune")
                    .and(predicate::str::contains("Title: Dune, Author: X, Year: 1970")),
            );
    }

    #[test]
    fn invalid_command_reprompts() {
        shelf()
            .arg("library")
            .write_stdin("frobnicate\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Invalid command. Please try again."));
    }

    #[test]
    fn eof_exits_cleanly() {
        shelf().arg("library").write_stdin("").assert().success();
    }

    #[test]
    fn quiet_suppresses_info_lines() {
        shelf()
            .args(["library", "--quiet"])
            .write_stdin("add\nDune\nHerbert\n1965\nexit\n")
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Book added")
                    .not()
                    .and(predicate::str::contains("Enter command").not()),
            );
    }

    #[test]
    fn json_flag_renders_books_as_objects() {
        shelf()
            .args(["library", "--json"])
            .write_stdin("add\nDune\nHerbert\n1965\nshow\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""title":"Dune""#));
    }
}

mod vehicles {
    use super::*;

    #[test]
    fn default_runs_both_regions() {
        shelf()
            .arg("vehicles")
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Ford Mustang (US Spec): Engine started")
                    .and(predicate::str::contains(
                        "Harley-Davidson Sportster (US Spec): Motor revved up",
                    ))
                    .and(predicate::str::contains(
                        "Volkswagen Golf (EU Spec): Engine started",
                    ))
                    .and(predicate::str::contains(
                        "Ducati Monster (EU Spec): Motor revved up",
                    )),
            );
    }

    #[test]
    fn region_flag_narrows_to_one_factory() {
        shelf()
            .args(["vehicles", "--region", "us"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("US Spec").and(predicate::str::contains("EU Spec").not()),
            );
    }

    #[test]
    fn config_file_sets_default_region() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[vehicles]\nregion = \"eu\"\n").unwrap();

        shelf()
            .args(["--config", path.to_str().unwrap(), "vehicles"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("EU Spec").and(predicate::str::contains("US Spec").not()),
            );
    }
}

mod completion {
    use super::*;

    #[test]
    fn bash_completion_is_generated() {
        shelf()
            .args(["completion", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("shelf"));
    }
}

#[test]
fn unknown_subcommand_fails() {
    shelf().arg("warehouse").assert().failure();
}
