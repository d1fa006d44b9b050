use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vacancies_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vacancies").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("API_KEY_SJ")
        .env_remove("HH_API_URL")
        .env_remove("SUPERJOB_API_URL")
        .env_remove("VACANCIES_UTC_OFFSET")
        .env("VACANCIES_OUTPUT", dir.path().join("out.json").to_str().unwrap());
    cmd
}

#[test]
fn test_help_shows_output_flag() {
    let dir = TempDir::new().unwrap();

    vacancies_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--utc-offset"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();

    vacancies_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vacancies"));
}

#[test]
fn test_no_subcommands_accepted() {
    let dir = TempDir::new().unwrap();

    vacancies_cmd(&dir).arg("search").assert().failure();
}

mod input_validation {
    use super::*;

    #[test]
    fn test_empty_stdin_fails_before_fetching() {
        let dir = TempDir::new().unwrap();

        vacancies_cmd(&dir)
            .write_stdin("")
            .assert()
            .failure()
            .stdout(predicate::str::contains("Enter a job title to search"))
            .stderr(predicate::str::contains("No search term given"));
    }

    #[test]
    fn test_non_numeric_page_size_fails() {
        let dir = TempDir::new().unwrap();

        vacancies_cmd(&dir)
            .write_stdin("Python developer\nfive\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid input: 'five' is not a valid number"));

        assert!(!dir.path().join("out.json").exists());
    }

    #[test]
    fn test_non_numeric_page_fails() {
        let dir = TempDir::new().unwrap();

        vacancies_cmd(&dir)
            .write_stdin("Python developer\n5\nfirst\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid input"));
    }

    #[test]
    fn test_zero_page_size_fails() {
        let dir = TempDir::new().unwrap();

        vacancies_cmd(&dir)
            .write_stdin("Python developer\n0\n0\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Page size must be greater than zero"));
    }
}

mod configuration {
    use super::*;

    #[test]
    fn test_invalid_utc_offset_flag() {
        let dir = TempDir::new().unwrap();

        vacancies_cmd(&dir)
            .arg("--utc-offset")
            .arg("Moscow")
            .write_stdin("")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid UTC offset"));
    }

    #[test]
    fn test_invalid_base_url() {
        let dir = TempDir::new().unwrap();

        vacancies_cmd(&dir)
            .env("HH_API_URL", "not a url")
            .write_stdin("")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Configuration error"));
    }

    #[test]
    fn test_missing_api_key_is_only_a_warning() {
        let dir = TempDir::new().unwrap();

        vacancies_cmd(&dir)
            .env("RUST_LOG", "warn")
            .write_stdin("")
            .assert()
            .failure()
            .stderr(predicate::str::contains("API_KEY_SJ is not set"))
            .stderr(predicate::str::contains("No search term given"));
    }
}
