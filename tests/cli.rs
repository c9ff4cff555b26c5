use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendbook(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendbook").unwrap();
    cmd.env("SPENDBOOK_DATA_DIR", dir.path());
    cmd
}

fn add(dir: &TempDir, name: &str, price: &str, category: &str, date: &str) {
    spendbook(dir)
        .args(["add", name, price, "--category", category, "--date", date])
        .assert()
        .success();
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn init_creates_layout() {
    let dir = TempDir::new().unwrap();

    spendbook(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("spendbook.db").exists());
    assert!(dir.path().join("reports").is_dir());

    spendbook(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));

    spendbook(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Initialized:       yes")
                .and(predicate::str::contains("Date format:          %Y-%m-%d")),
        );
}

#[test]
fn show_item_details() {
    let dir = TempDir::new().unwrap();
    spendbook(&dir)
        .args(["add", "Milk", "1.99", "-c", "Food", "-d", "2024-01-05", "-a", "skimmed"])
        .assert()
        .success();

    spendbook(&dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Item:     Milk (1)")
                .and(predicate::str::contains("Category: Food"))
                .and(predicate::str::contains("About:    skimmed")),
        );

    spendbook(&dir)
        .args(["show", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item not found: 9"));
}

#[test]
fn configured_date_format_is_used() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format": "%d.%m.%Y"}"#).unwrap();
    add(&dir, "Milk", "1", "Food", "2024-01-05");

    spendbook(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("05.01.2024"));
}

#[test]
fn add_and_list_items() {
    let dir = TempDir::new().unwrap();

    spendbook(&dir)
        .args(["add", "Milk", "1.99", "-c", "Food", "-d", "2024-01-05", "-a", "2L"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added item: Milk (1)"));
    add(&dir, "Bread", "2.50", "FOOD", "2024-01-06");

    let listing = stdout_of(spendbook(&dir).arg("list"));
    assert!(listing.contains("Milk"));
    assert!(listing.contains("$1.99"));
    assert!(listing.find("Bread").unwrap() < listing.find("Milk").unwrap());

    spendbook(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food").and(predicate::str::contains("FOOD").not()));
}

#[test]
fn short_name_is_rejected() {
    let dir = TempDir::new().unwrap();

    spendbook(&dir)
        .args(["add", "ab", "1", "-c", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name too short"));

    spendbook(&dir)
        .args(["add", "Milk", "1", "-c", "Fo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("category too short"));
}

#[test]
fn bad_date_is_rejected() {
    let dir = TempDir::new().unwrap();

    spendbook(&dir)
        .args(["add", "Milk", "1", "-c", "Food", "-d", "05.01.2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn high_value_prompt_granted_once() {
    let dir = TempDir::new().unwrap();

    spendbook(&dir)
        .args(["add", "Yacht", "150000000", "-c", "Leisure", "-d", "2024-01-05"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Allow recording").and(predicate::str::contains("Added item: Yacht")));

    // The answer is remembered, so no prompt the second time
    spendbook(&dir)
        .args(["add", "Villa", "250000000", "-c", "Leisure", "-d", "2024-01-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Allow recording").not());

    let config = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(config.contains("\"granted\""));
}

#[test]
fn high_value_prompt_denied() {
    let dir = TempDir::new().unwrap();

    spendbook(&dir)
        .args(["add", "Yacht", "150000000", "-c", "Leisure"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("price exceeds allowed limit"));

    spendbook(&dir)
        .args(["add", "Yacht", "150000000", "-c", "Leisure"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("price exceeds allowed limit"));

    spendbook(&dir)
        .args(["add", "Boat", "100000000", "-c", "Leisure"])
        .assert()
        .success();
}

#[test]
fn edit_to_high_value_asks_once() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Boat", "1000", "Leisure", "2024-01-05");

    spendbook(&dir)
        .args(["edit", "1", "--price", "150000000"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Allow recording")
                .and(predicate::str::contains("Updated item: Boat (1)")),
        );

    let config = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(config.contains("\"granted\""));

    let listing = stdout_of(spendbook(&dir).arg("list"));
    assert!(listing.contains("$150000000.00"));
}

#[test]
fn edit_to_high_value_denied_keeps_item() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Boat", "1000", "Leisure", "2024-01-05");

    spendbook(&dir)
        .args(["edit", "1", "--price", "150000000"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("price exceeds allowed limit"));

    let listing = stdout_of(spendbook(&dir).arg("list"));
    assert!(listing.contains("$1000.00"));
}

#[test]
fn edit_keeps_omitted_fields() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Milk", "1.99", "Food", "2024-01-05");

    spendbook(&dir)
        .args(["edit", "1", "--price", "2.49", "--category", "Dairy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated item: Milk (1)"));

    let listing = stdout_of(spendbook(&dir).arg("list"));
    assert!(listing.contains("$2.49"));
    assert!(listing.contains("Dairy"));
    assert!(listing.contains("2024-01-05"));

    let categories = stdout_of(spendbook(&dir).arg("categories"));
    assert!(categories.contains("Food"));
    assert!(categories.contains("Dairy"));
}

#[test]
fn edit_unknown_item_fails() {
    let dir = TempDir::new().unwrap();

    spendbook(&dir)
        .args(["edit", "42", "--price", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item not found: 42"));
}

#[test]
fn delete_items() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Milk", "1", "Food", "2024-01-05");
    add(&dir, "Bread", "2", "Food", "2024-01-05");
    add(&dir, "Petrol", "40", "Transport", "2024-01-05");

    spendbook(&dir)
        .args(["delete", "1", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 item(s)"));

    let listing = stdout_of(spendbook(&dir).arg("list"));
    assert!(listing.contains("Bread"));
    assert!(!listing.contains("Milk"));
    assert!(!listing.contains("Petrol"));

    // Ids are never reused
    spendbook(&dir)
        .args(["add", "Eggs", "3", "-c", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(4)"));
}

#[test]
fn list_views() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Milk 2L", "3", "Food", "2024-01-02");
    add(&dir, "Petrol", "1", "Transport", "2024-01-03");
    add(&dir, "Milk 1L", "2", "Food", "2024-01-10");

    let sorted = stdout_of(spendbook(&dir).args(["list", "--sort", "price"]));
    let petrol = sorted.find("Petrol").unwrap();
    let small = sorted.find("Milk 1L").unwrap();
    let large = sorted.find("Milk 2L").unwrap();
    assert!(petrol < small && small < large);

    let desc = stdout_of(spendbook(&dir).args(["list", "--sort", "date", "--desc"]));
    assert!(desc.find("Milk 1L").unwrap() < desc.find("Petrol").unwrap());

    let found = stdout_of(spendbook(&dir).args(["list", "--search", "MILK"]));
    assert!(found.contains("Milk 2L") && found.contains("Milk 1L"));
    assert!(!found.contains("Petrol"));

    let period = stdout_of(spendbook(&dir).args(["list", "--from", "2024-01-01", "--to", "2024-01-05"]));
    assert!(period.contains("Milk 2L") && period.contains("Petrol"));
    assert!(!period.contains("Milk 1L"));

    let category = stdout_of(spendbook(&dir).args(["list", "--category", "Transport"]));
    assert!(category.contains("Petrol"));
    assert!(!category.contains("Milk"));
}

#[test]
fn export_writes_report() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Milk", "1.5", "Food", "2024-01-05");

    spendbook(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Report saved to"));

    let reports: Vec<_> = std::fs::read_dir(dir.path().join("reports"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(reports.len(), 1);

    let name = reports[0].file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("report_") && name.ends_with(".csv"));

    let contents = std::fs::read_to_string(&reports[0]).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Name,Category,Price,Date,Description,,SPENDBOOK EXPENSE REPORT"
    );
    let second = lines.next().unwrap();
    assert!(second.starts_with("Milk,Food,1.5,2024-01-05,,,REPORT OF "));
}

#[test]
fn history_lists_changes() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Milk", "1", "Food", "2024-01-05");

    spendbook(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CREATE Category #1 (Food)")
                .and(predicate::str::contains("CREATE Item #1 (Milk)")),
        );
}
