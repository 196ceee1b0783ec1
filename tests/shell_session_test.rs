use bookshelf::catalog::{BookStatus, CatalogStore};
use bookshelf::cli::shell::Shell;
use bookshelf::io::BookshelfPaths;
use bookshelf::Result;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

/// Feed `input` to a shell over `data_dir` and capture everything it prints
fn run_session(data_dir: &Path, input: &str) -> (Result<()>, String) {
    let paths = BookshelfPaths::for_data_dir(data_dir);
    let mut shell = Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), paths);
    let result = shell.run();
    let output = String::from_utf8(shell.into_output()).unwrap();
    (result, output)
}

fn reopen(data_dir: &Path, name: &str) -> CatalogStore {
    CatalogStore::open_named(&BookshelfPaths::for_data_dir(data_dir), name).unwrap()
}

#[test]
fn test_leave_immediately() {
    let temp_dir = tempdir().unwrap();
    let (result, output) = run_session(temp_dir.path(), "3\n");

    assert!(result.is_ok());
    assert!(output.contains("Welcome to My Library App"));
    assert!(output.contains("'My Library App' was closed"));
    assert!(fs::read_dir(temp_dir.path()).unwrap().next().is_none());
}

#[test]
fn test_create_library_and_add_book() {
    let temp_dir = tempdir().unwrap();
    let input = "2\nhome\n1\nDune\nHerbert\n1965\n6\n";
    let (result, output) = run_session(temp_dir.path(), input);

    assert!(result.is_ok());
    assert!(output.contains("Start working with library 'home'"));
    assert!(output.contains("The following book was added to the library:"));
    assert!(output.contains("Title: Dune\nAuthor: Herbert\nPublication date: 1965\nStatus: Available\nID: 1"));

    let store = reopen(temp_dir.path(), "home");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_add_validation_messages() {
    let temp_dir = tempdir().unwrap();
    let input = "2\nhome\n\
                 1\n\n\
                 1\nDune\n \n\
                 1\nDune\nHerbert\nabcd\n\
                 1\nDune\nHerbert\n500\n\
                 6\n";
    let (result, output) = run_session(temp_dir.path(), input);

    assert!(result.is_ok());
    assert!(output.contains("Title can not be empty"));
    assert!(output.contains("Author can not be empty"));
    assert!(output.contains("Incorrect year value. Use only digits."));
    assert!(output.contains("Incorrect year value. It must be in range from 868 until"));
    assert!(reopen(temp_dir.path(), "home").is_empty());
}

#[test]
fn test_choose_existing_library_by_name_and_number() {
    let temp_dir = tempdir().unwrap();
    let mut store = reopen(temp_dir.path(), "attic");
    store.add("Emma", "Austen", "1815").unwrap();
    reopen(temp_dir.path(), "office");

    let (result, output) = run_session(temp_dir.path(), "1\nattic\n3\n6\n");
    assert!(result.is_ok());
    assert!(output.contains("Available Libraries\n1. attic\n2. office"));
    assert!(output.contains("'attic' Library Books:"));
    assert!(output.contains("---------------(1)---------------"));
    assert!(output.contains("---------- Total: 1 books ----------"));

    let (result, output) = run_session(temp_dir.path(), "1\n2\n3\n6\n");
    assert!(result.is_ok());
    assert!(output.contains("Start working with library 'office'"));
    assert!(output.contains("There are no books in the library"));
}

#[test]
fn test_unknown_library_closes_app() {
    let temp_dir = tempdir().unwrap();
    reopen(temp_dir.path(), "home");

    let (result, output) = run_session(temp_dir.path(), "1\nwork\n");
    assert!(result.is_ok());
    assert!(output.contains("There is no 'work' library in available libraries list"));
    assert!(output.contains("'My Library App' was closed"));
    assert!(!temp_dir.path().join("work.json").exists());
}

#[test]
fn test_no_libraries_offers_to_create() {
    let temp_dir = tempdir().unwrap();
    let (result, output) = run_session(temp_dir.path(), "1\n2\nfresh\n6\n");

    assert!(result.is_ok());
    assert!(output.contains("There are no available libraries at the moment"));
    assert!(output.contains("Start working with library 'fresh'"));
    assert!(temp_dir.path().join("fresh.json").exists());
}

#[test]
fn test_invalid_library_name_is_asked_again() {
    let temp_dir = tempdir().unwrap();
    let (result, output) = run_session(temp_dir.path(), "2\n\n../up\nok\n6\n");

    assert!(result.is_ok());
    assert!(output.contains("Library name can not be empty"));
    assert!(output.contains("must not start with '.' or contain path separators"));
    assert!(temp_dir.path().join("ok.json").exists());
}

#[test]
fn test_delete_with_confirmation_and_cancel() {
    let temp_dir = tempdir().unwrap();
    let mut store = reopen(temp_dir.path(), "home");
    store.add("Dune", "Herbert", "1965").unwrap();
    store.add("Foundation", "Asimov", "1951").unwrap();

    let input = "1\nhome\n\
                 2\n1\n2\n\
                 2\n2\n1\n\
                 2\n42\n\
                 2\nabc\n\
                 6\n";
    let (result, output) = run_session(temp_dir.path(), input);

    assert!(result.is_ok());
    assert!(output.contains("Are you sure you want to delete book:"));
    assert!(output.contains("The deletion of book with id: 1 was canceled"));
    assert!(output.contains("The book with id: 2 was deleted from the library"));
    assert!(output.contains("Book with id: 42 was not found"));
    assert!(output.contains("Incorrect ID input. ID must be a number."));

    let store = reopen(temp_dir.path(), "home");
    assert!(store.find_by_id(1).is_some());
    assert!(store.find_by_id(2).is_none());
}

#[test]
fn test_search_with_repeat() {
    let temp_dir = tempdir().unwrap();
    let mut store = reopen(temp_dir.path(), "home");
    store.add("Dune", "Herbert", "1965").unwrap();
    store.add("Foundation", "Asimov", "1951").unwrap();

    let input = "1\nhome\n\
                 4\n2\ndune\n1\nnothing\n2\n\
                 4\n1\nAsimov\n2\n\
                 4\n3\n1800\n2\n\
                 4\n4\n\
                 6\n";
    let (result, output) = run_session(temp_dir.path(), input);

    assert!(result.is_ok());
    assert!(output.contains("Title: Dune"));
    assert!(output.contains("Do you want to repeat the search by title?"));
    assert!(output.contains("Title: Foundation"));
    assert_eq!(output.matches("Search result: 0 books").count(), 2);
    assert_eq!(output.matches("Canceling the search...").count(), 4);
}

#[test]
fn test_change_status() {
    let temp_dir = tempdir().unwrap();
    let mut store = reopen(temp_dir.path(), "home");
    store.add("Dune", "Herbert", "1965").unwrap();

    let input = "1\nhome\n5\n1\n2\n5\n1\n9\n6\n";
    let (result, output) = run_session(temp_dir.path(), input);

    assert!(result.is_ok());
    assert!(output.contains("You want to change status for the following book:"));
    assert!(output.contains("The status for book id: 1 was changed to 'Checked out'"));
    assert!(output.contains("Incorrect input"));
    assert_eq!(
        reopen(temp_dir.path(), "home").find_by_id(1).unwrap().status,
        BookStatus::CheckedOut
    );
}

#[test]
fn test_bad_menu_input_is_a_no_op() {
    let temp_dir = tempdir().unwrap();
    let (result, output) = run_session(temp_dir.path(), "x\n9\n2\nhome\nabc\n0\n7\n6\n");

    assert!(result.is_ok());
    assert!(output.contains("You can enter only digits corresponding to the options above"));
    assert!(output.contains("Incorrect input. It must be digit from 1 to 3."));
    assert_eq!(
        output
            .matches("Incorrect input. It must be digit from 1 to 6.")
            .count(),
        3
    );
    assert!(output.ends_with("'My Library App' was closed\n"));
}

#[test]
fn test_non_utf8_input_is_reported_and_ignored() {
    let temp_dir = tempdir().unwrap();
    let mut input = b"2\nhome\n".to_vec();
    input.extend_from_slice(&[0xff, 0xfe, b'\n']);
    input.extend_from_slice(b"6\n");

    let paths = BookshelfPaths::for_data_dir(temp_dir.path());
    let mut shell = Shell::new(Cursor::new(input), Vec::new(), paths);
    let result = shell.run();
    let output = String::from_utf8(shell.into_output()).unwrap();

    assert!(result.is_ok());
    assert!(output.contains("You can enter only digits corresponding to the options above"));
    assert!(output.ends_with("'My Library App' was closed\n"));
}

#[test]
fn test_end_of_input_closes_cleanly() {
    let temp_dir = tempdir().unwrap();
    let (result, output) = run_session(temp_dir.path(), "2\nhome\n1\nDune\n");

    assert!(result.is_ok());
    assert!(output.ends_with("'My Library App' was closed\n"));
    assert!(reopen(temp_dir.path(), "home").is_empty());
}

#[test]
fn test_corrupt_library_fails_the_session() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("home.json"), "not json").unwrap();

    let (result, _output) = run_session(temp_dir.path(), "1\nhome\n");
    assert!(matches!(
        result,
        Err(bookshelf::BookshelfError::Storage { .. })
    ));
}
