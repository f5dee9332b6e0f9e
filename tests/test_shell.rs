//! Headless tests for the interactive shell.

mod mocks;

use contact_book::repositories::RecordRepository;
use contact_book::{shell, CommandRouter, ConsoleRenderer, Directory, ShellError};
use mocks::MockRecordRepository;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::AsyncWrite;

async fn run_session(input: &str, repo: &MockRecordRepository) -> (String, CommandRouter) {
    run_session_bytes(input.as_bytes(), repo).await
}

async fn run_session_bytes(input: &[u8], repo: &MockRecordRepository) -> (String, CommandRouter) {
    let directory = repo.load().await.unwrap();
    let mut router = CommandRouter::new(directory, Box::new(ConsoleRenderer), 7);
    let mut output = Vec::new();

    shell::run(input, &mut output, &mut router, repo).await.unwrap();

    (String::from_utf8(output).unwrap(), router)
}

/// Console that breaks as soon as a confirmation is printed.
struct BrokenConsole;

impl AsyncWrite for BrokenConsole {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        if buf.windows(5).any(|w| w == b"added") {
            Poll::Ready(Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed")))
        } else {
            Poll::Ready(Ok(buf.len()))
        }
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

#[tokio::test]
async fn test_session_saves_on_exit() {
    let repo = MockRecordRepository::new();
    let input = "hello\nadd Ann 1234567890\nphone Ann\nexit\nadd Bob 1111111111\n";

    let (output, router) = run_session(input, &repo).await;

    assert!(output.starts_with(shell::WELCOME));
    assert!(output.contains("Starting with an empty contact book."));
    assert!(output.contains("How can I help you?"));
    assert!(output.contains("Record for Ann added."));
    assert!(output.contains("Name: Ann, Phones: 1234567890"));
    assert!(output.trim_end().ends_with("Good bye!"));

    // Nothing after exit is read
    assert!(router.directory().find("Bob").is_none());

    assert_eq!(repo.get_call_count("save"), 1);
    let saved = repo.saved().unwrap();
    assert_eq!(saved.len(), 1);
    assert!(saved.find("Ann").is_some());
}

#[tokio::test]
async fn test_session_saves_on_end_of_input() {
    let repo = MockRecordRepository::new();

    let (output, _) = run_session("add Ann 1234567890\n", &repo).await;

    assert!(output.contains("Contact book saved."));
    assert!(!output.contains("Good bye!"));
    assert_eq!(repo.get_call_count("save"), 1);
    assert!(repo.saved().unwrap().find("Ann").is_some());
}

#[tokio::test]
async fn test_errors_do_not_end_session() {
    let repo = MockRecordRepository::new();
    let input = "dance\nadd Ann 123\nphone Nobody\nchange Ann\n\nadd Ann 1234567890\nclose\n";

    let (output, router) = run_session(input, &repo).await;

    assert!(output.contains("Unknown command: dance"));
    assert!(output.contains("must contain exactly 10 digits"));
    assert!(output.contains("Contact not found: Nobody"));
    assert!(output.contains("Wrong number of arguments for 'change'"));
    assert!(output.contains("Record for Ann added."));
    assert_eq!(router.directory().len(), 1);
}

#[tokio::test]
async fn test_session_starts_from_loaded_state() {
    let mut directory = Directory::new();
    directory.add_record("Ann", &["1234567890"], None).unwrap();
    let repo = MockRecordRepository::with_directory(directory);

    let (output, _) = run_session("all\nremove Ann\nexit\n", &repo).await;

    assert!(output.contains("Loaded 1 contacts."));
    assert!(output.contains("Name: Ann, Phones: 1234567890"));
    assert!(output.contains("Record for Ann removed."));
    assert!(repo.saved().unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_save_is_reported() {
    let repo = MockRecordRepository::new();
    repo.fail_saves();

    let mut router = CommandRouter::new(Directory::new(), Box::new(ConsoleRenderer), 7);
    let mut output = Vec::new();
    let result = shell::run("exit\n".as_bytes(), &mut output, &mut router, &repo).await;

    assert!(matches!(result, Err(ShellError::Storage(_))));
}

#[tokio::test]
async fn test_invalid_utf8_line_is_rejected() {
    let repo = MockRecordRepository::new();
    let input = b"add Ann 1234567890\nadd \xff\xfe 1111111111\nadd Bob 0987654321\nexit\n";

    let (output, router) = run_session_bytes(input, &repo).await;

    assert!(output.contains("Input is not valid UTF-8, command ignored"));
    assert!(output.contains("Record for Bob added."));
    assert!(output.trim_end().ends_with("Good bye!"));
    assert_eq!(router.directory().len(), 2);

    assert_eq!(repo.get_call_count("save"), 1);
    let saved = repo.saved().unwrap();
    assert!(saved.find("Ann").is_some());
    assert!(saved.find("Bob").is_some());
}

#[tokio::test]
async fn test_console_failure_still_saves() {
    let repo = MockRecordRepository::new();
    let mut router = CommandRouter::new(Directory::new(), Box::new(ConsoleRenderer), 7);

    let result = shell::run(
        "add Ann 1234567890\nexit\n".as_bytes(),
        BrokenConsole,
        &mut router,
        &repo,
    )
    .await;

    assert!(matches!(result, Err(ShellError::Io(_))));
    assert_eq!(repo.get_call_count("save"), 1);
    assert!(repo.saved().unwrap().find("Ann").is_some());
}
