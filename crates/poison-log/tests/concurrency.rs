//! Multi-threaded logging through one shared logger

use std::sync::Arc;
use std::thread;

use poison_log::{log_error, log_template, FileSink, Logger, MemorySink, Severity};

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 50;

fn spawn_writers(logger: &Arc<Logger>) {
    let handles: Vec<_> = (0..THREADS)
        .map(|id| {
            let logger = Arc::clone(logger);
            thread::spawn(move || {
                for n in 0..LINES_PER_THREAD {
                    if n % 2 == 0 {
                        log_error!(logger, "thread {} line {} {}", id, n, "x".repeat(64));
                    } else {
                        log_template!(logger, Severity::Warning, "thread %1% line %2% %3%", id, n, "y".repeat(64))
                            .unwrap();
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

fn assert_complete_lines(lines: &[String]) {
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);
    for line in lines {
        let (_, rest) = line.split_once(" [ ").expect("tag bracket");
        let (tag, message) = rest.split_once("] ").expect("closing bracket");
        assert!(tag == "E" || tag == "W", "unexpected tag in {line:?}");
        let words: Vec<&str> = message.split(' ').collect();
        assert_eq!(words.len(), 5, "torn line {line:?}");
        assert_eq!(words[0], "thread");
        assert_eq!(words[4].len(), 64);
    }
}

#[test]
fn synchronized_memory_sink_keeps_every_line() {
    let sink = Arc::new(MemorySink::new());
    let logger = Arc::new(
        Logger::builder()
            .sink(sink.clone())
            .synchronized(true)
            .build(),
    );

    spawn_writers(&logger);

    assert_complete_lines(&sink.lines());
}

#[test]
fn synchronized_file_sink_has_no_torn_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("threads.log");
    let logger = Arc::new(
        Logger::builder()
            .sink(Arc::new(FileSink::open(&path).unwrap()))
            .synchronized(true)
            .build(),
    );

    spawn_writers(&logger);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.ends_with('\n'));
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    assert_complete_lines(&lines);
}

#[test]
fn threshold_change_is_seen_by_other_threads() {
    let sink = Arc::new(MemorySink::new());
    let logger = Arc::new(Logger::builder().sink(sink.clone()).build());

    logger.set_threshold(Severity::None);
    let worker = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || log_error!(logger, "silenced"))
    };
    worker.join().unwrap();
    assert!(sink.is_empty());

    logger.set_threshold(Severity::Error);
    let worker = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || log_error!(logger, "heard"))
    };
    worker.join().unwrap();
    assert_eq!(sink.len(), 1);
    assert!(sink.lines()[0].ends_with("[ E] heard"));
}
