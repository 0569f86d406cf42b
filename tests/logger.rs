use focusdeck::config::LoggingConfig;
use focusdeck::logger::Logger;

#[test]
fn test_disabled_logger_keeps_memory_buffer() {
    let logger = Logger::from_config(&LoggingConfig::default()).unwrap();
    assert!(!logger.has_file_logging());

    logger.log("Board: loaded 5 tasks".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].ends_with("Board: loaded 5 tasks"));
    assert!(logs[0].starts_with('['));
}

#[test]
fn test_logs_are_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());
    logger.log("third".to_string());

    let logs = logger.get_logs();
    assert!(logs[0].ends_with("third"));
    assert!(logs[2].ends_with("first"));
}

#[test]
fn test_buffer_is_capped() {
    let logger = Logger::new();
    for i in 0..1005 {
        logger.log(format!("entry {}", i));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1000);
    assert!(logs[0].ends_with("entry 1004"));
    assert!(logs[999].ends_with("entry 5"));
}

#[test]
fn test_clones_share_the_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("from clone".to_string());
    assert_eq!(logger.get_logs().len(), 1);

    logger.clear();
    assert!(clone.get_logs().is_empty());
}

#[test]
fn test_log_file_path_is_under_focusdeck() {
    if let Some(path) = Logger::get_log_file_path() {
        assert!(path.ends_with("focusdeck/focusdeck.log"));
    }
}
