use super::*;

#[test]
fn test_invalid_argument_populates_name_and_message() {
    let err = NicetiesError::invalid_argument("text", "must not be blank");
    match err {
        NicetiesError::InvalidArgument { name, ref message } => {
            assert_eq!(name, "text");
            assert_eq!(message, "must not be blank");
        }
        other => panic!("expected invalid argument error, got {other:?}"),
    }
}

#[test]
fn test_invalid_argument_display_names_the_argument() {
    let err = NicetiesError::invalid_argument("delimiter", "must not be empty");
    assert_eq!(
        err.to_string(),
        "Invalid argument `delimiter`: must not be empty"
    );
}

#[test]
fn test_out_of_range_display_names_the_argument() {
    let err = NicetiesError::out_of_range("decimals", "must be at least 1 and no bigger than 28");
    assert_eq!(
        err.to_string(),
        "Argument `decimals` out of range: must be at least 1 and no bigger than 28"
    );
}

#[test]
fn test_io_error_wraps_path_and_source() {
    let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err = NicetiesError::io("/tmp/example.bin", source);
    match err {
        NicetiesError::Io { ref path, ref source } => {
            assert_eq!(path, std::path::Path::new("/tmp/example.bin"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn test_io_error_exposes_source_chain() {
    use std::error::Error as _;

    let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = NicetiesError::io("/tmp/secret.bin", source);
    assert!(err.source().is_some());
}
