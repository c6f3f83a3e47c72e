/*!
 * Tests for the GitHub content codec
 */

use transcheck::errors::VcsError;
use transcheck::vcs::github::decode_content;

/// Test decoding of a plain base64 payload
#[test]
fn test_decode_content_withPlainPayload_shouldDecode() {
    assert_eq!(decode_content("aG9sYQ==").unwrap(), "hola");
}

/// Test that newlines wrapped into the payload by the contents API are
/// stripped before decoding
#[test]
fn test_decode_content_withNewlineWrappedPayload_shouldStripAndDecode() {
    let wrapped = "KGNhdCk9KGdh\ndG8pCmhvbGEg\nbXVuZG8K\n";

    assert_eq!(
        decode_content(wrapped).unwrap(),
        "(cat)=(gato)\nhola mundo\n"
    );
}

/// Test that other whitespace inside the payload is tolerated too
#[test]
fn test_decode_content_withSpacesInPayload_shouldStripAndDecode() {
    assert_eq!(decode_content("aG9s YQ==").unwrap(), "hola");
}

/// Test that an empty payload decodes to empty content
#[test]
fn test_decode_content_withEmptyPayload_shouldReturnEmpty() {
    assert_eq!(decode_content("").unwrap(), "");
}

/// Test that invalid base64 is a decode error
#[test]
fn test_decode_content_withInvalidBase64_shouldFail() {
    let err = decode_content("not-base64!!!").unwrap_err();
    match err {
        VcsError::DecodeError(message) => assert!(message.contains("Invalid base64")),
        other => panic!("Unexpected error variant: {:?}", other),
    }
}

/// Test that a payload decoding to invalid UTF-8 is a decode error
#[test]
fn test_decode_content_withNonUtf8Bytes_shouldFail() {
    // 0xFF 0xFE is not valid UTF-8
    let err = decode_content("//4=").unwrap_err();
    match err {
        VcsError::DecodeError(message) => assert!(message.contains("not valid UTF-8")),
        other => panic!("Unexpected error variant: {:?}", other),
    }
}
