use super::*;

#[test]
fn test_lf() {
    let p = Program::new("10 END\n20 END\n").unwrap();
    assert_eq!(p.lines().len(), 2);
}

#[test]
fn test_crlf() {
    let p = Program::new("10 END\r\n").unwrap();
    assert_eq!(p.lines()[0].encode().unwrap(), [0x00, 0x0A, 0x02, 0x94, 0x0D]);
}

#[test]
fn test_print_keyword() {
    assert_eq!(encode("10 PRINT"), [0x00, 0x0A, 0x02, 0x88, 0x0D]);
}

#[test]
fn test_question_mark_is_print() {
    assert_eq!(encode("10 ? 1"), [0x00, 0x0A, 0x03, 0x88, b'1', 0x0D]);
}

#[test]
fn test_lowercase_keyword() {
    assert_eq!(encode("10 goto 20"), [0x00, 0x0A, 0x04, 0x80, b'2', b'0', 0x0D]);
}

#[test]
fn test_text_uppercased() {
    assert_eq!(
        encode("10 a=b"),
        [0x00, 0x0A, 0x04, b'A', b'=', b'B', 0x0D]
    );
}

#[test]
fn test_lowercase_listing_matches_uppercase() {
    let lower = Program::new("10 print \"hi\"\n20 a=b\n").unwrap();
    let upper = Program::new("10 PRINT \"HI\"\n20 A=B\n").unwrap();
    assert_eq!(
        lower.block().unwrap().as_bytes(),
        upper.block().unwrap().as_bytes()
    );
}

#[test]
fn test_space_after_leading_keyword_elided_once() {
    // one blank of the run goes, the other stays
    assert_eq!(
        encode("10 GOTO  20"),
        [0x00, 0x0A, 0x05, 0x80, b' ', b'2', b'0', 0x0D]
    );
}

#[test]
fn test_space_kept_without_leading_keyword() {
    assert_eq!(
        encode("10 A PRINT"),
        [0x00, 0x0A, 0x04, b'A', b' ', 0x88, 0x0D]
    );
}

#[test]
fn test_later_spaces_kept() {
    assert_eq!(
        encode("10 IF A GOTO 5"),
        [0x00, 0x0A, 0x07, 0x86, b'A', b' ', 0x80, b' ', b'5', 0x0D]
    );
}

#[test]
fn test_tab_after_keyword_is_not_elided() {
    assert_eq!(
        encode("10 END\t"),
        [0x00, 0x0A, 0x03, 0x94, b'\t', 0x0D]
    );
}

#[test]
fn test_keyword_glued_to_text_is_spelled() {
    assert_eq!(
        encode("10 PRINT\"HI\""),
        [0x00, 0x0A, 0x0A, b'P', b'R', b'I', b'N', b'T', b'"', b'H', b'I', b'"', 0x0D]
    );
}

#[test]
fn test_then_is_spelled() {
    assert_eq!(
        encode("10 IF X THEN 9"),
        [0x00, 0x0A, 0x0A, 0x86, b'X', b' ', b'T', b'H', b'E', b'N', b' ', b'9', 0x0D]
    );
}

#[test]
fn test_spaces_after_number_stripped() {
    assert_eq!(encode("10    END"), encode("10END"));
    assert_eq!(encode("10END"), [0x00, 0x0A, 0x02, 0x94, 0x0D]);
}

#[test]
fn test_empty_line_body() {
    assert_eq!(encode("300"), [0x01, 0x2C, 0x01, 0x0D]);
}

#[test]
fn test_large_line_number() {
    assert_eq!(encode("65535 END"), [0xFF, 0xFF, 0x02, 0x94, 0x0D]);
}

#[test]
fn test_line_too_long() {
    let s = format!("10 REM {}", "X".repeat(300));
    let e = Line::new(&s).unwrap().unwrap().encode().unwrap_err();
    assert_eq!(e.code(), ErrorCode::LineBufferOverflow as u16);
    assert_eq!(e.line_number(), Some(10));
}

#[test]
fn test_longest_line() {
    // keyword, elided blank, 253 characters and the CR
    let s = format!("10 REM {}", "X".repeat(253));
    let bytes = encode(&s);
    assert_eq!(bytes[2], 0xFF);
    assert_eq!(bytes.len(), 258);
}

#[test]
fn test_error_names_file_line() {
    let e = Program::new("10 END\n\n20 PRINT \"é\"").unwrap_err();
    assert_eq!(e.code(), ErrorCode::InvalidCharacter as u16);
    assert!(e.to_string().contains("IN LINE 3 OF THE FILE"));
}
