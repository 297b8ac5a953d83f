use elf::lang::{Block, Program};

fn block(s: &str) -> Block {
    Program::new(s).unwrap().block().unwrap()
}

fn checksum_holds(block: &Block) -> bool {
    let sum = block.as_bytes()[2..]
        .iter()
        .fold(0u16, |t, b| t.wrapping_add(*b as u16));
    sum == block.checksum()
}

#[test]
fn test_end_to_end_single_line() {
    let b = block("10 END\n");
    assert_eq!(
        b.as_bytes(),
        &[0x00, 0xBC, 0x00, 0x0F, 0, 0, 0, 0, 0, 0, 0x00, 0x0A, 0x02, 0x94, 0x0D]
    );
    assert_eq!(b.checksum(), 0x00BC);
    assert_eq!(b.total_len(), 15);
}

#[test]
fn test_keeps_file_order() {
    let b = block("20 GOTO 10\n10 PRINT 1\n");
    let bytes = b.as_bytes();
    assert_eq!(&bytes[10..12], &[0x00, 0x14]);
    assert_eq!(bytes[13], 0x80);
    let second = 10 + 3 + bytes[12] as usize;
    assert_eq!(&bytes[second..second + 2], &[0x00, 0x0A]);
    assert_eq!(bytes[second + 3], 0x88);
}

#[test]
fn test_unnumbered_lines_skipped() {
    let with = block("REM HEADER\n10 END\n\nGARBAGE 20\n");
    let without = block("10 END\n");
    assert_eq!(with, without);
}

#[test]
fn test_invariants() {
    for s in &[
        "",
        "10 END",
        "10 PRINT \"HELLO WORLD\"\n20 GOTO 10\n",
        "5 REM\n10 INPUT A\n20 IF A GOTO 40\n30 LET B = RND(9)\n40 CLS\n50 RETURN\n",
        "1 TVON\n2 COLOR 7\n3 TVOFF\n4 SHOW 1,2\n5 GOKEY\n6 KEY\n7 HIT\n8 MEM\n9 TI\n",
    ] {
        let b = block(s);
        assert!(checksum_holds(&b), "{}", s);
        assert_eq!(b.len(), b.total_len() as usize, "{}", s);
    }
}

#[test]
fn test_checksum_wraps() {
    let text: String = (1..=60)
        .map(|n| format!("{} REM {}\n", n, "~".repeat(200)))
        .collect();
    let b = block(&text);
    let big: u32 = b.as_bytes()[2..].iter().map(|b| *b as u32).sum();
    assert!(big > 0xFFFF);
    assert_eq!(b.checksum() as u32, big % 0x10000);
}

#[test]
fn test_program_too_large() {
    let text: String = (1..=300)
        .map(|n| format!("{} REM {}\n", n, "X".repeat(250)))
        .collect();
    let e = Program::new(&text).unwrap().block().unwrap_err();
    assert!(e.to_string().starts_with("OUT OF MEMORY"));
}

#[test]
fn test_hello() {
    let b = block("10 PRINT \"HI\"\n");
    assert_eq!(
        &b.as_bytes()[10..],
        &[0x00, 0x0A, 0x06, 0x88, b'"', b'H', b'I', b'"', 0x0D]
    );
    assert_eq!(b.total_len(), 19);
}
