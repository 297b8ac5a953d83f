/// Carriage return, the terminator of every encoded line.
pub const CR: u8 = 0x0D;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Word(Word),
    Whitespace(String),
    Text(String),
    Return,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Word(s) => write!(f, "{}", s),
            Whitespace(s) => write!(f, "{}", s),
            Text(s) => write!(f, "{}", s),
            Return => Ok(()),
        }
    }
}

/// Keywords the ROM stores as a single byte.
///
/// Several keywords share a code; the ROM tells them apart by
/// where they appear in a statement.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Abs,
    Cls,
    Color,
    End,
    Gokey,
    Gosub,
    Goto,
    Hit,
    If,
    Input,
    Key,
    Let,
    List,
    Load,
    Mem,
    New,
    Print1,
    Print2,
    Rem,
    Return,
    Rnd,
    Run,
    Save,
    Show,
    Ti,
    Tvoff,
    Tvon,
}

impl Word {
    /// Whole-token match, `s` must already be uppercase.
    pub fn from_string(s: &str) -> Option<Word> {
        use Word::*;
        let word = match s {
            "?" => Print2,
            "ABS" => Abs,
            "CLS" => Cls,
            "COLOR" => Color,
            "END" => End,
            "GOKEY" => Gokey,
            "GOSUB" => Gosub,
            "GOTO" => Goto,
            "HIT" => Hit,
            "IF" => If,
            "INPUT" => Input,
            "KEY" => Key,
            "LET" => Let,
            "LIST" => List,
            "LOAD" => Load,
            "MEM" => Mem,
            "NEW" => New,
            "PRINT" => Print1,
            "REM" => Rem,
            "RETURN" => Return,
            "RND" => Rnd,
            "RUN" => Run,
            "SAVE" => Save,
            "SHOW" => Show,
            "TI" => Ti,
            "TVOFF" => Tvoff,
            "TVON" => Tvon,
            _ => return None,
        };
        Some(word)
    }

    pub fn code(&self) -> u8 {
        use Word::*;
        match self {
            Goto | Mem => 0x80,
            Gosub => 0x82,
            Gokey => 0x84,
            If => 0x86,
            Print1 | Print2 => 0x88,
            Run | Ti => 0x8A,
            Rem => 0x8C,
            Key | Return => 0x8E,
            Let => 0x90,
            New => 0x92,
            End | Hit => 0x94,
            Input => 0x96,
            Rnd | Save => 0x98,
            Show => 0x9A,
            Abs | Cls => 0x9C,
            List => 0x9E,
            Load => 0xA0,
            Tvon => 0xA2,
            Color => 0xA4,
            Tvoff => 0xA6,
        }
    }
}

/// Mnemonic code for a token, ignoring case.
pub fn lookup(token: &str) -> Option<u8> {
    Word::from_string(&token.to_ascii_uppercase()).map(|w| w.code())
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Abs => write!(f, "ABS"),
            Cls => write!(f, "CLS"),
            Color => write!(f, "COLOR"),
            End => write!(f, "END"),
            Gokey => write!(f, "GOKEY"),
            Gosub => write!(f, "GOSUB"),
            Goto => write!(f, "GOTO"),
            Hit => write!(f, "HIT"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Key => write!(f, "KEY"),
            Let => write!(f, "LET"),
            List => write!(f, "LIST"),
            Load => write!(f, "LOAD"),
            Mem => write!(f, "MEM"),
            New => write!(f, "NEW"),
            Print1 => write!(f, "PRINT"),
            Print2 => write!(f, "?"),
            Rem => write!(f, "REM"),
            Return => write!(f, "RETURN"),
            Rnd => write!(f, "RND"),
            Run => write!(f, "RUN"),
            Save => write!(f, "SAVE"),
            Show => write!(f, "SHOW"),
            Ti => write!(f, "TI"),
            Tvoff => write!(f, "TVOFF"),
            Tvon => write!(f, "TVON"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let t = Word::from_string("REM");
        assert_eq!(t, Some(Word::Rem));
        let t = Word::from_string("PICKLES");
        assert_eq!(t, None);
        let t = Word::from_string("THEN");
        assert_eq!(t, None);
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(lookup("print"), Some(0x88));
        assert_eq!(lookup("Goto"), Some(0x80));
        assert_eq!(lookup("?"), Some(0x88));
        assert_eq!(lookup("tvoff"), Some(0xA6));
    }

    #[test]
    fn test_lookup_whole_token_only() {
        assert_eq!(lookup("PRINTX"), None);
        assert_eq!(lookup("PRIN"), None);
        assert_eq!(lookup("GO"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_display_round_trips() {
        for s in &[
            "?", "ABS", "CLS", "COLOR", "END", "GOKEY", "GOSUB", "GOTO", "HIT", "IF", "INPUT",
            "KEY", "LET", "LIST", "LOAD", "MEM", "NEW", "PRINT", "REM", "RETURN", "RND", "RUN",
            "SAVE", "SHOW", "TI", "TVOFF", "TVON",
        ] {
            let word = Word::from_string(s).unwrap();
            assert_eq!(&word.to_string(), s);
        }
    }

    #[test]
    fn test_shared_codes() {
        assert_eq!(lookup("ABS"), lookup("CLS"));
        assert_eq!(lookup("END"), Some(0x94));
        assert_eq!(lookup("HIT"), Some(0x94));
        assert_eq!(lookup("KEY"), lookup("RETURN"));
        assert_eq!(lookup("RND"), lookup("SAVE"));
        assert_eq!(lookup("RUN"), lookup("TI"));
        assert_eq!(lookup("GOTO"), lookup("MEM"));
    }
}
