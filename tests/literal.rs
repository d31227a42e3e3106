use melfront::literal::{parse_int, string_body, unescape, LiteralErr};
use melfront::token::{lookup_ident, TokenKind};

#[test]
fn decimal_and_hex() {
    assert_eq!(parse_int::<i64>("1234"), Ok(1234));
    assert_eq!(parse_int::<i64>("0x1f"), Ok(31));
    assert_eq!(parse_int::<u32>("0xDEADBEEF"), Ok(0xDEAD_BEEF));
}

#[test]
fn width_is_chosen_by_caller() {
    assert_eq!(parse_int::<u8>("255"), Ok(255));
    assert_eq!(parse_int::<u8>("256"), Err(LiteralErr::InvalidInteger("256".into())));
}

#[test]
fn signs_are_not_part_of_numerals() {
    for lit in ["+7", "-7", "0x-1", "0x+f", "+0x1"] {
        assert_eq!(parse_int::<i64>(lit), Err(LiteralErr::InvalidInteger(lit.into())), "{lit}");
    }
}

#[test]
fn bare_hex_prefix_is_invalid() {
    assert!(parse_int::<i64>("0x").is_err());
}

#[test]
fn unescaping() {
    assert_eq!(unescape(r#"a\tb\nc"#), "a\tb\nc");
    assert_eq!(unescape(r#"\"q\" \\ \z"#), "\"q\" \\ z");
    assert_eq!(unescape("end\\"), "end\\");
}

#[test]
fn string_bodies() {
    assert_eq!(string_body(r#""abc""#), "abc");
    assert_eq!(string_body(r#""""#), "");
    assert_eq!(string_body(r#""\"""#), r#"\""#);
    // Truncated input: no closing quote.
    assert_eq!(string_body(r#""abc"#), "abc");
    assert_eq!(string_body(r#""a\"#), r#"a\"#);
}

#[test]
fn error_messages() {
    let err = LiteralErr::InvalidInteger("0x".into());
    assert_eq!(err.to_string(), "'0x' is not a representable integer.");
}

#[test]
fn keyword_lookup() {
    assert_eq!(lookup_ident("while"), TokenKind::While);
    assert_eq!(lookup_ident("vector"), TokenKind::VectorDec);
    assert_eq!(lookup_ident("While"), TokenKind::Ident);
    assert!(TokenKind::Proc.is_keyword());
    assert!(!TokenKind::Ident.is_keyword());
}

#[test]
fn kind_display() {
    assert_eq!(TokenKind::LTensor.to_string(), "<<");
    assert_eq!(TokenKind::StringDec.to_string(), "string");
    assert_eq!(TokenKind::Eof.to_string(), "end of input");
    assert_eq!(TokenKind::StringData.to_string(), "string literal");
}

#[test]
fn every_keyword_displays_as_its_text() {
    for word in [
        "string", "int", "float", "vector", "matrix", "global", "proc", "return", "if", "else",
        "for", "in", "while", "do", "switch", "case", "default", "break", "continue", "true",
        "false",
    ] {
        let kind = lookup_ident(word);
        assert!(kind.is_keyword(), "{word}");
        assert_eq!(kind.to_string(), word);
    }
}
