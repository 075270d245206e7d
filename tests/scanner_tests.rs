use monkey_lex::{tokenize, Scanner, Token, TokenKind};
use rstest::rstest;

use TokenKind::*;

fn pairs(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .into_iter()
        .map(|t| (t.kind, t.literal.to_string()))
        .collect()
}

fn expected(tokens: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    tokens.iter().map(|(k, l)| (*k, l.to_string())).collect()
}

#[rstest]
#[case("+", &[(Plus, "+"), (Eof, "")])]
#[case("==", &[(Equal, "=="), (Eof, "")])]
#[case(
    "let five = 5;",
    &[(Let, "let"), (Ident, "five"), (Assign, "="), (Int, "5"), (Semicolon, ";"), (Eof, "")]
)]
#[case("10 != 9", &[(Int, "10"), (NotEqual, "!="), (Int, "9"), (Eof, "")])]
#[case("", &[(Eof, "")])]
#[case("@", &[(Illegal, "@"), (Eof, "")])]
#[case("= =", &[(Assign, "="), (Assign, "="), (Eof, "")])]
#[case("!!=", &[(Bang, "!"), (NotEqual, "!="), (Eof, "")])]
#[case("===", &[(Equal, "=="), (Assign, "="), (Eof, "")])]
#[case("-5", &[(Minus, "-"), (Int, "5"), (Eof, "")])]
#[case("3.14", &[(Int, "3"), (Illegal, "."), (Int, "14"), (Eof, "")])]
#[case("\"hi\"", &[(Illegal, "\""), (Ident, "hi"), (Illegal, "\""), (Eof, "")])]
#[case("<=", &[(Lt, "<"), (Assign, "="), (Eof, "")])]
#[case(" \t\r\n ", &[(Eof, "")])]
fn scans_scenario(#[case] source: &str, #[case] tokens: &[(TokenKind, &str)]) {
    assert_eq!(pairs(source), expected(tokens), "source: {source:?}");
}

#[rstest]
#[case(";", Semicolon)]
#[case("(", LParen)]
#[case(")", RParen)]
#[case(",", Comma)]
#[case("+", Plus)]
#[case("{", LBrace)]
#[case("}", RBrace)]
#[case("-", Minus)]
#[case("/", Slash)]
#[case("*", Asterisk)]
#[case("<", Lt)]
#[case(">", Gt)]
#[case("=", Assign)]
#[case("!", Bang)]
fn single_character_punctuation(#[case] source: &str, #[case] kind: TokenKind) {
    let mut scanner = Scanner::new(source);
    assert_eq!(scanner.next_token(), Token::new(kind, source));
    assert_eq!(scanner.next_token(), Token::eof());
}

#[rstest]
#[case("fn", Function)]
#[case("let", Let)]
#[case("true", True)]
#[case("false", False)]
#[case("if", If)]
#[case("else", Else)]
#[case("return", Return)]
#[case("lets", Ident)]
#[case("Fn", Ident)]
#[case("_if", Ident)]
fn keyword_or_identifier(#[case] word: &str, #[case] kind: TokenKind) {
    assert_eq!(tokenize(word), [Token::new(kind, word), Token::eof()]);
}

#[test]
fn scans_full_program() {
    let source = include_str!("../fixtures/program.mk");

    let want = expected(&[
        (Let, "let"),
        (Ident, "five"),
        (Assign, "="),
        (Int, "5"),
        (Semicolon, ";"),
        (Let, "let"),
        (Ident, "ten"),
        (Assign, "="),
        (Int, "10"),
        (Semicolon, ";"),
        (Let, "let"),
        (Ident, "add"),
        (Assign, "="),
        (Function, "fn"),
        (LParen, "("),
        (Ident, "x"),
        (Comma, ","),
        (Ident, "y"),
        (RParen, ")"),
        (LBrace, "{"),
        (Ident, "x"),
        (Plus, "+"),
        (Ident, "y"),
        (Semicolon, ";"),
        (RBrace, "}"),
        (Semicolon, ";"),
        (Let, "let"),
        (Ident, "result"),
        (Assign, "="),
        (Ident, "add"),
        (LParen, "("),
        (Ident, "five"),
        (Comma, ","),
        (Ident, "ten"),
        (RParen, ")"),
        (Semicolon, ";"),
        (Bang, "!"),
        (Minus, "-"),
        (Slash, "/"),
        (Asterisk, "*"),
        (Int, "5"),
        (Semicolon, ";"),
        (Int, "5"),
        (Lt, "<"),
        (Int, "10"),
        (Gt, ">"),
        (Int, "5"),
        (Semicolon, ";"),
        (If, "if"),
        (LParen, "("),
        (Int, "5"),
        (Lt, "<"),
        (Int, "10"),
        (RParen, ")"),
        (LBrace, "{"),
        (Return, "return"),
        (True, "true"),
        (Semicolon, ";"),
        (RBrace, "}"),
        (Else, "else"),
        (LBrace, "{"),
        (Return, "return"),
        (False, "false"),
        (Semicolon, ";"),
        (RBrace, "}"),
        (Int, "10"),
        (Equal, "=="),
        (Int, "10"),
        (Semicolon, ";"),
        (Int, "10"),
        (NotEqual, "!="),
        (Int, "9"),
        (Semicolon, ";"),
        (Eof, ""),
    ]);

    let got = pairs(source);
    for (i, (g, w)) in got.iter().zip(&want).enumerate() {
        assert_eq!(g, w, "token {i}");
    }
    assert_eq!(got.len(), want.len());
}

#[test]
fn program_spans_point_back_into_source() {
    let source = include_str!("../fixtures/program.mk");

    for lexeme in Scanner::new(source) {
        assert_eq!(
            &source[lexeme.span.range.clone()],
            lexeme.token.literal.as_str()
        );
    }
}

#[test]
fn program_lines_are_tracked() {
    let source = include_str!("../fixtures/program.mk");
    let lexemes = Scanner::new(source).scan();

    let first_if = lexemes
        .iter()
        .find(|l| l.token.kind == If)
        .expect("program has an if");
    assert_eq!(first_if.span.line, 13);

    let first_not_equal = lexemes
        .iter()
        .find(|l| l.token.kind == NotEqual)
        .expect("program has !=");
    assert_eq!(first_not_equal.span.line, 20);
}
