//! Edge case tests for calf-lex

#[cfg(test)]
mod tests {
    use crate::{lex_str, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        lex_str(source)
            .collect::<Result<Vec<_>, _>>()
            .unwrap_or_else(|e| panic!("lexing {source:?} failed: {e}"))
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_symbol() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Symbol);
        assert_eq!(t[0].text, "x");
    }

    #[test]
    fn test_edge_long_symbol() {
        let name = "a".repeat(10_000);
        let t = lex_all(&name);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].text, name);
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = lex_all("((()))");
        assert_eq!(
            t.iter().filter(|x| x.kind == TokenKind::ParenLeft).count(),
            3
        );
        assert_eq!(
            t.iter().filter(|x| x.kind == TokenKind::ParenRight).count(),
            3
        );
    }

    #[test]
    fn test_edge_all_delimiters_adjacent() {
        let kinds: Vec<TokenKind> = lex_all("()[]{}").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::ParenLeft,
                TokenKind::ParenRight,
                TokenKind::BracketLeft,
                TokenKind::BracketRight,
                TokenKind::BraceLeft,
                TokenKind::BraceRight,
            ]
        );
    }

    #[test]
    fn test_edge_markers_bind_to_nothing_lexically() {
        let kinds: Vec<TokenKind> = lex_all("'^#").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::SingleQuote,
                TokenKind::Meta,
                TokenKind::MacroDispatch,
            ]
        );
    }

    #[test]
    fn test_edge_comment_without_newline() {
        let t = lex_all("; trailing");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Comment);
    }

    #[test]
    fn test_edge_comment_swallows_one_line_break() {
        let t = lex_all("; a\r\nx");
        assert_eq!(t[0].kind, TokenKind::Comment);
        assert_eq!(t[0].text, "; a\r\n");
        assert_eq!(t[1].kind, TokenKind::Symbol);
        assert_eq!(t[1].start.line, 2);
    }

    #[test]
    fn test_edge_commas_are_whitespace() {
        let kinds: Vec<TokenKind> = lex_all("1,2").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Integer, TokenKind::Whitespace, TokenKind::Integer]
        );
    }

    #[test]
    fn test_edge_six_quotes_is_one_empty_triple() {
        let t = lex_all("\"\"\"\"\"\"");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::String);
    }

    #[test]
    fn test_edge_string_with_embedded_quote_pairs() {
        let raw = "\"\"\"foo \"\" bar\"\"\"";
        let t = lex_all(raw);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].text, raw);
    }

    #[test]
    fn test_edge_closed_triple_then_quote_splits() {
        let t = lex_all("\"\"\"a\"\"\"\"b\"");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].text, "\"\"\"a\"\"\"");
        assert_eq!(t[1].text, "\"b\"");
    }

    #[test]
    fn test_edge_escaped_quote_does_not_close() {
        let t = lex_all("\"a\\\" b\"");
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_edge_keyword_colon_only() {
        let t = lex_all(":");
        assert_eq!(t[0].kind, TokenKind::Keyword);
    }

    #[test]
    fn test_edge_double_colon_is_two_keywords() {
        let t = lex_all("::");
        assert_eq!(t.len(), 2);
        assert!(t.iter().all(|x| x.kind == TokenKind::Keyword));
    }

    #[test]
    fn test_edge_exponent_without_digits_lexes() {
        // The permissive float shape admits this; the parser's number
        // transform rejects it.
        let t = lex_all("5e");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Float);
    }

    #[test]
    fn test_edge_dot_alone_is_symbol() {
        let t = lex_all(".");
        assert_eq!(t[0].kind, TokenKind::Symbol);
    }

    #[test]
    fn test_edge_leading_zeros() {
        let t = lex_all("007");
        assert_eq!(t[0].kind, TokenKind::Integer);
        assert_eq!(t[0].text, "007");
    }

    #[test]
    fn test_edge_offsets_strictly_monotonic() {
        let t = lex_all("(a [b] {c 1} \"s\" :k 'q)");
        for pair in t.windows(2) {
            assert!(pair[0].start.offset < pair[1].start.offset);
        }
    }
}
