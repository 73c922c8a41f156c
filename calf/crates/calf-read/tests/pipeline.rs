//! Whole-pipeline integration tests: lex → parse → read.

use calf_lex::lex_str;
use calf_par::{parse_str, Form, ParseError, Parser};
use calf_read::{read_str, ReadError, Value};

#[test]
fn scenario_list_of_one_integer() {
    // "(1)" → one LIST containing INTEGER 1, spanning offsets 0..2
    let form = parse_str("(1)").next().unwrap().unwrap();
    assert_eq!(form.kind_name(), "LIST");
    assert_eq!(form.start().offset, 0);
    assert_eq!(form.end().unwrap().offset, 2);
    let Form::List(seq) = form else { panic!() };
    assert!(matches!(&seq.forms[0], Form::Int(lit) if lit.value == 1));
}

#[test]
fn scenario_commas_are_whitespace() {
    let form = parse_str("(1, 2, 3, 4)").next().unwrap().unwrap();
    let Form::List(seq) = form else { panic!() };
    let values: Vec<i64> = seq
        .forms
        .iter()
        .map(|f| match f {
            Form::Int(lit) => lit.value,
            other => panic!("expected INTEGER, got {other:?}"),
        })
        .collect();
    assert_eq!(values, vec![1, 2, 3, 4]);
}

#[test]
fn scenario_sqlist_of_keywords_and_integer() {
    let form = parse_str("[:foo :bar 1]").next().unwrap().unwrap();
    assert_eq!(form.kind_name(), "SQLIST");
    let Form::SqList(seq) = form else { panic!() };
    let kinds: Vec<_> = seq.forms.iter().map(Form::kind_name).collect();
    assert_eq!(kinds, vec!["KEYWORD", "KEYWORD", "INTEGER"]);
}

#[test]
fn scenario_dict_pairs() {
    let form = parse_str("{:foo 1, :bar 2}").next().unwrap().unwrap();
    let Form::Dict(dict) = form else { panic!() };
    assert_eq!(dict.pairs.len(), 2);
    let (k, v) = &dict.pairs[0];
    assert_eq!(k.kind_name(), "KEYWORD");
    assert!(matches!(v, Form::Int(lit) if lit.value == 1));
    let (k, v) = &dict.pairs[1];
    assert_eq!(k.kind_name(), "KEYWORD");
    assert!(matches!(v, Form::Int(lit) if lit.value == 2));
}

#[test]
fn scenario_quote_reads_to_quote_list() {
    let value = read_str("'x").next().unwrap().unwrap();
    assert_eq!(
        value,
        Value::List(vec![
            Value::Symbol("quote".to_string()),
            Value::Symbol("x".to_string()),
        ])
    );
}

#[test]
fn scenario_bad_strings() {
    for text in ["\"", "\"foo"] {
        let err = parse_str(text).next().unwrap().unwrap_err();
        assert!(
            matches!(err, ParseError::BadString { .. }),
            "expected BAD_STRING for {text:?}, got {err}"
        );
    }
}

#[test]
fn scenario_nested_list_spans() {
    let form = parse_str("(a (b c) d)").next().unwrap().unwrap();
    let Form::List(outer) = &form else { panic!() };
    let kinds: Vec<_> = outer.forms.iter().map(Form::kind_name).collect();
    assert_eq!(kinds, vec!["SYMBOL", "LIST", "SYMBOL"]);
    let inner = &outer.forms[1];
    assert!(inner.end().unwrap().offset < form.end().unwrap().offset);
}

#[test]
fn scenario_missing_close() {
    let err = parse_str("(").next().unwrap().unwrap_err();
    let ParseError::MissingClose { expected, open } = err else {
        panic!("expected MISSING_CLOSE");
    };
    assert_eq!(expected.name(), "PAREN_RIGHT");
    assert_eq!(open.start.offset, 0);
}

#[test]
fn scenario_unexpected_close() {
    let err = parse_str(")").next().unwrap().unwrap_err();
    let ParseError::UnexpectedClose {
        token,
        matching_open,
    } = err
    else {
        panic!("expected UNEXPECTED_CLOSE");
    };
    assert_eq!(token.start.offset, 0);
    assert!(matching_open.is_none());
}

#[test]
fn scenario_odd_dict() {
    let err = parse_str("{:a}").next().unwrap().unwrap_err();
    assert!(matches!(err, ParseError::OddDict { .. }));
}

#[test]
fn boundary_empty_and_whitespace_inputs() {
    assert!(read_str("").next().is_none());
    assert!(read_str(" \t, ").next().is_none());

    // With discarding off, whitespace-only input is one WHITESPACE form
    let forms: Vec<Form> = Parser::new(lex_str("  "))
        .discard_whitespace(false)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].kind_name(), "WHITESPACE");
}

#[test]
fn reads_every_original_reader_example() {
    for text in [
        "()",
        "[]",
        "[[[[[[[[[]]]]]]]]]",
        "{}()[]",
        "[:foo bar 'baz lo/l, 1, 1.2, 1e-5 -1e2]",
        "\"foo\"",
    ] {
        let values: Result<Vec<Value>, ReadError> = read_str(text).collect();
        assert!(values.is_ok(), "reading {text:?} failed: {values:?}");
    }
}

#[test]
fn lexed_text_reassembles_source() {
    let input = "(def pi 3.14159) ; constant\n{:name \"calf\", :version 1}\n";
    let reassembled: String = lex_str(input)
        .map(|t| t.unwrap().text)
        .collect();
    assert_eq!(reassembled, input);
}

#[test]
fn read_values_render_in_surface_syntax() {
    let rendered: Vec<String> = read_str("(+ 1 2) {:a [1 2]} #tag {}")
        .map(|v| v.unwrap().to_string())
        .collect();
    assert_eq!(rendered, vec!["(+ 1 2)", "{:a (1 2)}", "#tag {}"]);
}

#[test]
fn pipeline_is_pure_and_deterministic() {
    let input = "(a [b {:c 1}] ^:tag d '(e))";
    let first: Vec<Value> = read_str(input).collect::<Result<_, _>>().unwrap();
    let second: Vec<Value> = read_str(input).collect::<Result<_, _>>().unwrap();
    assert_eq!(first, second);
}

#[test]
fn errors_render_with_source_positions() {
    let err = parse_str("(\n  ]").find_map(Result::err).unwrap();
    let message = err.to_string();
    assert!(
        message.starts_with("UNEXPECTED_CLOSE at <buffer>:2:3"),
        "unexpected rendering: {message}"
    );
}
