use hextuples::consts::XSD_STRING;
use hextuples::{
    HextError, HextuplesParser, LineSource, LiteralKind, Statement, Subject, Term, Warning,
};
use oxigraph::model::{
    BlankNode, Dataset, Graph, GraphName, Literal, NamedNode, Quad, QuadRef, TermRef,
};
use oxigraph::store::Store;

fn iri(s: &str) -> NamedNode {
    NamedNode::new(s).unwrap()
}

fn collect_statements(text: &str) -> Vec<Statement> {
    HextuplesParser::new()
        .statements(LineSource::from(text))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn test_end_to_end_scenario() {
    let text = concat!(
        r#"["http://a","http://b","v","http://www.w3.org/2001/XMLSchema#string","",""]"#,
        "\n",
        r#"["_:b1","http://b","_:b2","localId","",""]"#,
        "\n",
    );
    let mut quads: Vec<Quad> = Vec::new();
    let summary = HextuplesParser::new()
        .parse(LineSource::from(text), &mut quads)
        .unwrap();
    assert_eq!(summary.triples, 2);
    assert_eq!(summary.quads, 0);
    assert!(summary.warnings.is_empty());

    assert_eq!(
        quads,
        vec![
            Quad::new(
                iri("http://a"),
                iri("http://b"),
                Literal::new_typed_literal("v", XSD_STRING),
                GraphName::DefaultGraph,
            ),
            Quad::new(
                BlankNode::new("b1").unwrap(),
                iri("http://b"),
                BlankNode::new("b2").unwrap(),
                GraphName::DefaultGraph,
            ),
        ]
    );
}

#[test]
fn test_triples_go_to_caller_default_graph() {
    let text = concat!(
        r#"["http://a","http://b","c","http://d","",""]"#,
        "\n",
        r#"["http://a","http://b","c","http://d","","http://g/1"]"#,
    );
    let mut dataset = Dataset::new();
    let summary = HextuplesParser::new()
        .with_default_graph(iri("http://default"))
        .parse(LineSource::from(text), &mut dataset)
        .unwrap();
    assert_eq!(summary.triples, 1);
    assert_eq!(summary.quads, 1);

    let graphs: Vec<_> = dataset.iter().map(|q| q.graph_name.into_owned()).collect();
    assert!(graphs.contains(&GraphName::NamedNode(iri("http://default"))));
    assert!(graphs.contains(&GraphName::NamedNode(iri("http://g/1"))));
}

#[test]
fn test_language_tag_takes_precedence() {
    let st = collect_statements(&format!(
        r#"["http://a","http://b","hi","{}","en",""]"#,
        XSD_STRING.as_str()
    ));
    assert_eq!(
        st[0].object,
        Term::Literal {
            lex: "hi".into(),
            kind: LiteralKind::Lang("en".into()),
        }
    );

    let mut store = Store::new().unwrap();
    HextuplesParser::new()
        .parse(
            LineSource::from(format!(
                r#"["http://a","http://b","hi","{}","en",""]"#,
                XSD_STRING.as_str()
            )),
            &mut store,
        )
        .unwrap();
    let quad = store.iter().next().unwrap().unwrap();
    match quad.object.as_ref() {
        TermRef::Literal(l) => {
            assert_eq!(l.value(), "hi");
            assert_eq!(l.language(), Some("en"));
        }
        other => panic!("expected a literal, got {}", other),
    }
}

#[test]
fn test_global_id_object() {
    let st = collect_statements(r#"["http://a","http://b","http://x/y","globalId",null,null]"#);
    assert_eq!(st[0].subject, Subject::Iri("http://a".into()));
    assert_eq!(st[0].object, Term::Iri("http://x/y".into()));
}

#[test]
fn test_validation_error_aborts_stream() {
    let text = concat!(
        r#"["http://a","http://b","v","http://d","",""]"#,
        "\n",
        r#"["", "p", "", "d", "", ""]"#,
        "\n",
        r#"["http://a","http://b","w","http://d","",""]"#,
    );
    let mut quads: Vec<Quad> = Vec::new();
    let err = HextuplesParser::new()
        .parse(LineSource::from(text), &mut quads)
        .unwrap_err();
    match err {
        HextError::Validation {
            line,
            field,
            record,
        } => {
            assert_eq!(line, Some(2));
            assert_eq!(field, "subject");
            assert_eq!(record.value(), Some(""));
            assert_eq!(record.predicate(), Some("p"));
        }
        other => panic!("expected a validation error, got {}", other),
    }
    assert_eq!(quads.len(), 1);
}

#[test]
fn test_missing_fields_fail_but_optional_ones_do_not() {
    for line in [
        r#"[null,"http://b","v","http://d",null,null]"#,
        r#"["http://a",null,"v","http://d",null,null]"#,
        r#"["http://a","http://b",null,"http://d",null,null]"#,
        r#"["http://a","http://b","v",null,null,null]"#,
    ] {
        let mut quads: Vec<Quad> = Vec::new();
        let res = HextuplesParser::new().parse(LineSource::from(line), &mut quads);
        assert!(
            matches!(res, Err(HextError::Validation { .. })),
            "{} should fail validation",
            line
        );
    }

    let mut quads: Vec<Quad> = Vec::new();
    HextuplesParser::new()
        .parse(
            LineSource::from(r#"["http://a","http://b","v","http://d",null,null]"#),
            &mut quads,
        )
        .unwrap();
    assert_eq!(quads.len(), 1);
}

#[test]
fn test_non_context_aware_store_is_rejected() {
    let mut graph = Graph::new();
    let err = HextuplesParser::new()
        .parse(
            LineSource::from(r#"["http://a","http://b","v","http://d","",""]"#),
            &mut graph,
        )
        .unwrap_err();
    assert!(matches!(err, HextError::Capability));
    assert!(graph.is_empty());
}

#[test]
fn test_encoding_mismatch_is_only_a_warning() {
    let mut quads: Vec<Quad> = Vec::new();
    let summary = HextuplesParser::new()
        .with_encoding("latin-1")
        .parse(
            LineSource::from(r#"["http://a","http://b","café","http://d","",""]"#),
            &mut quads,
        )
        .unwrap();
    assert_eq!(
        summary.warnings,
        vec![Warning::EncodingMismatch {
            declared: "latin-1".into()
        }]
    );
    assert_eq!(quads.len(), 1);
    assert_eq!(
        quads[0].object.as_ref(),
        TermRef::Literal(Literal::new_typed_literal("café", iri("http://d")).as_ref())
    );
}

#[test]
fn test_invalid_iri_only_fails_when_strict() {
    let line = r#"["http://a","http://b","not an iri","globalId","",""]"#;
    let mut quads: Vec<Quad> = Vec::new();
    let err = HextuplesParser::new()
        .strict()
        .parse(LineSource::from(line), &mut quads)
        .unwrap_err();
    assert!(matches!(err, HextError::InvalidTerm { line: Some(1), .. }));
    assert!(quads.is_empty());

    HextuplesParser::new()
        .parse(LineSource::from(line), &mut quads)
        .unwrap();
    assert_eq!(quads.len(), 1);
    assert_eq!(
        quads[0].object.as_ref(),
        TermRef::NamedNode(NamedNode::new_unchecked("not an iri").as_ref())
    );
}

#[test]
fn test_plain_strings_resolve_under_default_options() {
    let mut quads: Vec<Quad> = Vec::new();
    let summary = HextuplesParser::new()
        .parse(LineSource::from(r#"["s","p","v","d","",""]"#), &mut quads)
        .unwrap();
    assert_eq!(summary.triples, 1);
    assert_eq!(
        quads,
        vec![Quad::new(
            NamedNode::new_unchecked("s"),
            NamedNode::new_unchecked("p"),
            Literal::new_typed_literal("v", NamedNode::new_unchecked("d")),
            GraphName::DefaultGraph,
        )]
    );

    // language tags and blank node labels are kept exactly as written
    let mut quads: Vec<Quad> = Vec::new();
    HextuplesParser::new()
        .parse(
            LineSource::from(r#"["_:b 1","p","hi","d","EN_us","g"]"#),
            &mut quads,
        )
        .unwrap();
    assert_eq!(quads[0].subject.to_string(), BlankNode::new_unchecked("b 1").to_string());
    match quads[0].object.as_ref() {
        TermRef::Literal(l) => assert_eq!(l.language(), Some("EN_us")),
        other => panic!("expected a literal, got {}", other),
    }
    assert_eq!(quads[0].graph_name, GraphName::NamedNode(NamedNode::new_unchecked("g")));
}

#[test]
fn test_empty_value_with_plain_datatype() {
    let st = collect_statements(r#"["s","p","","d","",""]"#);
    assert_eq!(
        st,
        vec![Statement {
            subject: Subject::Iri("s".into()),
            predicate: "p".into(),
            object: Term::Literal {
                lex: "".into(),
                kind: LiteralKind::Typed("d".into()),
            },
            context: None,
        }]
    );

    let mut quads: Vec<Quad> = Vec::new();
    HextuplesParser::new()
        .parse(LineSource::from(r#"["s","p","","d","",""]"#), &mut quads)
        .unwrap();
    match quads[0].object.as_ref() {
        TermRef::Literal(l) => {
            assert_eq!(l.value(), "");
            assert_eq!(l.datatype().as_str(), "d");
        }
        other => panic!("expected a literal, got {}", other),
    }
}

#[test]
fn test_invalid_utf8_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.hext");
    let mut bytes = br#"["http://a","http://b","v","http://d","",""]"#.to_vec();
    bytes.extend_from_slice(b"\n[\"http://a\",\"http://b\",\"caf\xe9\",\"http://d\",\"\",\"\"]\n");
    std::fs::write(&path, bytes).unwrap();

    let mut quads: Vec<Quad> = Vec::new();
    let err = HextuplesParser::new()
        .parse(LineSource::from_path(&path), &mut quads)
        .unwrap_err();
    assert!(matches!(err, HextError::Decode { line: Some(2), .. }), "{}", err);
    assert_eq!(quads.len(), 1);
}

#[test]
fn test_file_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.hext");
    std::fs::write(
        &path,
        concat!(
            r#"["http://a","http://b","1","http://www.w3.org/2001/XMLSchema#integer","","http://g"]"#,
            "\r\n",
            r#"["http://a","http://b","http://c","globalId","",""]"#,
            "\r\n",
        ),
    )
    .unwrap();
    let mut store = Store::new().unwrap();
    let summary = HextuplesParser::new()
        .parse(LineSource::from_path(&path), &mut store)
        .unwrap();
    assert_eq!(summary.lines, 2);
    assert_eq!(summary.statements(), 2);
    assert_eq!(store.len().unwrap(), 2);
    assert!(store
        .contains(QuadRef::new(
            iri("http://a").as_ref(),
            iri("http://b").as_ref(),
            iri("http://c").as_ref(),
            oxigraph::model::GraphNameRef::DefaultGraph,
        ))
        .unwrap());
}

#[test]
fn test_missing_file_is_an_io_error() {
    let mut store = Store::new().unwrap();
    let err = HextuplesParser::new()
        .parse(LineSource::from_path("fixtures/missing.hext"), &mut store)
        .unwrap_err();
    assert!(matches!(err, HextError::Io(_)));
}
