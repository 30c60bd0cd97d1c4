use optlex::{count, parse, parse_with_options, to_string, to_writer, Entry, ParseOptions};

#[test]
fn test_typical_option_string() {
    let opts = parse("uppercase,bold,underlined");
    assert_eq!(opts.len(), 3);
    for entry in &opts {
        assert!(entry.arg.is_none());
    }
    assert_eq!(count("uppercase,bold,underlined"), 4);
}

#[test]
fn test_options_with_arguments() {
    let opts = parse("font=12,typeface=bodoni,italic");
    assert_eq!(opts.len(), 3);

    assert_eq!(opts[0].tag.text(), Some("font"));
    assert_eq!(opts[0].arg.as_deref(), Some("12"));
    assert_eq!(opts[1].tag.text(), Some("typeface"));
    assert_eq!(opts[1].arg.as_deref(), Some("bodoni"));
    assert_eq!(opts[2].tag.text(), Some("italic"));
    assert!(opts[2].arg.is_none());
}

#[test]
fn test_mixed_separators() {
    let opts = parse("a b;c,d\te");
    assert_eq!(opts.len(), 5);
}

#[test]
fn test_quoting_and_escaping_together() {
    let opts = parse("values='1,2,3,4',equal=\\=");
    assert_eq!(opts.len(), 2);
    assert_eq!(opts[0].arg.as_deref(), Some("1,2,3,4"));
    assert_eq!(opts[1].arg.as_deref(), Some("="));
}

#[test]
fn test_edit_and_serialize() {
    let mut opts = parse("mode=ro,noatime,uid=1000");
    opts.delete(0);
    opts.push(Entry::with_arg("gid", "1000"));

    assert_eq!(to_string(&opts, ',', Some('=')), "noatime,uid=1000,gid=1000");
}

#[test]
fn test_serialize_to_vec_writer() {
    let opts = parse("a=1;b;c=2");
    let mut buf = Vec::new();
    to_writer(&mut buf, &opts, ';', Some('=')).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "a=1;b;c=2");
}

#[test]
fn test_serialize_to_fixed_buffer() {
    let opts = parse("a=1,b");
    let mut buf = [0u8; 16];
    to_writer(&mut buf[..], &opts, ',', Some('=')).unwrap();
    assert_eq!(&buf[..5], b"a=1,b");
}

#[test]
fn test_newline_joined_configuration_file() {
    let opts = parse("keep\nlevel=3\n# a comment line\nverbose");
    let tags: Vec<_> = opts.iter().filter_map(|e| e.tag.text()).collect();
    assert_eq!(tags, vec!["keep", "level", "verbose"]);

    // Newline-joined output is line-terminated.
    assert_eq!(to_string(&opts, '\n', Some('=')), "keep\nlevel=3\nverbose\n");
}

#[test]
fn test_multiline_input_with_continuation() {
    let opts = parse("long\\\ntag,next");
    let tags: Vec<_> = opts.iter().filter_map(|e| e.tag.text()).collect();
    assert_eq!(tags, vec!["longtag", "next"]);
}

#[test]
fn test_fully_custom_grammar() {
    let options = ParseOptions::new()
        .with_features("='\"")
        .with_separators("|")
        .keep_quotes_in_args();
    let opts = parse_with_options("key='v'|#literal|a=\"x|y\"", &options);

    assert_eq!(opts.len(), 3);
    assert_eq!(opts[0].arg.as_deref(), Some("'v'"));
    assert_eq!(opts[1].tag.text(), Some("#literal"));
    assert_eq!(opts[2].arg.as_deref(), Some("\"x|y\""));
}

#[test]
fn test_duplicate_tags_are_kept_in_order() {
    let opts = parse("v,v,v=1");
    assert_eq!(opts.len(), 3);
    assert_eq!(opts[2].arg.as_deref(), Some("1"));
}

#[test]
fn test_special_inputs_never_panic() {
    let inputs = [
        "",
        " \t;,",
        "'",
        "\"",
        "\\",
        "=",
        "==",
        "#",
        "a='unterminated",
        "ünïcôdé=välüé",
        "emoji=🦀,next",
    ];
    for input in inputs {
        let opts = parse(input);
        assert_eq!(count(input), opts.len() + 1, "input: {input:?}");
        let _ = to_string(&opts, ',', Some('='));
    }
}

#[test]
fn test_unicode_text_survives_roundtrip() {
    let opts = parse("grüße=wörld");
    assert_eq!(opts[0].tag.text(), Some("grüße"));
    assert_eq!(opts[0].arg.as_deref(), Some("wörld"));
    assert_eq!(to_string(&opts, ',', Some('=')), "grüße=wörld");
}
