use optlex::{optlist, parse, to_string, Entry, OptList, Tag};

#[test]
fn test_empty_list() {
    let opts = optlist![];
    assert!(opts.is_empty());
    assert_eq!(opts, OptList::new());
}

#[test]
fn test_flag_entries() {
    let opts = optlist!["uppercase", "bold"];
    assert_eq!(opts.len(), 2);
    assert_eq!(opts[0].tag, Tag::Active("uppercase".to_string()));
    assert!(opts[0].arg.is_none());
}

#[test]
fn test_entries_with_arguments() {
    let opts = optlist!["font" => "12", "typeface" => "bodoni"];
    assert_eq!(opts[0], Entry::with_arg("font", "12"));
    assert_eq!(opts[1], Entry::with_arg("typeface", "bodoni"));
}

#[test]
fn test_mixed_entries() {
    let opts = optlist!["italic", "font" => "12", "bold"];
    assert_eq!(opts.len(), 3);
    assert!(opts[0].arg.is_none());
    assert_eq!(opts[1].arg.as_deref(), Some("12"));
    assert!(opts[2].arg.is_none());
}

#[test]
fn test_macro_output_matches_parse() {
    let built = optlist!["uppercase", "font" => "12"];
    let parsed = parse("uppercase,font=12");
    assert_eq!(built, parsed);
}

#[test]
fn test_owned_strings_as_items() {
    let tag = String::from("font");
    let size = String::from("12");
    let opts = optlist![tag => size];
    assert_eq!(to_string(&opts, ',', Some('=')), "font=12");
}
