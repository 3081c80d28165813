use sassbridge_value::{
    assert_type, fingerprint, format_number, handle_empty_map, is_empty_map, is_falsy, is_null,
    is_type, sass_string, type_of, unquote, Color, Error, SassList, SassMap, SassType, SassValue,
};

fn all_kinds() -> Vec<SassValue> {
    vec![
        SassValue::NULL,
        SassValue::TRUE,
        SassValue::number(2.0, "px"),
        SassValue::string("foo"),
        SassValue::List(SassList::new()),
        SassValue::Map(SassMap::new()),
    ]
}

#[test]
fn knows_simplified_type_names() {
    let names: Vec<&str> = all_kinds().iter().map(|v| type_of(v).as_str()).collect();
    assert_eq!(names, ["null", "bool", "number", "string", "list", "map"]);
    assert_eq!(type_of(&Color::rgb(0.0, 0.0, 0.0).into()), SassType::Color);
}

#[test]
fn checks_for_null() {
    let nulls: Vec<bool> = all_kinds().iter().map(is_null).collect();
    assert_eq!(nulls, [true, false, false, false, false, false]);
}

#[test]
fn checks_for_falsy_values() {
    assert!(is_falsy(&SassValue::NULL));
    assert!(is_falsy(&SassValue::FALSE));
    assert!(!is_falsy(&SassValue::TRUE));
    assert!(!is_falsy(&SassValue::unitless(0.0)));
    assert!(!is_falsy(&SassValue::string("")));
    assert!(!is_falsy(&SassValue::List(SassList::new())));
    assert!(!is_falsy(&SassValue::Map(SassMap::new())));
}

#[test]
fn null_unquotes_as_null() {
    let unquoted = unquote(&SassValue::NULL).unwrap();
    assert_eq!(type_of(&unquoted), SassType::Null);
}

#[test]
fn unquotes_strings() {
    assert_eq!(
        unquote(&SassValue::string("\"foo\"")).unwrap(),
        SassValue::string("foo")
    );
    assert_eq!(
        unquote(&SassValue::string("'bar'")).unwrap(),
        SassValue::string("bar")
    );
    assert_eq!(
        unquote(&SassValue::string("baz")).unwrap(),
        SassValue::string("baz")
    );
}

#[test]
fn unquote_rejects_non_strings() {
    let err = unquote(&SassValue::number(1.0, "px")).unwrap_err();
    assert_eq!(
        err,
        Error::UnexpectedType {
            expected: SassType::String,
            found: "1px".into()
        }
    );
    assert_eq!(err.to_string(), "Expected string but got 1px");
}

#[test]
fn handles_empty_maps() {
    let empty_list = SassValue::List(SassList::new());
    let empty_map = SassValue::Map(SassMap::new());
    assert!(is_empty_map(&empty_list));
    assert!(is_empty_map(&empty_map));
    assert!(is_type(&empty_list, SassType::Map));
    assert!(is_type(&empty_map, SassType::Map));
    assert!(assert_type(&empty_list, SassType::Map).is_ok());
    assert_eq!(type_of(&handle_empty_map(empty_list)), SassType::Map);

    let non_empty = SassValue::List(SassList::with_len(1));
    assert!(!is_type(&non_empty, SassType::Map));
    assert_eq!(handle_empty_map(non_empty.clone()), non_empty);
}

#[test]
fn fingerprints_follow_type_and_rendering() {
    assert_eq!(fingerprint(&SassValue::number(2.0, "px")), "number:2px");
    assert_eq!(fingerprint(&SassValue::string("2px")), "string:2px");
    assert_eq!(fingerprint(&SassValue::NULL), "null:null");
    assert_eq!(
        fingerprint(&SassValue::number(2.0, "px")),
        fingerprint(&SassValue::number(2.0, "px"))
    );
}

#[test]
fn fingerprints_fold_signed_zero_and_spell_out_non_finite_numbers() {
    assert_eq!(
        fingerprint(&SassValue::number(-0.0, "px")),
        fingerprint(&SassValue::number(0.0, "px"))
    );
    assert_eq!(fingerprint(&SassValue::number(0.0, "px")), "number:0px");
    assert_eq!(
        fingerprint(&SassValue::unitless(f64::INFINITY)),
        "number:Infinity"
    );
    assert_eq!(fingerprint(&SassValue::unitless(1e21)), "number:1e+21");
    assert_eq!(format_number(f64::NAN), "NaN");
}

#[test]
fn unquote_keeps_quotes_around_multiline_text() {
    let multiline = SassValue::string("\"a\nb\"");
    assert_eq!(unquote(&multiline).unwrap(), multiline);
    assert_eq!(
        unquote(&SassValue::string("'a b'")).unwrap(),
        SassValue::string("a b")
    );
}

#[test]
fn stringifies_nested_values() {
    let mut inner = SassMap::new();
    inner.push(SassValue::string("a"), SassValue::unitless(2.0));
    inner.push(SassValue::string("b"), SassValue::unitless(3.0));
    let mut outer = SassMap::new();
    outer.push(SassValue::string("top-level"), SassValue::Map(inner));
    assert_eq!(
        sass_string(&SassValue::Map(outer)),
        "(top-level: (a: 2, b: 3))"
    );
}
