use internals_core::model::RuntimeValue;
use internals_core::reflect::{ClassDescriptor, MethodDescriptor, PropertyDescriptor, RuntimeSnapshot};
use internals_core::services::{export_to_writer, RowFormat};

fn interface(name: &str) -> ClassDescriptor {
    let mut class = ClassDescriptor::new(name);
    class.is_interface = true;
    class
}

fn export_legacy(snapshot: &RuntimeSnapshot) -> String {
    let (_summary, bytes) = export_to_writer(snapshot, Vec::new(), RowFormat::Legacy).unwrap();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn legacy_rows_list_interfaces_after_classes_and_skip_traits_and_members() {
    let mut trait_like = ClassDescriptor::new("T");
    trait_like.is_trait = true;
    let mut with_members = ClassDescriptor::new("B");
    with_members.methods = vec![MethodDescriptor::new("run")];
    with_members.properties = vec![PropertyDescriptor::new("state")];

    let snapshot = RuntimeSnapshot::new()
        .with_function("f")
        .with_class(ClassDescriptor::new("A"))
        .with_class(interface("I"))
        .with_class(trait_like)
        .with_class(with_members)
        .with_variable("v", RuntimeValue::Int(5))
        .with_constant("C", RuntimeValue::Int(1));

    assert_eq!(
        export_legacy(&snapshot),
        "function,f,\nclass,A,\nclass,B,\ninterface,I,\nvariable,v,\nconstant,C,1\n"
    );
}

#[test]
fn legacy_interfaces_are_flushed_at_end_of_stream() {
    let snapshot = RuntimeSnapshot::new()
        .with_class(interface("Countable"))
        .with_class(ClassDescriptor::new("ArrayObject"))
        .with_class(interface("Traversable"));

    assert_eq!(
        export_legacy(&snapshot),
        "class,ArrayObject,\ninterface,Countable,\ninterface,Traversable,\n"
    );
}

#[test]
fn legacy_summary_still_counts_enumerated_records() {
    let mut class = ClassDescriptor::new("Holder");
    class.methods = vec![MethodDescriptor::new("m")];
    let snapshot = RuntimeSnapshot::new().with_class(class);

    let (summary, _) = export_to_writer(&snapshot, Vec::new(), RowFormat::Legacy).unwrap();
    assert_eq!(summary.records.methods, 1);
    assert_eq!(summary.rows_written, 1);
    assert_eq!(summary.format, RowFormat::Legacy);
}

#[test]
fn row_format_parses_from_text() {
    assert_eq!("full".parse::<RowFormat>().unwrap(), RowFormat::Full);
    assert_eq!("Legacy".parse::<RowFormat>().unwrap(), RowFormat::Legacy);
    let err = "fancy".parse::<RowFormat>().unwrap_err();
    assert!(err.contains("Unknown row format"), "unexpected error: {err}");
}
