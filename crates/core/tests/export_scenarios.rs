use internals_core::model::RuntimeValue;
use internals_core::reflect::{ClassDescriptor, MethodDescriptor, Modifier, RuntimeSnapshot};
use internals_core::services::{export_to_writer, RowFormat};

fn export_full(snapshot: &RuntimeSnapshot) -> String {
    let (_summary, bytes) =
        export_to_writer(snapshot, Vec::new(), RowFormat::Full).expect("export to buffer");
    String::from_utf8(bytes).expect("utf8 output")
}

#[test]
fn base_class_with_static_factory_emits_class_then_method_row() {
    let mut base = ClassDescriptor::new("Base");
    base.interfaces = vec!["Iterable".into()];
    base.methods =
        vec![MethodDescriptor::new("make").with_modifiers(&[Modifier::Public, Modifier::Static])];
    let snapshot = RuntimeSnapshot::new().with_class(base);

    let out = export_full(&snapshot);
    assert_eq!(out, "class,Base,class,,Iterable,false,false,\nmethod,make,Base,true,public,,\n");
}

#[test]
fn lone_constant_emits_exactly_one_row() {
    let snapshot = RuntimeSnapshot::new().with_constant("MAX", RuntimeValue::Int(10));
    assert_eq!(export_full(&snapshot), "constant,MAX,10\n");
}

#[test]
fn variable_rows_omit_the_value() {
    let snapshot = RuntimeSnapshot::new().with_variable("exampleVar", RuntimeValue::Int(5));
    assert_eq!(export_full(&snapshot), "variable,exampleVar,\n");
}

#[test]
fn function_rows_carry_only_the_name() {
    let snapshot = RuntimeSnapshot::new().with_function("strlen").with_function("array_map");
    assert_eq!(export_full(&snapshot), "function,strlen\nfunction,array_map\n");
}

#[test]
fn rows_are_grouped_in_fixed_order() {
    let mut first = ClassDescriptor::new("First");
    first.methods = vec![MethodDescriptor::new("run").with_parameters(["input", "flags"])];
    first.properties = vec![internals_core::reflect::PropertyDescriptor::new("state")
        .with_modifiers(&[Modifier::Private])];
    let second = ClassDescriptor::new("Second");

    let snapshot = RuntimeSnapshot::new()
        .with_constant("E_ALL", RuntimeValue::Int(32767))
        .with_variable("argv", RuntimeValue::Array(vec![]))
        .with_class(first)
        .with_class(second)
        .with_function("strlen");

    let out = export_full(&snapshot);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "function,strlen",
            "class,First,class,,,false,false,",
            "method,run,First,false,public,\"input,flags\",",
            "member,state,First,false,private,",
            "class,Second,class,,,false,false,",
            "variable,argv,",
            "constant,E_ALL,32767",
        ]
    );
}

#[test]
fn class_without_members_emits_single_row_and_no_member_rows() {
    let mut empty = ClassDescriptor::new("Stateless");
    empty.parent = Some("Base".into());
    empty.is_final = true;
    let snapshot = RuntimeSnapshot::new().with_class(ClassDescriptor::new("Base")).with_class(empty);

    let out = export_full(&snapshot);
    let rows: Vec<&str> = out.lines().filter(|l| l.contains("Stateless")).collect();
    assert_eq!(rows, vec!["class,Stateless,class,Base,,true,false,"]);
}

#[test]
fn interface_and_trait_kinds_are_reported() {
    let mut countable = ClassDescriptor::new("Countable");
    countable.is_interface = true;
    countable.is_abstract = true;
    let mut greets = ClassDescriptor::new("Greets");
    greets.is_trait = true;
    greets.doc_comment = Some("/** Says hello */".into());

    let snapshot = RuntimeSnapshot::new().with_class(countable).with_class(greets);
    let out = export_full(&snapshot);
    assert_eq!(
        out,
        "class,Countable,interface,,,false,true,\nclass,Greets,trait,,,false,false,/** Says hello */\n"
    );
}

#[test]
fn constant_values_are_flattened_to_text() {
    let snapshot = RuntimeSnapshot::new()
        .with_constant("ON", RuntimeValue::Bool(true))
        .with_constant("OFF", RuntimeValue::Bool(false))
        .with_constant("NOTHING", RuntimeValue::Null)
        .with_constant("PI", RuntimeValue::Float(3.5))
        .with_constant("NAME", RuntimeValue::String("php".into()))
        .with_constant(
            "LIST",
            RuntimeValue::Array(vec![RuntimeValue::Int(1), RuntimeValue::String("a".into())]),
        );

    let out = export_full(&snapshot);
    assert_eq!(
        out,
        "constant,ON,true\nconstant,OFF,false\nconstant,NOTHING,\nconstant,PI,3.5\n\
         constant,NAME,php\nconstant,LIST,\"[1,\"\"a\"\"]\"\n"
    );
}

#[test]
fn summary_counts_every_record_kind() {
    let mut class = ClassDescriptor::new("Holder");
    class.methods = vec![MethodDescriptor::new("a"), MethodDescriptor::new("b")];
    class.properties = vec![internals_core::reflect::PropertyDescriptor::new("c")];
    let snapshot = RuntimeSnapshot::new()
        .with_function("f")
        .with_class(class)
        .with_variable("v", RuntimeValue::Null)
        .with_constant("C", RuntimeValue::Int(1));

    let (summary, _) = export_to_writer(&snapshot, Vec::new(), RowFormat::Full).unwrap();
    assert_eq!(summary.records.functions, 1);
    assert_eq!(summary.records.classes, 1);
    assert_eq!(summary.records.methods, 2);
    assert_eq!(summary.records.properties, 1);
    assert_eq!(summary.records.variables, 1);
    assert_eq!(summary.records.constants, 1);
    assert_eq!(summary.records.total(), 7);
    assert_eq!(summary.rows_written, 7);
    assert_eq!(summary.format, RowFormat::Full);
}
