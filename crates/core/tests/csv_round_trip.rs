use internals_core::model::RuntimeValue;
use internals_core::reflect::{ClassDescriptor, MethodDescriptor, RuntimeSnapshot};
use internals_core::services::writer::csv_writer_builder;
use internals_core::services::{export_to_writer, RowFormat};

fn awkward_snapshot() -> RuntimeSnapshot {
    let mut class = ClassDescriptor::new("Quoted");
    class.interfaces = vec!["A".into(), "B".into()];
    class.doc_comment = Some("/**\n * Says \"hi\", twice\r\n */".into());
    class.methods = vec![MethodDescriptor::new("m").with_parameters(["x", "y"])];

    RuntimeSnapshot::new()
        .with_function("plain")
        .with_class(class)
        .with_variable("v", RuntimeValue::String("ignored".into()))
        .with_constant("SEP", RuntimeValue::String(",".into()))
        .with_constant("QUOTE", RuntimeValue::String("\"".into()))
        .with_constant("LIST", RuntimeValue::Array(vec![RuntimeValue::Bool(true)]))
}

#[test]
fn parsing_and_rewriting_reproduces_the_file() {
    let (_summary, original) =
        export_to_writer(&awkward_snapshot(), Vec::new(), RowFormat::Full).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(original.as_slice());
    let mut writer = csv_writer_builder().from_writer(Vec::new());
    for record in reader.records() {
        writer.write_record(&record.unwrap()).unwrap();
    }
    let rewritten = writer.into_inner().map_err(|e| e.into_error()).unwrap();

    assert_eq!(String::from_utf8(rewritten).unwrap(), String::from_utf8(original).unwrap());
}

#[test]
fn special_fields_are_quoted_and_parse_back_intact() {
    let (_summary, bytes) =
        export_to_writer(&awkward_snapshot(), Vec::new(), RowFormat::Full).unwrap();

    let mut reader =
        csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(bytes.as_slice());
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
        .collect();

    assert_eq!(rows[0], vec!["function", "plain"]);
    assert_eq!(rows[1][4], "A,B");
    assert_eq!(rows[1][7], "/**\n * Says \"hi\", twice\r\n */");
    assert_eq!(rows[2], vec!["method", "m", "Quoted", "false", "public", "x,y", ""]);
    assert_eq!(rows[3], vec!["variable", "v", ""]);
    assert_eq!(rows[4], vec!["constant", "SEP", ","]);
    assert_eq!(rows[5], vec!["constant", "QUOTE", "\""]);
    assert_eq!(rows[6], vec!["constant", "LIST", "[true]"]);

    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("constant,QUOTE,\"\"\"\"\n"));
}

#[test]
fn record_writer_writes_one_line_per_record() {
    use internals_core::model::{FunctionRecord, Record};
    use internals_core::services::RecordWriter;

    let mut writer = RecordWriter::new(Vec::new());
    writer.write_record(&Record::Function(FunctionRecord { name: "strlen".into() })).unwrap();
    writer.write_row(["constant", "EOL", "\n"]).unwrap();
    assert_eq!(writer.rows_written(), 2);

    let bytes = writer.finish().unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), "function,strlen\nconstant,EOL,\"\n\"\n");
}
