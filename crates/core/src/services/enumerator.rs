use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::mem;
use std::vec;

use tracing::debug;

use crate::error::{ExportError, ExportResult};
use crate::model::{
    ClassKind, ClassRecord, ConstantRecord, FunctionRecord, MethodRecord, PropertyRecord, Record,
    VariableRecord, Visibility,
};
use crate::reflect::{
    ClassDescriptor, ConstantDescriptor, MethodDescriptor, Modifier, PropertyDescriptor, Reflector,
    VariableDescriptor,
};

/// Lazy, single-pass sequence of records read from a [`Reflector`].
///
/// Rows come out grouped: functions, then every class followed by its methods
/// and properties, then variables, then constants. The first error is yielded
/// once and ends the sequence.
pub struct Records<R: Reflector> {
    reflector: R,
    variables: Vec<VariableDescriptor>,
    stage: Stage,
    pending: VecDeque<Record>,
}

enum Stage {
    Start,
    Functions(vec::IntoIter<String>),
    Classes(vec::IntoIter<String>),
    Variables(vec::IntoIter<VariableDescriptor>),
    Constants(vec::IntoIter<ConstantDescriptor>),
    Failed(ExportError),
    Done,
}

/// Start enumerating `reflector`.
///
/// Variables are captured here, before the enumerator holds any state of its
/// own, so no self-exclusion filter is needed. Every other group is queried
/// lazily when the iterator reaches it.
pub fn enumerate<R: Reflector>(reflector: R) -> Records<R> {
    let (variables, stage) = match reflector.defined_variables() {
        Ok(variables) => (variables, Stage::Start),
        Err(err) => (Vec::new(), Stage::Failed(err)),
    };
    Records { reflector, variables, stage, pending: VecDeque::new() }
}

/// Enumerate everything eagerly, stopping at the first error.
pub fn collect_records<R: Reflector>(reflector: R) -> ExportResult<Vec<Record>> {
    enumerate(reflector).collect()
}

impl<R: Reflector> Iterator for Records<R> {
    type Item = ExportResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.pending.pop_front() {
                return Some(Ok(record));
            }

            match mem::replace(&mut self.stage, Stage::Done) {
                Stage::Start => {
                    debug!("enumerating internal functions");
                    match self.reflector.internal_functions() {
                        Ok(names) => self.stage = Stage::Functions(names.into_iter()),
                        Err(err) => return Some(Err(err)),
                    }
                }
                Stage::Functions(mut names) => match names.next() {
                    Some(name) => {
                        self.stage = Stage::Functions(names);
                        return Some(Ok(Record::Function(FunctionRecord { name })));
                    }
                    None => {
                        debug!("enumerating declared classes");
                        match self.reflector.declared_classes() {
                            Ok(names) => self.stage = Stage::Classes(names.into_iter()),
                            Err(err) => return Some(Err(err)),
                        }
                    }
                },
                Stage::Classes(mut names) => match names.next() {
                    Some(name) => {
                        let descriptor = match self.reflector.reflect_class(&name) {
                            Ok(descriptor) => descriptor,
                            Err(err) => return Some(Err(err)),
                        };
                        self.stage = Stage::Classes(names);
                        let (class, members) = shape_class(&name, &descriptor);
                        debug!(class = %name, members = members.len(), "reflected class");
                        self.pending.extend(members);
                        return Some(Ok(Record::Class(class)));
                    }
                    None => {
                        debug!(count = self.variables.len(), "emitting captured variables");
                        self.stage = Stage::Variables(mem::take(&mut self.variables).into_iter());
                    }
                },
                Stage::Variables(mut variables) => match variables.next() {
                    Some(variable) => {
                        self.stage = Stage::Variables(variables);
                        return Some(Ok(Record::Variable(VariableRecord {
                            name: variable.name,
                            value: variable.value,
                        })));
                    }
                    None => {
                        debug!("enumerating defined constants");
                        match self.reflector.defined_constants() {
                            Ok(constants) => self.stage = Stage::Constants(constants.into_iter()),
                            Err(err) => return Some(Err(err)),
                        }
                    }
                },
                Stage::Constants(mut constants) => match constants.next() {
                    Some(constant) => {
                        self.stage = Stage::Constants(constants);
                        return Some(Ok(Record::Constant(ConstantRecord {
                            name: constant.name,
                            value: constant.value,
                        })));
                    }
                    None => return None,
                },
                Stage::Failed(err) => return Some(Err(err)),
                Stage::Done => return None,
            }
        }
    }
}

impl<R: Reflector> FusedIterator for Records<R> {}

/// Shape one reflected class into its class row plus member rows.
///
/// Member rows are methods first, then properties, each in reflection order.
/// `name` is the name the runtime listed the symbol under and becomes the
/// owning class name of every member row.
pub fn shape_class(name: &str, descriptor: &ClassDescriptor) -> (ClassRecord, Vec<Record>) {
    let class = ClassRecord {
        name: name.to_string(),
        kind: ClassKind::from_flags(descriptor.is_interface, descriptor.is_trait),
        parent_name: descriptor.parent.clone().unwrap_or_default(),
        interface_names: descriptor.interfaces.clone(),
        is_final: descriptor.is_final,
        is_abstract: descriptor.is_abstract,
        doc_comment: descriptor.doc_comment.clone().unwrap_or_default(),
    };

    let mut members = Vec::with_capacity(descriptor.methods.len() + descriptor.properties.len());
    members.extend(descriptor.methods.iter().map(|m| Record::Method(shape_method(name, m))));
    members.extend(descriptor.properties.iter().map(|p| Record::Property(shape_property(name, p))));

    (class, members)
}

pub fn shape_method(class_name: &str, method: &MethodDescriptor) -> MethodRecord {
    MethodRecord {
        name: method.name.clone(),
        class_name: class_name.to_string(),
        is_static: method.has(Modifier::Static),
        visibility: Visibility::from_flags(
            method.has(Modifier::Protected),
            method.has(Modifier::Private),
        ),
        parameter_names: method.parameters.iter().map(|p| p.name.clone()).collect(),
        // Member doc comments are never exported.
        doc_comment: String::new(),
    }
}

pub fn shape_property(class_name: &str, property: &PropertyDescriptor) -> PropertyRecord {
    PropertyRecord {
        name: property.name.clone(),
        class_name: class_name.to_string(),
        is_static: property.has(Modifier::Static),
        visibility: Visibility::from_flags(
            property.has(Modifier::Protected),
            property.has(Modifier::Private),
        ),
        doc_comment: String::new(),
    }
}
