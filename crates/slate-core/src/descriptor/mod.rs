//! Read-only descriptor graph consumed by the documentation pipeline
//!
//! The graph is built once per run (see [`proto`] for the protoc loader) and
//! never mutated afterwards. Renderers borrow from it for the duration of a
//! single document.
//!
//! Copyright (c) 2025 Slate Docs Team
//! Licensed under the Apache-2.0 license

pub mod proto;

use std::collections::BTreeMap;

/// Reserved namespace of the protobuf well-known types
pub const WELL_KNOWN_NAMESPACE: &str = "google";

/// Returns true when `package` is `google` or lives under `google.`
pub fn is_well_known(package: &str) -> bool {
    package == WELL_KNOWN_NAMESPACE
        || package
            .strip_prefix(WELL_KNOWN_NAMESPACE)
            .is_some_and(|rest| rest.starts_with('.'))
}

/// Structural type of a field, mirroring `FieldDescriptorProto.Type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Double,
    Float,
    Int64,
    Uint64,
    Int32,
    Fixed64,
    Fixed32,
    Bool,
    String,
    Group,
    Message,
    Bytes,
    Uint32,
    Enum,
    Sfixed32,
    Sfixed64,
    Sint32,
    Sint64,
    /// A type code this model does not know about
    Unknown(i32),
}

impl FieldType {
    /// Map a raw descriptor type code
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Double,
            2 => Self::Float,
            3 => Self::Int64,
            4 => Self::Uint64,
            5 => Self::Int32,
            6 => Self::Fixed64,
            7 => Self::Fixed32,
            8 => Self::Bool,
            9 => Self::String,
            10 => Self::Group,
            11 => Self::Message,
            12 => Self::Bytes,
            13 => Self::Uint32,
            14 => Self::Enum,
            15 => Self::Sfixed32,
            16 => Self::Sfixed64,
            17 => Self::Sint32,
            18 => Self::Sint64,
            other => Self::Unknown(other),
        }
    }

    /// Whether this field refers to another named type
    pub fn is_reference(self) -> bool {
        matches!(self, Self::Message | Self::Enum | Self::Group)
    }
}

/// Field cardinality, mirroring `FieldDescriptorProto.Label`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Optional,
    Required,
    Repeated,
    Unknown(i32),
}

impl Label {
    /// Map a raw descriptor label code
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Optional,
            2 => Self::Required,
            3 => Self::Repeated,
            other => Self::Unknown(other),
        }
    }
}

/// Language specific package options declared on a file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileOptions {
    pub ruby_package: Option<String>,
}

/// A single field of a message
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub number: i32,
    pub field_type: FieldType,
    pub label: Label,
    /// Fully qualified referenced type, without the leading dot
    pub type_name: Option<String>,
    /// Index into the owning message's one-of declarations
    pub oneof_index: Option<usize>,
    pub proto3_optional: bool,
    pub leading_comments: String,
    pub trailing_comments: String,
}

/// A one-of declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf {
    pub name: String,
    pub leading_comments: String,
}

/// A one-of declaration together with its alternatives
#[derive(Debug, Clone, Copy)]
pub struct OneOfGroup<'a> {
    pub oneof: &'a OneOf,
    index: usize,
    fields: &'a [Field],
}

impl<'a> OneOfGroup<'a> {
    /// Alternatives in declaration order
    pub fn alternatives(&self) -> impl Iterator<Item = &'a Field> + 'a {
        let index = self.index;
        self.fields
            .iter()
            .filter(move |f| f.oneof_index == Some(index))
    }
}

/// A message definition
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub name: String,
    pub full_name: String,
    pub fields: Vec<Field>,
    pub oneofs: Vec<OneOf>,
    pub nested: Vec<Message>,
    pub enums: Vec<Enum>,
    pub map_entry: bool,
    pub leading_comments: String,
    pub trailing_comments: String,
}

impl Message {
    /// Create a message with no nested declarations
    pub fn new(
        name: impl Into<String>,
        full_name: impl Into<String>,
        fields: Vec<Field>,
        oneofs: Vec<OneOf>,
    ) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            fields,
            oneofs,
            nested: Vec::new(),
            enums: Vec::new(),
            map_entry: false,
            leading_comments: String::new(),
            trailing_comments: String::new(),
        }
    }

    /// Whether the field belongs to a declared (non-synthetic) one-of
    fn in_real_oneof(&self, field: &Field) -> bool {
        field
            .oneof_index
            .is_some_and(|index| index < self.oneofs.len())
            && !field.proto3_optional
    }

    /// Fields outside any real one-of group, in declaration order
    pub fn plain_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(move |f| !self.in_real_oneof(f))
    }

    /// Declared one-of groups; synthetic proto3 `optional` groups are skipped
    ///
    /// Membership is read from each field's `oneof_index` on every call.
    pub fn oneof_groups(&self) -> Vec<OneOfGroup<'_>> {
        self.oneofs
            .iter()
            .enumerate()
            .map(|(index, oneof)| OneOfGroup {
                oneof,
                index,
                fields: &self.fields,
            })
            .filter(|group| group.alternatives().any(|f| !f.proto3_optional))
            .collect()
    }

    /// This message or a nested message named `full_name`, map entries included
    fn find(&self, full_name: &str) -> Option<&Message> {
        if self.full_name == full_name {
            return Some(self);
        }
        self.nested.iter().find_map(|nested| nested.find(full_name))
    }

    /// This message followed by its nested messages, depth first
    fn collect<'a>(&'a self, out: &mut Vec<&'a Message>) {
        if !self.map_entry {
            out.push(self);
        }
        for nested in &self.nested {
            nested.collect(out);
        }
    }

    fn visit_types<'a>(&'a self, visit: &mut impl FnMut(&'a str)) {
        visit(&self.full_name);
        for e in &self.enums {
            visit(&e.full_name);
        }
        for nested in &self.nested {
            nested.visit_types(visit);
        }
    }
}

/// An enum value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    pub number: i32,
}

/// An enum definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    pub name: String,
    pub full_name: String,
    pub values: Vec<EnumValue>,
    pub leading_comments: String,
}

/// A schema file
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    /// Input path as handed to the compiler, e.g. `shop/v1/order.proto`
    pub name: String,
    pub package: String,
    /// Imported file names in declaration order
    pub dependencies: Vec<String>,
    pub messages: Vec<Message>,
    pub enums: Vec<Enum>,
    pub options: FileOptions,
}

impl File {
    /// Create an empty file in `package`
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            dependencies: Vec::new(),
            messages: Vec::new(),
            enums: Vec::new(),
            options: FileOptions::default(),
        }
    }

    /// File name without directories, e.g. `order.proto`
    pub fn base_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Base name without the `.proto` extension
    pub fn stem(&self) -> &str {
        let base = self.base_name();
        base.strip_suffix(".proto").unwrap_or(base)
    }

    /// All user-declared messages, parents before their nested messages
    pub fn all_messages(&self) -> Vec<&Message> {
        let mut out = Vec::new();
        for message in &self.messages {
            message.collect(&mut out);
        }
        out
    }

    fn visit_types<'a>(&'a self, mut visit: impl FnMut(&'a str)) {
        for e in &self.enums {
            visit(&e.full_name);
        }
        for message in &self.messages {
            message.visit_types(&mut visit);
        }
    }
}

/// A package and the files that declare it
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub name: String,
    pub files: Vec<File>,
}

/// The resolved schema handed to the generator
#[derive(Debug, Clone, Default)]
pub struct DescriptorGraph {
    packages: Vec<Package>,
    /// File name -> (package index, file index)
    files: BTreeMap<String, (usize, usize)>,
    /// Fully qualified type name -> owning file name
    type_owners: BTreeMap<String, String>,
}

impl DescriptorGraph {
    /// Group files into packages, keeping first-seen order for both
    pub fn new(files: impl IntoIterator<Item = File>) -> Self {
        let mut graph = Self::default();
        for file in files {
            graph.insert(file);
        }
        graph
    }

    fn insert(&mut self, file: File) {
        let package_index = match self.packages.iter().position(|p| p.name == file.package) {
            Some(index) => index,
            None => {
                self.packages.push(Package {
                    name: file.package.clone(),
                    files: Vec::new(),
                });
                self.packages.len() - 1
            }
        };

        let owners = &mut self.type_owners;
        file.visit_types(|full_name| {
            owners.insert(full_name.to_string(), file.name.clone());
        });

        let files = &mut self.packages[package_index].files;
        self.files
            .insert(file.name.clone(), (package_index, files.len()));
        files.push(file);
    }

    /// Packages in first-seen order
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Look up a package by its dotted name
    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.name == name)
    }

    /// Look up a file by its input path
    pub fn file(&self, name: &str) -> Option<&File> {
        self.files
            .get(name)
            .map(|&(p, f)| &self.packages[p].files[f])
    }

    /// The file declaring a fully qualified message or enum
    pub fn type_owner(&self, full_name: &str) -> Option<&File> {
        self.type_owners
            .get(full_name.trim_start_matches('.'))
            .and_then(|name| self.file(name))
    }

    /// Look up a message (map entries included) by its fully qualified name
    pub fn message(&self, full_name: &str) -> Option<&Message> {
        let full_name = full_name.trim_start_matches('.');
        self.type_owner(full_name)?
            .messages
            .iter()
            .find_map(|message| message.find(full_name))
    }

    /// Files other than `file` whose types `message` references.
    ///
    /// Map fields contribute the types of their entry's key and value.
    /// Ordered by `file`'s import declarations; references to files that are
    /// not declared imports follow in first-use order.
    pub fn message_imports<'a>(&'a self, file: &File, message: &Message) -> Vec<&'a File> {
        let mut used: Vec<&'a File> = Vec::new();
        let mut note = |type_name: &str| {
            if let Some(owner) = self.type_owner(type_name) {
                if owner.name != file.name && !used.iter().any(|f| f.name == owner.name) {
                    used.push(owner);
                }
            }
        };
        for type_name in referenced_types(&message.fields) {
            match self.message(type_name).filter(|m| m.map_entry) {
                Some(entry) => referenced_types(&entry.fields).for_each(&mut note),
                None => note(type_name),
            }
        }

        used.sort_by_key(|f| {
            file.dependencies
                .iter()
                .position(|d| *d == f.name)
                .unwrap_or(usize::MAX)
        });
        used
    }
}

/// Type names referenced by message, enum or group fields
fn referenced_types(fields: &[Field]) -> impl Iterator<Item = &str> {
    fields
        .iter()
        .filter(|field| field.field_type.is_reference())
        .filter_map(|field| field.type_name.as_deref())
}
