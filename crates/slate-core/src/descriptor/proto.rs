//! Building the descriptor graph from `google.protobuf` descriptor messages
//!
//! Comments are resolved from `SourceCodeInfo` by location path:
//! `[4, i]` is the i-th top-level message, `[.., 3, j]` a nested message,
//! `[.., 2, k]` a field and `[.., 8, k]` a one-of declaration.
//!
//! Copyright (c) 2025 Slate Docs Team
//! Licensed under the Apache-2.0 license

use super::{
    DescriptorGraph, Enum, EnumValue, Field, FieldType, File, FileOptions, Label, Message, OneOf,
};
use crate::error::{Error, Result};
use prost_types::source_code_info::Location;
use prost_types::{DescriptorProto, EnumDescriptorProto, FileDescriptorProto};
use std::collections::HashMap;
use tracing::debug;

const FILE_MESSAGE_TYPE: i32 = 4;
const FILE_ENUM_TYPE: i32 = 5;
const MESSAGE_FIELD: i32 = 2;
const MESSAGE_NESTED_TYPE: i32 = 3;
const MESSAGE_ENUM_TYPE: i32 = 4;
const MESSAGE_ONEOF_DECL: i32 = 8;

/// Comment lookup for a single file, keyed by location path
struct Comments<'a> {
    by_path: HashMap<&'a [i32], &'a Location>,
}

impl<'a> Comments<'a> {
    fn new(file: &'a FileDescriptorProto) -> Self {
        let by_path = file
            .source_code_info
            .iter()
            .flat_map(|info| info.location.iter())
            .map(|loc| (loc.path.as_slice(), loc))
            .collect();
        Self { by_path }
    }

    fn leading(&self, path: &[i32]) -> String {
        self.by_path
            .get(path)
            .and_then(|loc| loc.leading_comments.clone())
            .unwrap_or_default()
    }

    fn trailing(&self, path: &[i32]) -> String {
        self.by_path
            .get(path)
            .and_then(|loc| loc.trailing_comments.clone())
            .unwrap_or_default()
    }
}

impl DescriptorGraph {
    /// Build a graph from every file the compiler handed over
    pub fn from_file_descriptors(files: &[FileDescriptorProto]) -> Result<Self> {
        let files = files
            .iter()
            .map(file_from_proto)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(files))
    }
}

fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}.{name}")
    }
}

/// Convert a single `FileDescriptorProto`
pub fn file_from_proto(proto: &FileDescriptorProto) -> Result<File> {
    let comments = Comments::new(proto);
    let mut file = File::new(proto.name(), proto.package());
    file.dependencies = proto.dependency.clone();

    if let Some(options) = &proto.options {
        file.options = FileOptions {
            ruby_package: options.ruby_package.clone(),
        };
    }

    for (i, message) in proto.message_type.iter().enumerate() {
        let path = vec![FILE_MESSAGE_TYPE, i as i32];
        file.messages
            .push(message_from_proto(message, proto.package(), &path, &comments, &file.name)?);
    }
    for (i, e) in proto.enum_type.iter().enumerate() {
        let path = [FILE_ENUM_TYPE, i as i32];
        file.enums
            .push(enum_from_proto(e, proto.package(), &path, &comments));
    }

    debug!(
        file = %file.name,
        package = %file.package,
        messages = file.messages.len(),
        "Loaded file descriptor"
    );
    Ok(file)
}

fn message_from_proto(
    proto: &DescriptorProto,
    scope: &str,
    path: &[i32],
    comments: &Comments<'_>,
    file_name: &str,
) -> Result<Message> {
    let full_name = qualify(scope, proto.name());

    let oneofs = proto
        .oneof_decl
        .iter()
        .enumerate()
        .map(|(i, decl)| {
            let oneof_path = [path, &[MESSAGE_ONEOF_DECL, i as i32][..]].concat();
            OneOf {
                name: decl.name().to_string(),
                leading_comments: comments.leading(&oneof_path),
            }
        })
        .collect::<Vec<_>>();

    let mut fields = Vec::with_capacity(proto.field.len());
    for (i, field) in proto.field.iter().enumerate() {
        let field_path = [path, &[MESSAGE_FIELD, i as i32][..]].concat();
        let oneof_index = match field.oneof_index {
            Some(index) if index < 0 || index as usize >= oneofs.len() => {
                return Err(Error::descriptor(
                    file_name,
                    format!(
                        "field {}.{} refers to one-of #{index} but only {} are declared",
                        full_name,
                        field.name(),
                        oneofs.len()
                    ),
                ));
            }
            other => other.map(|index| index as usize),
        };

        fields.push(Field {
            name: field.name().to_string(),
            number: field.number(),
            field_type: FieldType::from_code(field.r#type.unwrap_or_default()),
            label: Label::from_code(field.label.unwrap_or_default()),
            type_name: field
                .type_name
                .as_deref()
                .map(|t| t.trim_start_matches('.').to_string()),
            oneof_index,
            proto3_optional: field.proto3_optional(),
            leading_comments: comments.leading(&field_path),
            trailing_comments: comments.trailing(&field_path),
        });
    }

    let mut message = Message::new(proto.name(), full_name.clone(), fields, oneofs);
    message.map_entry = proto
        .options
        .as_ref()
        .and_then(|o| o.map_entry)
        .unwrap_or(false);
    message.leading_comments = comments.leading(path);
    message.trailing_comments = comments.trailing(path);

    for (i, nested) in proto.nested_type.iter().enumerate() {
        let nested_path = [path, &[MESSAGE_NESTED_TYPE, i as i32][..]].concat();
        message
            .nested
            .push(message_from_proto(nested, &full_name, &nested_path, comments, file_name)?);
    }
    for (i, e) in proto.enum_type.iter().enumerate() {
        let enum_path = [path, &[MESSAGE_ENUM_TYPE, i as i32][..]].concat();
        message
            .enums
            .push(enum_from_proto(e, &full_name, &enum_path, comments));
    }

    Ok(message)
}

fn enum_from_proto(
    proto: &EnumDescriptorProto,
    scope: &str,
    path: &[i32],
    comments: &Comments<'_>,
) -> Enum {
    Enum {
        name: proto.name().to_string(),
        full_name: qualify(scope, proto.name()),
        values: proto
            .value
            .iter()
            .map(|v| EnumValue {
                name: v.name().to_string(),
                number: v.number(),
            })
            .collect(),
        leading_comments: comments.leading(path),
    }
}
