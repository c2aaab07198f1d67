//! Display labels for field types and cardinalities

use crate::descriptor::{FieldType, Label};

/// Human readable name of a field type; unsupported types render empty
pub fn type_label(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Double => "double",
        FieldType::Float => "float",
        FieldType::Int32 => "int (32bit)",
        FieldType::Int64 => "int (64bit)",
        FieldType::Uint32 => "unsigned int (32bit)",
        FieldType::Uint64 => "unsigned int (64bit)",
        FieldType::Bool => "boolean",
        FieldType::Bytes => "bytes",
        FieldType::Enum => "enum",
        FieldType::Message => "message",
        FieldType::String => "string",
        _ => "",
    }
}

/// Human readable cardinality
pub fn cardinality_label(label: Label) -> &'static str {
    match label {
        Label::Optional => "optional",
        Label::Required => "required",
        Label::Repeated => "repeated",
        Label::Unknown(_) => "",
    }
}
