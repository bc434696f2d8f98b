// Resolution of the nested top-level fields

use super::fields::{decode_field_block, FieldKeys, FieldTable};
use super::raw::RawBuffer;
use crate::error::{E7Error, Result};
use crate::utils::encoding::trim_format;

/// Separator between verse names in the order field.
pub const ORDER_SEPARATOR: char = '\x01';

fn required<'a>(fields: &'a FieldTable, key: &'static str) -> Result<&'a str> {
    fields
        .get(key)
        .map(String::as_str)
        .ok_or(E7Error::FieldMissing(key))
}

/// Verse key to display name.
pub fn namespaces(fields: &FieldTable, raw: &RawBuffer) -> Result<FieldTable> {
    let block = required(fields, FieldKeys::NAMESPACE)?;
    Ok(decode_field_block(block, raw))
}

/// Verse key to verse text, trimmed.
pub fn content(fields: &FieldTable, raw: &RawBuffer) -> Result<FieldTable> {
    let block = required(fields, FieldKeys::CONTENT)?;
    let mut table = decode_field_block(block, raw);
    for text in table.values_mut() {
        let trimmed = trim_format(text);
        if trimmed.len() != text.len() {
            *text = trimmed.to_string();
        }
    }
    Ok(table)
}

/// Verse names in playback order. Duplicates are kept.
pub fn order(fields: &FieldTable) -> Result<Vec<String>> {
    let text = required(fields, FieldKeys::ORDER)?;
    Ok(text
        .split(ORDER_SEPARATOR)
        .map(trim_format)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect())
}
