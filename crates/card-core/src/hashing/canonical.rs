//! Codificación canónica binaria de `HashableValue`.
//!
//! Reglas (cada valor abre con su byte de `Tag`):
//! - `Null`: solo el tag.
//! - `Bool`: tag + 1 byte (0/1).
//! - `Int`: tag + 8 bytes big-endian (complemento a dos).
//! - `Text`: tag + longitud u32 BE en bytes UTF-8 + bytes.
//! - `Sequence`: tag + número de elementos u32 BE + cada elemento codificado.
//! - `Mapping`: tag + número de entradas u32 BE + entradas ordenadas por
//!   bytes de la clave; cada entrada es la clave codificada como `Text`
//!   seguida del valor.
//!
//! Las longitudes son explícitas, así que ningún separador dentro de los
//! datos puede confundirse con un límite entre valores: la codificación es
//! inyectiva.

use std::collections::BTreeMap;

use super::value::{HashableValue, Tag};
use crate::errors::CoreError;

/// Codifica `value` en su forma canónica.
///
/// Panics si algún texto o colección supera `u32::MAX` (error de programación;
/// usar `try_canonical_bytes` para recibirlo como `CoreError`).
pub fn canonical_bytes(value: &HashableValue) -> Vec<u8> {
    match try_canonical_bytes(value) {
        Ok(bytes) => bytes,
        Err(e) => panic!("canonical encoding failed: {e}"),
    }
}

/// Variante fallible de `canonical_bytes`.
pub fn try_canonical_bytes(value: &HashableValue) -> Result<Vec<u8>, CoreError> {
    let mut out = Vec::with_capacity(64);
    write_value(&mut out, value)?;
    Ok(out)
}

fn write_value(out: &mut Vec<u8>, value: &HashableValue) -> Result<(), CoreError> {
    out.push(value.tag().byte());
    match value {
        HashableValue::Null => {}
        HashableValue::Bool(b) => out.push(u8::from(*b)),
        HashableValue::Int(n) => out.extend_from_slice(&n.to_be_bytes()),
        HashableValue::Text(s) => write_text_payload(out, s)?,
        HashableValue::Sequence(items) => {
            write_len(out, items.len())?;
            for item in items {
                write_value(out, item)?;
            }
        }
        HashableValue::Mapping(map) => write_mapping_payload(out, map)?,
    }
    Ok(())
}

fn write_mapping_payload(out: &mut Vec<u8>, map: &BTreeMap<String, HashableValue>) -> Result<(), CoreError> {
    write_len(out, map.len())?;
    // El orden de `BTreeMap<String, _>` ya es lexicográfico por bytes UTF-8;
    // lo hacemos explícito para no depender del tipo de almacenamiento.
    let mut entries: Vec<(&String, &HashableValue)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
    for (key, value) in entries {
        out.push(Tag::Text.byte());
        write_text_payload(out, key)?;
        write_value(out, value)?;
    }
    Ok(())
}

fn write_text_payload(out: &mut Vec<u8>, s: &str) -> Result<(), CoreError> {
    write_len(out, s.len())?;
    out.extend_from_slice(s.as_bytes());
    Ok(())
}

fn write_len(out: &mut Vec<u8>, len: usize) -> Result<(), CoreError> {
    let framed = u32::try_from(len).map_err(|_| CoreError::FrameTooLarge { len })?;
    out.extend_from_slice(&framed.to_be_bytes());
    Ok(())
}
