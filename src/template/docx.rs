// src/template/docx.rs

use serde_json::Value as JsonValue;
use std::collections::BTreeSet;
use std::io::{Cursor, Read, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{AppError, AppResult};
use crate::form::ProposalRecord;

use super::render::{part_names, render_part};

/// Parts that may carry placeholders.
fn is_templated_part(name: &str) -> bool {
    if name == "word/document.xml" {
        return true;
    }
    let Some(file) = name.strip_prefix("word/") else {
        return false;
    };
    (file.starts_with("header") || file.starts_with("footer"))
        && file.ends_with(".xml")
        && !file.contains('/')
}

fn open_archive(template: &[u8]) -> AppResult<ZipArchive<Cursor<&[u8]>>> {
    ZipArchive::new(Cursor::new(template)).map_err(|e| AppError::TemplateRead(e.to_string()))
}

fn read_part<R: Read + std::io::Seek>(archive: &mut ZipArchive<R>, idx: usize) -> AppResult<(String, String)> {
    let mut file = archive
        .by_index(idx)
        .map_err(|e| AppError::TemplateRead(e.to_string()))?;
    let name = file.name().to_string();
    let mut xml = String::new();
    file.read_to_string(&mut xml)
        .map_err(|e| AppError::TemplateRead(format!("{name}: {e}")))?;
    Ok((name, xml))
}

/// Render a proposal record into the template.
pub fn render_docx(template: &[u8], record: &ProposalRecord) -> AppResult<Vec<u8>> {
    let data = serde_json::to_value(record).map_err(|e| AppError::RecordEncode(e.to_string()))?;
    render_docx_value(template, &data)
}

/// Render every templated part against `data`; other entries are copied
/// through untouched. Faults from all parts are reported together.
pub fn render_docx_value(template: &[u8], data: &JsonValue) -> AppResult<Vec<u8>> {
    let mut archive = open_archive(template)?;
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut errors = Vec::new();

    for idx in 0..archive.len() {
        let name = archive
            .name_for_index(idx)
            .map(str::to_string)
            .unwrap_or_default();

        if !is_templated_part(&name) {
            let file = archive
                .by_index_raw(idx)
                .map_err(|e| AppError::TemplateRead(e.to_string()))?;
            writer
                .raw_copy_file(file)
                .map_err(|e| AppError::DocumentPackage(e.to_string()))?;
            continue;
        }

        let (name, xml) = read_part(&mut archive, idx)?;
        match render_part(&name, &xml, data) {
            Ok(rendered) => {
                writer
                    .start_file(name.as_str(), options)
                    .map_err(|e| AppError::DocumentPackage(e.to_string()))?;
                writer.write_all(rendered.as_bytes())?;
            }
            Err(mut part_errors) => errors.append(&mut part_errors),
        }
    }

    if !errors.is_empty() {
        return Err(AppError::TemplateRender { errors });
    }

    let out = writer
        .finish()
        .map_err(|e| AppError::DocumentPackage(e.to_string()))?;
    Ok(out.into_inner())
}

/// Every placeholder and section name used across the templated parts.
pub fn template_names(template: &[u8]) -> AppResult<BTreeSet<String>> {
    let mut archive = open_archive(template)?;
    let mut names = BTreeSet::new();
    let mut errors = Vec::new();

    for idx in 0..archive.len() {
        let templated = archive
            .name_for_index(idx)
            .map(is_templated_part)
            .unwrap_or(false);
        if !templated {
            continue;
        }

        let (name, xml) = read_part(&mut archive, idx)?;
        match part_names(&name, &xml) {
            Ok(found) => names.extend(found),
            Err(mut part_errors) => errors.append(&mut part_errors),
        }
    }

    if errors.is_empty() {
        Ok(names)
    } else {
        Err(AppError::TemplateRender { errors })
    }
}

/// Template names with no matching key anywhere in `data` (top level or
/// inside list elements). These render empty.
pub fn unmatched_names(names: &BTreeSet<String>, data: &JsonValue) -> Vec<String> {
    let mut known = BTreeSet::new();
    collect_keys(data, &mut known);

    names
        .iter()
        .filter(|n| !known.contains(n.as_str()))
        .cloned()
        .collect()
}

fn collect_keys<'a>(v: &'a JsonValue, out: &mut BTreeSet<&'a str>) {
    match v {
        JsonValue::Object(map) => {
            for (k, child) in map {
                out.insert(k.as_str());
                collect_keys(child, out);
            }
        }
        JsonValue::Array(items) => {
            for item in items {
                collect_keys(item, out);
            }
        }
        _ => {}
    }
}
