// tests/common/mod.rs

#![allow(dead_code)]

use std::io::{Cursor, Read, Write};

use proposal_writer_lib::{command, context::AppCtx, types::AppState};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

pub struct TestEnv {
    // Keep the tempdir alive for the duration of the test.
    _td: tempfile::TempDir,

    pub state: AppState,
    ctx: AppCtx,
}

impl TestEnv {
    pub fn ctx(&self) -> &AppCtx {
        &self.ctx
    }
}

/// Fresh data dir, optionally seeded with a client list and a template,
/// then initialised the way the app does at startup.
pub fn setup(clients_json: Option<&str>, template: Option<&[u8]>) -> TestEnv {
    let td = tempfile::tempdir().expect("tempdir");
    let ctx = AppCtx::new(td.path().to_path_buf());

    if let Some(json) = clients_json {
        std::fs::write(ctx.clients_path(), json).expect("write clients");
    }
    if let Some(bytes) = template {
        std::fs::write(ctx.template_path(), bytes).expect("write template");
    }

    let state = AppState::new_for_tests(&ctx).expect("init_state");

    TestEnv {
        _td: td,
        state,
        ctx,
    }
}

pub fn setup_logged_in(user: &str, clients_json: Option<&str>, template: Option<&[u8]>) -> TestEnv {
    let env = setup(clients_json, template);
    command::login(&env.state, user).expect("login");
    env
}

/// `<w:p>` per line, each holding a single run.
pub fn document_xml(paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    )
}

/// Minimal .docx package around the given parts.
pub fn build_docx(parts: &[(&str, String)]) -> Vec<u8> {
    let mut w = ZipWriter::new(Cursor::new(Vec::new()));
    let opts = SimpleFileOptions::default();

    w.start_file("[Content_Types].xml", opts).expect("start");
    w.write_all(br#"<?xml version="1.0"?><Types/>"#).expect("write");

    for (name, content) in parts {
        w.start_file(*name, opts).expect("start");
        w.write_all(content.as_bytes()).expect("write");
    }

    w.finish().expect("finish").into_inner()
}

pub fn read_part(docx: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(docx)).expect("zip");
    let mut file = archive.by_name(name).expect("part");
    let mut s = String::new();
    file.read_to_string(&mut s).expect("utf8");
    s
}

/// Text content of a part, paragraphs joined with `\n`, breaks as `\n`.
pub fn plain_text(xml: &str) -> String {
    let mut out = String::new();
    let mut in_text = false;
    let mut rest = xml;

    while let Some(lt) = rest.find('<') {
        if in_text {
            out.push_str(&rest[..lt]);
        }
        let Some(gt) = rest[lt..].find('>') else {
            break;
        };
        let tag = &rest[lt..lt + gt + 1];
        if tag.starts_with("<w:t>") || tag.starts_with("<w:t ") {
            in_text = true;
        } else if tag == "</w:t>" {
            in_text = false;
        } else if tag == "</w:p>" || tag == "<w:br/>" {
            out.push('\n');
        }
        rest = &rest[lt + gt + 1..];
    }

    out.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}

pub const ACME_CLIENTS: &str = r#"[
  {
    "name": "Acme",
    "address1": "100 Capitol Mall",
    "address2": "Sacramento, CA 95814",
    "contacts": [ { "name": "Jo Lee", "title": "PM" } ]
  }
]"#;
