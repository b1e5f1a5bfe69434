//! rspec-puppet source generation.
//!
//! The emitter walks an already-filtered resource list and writes one
//! example per resource, content checks for managed files, and a trailing
//! example that compiles the whole catalog and dumps it under
//! [`COMPILED_CATALOG_DIR`] for later inspection.

pub mod escape;
pub mod ruby;

pub use escape::{EscapeRule, EscapeRules};

use crate::catalog::{FILE_TYPE, Resource};
use crate::class_resolver::RootClass;
use crate::options::Options;
use anyhow::{Result, bail};
use md5::{Digest, Md5};
use serde_json::Value;
use std::fmt::Write;
use tracing::warn;

/// Where the generated spec writes the catalogue it compiled.
pub const COMPILED_CATALOG_DIR: &str = "catalogs";

const CONTENT_PARAM: &str = "content";
const ENSURE_PARAM: &str = "ensure";

/// `contain_<type>` with `::` flattened to `__`.
pub fn matcher(kind: &str) -> String {
    format!("contain_{}", kind.to_lowercase().replace("::", "__"))
}

/// Stem of the compiled catalog file for a class name.
pub fn catalog_file_stem(class_name: &str) -> String {
    class_name.replace("::", "__")
}

pub struct SpecEmitter<'a> {
    options: &'a Options,
    escapes: &'a EscapeRules,
    root: &'a RootClass,
}

impl<'a> SpecEmitter<'a> {
    pub fn new(options: &'a Options, escapes: &'a EscapeRules, root: &'a RootClass) -> Self {
        Self {
            options,
            escapes,
            root,
        }
    }

    pub fn emit(&self, resources: &[Resource]) -> Result<String> {
        let mut out = String::new();
        self.head(&mut out)?;
        self.params(&mut out)?;
        for resource in resources {
            self.example(&mut out, resource)?;
            self.content_check(&mut out, resource)?;
        }
        self.tail(&mut out)?;
        Ok(out)
    }

    fn head(&self, out: &mut String) -> Result<()> {
        writeln!(out, "require 'spec_helper'")?;
        if self.root.params.is_some() {
            writeln!(out, "require 'json'")?;
        }
        if self.options.md5sums {
            writeln!(out, "require 'digest'")?;
        }
        writeln!(out)?;
        writeln!(out, "describe {} do", ruby::single_quoted(self.root.name_or_blank()))?;
        Ok(())
    }

    fn params(&self, out: &mut String) -> Result<()> {
        let Some(params) = &self.root.params else {
            return Ok(());
        };
        let literal = ruby::pretty_hash(params).replace('\n', "\n    ");
        writeln!(out, "  let(:params) do")?;
        writeln!(out, "    {literal}")?;
        writeln!(out, "  end")?;
        writeln!(out)?;
        Ok(())
    }

    fn example(&self, out: &mut String, resource: &Resource) -> Result<()> {
        let title = ruby::escape_single(&resource.title);
        writeln!(
            out,
            "  it 'is expected to contain {} {title}' do",
            resource.kind.to_lowercase()
        )?;
        writeln!(
            out,
            "    is_expected.to {}('{title}').with({{",
            matcher(&resource.kind)
        )?;
        let is_file = resource.is_type(FILE_TYPE);
        for (name, value) in &resource.parameters {
            if is_file && name == CONTENT_PARAM {
                continue;
            }
            if let Some(expected) = expected_value(value) {
                writeln!(out, "      {} => {expected},", ruby::single_quoted(name))?;
            }
        }
        writeln!(out, "    }})")?;
        writeln!(out, "  end")?;
        writeln!(out)?;
        Ok(())
    }

    fn content_check(&self, out: &mut String, resource: &Resource) -> Result<()> {
        if !resource.is_type(FILE_TYPE) || !ensures_plain_file(resource) {
            return Ok(());
        }
        let content = match resource.parameter(CONTENT_PARAM) {
            None | Some(Value::Null) => return Ok(()),
            Some(Value::String(content)) => content,
            Some(other) => {
                if self.options.strict_content {
                    bail!(
                        "{}: content is not a string (got {})",
                        resource.reference(),
                        ruby::inspect(other)
                    );
                }
                warn!(resource = %resource.reference(), "content is not a string; skipping content check");
                return Ok(());
            }
        };
        let title = ruby::escape_single(&resource.title);
        writeln!(
            out,
            "  it 'is expected to contain expected content for file {title}' do"
        )?;
        if self.options.md5sums {
            let digest = Md5::digest(content.as_bytes());
            writeln!(
                out,
                "    content = catalogue.resource('file', '{title}').send(:parameters)[:content]"
            )?;
            writeln!(out, "    md5 = Digest::MD5.hexdigest(content)")?;
            writeln!(out, "    expect(md5).to eq('{digest:x}')")?;
        } else {
            // The literal starts in column 0 so indentation is not added to the content.
            writeln!(out, "    [")?;
            writeln!(out, "\"{}\",", self.escapes.apply(content))?;
            writeln!(
                out,
                "    ].map {{ |text| text.split(\"\\n\") }}.each do |lines|"
            )?;
            writeln!(out, "      verify_contents(catalogue, '{title}', lines)")?;
            writeln!(out, "    end")?;
        }
        writeln!(out, "  end")?;
        writeln!(out)?;
        Ok(())
    }

    fn tail(&self, out: &mut String) -> Result<()> {
        if self.options.only_include.is_empty() {
            let stem = ruby::escape_single(&catalog_file_stem(self.root.name_or_blank()));
            writeln!(out, "  it 'should write a compiled catalog' do")?;
            writeln!(out, "    is_expected.to compile.with_all_deps")?;
            writeln!(out, "    File.write(")?;
            writeln!(out, "      '{COMPILED_CATALOG_DIR}/{stem}.json',")?;
            writeln!(out, "      PSON.pretty_generate(catalogue)")?;
            writeln!(out, "    )")?;
            writeln!(out, "  end")?;
        }
        writeln!(out, "end")?;
        Ok(())
    }
}

fn ensures_plain_file(resource: &Resource) -> bool {
    match resource.parameter(ENSURE_PARAM) {
        None => true,
        Some(Value::String(ensure)) => ensure == "file" || ensure == "present",
        Some(_) => false,
    }
}

/// Right-hand side of a `'param' => ...` line; scalars compare as strings.
fn expected_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(ruby::single_quoted(s)),
        Value::Bool(_) | Value::Number(_) => Some(ruby::single_quoted(&value.to_string())),
        Value::Array(_) | Value::Object(_) => Some(ruby::inspect(value)),
    }
}
