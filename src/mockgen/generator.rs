use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::mockgen::types::{CType, FunctionSpec, SignatureFile};

pub struct MockGenerator;

impl MockGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Renders the complete mock scaffolding header: the `mock_param_e`
    /// control enum, one mock struct per formal parameter, and one mock
    /// prototype per function. Output is deterministic, in file order.
    pub fn render_header(&self, signatures: &SignatureFile) -> String {
        let mut header = String::from("#pragma once\n\n");

        header.push_str("enum mock_param_e {\n");
        header.push_str("    MOCK_PARAM_IGNORE,\n");
        header.push_str("    MOCK_PARAM_CHECK\n");
        header.push_str("};\n");

        for function in &signatures.functions {
            for (index, param) in function.params.iter().enumerate() {
                let _ = write!(
                    header,
                    "\nstruct {} {{\n    {} value;\n    enum mock_param_e mock_param;\n}};\n",
                    param_struct_name(function, index),
                    param.ctype.c_name()
                );
            }
        }

        header.push('\n');
        for function in &signatures.functions {
            header.push_str(&self.mock_prototype(function));
            header.push('\n');
        }

        header
    }

    /// The mock entry point takes every parameter wrapped in its mock struct,
    /// plus a trailing `ret_value` unless the function returns void.
    fn mock_prototype(&self, function: &FunctionSpec) -> String {
        let mut args: Vec<String> = function
            .params
            .iter()
            .enumerate()
            .map(|(index, _)| {
                format!("struct {} param{}", param_struct_name(function, index), index)
            })
            .collect();

        if function.return_type != CType::Void {
            args.push(format!("{} ret_value", function.return_type.c_name()));
        }

        let args = if args.is_empty() {
            "void".to_string()
        } else {
            args.join(", ")
        };

        format!("{} {}({});", function.return_type.c_name(), function.name, args)
    }

    /// Plain C prototype listing, one line per function, parameter names
    /// falling back to `param{index}` when the signature file omits them.
    pub fn render_prototypes(&self, signatures: &SignatureFile) -> String {
        let mut output = String::new();
        for function in &signatures.functions {
            let params = if function.params.is_empty() {
                "void".to_string()
            } else {
                function
                    .params
                    .iter()
                    .enumerate()
                    .map(|(index, param)| {
                        format!("{} {}", param.ctype.c_name(), param.display_name(index))
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let _ = writeln!(
                output,
                "{} {}({});",
                function.return_type.c_name(),
                function.name,
                params
            );
        }
        output
    }

    pub fn write_header(&self, signatures: &SignatureFile, path: &Path) -> Result<()> {
        let header = self.render_header(signatures);
        fs::write(path, &header)?;
        info!("Mock header written to {}", path.display());
        Ok(())
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn param_struct_name(function: &FunctionSpec, index: usize) -> String {
    format!("mock_{}_param{}", function.name, index)
}
