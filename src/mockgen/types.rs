use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// C scalar types the generator knows how to place in a mock struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CType {
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int8,
    Int16,
    Int32,
    Int64,
    Int,
    UnsignedInt,
    Char,
    Bool,
    Float,
    Double,
    Void,
}

impl CType {
    /// Canonical C spelling, as it appears in generated headers.
    pub fn c_name(&self) -> &'static str {
        match self {
            CType::Uint8 => "uint8_t",
            CType::Uint16 => "uint16_t",
            CType::Uint32 => "uint32_t",
            CType::Uint64 => "uint64_t",
            CType::Int8 => "int8_t",
            CType::Int16 => "int16_t",
            CType::Int32 => "int32_t",
            CType::Int64 => "int64_t",
            CType::Int => "int",
            CType::UnsignedInt => "unsigned int",
            CType::Char => "char",
            CType::Bool => "bool",
            CType::Float => "float",
            CType::Double => "double",
            CType::Void => "void",
        }
    }
}

impl FromStr for CType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "uint8_t" => Ok(CType::Uint8),
            "uint16_t" => Ok(CType::Uint16),
            "uint32_t" => Ok(CType::Uint32),
            "uint64_t" => Ok(CType::Uint64),
            "int8_t" => Ok(CType::Int8),
            "int16_t" => Ok(CType::Int16),
            "int32_t" => Ok(CType::Int32),
            "int64_t" => Ok(CType::Int64),
            "int" | "signed int" => Ok(CType::Int),
            "unsigned int" | "unsigned" => Ok(CType::UnsignedInt),
            "char" => Ok(CType::Char),
            "bool" | "_Bool" => Ok(CType::Bool),
            "float" => Ok(CType::Float),
            "double" => Ok(CType::Double),
            "void" => Ok(CType::Void),
            other => Err(Error::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_name())
    }
}

// Signature files spell types the C way ("uint32_t"), not the enum way.
impl Serialize for CType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.c_name())
    }
}

impl<'de> Deserialize<'de> for CType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One formal parameter. The name is optional: hand-written signature files
/// often leave it out, in which case `param{index}` is used downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ctype: CType,
}

impl ParamSpec {
    pub fn display_name(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("param{}", index),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSpec {
    pub name: String,
    #[serde(rename = "returns")]
    pub return_type: CType,
    #[serde(default)]
    pub params: Vec<ParamSpec>,
}

impl FunctionSpec {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::InvalidSignature("function name is empty".to_string()));
        }
        for (index, param) in self.params.iter().enumerate() {
            if param.ctype == CType::Void {
                return Err(Error::InvalidSignature(format!(
                    "{}: parameter {} has type void",
                    self.name, index
                )));
            }
        }
        Ok(())
    }
}

/// The on-disk document: a list of functions to scaffold mocks for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureFile {
    pub functions: Vec<FunctionSpec>,
}

impl SignatureFile {
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for function in &self.functions {
            function.validate()?;
            if !seen.insert(function.name.as_str()) {
                return Err(Error::DuplicateFunction(function.name.clone()));
            }
        }
        Ok(())
    }
}
