use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::mockgen::types::SignatureFile;

pub struct SpecLoader;

impl SpecLoader {
    pub fn new() -> Self {
        Self
    }

    /// Reads and validates one signature file, dispatching the parser on the
    /// file extension. A file that cannot be read or parsed is a hard error:
    /// generated code must never come from a half-read signature file.
    pub fn load(&self, path: &Path) -> Result<SignatureFile> {
        let content = fs::read_to_string(path)?;
        let signatures = self.parse(path, &content)?;
        signatures.validate()?;
        info!(
            "Loaded {} function signature(s) from {}",
            signatures.functions.len(),
            path.display()
        );
        Ok(signatures)
    }

    fn parse(&self, path: &Path, content: &str) -> Result<SignatureFile> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        debug!("Parsing signature file {} as {}", path.display(), extension);

        match extension {
            "yaml" | "yml" => Ok(serde_yaml::from_str(content)?),
            "toml" => Ok(toml::from_str(content)?),
            "json" => Ok(serde_json::from_str(content)?),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl Default for SpecLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mockgen::types::CType;
    use std::io::Write;

    fn write_spec(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_spec(
            &dir,
            "sigs.yaml",
            r#"
functions:
  - name: fn2
    returns: uint32_t
    params:
      - name: myparam1
        type: int
      - name: myparam2
        type: char
"#,
        );

        let signatures = SpecLoader::new().load(&path).unwrap();
        assert_eq!(signatures.functions.len(), 1);
        let function = &signatures.functions[0];
        assert_eq!(function.name, "fn2");
        assert_eq!(function.return_type, CType::Uint32);
        assert_eq!(function.params.len(), 2);
        assert_eq!(function.params[1].ctype, CType::Char);
    }

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_spec(
            &dir,
            "sigs.toml",
            r#"
[[functions]]
name = "fn"
returns = "int"

[[functions.params]]
type = "uint32_t"

[[functions.params]]
type = "int8_t"
"#,
        );

        let signatures = SpecLoader::new().load(&path).unwrap();
        let function = &signatures.functions[0];
        assert_eq!(function.name, "fn");
        assert_eq!(function.params[0].ctype, CType::Uint32);
        assert_eq!(function.params[0].display_name(0), "param0");
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_spec(
            &dir,
            "sigs.json",
            r#"{"functions": [{"name": "fn1", "returns": "uint32_t", "params": [{"name": "enable", "type": "bool"}]}]}"#,
        );

        let signatures = SpecLoader::new().load(&path).unwrap();
        assert_eq!(signatures.functions[0].params[0].ctype, CType::Bool);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_spec(&dir, "sigs.ini", "functions = []");

        let err = SpecLoader::new().load(&path).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_spec(
            &dir,
            "sigs.yaml",
            r#"
functions:
  - name: fn
    returns: size_t
    params: []
"#,
        );

        assert!(SpecLoader::new().load(&path).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = SpecLoader::new()
            .load(Path::new("does-not-exist.yaml"))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
