use std::path::Path;

use data_encoding::HEXLOWER_PERMISSIVE;
use serde::Deserialize;

use crate::artifact::read_artifact;
use crate::error::{ResolveError, Result};

/// Plutus language version the script should be attached under. The version
/// is part of the on-chain script hash domain, so getting it wrong produces
/// a different (and unfunded) script address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlutusVersion {
    V1,
    V2,
}

/// A contract script artifact: the (lowercased) hex payload, the decoded
/// bytes, and the inferred Plutus version.
#[derive(Debug)]
pub struct ScriptArtifact {
    pub cbor_hex: String,
    pub bytes: Vec<u8>,
    pub version: PlutusVersion,
}

/// JSON shape of a script artifact. `cborHex` carries the serialized script;
/// the other fields are optional version hints emitted by various tools.
#[derive(Deserialize)]
struct ScriptEnvelope {
    #[serde(rename = "cborHex")]
    cbor_hex: Option<String>,
    #[serde(rename = "type")]
    type_tag: Option<String>,
    #[serde(rename = "typeName")]
    type_name: Option<String>,
    #[serde(rename = "plutusVersion")]
    plutus_version: Option<String>,
}

impl ScriptArtifact {
    /// Parses a script artifact stored either as a bare hex string or as a
    /// JSON envelope with a `cborHex` field and optional version hints.
    pub fn load(path: &Path) -> Result<ScriptArtifact> {
        let content = read_artifact(path)?;

        let (hex, hints) = match serde_json::from_str::<ScriptEnvelope>(&content) {
            Ok(envelope) => {
                let hex = match envelope.cbor_hex {
                    Some(hex) if !hex.trim().is_empty() => hex.trim().to_owned(),
                    _ => {
                        return Err(ResolveError::malformed(
                            path,
                            "JSON script artifact has no `cborHex` field",
                        ))
                    }
                };
                let hints: Vec<String> = [
                    envelope.type_tag,
                    envelope.type_name,
                    envelope.plutus_version,
                ]
                .into_iter()
                .flatten()
                .collect();
                (hex, hints)
            }
            // Not JSON: the whole trimmed file is the hex payload, and no
            // version hint is available.
            Err(_) => (content.trim().to_owned(), Vec::new()),
        };

        let cbor_hex = hex.to_ascii_lowercase();
        let bytes = HEXLOWER_PERMISSIVE
            .decode(hex.as_bytes())
            .map_err(|err| ResolveError::malformed(path, format!("invalid script hex: {}", err)))?;

        if bytes.is_empty() {
            return Err(ResolveError::malformed(path, "script hex decodes to zero bytes"));
        }

        Ok(ScriptArtifact {
            cbor_hex,
            bytes,
            version: infer_plutus_version(&hints),
        })
    }
}

/// Infers the Plutus version from artifact hint fields.
///
/// The rule is textual containment: any hint containing "v2" in any case
/// selects V2, everything else (including the absence of any hint) silently
/// defaults to V1. Kept as a single pure function so the exact matching rule
/// stays auditable in one place.
pub fn infer_plutus_version<S: AsRef<str>>(hints: &[S]) -> PlutusVersion {
    if hints
        .iter()
        .any(|hint| hint.as_ref().to_ascii_lowercase().contains("v2"))
    {
        PlutusVersion::V2
    } else {
        PlutusVersion::V1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_artifact(content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("script-{}.artifact", uuid::Uuid::new_v4()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn hint_containment_selects_v2() {
        assert_eq!(infer_plutus_version(&["PlutusV2"]), PlutusVersion::V2);
        assert_eq!(infer_plutus_version(&["plutus-v2-script"]), PlutusVersion::V2);
        assert_eq!(infer_plutus_version(&["PLUTUSV2"]), PlutusVersion::V2);
        // Containment, not exact match: "v20" matches too.
        assert_eq!(infer_plutus_version(&["v20"]), PlutusVersion::V2);
    }

    #[test]
    fn no_v2_hint_defaults_to_v1() {
        assert_eq!(infer_plutus_version(&["PlutusScriptV1"]), PlutusVersion::V1);
        assert_eq!(infer_plutus_version::<&str>(&[]), PlutusVersion::V1);
        assert_eq!(infer_plutus_version(&["simple"]), PlutusVersion::V1);
    }

    #[test]
    fn raw_hex_artifact_is_normalized_and_defaults_to_v1() {
        let path = temp_artifact("  4E4D01000033222220051200120011\n");
        let artifact = ScriptArtifact::load(&path).unwrap();
        assert_eq!(artifact.cbor_hex, "4e4d01000033222220051200120011");
        assert_eq!(artifact.bytes.len(), 15);
        assert_eq!(artifact.version, PlutusVersion::V1);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn json_artifact_with_type_hint_infers_v2() {
        let path = temp_artifact(
            r#"{"cborHex": "4e4d01000033222220051200120011", "type": "PlutusScriptV2"}"#,
        );
        let artifact = ScriptArtifact::load(&path).unwrap();
        assert_eq!(artifact.version, PlutusVersion::V2);
        assert_eq!(artifact.cbor_hex, "4e4d01000033222220051200120011");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn json_artifact_with_plutus_version_hint() {
        let path =
            temp_artifact(r#"{"cborHex": "4e4d0100", "plutusVersion": "v2", "typeName": "x"}"#);
        let artifact = ScriptArtifact::load(&path).unwrap();
        assert_eq!(artifact.version, PlutusVersion::V2);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn json_artifact_without_cbor_hex_is_malformed() {
        let path = temp_artifact(r#"{"type": "PlutusScriptV2"}"#);
        let err = ScriptArtifact::load(&path).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ResolveError::ArtifactMalformed { .. }
        ));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn empty_cbor_hex_is_malformed() {
        let path = temp_artifact(r#"{"cborHex": ""}"#);
        assert!(ScriptArtifact::load(&path).is_err());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn odd_length_hex_is_malformed() {
        let path = temp_artifact("4e4d0");
        assert!(ScriptArtifact::load(&path).is_err());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_not_found() {
        let path = PathBuf::from("/nonexistent/script.plutus");
        let err = ScriptArtifact::load(&path).unwrap_err();
        match err {
            crate::error::ResolveError::ArtifactNotFound { path: p } => {
                assert_eq!(p, path);
            }
            other => panic!("expected ArtifactNotFound, got {}", other),
        }
    }
}
