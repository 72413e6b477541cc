//! Rendering of verifier templates

use tracing::{debug, warn};

use crate::constants::{SOURCE_LIBRARY_NAME, TARGET_LIBRARY_NAME, VKEY_PLACEHOLDER};

/// The substitutions applied when rendering a verifier template
#[derive(Debug, Clone)]
pub struct TemplateConfig {
    /// The marker in the template replaced by the verifying key
    pub placeholder: String,
    /// The library identifier to rename
    pub source_library: String,
    /// The identifier the library is renamed to
    pub target_library: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            placeholder: VKEY_PLACEHOLDER.to_string(),
            source_library: SOURCE_LIBRARY_NAME.to_string(),
            target_library: TARGET_LIBRARY_NAME.to_string(),
        }
    }
}

/// Fill in a verifier template with a verifying key block.
///
/// The first occurrence of the placeholder is replaced by `vkey` verbatim,
/// after which the library is renamed throughout the whole contract,
/// including within the inserted block.
pub fn render_verifier(template: &str, vkey: &str, config: &TemplateConfig) -> String {
    let num_placeholders = template.matches(config.placeholder.as_str()).count();
    match num_placeholders {
        0 => warn!(
            placeholder = %config.placeholder,
            "placeholder not found in template, verifying key not inserted"
        ),
        1 => {}
        n => warn!(
            placeholder = %config.placeholder,
            occurrences = n,
            "placeholder appears more than once in template, only the first is replaced"
        ),
    }

    let filled = template.replacen(config.placeholder.as_str(), vkey, 1);

    debug!(
        from = %config.source_library,
        to = %config.target_library,
        occurrences = filled.matches(config.source_library.as_str()).count(),
        "renaming library"
    );
    filled.replace(
        config.source_library.as_str(),
        config.target_library.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::{render_verifier, TemplateConfig};

    /// A template in the shape the verifier templates take
    const TEMPLATE: &str = "import {Pairing} from \"./Pairing.sol\";\n\
        contract Verifier {\n\
        \x20   function verifyingKey() internal pure returns (VerifyingKey memory vk) {\n\
        // VERIFYING_KEY\n\
        \x20   }\n\
        }\n";

    #[test]
    fn test_placeholder_replaced_and_library_renamed() {
        let vkey = "        vk.IC[0] = Pairing.G1Point(\n            1,\n            2\n        );\n";
        let out = render_verifier(TEMPLATE, vkey, &TemplateConfig::default());

        assert!(!out.contains("// VERIFYING_KEY"));
        assert!(!out.contains("Pairing"));
        assert!(out.contains("import {ProofLib} from \"./ProofLib.sol\";\n"));
        assert!(out.contains("vk.IC[0] = ProofLib.G1Point(\n            1,\n"));
        assert!(out.ends_with("        );\n\n    }\n}\n"));
    }

    #[test]
    fn test_only_first_placeholder_replaced() {
        let template = "a\n// VERIFYING_KEY\nb\n// VERIFYING_KEY\n";
        let out = render_verifier(template, "key\n", &TemplateConfig::default());
        assert_eq!(out, "a\nkey\n\nb\n// VERIFYING_KEY\n");
    }

    #[test]
    fn test_missing_placeholder_leaves_template() {
        let template = "library Pairing {}\n";
        let out = render_verifier(template, "key\n", &TemplateConfig::default());
        assert_eq!(out, "library ProofLib {}\n");
    }

    #[test]
    fn test_custom_substitutions() {
        let config = TemplateConfig {
            placeholder: "/* VK */".to_string(),
            source_library: "Pairing".to_string(),
            target_library: "Bn254".to_string(),
        };
        let out = render_verifier("x /* VK */ y", "Pairing.P()", &config);
        assert_eq!(out, "x Bn254.P() y");
    }
}
