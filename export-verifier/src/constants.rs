//! Constants used when exporting verifier contracts

/// The substring marking the declaration of the verifying key function in a
/// generated verifier. Extraction starts on the line after it.
pub const VKEY_FN_ANCHOR: &str = "function verifyingKey() internal";

/// The text preceding the index in the final `IC` point initialization
pub const IC_ANCHOR_PREFIX: &str = "vk.IC[";

/// The text following the index in the final `IC` point initialization
pub const IC_ANCHOR_SUFFIX: &str = "] = Pairing.G1Point(";

/// The number of lines spanned by an `IC` point initialization statement,
/// including the line holding the anchor
pub const IC_STATEMENT_NUM_LINES: usize = 4;

/// The comment in a verifier template replaced by the verifying key
pub const VKEY_PLACEHOLDER: &str = "// VERIFYING_KEY";

/// The name of the pairing library in generated verifiers
pub const SOURCE_LIBRARY_NAME: &str = "Pairing";

/// The name of the pairing library in exported verifiers
pub const TARGET_LIBRARY_NAME: &str = "ProofLib";

/// The default project root
pub const DEFAULT_ROOT_DIR: &str = ".";

/// The directory, relative to the project root, holding generated verifiers
pub const SOURCE_VERIFIER_DIR: &str = "circuits/out";

/// The directory, relative to the project root, holding verifier templates
pub const TEMPLATE_DIR: &str = "circuits/verifier_templates";

/// The directory, relative to the project root, receiving exported verifiers
pub const OUTPUT_VERIFIER_DIR: &str = "contracts/verifiers";

/// The file name suffix of generated and exported verifiers
pub const VERIFIER_FILE_SUFFIX: &str = "_verifier.sol";

/// The file name suffix of verifier templates
pub const TEMPLATE_FILE_SUFFIX: &str = "_verifier_template.sol";
