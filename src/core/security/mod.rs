// Security module for manifest path validation
//
// Manifest tools are read from a configured directory; these checks keep
// every manifest read inside that directory.

pub mod path_validator;

pub use path_validator::{PathSecurityError, validate_manifest_path};
