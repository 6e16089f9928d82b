use serde_yaml::Value;
use snafu::ResultExt;

use crate::{
    ComposeDocument,
    error::{self, Error},
};

impl ComposeDocument {
    /// Encodes the document as block-style YAML.
    ///
    /// Parsing the output yields a document equal to `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the YAML emitter fails.
    pub fn to_yaml(&self) -> Result<String, Error> {
        serde_yaml::to_string(&Value::Mapping(self.to_mapping())).context(error::EncodeSnafu)
    }
}
