use schemars::JsonSchema;
use schemars::json_schema;

use crate::{Bit, Bitset};

impl JsonSchema for Bit {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        std::borrow::Cow::Borrowed("Bit")
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        json_schema!({
            "type": "string",
            "description": "A single binary digit.",
            "enum": ["0", "1"]
        })
    }
}

impl JsonSchema for Bitset {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        std::borrow::Cow::Borrowed("Bitset")
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        json_schema!({
            "type": "string",
            "description": "A sequence of binary digits, leftmost digit first, optionally in brackets. \
                            Whitespace, ',' and '_' between digits are ignored when reading.",
            "pattern": "^\\s*(\\[[01,_\\s]*\\]|[01,_\\s]*)\\s*$",
            "examples": ["", "0110", "1111_0000", "[0110]"]
        })
    }
}
