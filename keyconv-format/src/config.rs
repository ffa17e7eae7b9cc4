use serde::{Deserialize, Serialize};

use crate::PrefixPolicy;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConvertConfig {
    #[serde(default)]
    pub prefix_policy: PrefixPolicy,
}
