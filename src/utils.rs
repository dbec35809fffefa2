// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0
//! # Utilities
use std::collections::HashMap;

use thiserror::Error;

/// URL template formatting error.
#[derive(Error, Debug, PartialEq)]
pub enum FormatUrlError {
    /// Placeholder has no value.
    #[error("no value for the {0} placeholder")]
    MissingKey(String),

    /// Placeholder is not terminated.
    #[error("unterminated placeholder in {0}")]
    MalformedTemplate(String),
}

/// Expand the `$(name)` placeholders of the catalog URL template.
///
/// Every placeholder is replaced by the value of `name`. Text following the
/// closing parenthesis is kept as is, so `$(tenant_id)s/foo` with `tenant_id`
/// `abc` gives `abcs/foo`.
pub fn format_url<S: AsRef<str>>(
    template: &str,
    values: &HashMap<String, S>,
) -> Result<String, FormatUrlError> {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("$(") {
        result.push_str(&rest[..start]);
        let placeholder = &rest[start + 2..];
        let end = placeholder
            .find(')')
            .ok_or_else(|| FormatUrlError::MalformedTemplate(template.to_string()))?;
        let name = &placeholder[..end];
        let value = values
            .get(name)
            .ok_or_else(|| FormatUrlError::MissingKey(name.to_string()))?;
        result.push_str(value.as_ref());
        rest = &placeholder[end + 1..];
    }
    result.push_str(rest);
    Ok(result)
}
