use jdkwatch_core::UpdateError;
use serde_json::Value;

/// Location of the runtime name enumeration inside a configuration block.
const RUNTIME_NAMES_POINTER: &str =
    "/properties/java.configuration.runtimes/items/properties/name/enum";

/// One entry of `contributes.configuration`.
#[derive(Debug)]
pub struct ConfigurationBlock<'a> {
    value: &'a mut Value,
}

impl ConfigurationBlock<'_> {
    #[must_use]
    pub fn id(&self) -> &str {
        block_id(&*self.value).unwrap_or_default()
    }

    /// # Errors
    /// Returns [`UpdateError::RuntimeEnumNotFound`] if the block does not declare
    /// an enumerated runtime name.
    pub fn runtime_names_mut(&mut self) -> Result<&mut Vec<Value>, UpdateError> {
        let id = self.id().to_string();
        self.value
            .pointer_mut(RUNTIME_NAMES_POINTER)
            .and_then(Value::as_array_mut)
            .ok_or(UpdateError::RuntimeEnumNotFound(id))
    }
}

fn block_id(value: &Value) -> Option<&str> {
    value.get("id").and_then(Value::as_str)
}

/// Looks up the configuration block whose `id` equals `id`.
///
/// `contributes.configuration` may be a list of blocks or a single block.
///
/// # Errors
/// Returns [`UpdateError::ConfigurationBlockNotFound`] if no block matches.
pub fn find_configuration_block<'a>(
    manifest: &'a mut Value,
    id: &str,
) -> Result<ConfigurationBlock<'a>, UpdateError> {
    let not_found = || UpdateError::ConfigurationBlockNotFound(id.to_string());
    let configuration = manifest
        .pointer_mut("/contributes/configuration")
        .ok_or_else(not_found)?;
    let block = match configuration {
        Value::Array(blocks) => blocks.iter_mut().find(|block| block_id(block) == Some(id)),
        other => Some(other).filter(|block| block_id(block) == Some(id)),
    };
    block
        .map(|value| ConfigurationBlock { value })
        .ok_or_else(not_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn runtimes_block(id: &str) -> Value {
        json!({
            "id": id,
            "properties": {
                "java.configuration.runtimes": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string", "enum": ["JavaSE-11", "JavaSE-17"] }
                        }
                    }
                }
            }
        })
    }

    #[rstest]
    #[case(json!({ "contributes": { "configuration": [
        { "id": "java-startup" }, runtimes_block("java-jdks"), { "id": "java-format" }
    ] } }))]
    #[case(json!({ "contributes": { "configuration": runtimes_block("java-jdks") } }))]
    fn test_find_configuration_block(#[case] mut manifest: Value) {
        let mut block = find_configuration_block(&mut manifest, "java-jdks").unwrap();
        assert_eq!(block.id(), "java-jdks");
        assert_eq!(block.runtime_names_mut().unwrap().len(), 2);
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({ "contributes": {} }))]
    #[case(json!({ "contributes": { "configuration": [] } }))]
    #[case(json!({ "contributes": { "configuration": [{ "id": "java-startup" }, { "title": "no id" }] } }))]
    #[case(json!({ "contributes": { "configuration": runtimes_block("java-startup") } }))]
    #[case(json!({ "contributes": { "configuration": "java-jdks" } }))]
    fn test_find_configuration_block_missing(#[case] mut manifest: Value) {
        let result = find_configuration_block(&mut manifest, "java-jdks");
        assert!(matches!(
            result,
            Err(UpdateError::ConfigurationBlockNotFound(id)) if id == "java-jdks"
        ));
    }

    #[test]
    fn test_runtime_names_missing() {
        let mut manifest = json!({ "contributes": { "configuration": [
            { "id": "java-jdks", "properties": { "java.configuration.runtimes": { "type": "array" } } }
        ] } });
        let mut block = find_configuration_block(&mut manifest, "java-jdks").unwrap();
        assert!(matches!(
            block.runtime_names_mut(),
            Err(UpdateError::RuntimeEnumNotFound(id)) if id == "java-jdks"
        ));
    }

    #[test]
    fn test_runtime_names_mut_edits_in_place() {
        let mut manifest = json!({ "contributes": { "configuration": [runtimes_block("java-jdks")] } });
        find_configuration_block(&mut manifest, "java-jdks")
            .unwrap()
            .runtime_names_mut()
            .unwrap()
            .push(json!("JavaSE-21"));
        assert_eq!(
            manifest.pointer(&format!("/contributes/configuration/0{RUNTIME_NAMES_POINTER}")),
            Some(&json!(["JavaSE-11", "JavaSE-17", "JavaSE-21"]))
        );
    }
}
