/// System role sent with every generation request.
pub const SYSTEM_PROMPT: &str = "You are an expert test data generator.";

/// The composed prompt for one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureRequest {
    pub prompt: String,
}

/// Compose the generation prompt. Schema and rules are embedded verbatim.
pub fn build_prompt(schema: &str, rules: &str) -> FixtureRequest {
    let prompt = format!(
        r#"
You are an expert test data generator.

Your task:
1. Read the GraphQL schema.
2. Read the validation rules.
3. Generate two sets of JSON:
   - ValidData (follows rules)
   - InvalidData (violates rules)

Output strictly as JSON with this format:
{{
  "ValidData": {{ ... }},
  "InvalidData": {{ ... }}
}}

Schema:
<<<
{schema}
>>>

Validation Rules:
<<<
{rules}
>>>
"#
    );
    FixtureRequest { prompt }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_both_documents_between_delimiters() {
        let req = build_prompt("type User { id: ID! }", "User:\n  - id: required");
        assert!(
            req.prompt
                .contains("Schema:\n<<<\ntype User { id: ID! }\n>>>")
        );
        assert!(
            req.prompt
                .contains("Validation Rules:\n<<<\nUser:\n  - id: required\n>>>")
        );
    }

    #[test]
    fn states_output_contract() {
        let req = build_prompt("", "");
        assert!(req.prompt.contains("Output strictly as JSON"));
        assert!(req.prompt.contains(r#""ValidData": { ... }"#));
        assert!(req.prompt.contains(r#""InvalidData": { ... }"#));
        assert!(req.prompt.contains("ValidData (follows rules)"));
        assert!(req.prompt.contains("InvalidData (violates rules)"));
    }

    #[test]
    fn does_not_escape_content() {
        let schema = "\"quoted\" {braces} <<<nested>>>";
        let req = build_prompt(schema, "");
        assert!(req.prompt.contains(schema));
    }
}
