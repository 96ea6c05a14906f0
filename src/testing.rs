//! Daemon payloads shared by the unit tests.

pub(crate) const APP_PERMISSIONS_JSON: &str = r#"
{
  "type": "sync",
  "status-code": 200,
  "status": "OK",
  "result":
    {
      "experimental":
        {
          "apparmor-prompting": %v
        }
    }
}
"#;

pub(crate) const CUSTOM_RULES_JSON: &str = r#"
{"type":"sync","status-code":200,"status":"OK","result":[{"id":"C7JGESQZTWTSS===","timestamp":"2024-05-24T09:21:18.378444585Z","user":1000,"snap":"simple-notepad","interface":"home","constraints":{"path-pattern":"/home/ubuntu/.config/fobar","permissions":["read","write"]},"outcome":"allow","lifespan":"forever","expiration":"0001-01-01T00:00:00Z"},{"id":"C7JHBW7E7Q7PO===","timestamp":"2024-05-24T13:48:17.723465463Z","user":1000,"snap":"simple-notepad","interface":"home","constraints":{"path-pattern":"/home/ubuntu/Documents/fobar","permissions":["read","write"]},"outcome":"allow","lifespan":"forever","expiration":"0001-01-01T00:00:00Z"}]}
"#;

pub(crate) const NO_CUSTOM_RULES_JSON: &str = r#"
{"type":"sync","status-code":200,"status":"OK","result":[]}
"#;

pub(crate) const ERROR_JSON: &str = r#"
{"type":"error","status-code":403,"status":"Forbidden","result":{"message":"access denied","kind":"login-required"}}
"#;

/// The prompting-state payload with the flag set to `enabled`.
pub(crate) fn app_permissions_json(enabled: bool) -> String {
    APP_PERMISSIONS_JSON.replace("%v", &enabled.to_string())
}

/// A single `simple-notepad` home rule.
pub(crate) fn sample_rule_json(id: &str, path: &str, expiration: &str) -> String {
    format!(
        r#"{{"id":"{id}","timestamp":"2024-05-24T09:21:18.378444585Z","user":1000,"snap":"simple-notepad","interface":"home","constraints":{{"path-pattern":"{path}","permissions":["read","write"]}},"outcome":"allow","lifespan":"forever","expiration":"{expiration}"}}"#
    )
}
