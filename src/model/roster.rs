use super::Student;
use crate::error::FetchError;
use serde::Deserialize;
use serde_json::Value;

/// Status value announcing a usable payload.
pub const SUCCESS: &str = "success";

/// Envelope returned by the roster endpoint, once its status has been
/// checked to be [`SUCCESS`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RosterResponse {
    pub data: Vec<Student>,
}

impl RosterResponse {
    /// Check the shape of a decoded payload and extract the envelope.
    ///
    /// The payload is accepted only if it is an object whose `status` is
    /// `"success"` and whose `data` is an array of well-formed students.
    /// Any other status is rejected without looking at what the endpoint
    /// may have said about it.
    pub fn validate(payload: &Value) -> Result<Self, FetchError> {
        let Some(envelope) = payload.as_object() else {
            return Err(invalid("payload is not an object"));
        };
        match envelope.get("status").and_then(Value::as_str) {
            Some(SUCCESS) => (),
            Some(other) => return Err(invalid(format!("unexpected status {other:?}"))),
            None => return Err(invalid("missing status")),
        }
        let Some(data) = envelope.get("data").and_then(Value::as_array) else {
            return Err(invalid("data is missing or is not an array"));
        };
        let data = data
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                Student::deserialize(entry)
                    .map_err(|e| invalid(format!("student at index {idx}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { data })
    }

    pub fn into_students(self) -> Vec<Student> {
        self.data
    }
}

fn invalid(reason: impl Into<String>) -> FetchError {
    FetchError::InvalidShape(reason.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn student(id: &str) -> Value {
        json!({"id": id, "nim": format!("22010{id}"), "nama": format!("Student {id}"), "kelas": "SI-B", "points": null})
    }

    fn is_invalid(payload: &Value) -> bool {
        matches!(
            RosterResponse::validate(payload),
            Err(FetchError::InvalidShape(_))
        )
    }

    #[test]
    fn accept_success_envelope() {
        let payload = json!({"status": "success", "data": [student("1"), student("2")], "count": 2});
        let ids = RosterResponse::validate(&payload)
            .unwrap()
            .into_students()
            .iter()
            .map(|s| s.id.to_string())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn accept_empty_data() {
        let payload = json!({"status": "success", "data": []});
        assert!(RosterResponse::validate(&payload).unwrap().into_students().is_empty());
    }

    #[test]
    fn reject_error_status() {
        assert!(is_invalid(&json!({"status": "error", "data": []})));
        assert!(is_invalid(&json!({"status": "error", "data": [student("1")], "message": "db down"})));
        assert!(is_invalid(&json!({"status": "SUCCESS", "data": []})));
        assert!(is_invalid(&json!({"status": true, "data": []})));
        assert!(is_invalid(&json!({"data": []})));
    }

    #[test]
    fn reject_non_array_data() {
        assert!(is_invalid(&json!({"status": "success"})));
        assert!(is_invalid(&json!({"status": "success", "data": null})));
        assert!(is_invalid(&json!({"status": "success", "data": {"0": student("1")}})));
        assert!(is_invalid(&json!({"status": "success", "data": "[]"})));
    }

    #[test]
    fn reject_non_object_payload() {
        assert!(is_invalid(&json!([student("1")])));
        assert!(is_invalid(&json!("success")));
        assert!(is_invalid(&json!(null)));
    }

    #[test]
    fn reject_bad_entry() {
        let payload = json!({"status": "success", "data": [student("1"), {"id": "2"}]});
        match RosterResponse::validate(&payload) {
            Err(FetchError::InvalidShape(reason)) => assert!(reason.contains("index 1"), "{reason}"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn validation_is_idempotent() {
        for payload in [
            json!({"status": "success", "data": [student("1")]}),
            json!({"status": "error", "data": []}),
            json!({"status": "success", "data": 3}),
        ] {
            let first = RosterResponse::validate(&payload).ok();
            let second = RosterResponse::validate(&payload).ok();
            assert_eq!(first, second);
        }
    }
}
