use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Label shown in place of missing points.
pub const MISSING_POINTS: &str = "Tidak tersedia";

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct StudentId(pub String);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Student {
    pub id: StudentId,
    pub nim: String,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "kelas")]
    pub class: String,
    #[serde(default, deserialize_with = "deserialize_points")]
    pub points: Option<String>,
}

impl Student {
    pub fn new(id: &str, nim: &str, name: &str, class: &str, points: Option<&str>) -> Self {
        Self {
            id: StudentId(id.to_owned()),
            nim: nim.to_owned(),
            name: name.to_owned(),
            class: class.to_owned(),
            points: points.map(String::from),
        }
    }

    /// Points as displayed, falling back to [`MISSING_POINTS`] when the
    /// roster has nothing (or an empty string) for this student.
    pub fn points_label(&self) -> &str {
        match self.points.as_deref() {
            Some(points) if !points.is_empty() => points,
            _ => MISSING_POINTS,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.nim)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Points {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_points<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<Points>::deserialize(deserializer)?.map(|points| match points {
            Points::Text(s) => s,
            Points::Number(n) => n.to_string(),
        }),
    )
}
