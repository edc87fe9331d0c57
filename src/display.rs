use crate::model::Student;

pub fn render_sample(students: &[Student]) -> String {
    if students.is_empty() {
        return "The roster is empty.\n".to_owned();
    }
    let entries = students
        .iter()
        .map(|s| {
            format!(
                "NIM: {}\nNama: {}\nKelas: {}\nPoints: {}\n\n",
                s.nim,
                s.name,
                s.class,
                s.points_label()
            )
        })
        .collect::<String>();
    format!(
        "Here are {} randomly chosen students from the roster:\n\n{entries}",
        students.len()
    )
}

pub fn display_sample(students: &[Student]) {
    print!("{}", render_sample(students));
}

pub fn display_json(students: &[Student]) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(students)?);
    Ok(())
}
