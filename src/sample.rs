use crate::error::FetchError;
use crate::loader::Loader;
use crate::model::Student;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use tracing::trace;
use url::Url;

/// Pick `count` distinct students at random, or all of them if the roster
/// is smaller. The roster itself is left untouched.
pub fn choose<R: Rng + ?Sized>(students: &[Student], count: usize, rng: &mut R) -> Vec<Student> {
    let mut sample = students
        .choose_multiple(rng, count)
        .cloned()
        .collect::<Vec<_>>();
    // choose_multiple keeps selection order partly tied to the roster.
    sample.shuffle(rng);
    for student in &sample {
        trace!(student = %student, id = %student.id, "student has been sampled");
    }
    sample
}

/// Fetch the roster at `endpoint` and return a random sample of it.
pub async fn sample(endpoint: &Url, count: usize) -> Result<Vec<Student>, FetchError> {
    Loader::new(endpoint.clone()).sample(count).await
}
