use std::io::{self, Write};

use crate::dataset::Dataset;
use crate::search::PathStep;

/// Writes the degrees of separation and one line per movie link, or
/// `Not connected.` when there is no path.
pub fn write_path<W: Write>(
    dataset: &Dataset,
    source: &str,
    path: Option<&[PathStep]>,
    out: &mut W,
) -> io::Result<()> {
    let Some(path) = path else {
        return writeln!(out, "Not connected.");
    };

    writeln!(out, "{} degrees of separation.", path.len())?;
    let mut previous = source;
    for (i, step) in path.iter().enumerate() {
        let person1 = person_name(dataset, previous);
        let person2 = person_name(dataset, &step.person_id);
        let movie = dataset
            .movie(&step.movie_id)
            .map_or(step.movie_id.as_str(), |movie| movie.title.as_str());
        writeln!(out, "{}: {person1} and {person2} starred in {movie}", i + 1)?;
        previous = step.person_id.as_str();
    }
    Ok(())
}

fn person_name<'a>(dataset: &'a Dataset, person_id: &'a str) -> &'a str {
    dataset
        .person(person_id)
        .map_or(person_id, |person| person.name.as_str()) // fall back to the id
}
