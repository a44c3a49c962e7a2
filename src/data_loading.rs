//! Reading `people.csv`, `movies.csv` and `stars.csv` into a [`Dataset`].

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::dataset::{Dataset, DatasetBuilder};
use crate::error::LoadError;

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    #[serde(deserialize_with = "csv::invalid_option")]
    birth: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    year: u16,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Fail on star rows that name an unknown person or movie instead of
    /// skipping them.
    pub strict: bool,
}

#[derive(Debug)]
pub struct Loaded {
    pub dataset: Dataset,
    pub skipped_stars: usize,
}

/// Reads a CSV file with a header row. Each row comes back with its line number.
fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<(u64, T)>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_error = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map_or(0, csv::Position::line);
        let row = record.deserialize(Some(&headers)).map_err(csv_error)?;
        rows.push((line, row));
    }
    Ok(rows)
}

pub fn load_data(directory: &Path, options: LoadOptions) -> Result<Loaded, LoadError> {
    info!(directory = %directory.display(), "loading data");
    let mut builder = DatasetBuilder::new();

    for (_, row) in read_rows::<PersonRow>(&directory.join("people.csv"))? {
        builder.add_person(&row.id, &row.name, row.birth);
    }

    for (_, row) in read_rows::<MovieRow>(&directory.join("movies.csv"))? {
        builder.add_movie(&row.id, &row.title, row.year);
    }

    let stars_path = directory.join("stars.csv");
    let mut linked = 0usize;
    let mut skipped_stars = 0;
    for (line, row) in read_rows::<StarRow>(&stars_path)? {
        match builder.add_star(&row.person_id, &row.movie_id) {
            Ok(()) => linked += 1,
            Err(source) if options.strict => {
                return Err(LoadError::MalformedStar {
                    path: stars_path,
                    line,
                    source,
                });
            }
            Err(reason) => {
                debug!(path = %stars_path.display(), line, %reason, "skipping star row");
                skipped_stars += 1;
            }
        }
    }
    if skipped_stars > 0 {
        warn!(skipped_stars, "skipped star rows that reference unknown people or movies");
    }

    let dataset = builder.build();
    info!(
        people = dataset.people_count(),
        movies = dataset.movie_count(),
        stars = linked,
        "data loaded"
    );
    Ok(Loaded {
        dataset,
        skipped_stars,
    })
}
