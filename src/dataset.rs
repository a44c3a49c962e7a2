use std::collections::{BTreeSet, HashMap};

use crate::error::{DatasetError, SearchError};
use crate::search::{PathFinder, PathStep};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub birth: Option<u16>,
    pub movies: BTreeSet<String>, // movie ids
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub year: u16,
    pub stars: BTreeSet<String>, // person ids
}

/// Immutable in-memory store of people, movies and who starred in what.
///
/// Only [`DatasetBuilder`] can produce one, and it keeps `Person::movies` and
/// `Movie::stars` in agreement: `m` is in `people[p].movies` exactly when `p`
/// is in `movies[m].stars`.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    people: HashMap<String, Person>,
    movies: HashMap<String, Movie>,
    names: HashMap<String, BTreeSet<String>>, // lowercase name -> person ids
}

impl Dataset {
    pub fn person(&self, person_id: &str) -> Option<&Person> {
        self.people.get(person_id)
    }

    pub fn movie(&self, movie_id: &str) -> Option<&Movie> {
        self.movies.get(movie_id)
    }

    pub fn contains_person(&self, person_id: &str) -> bool {
        self.people.contains_key(person_id)
    }

    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Person ids whose name matches `name`, ignoring case.
    pub fn person_ids_for_name(&self, name: &str) -> Vec<&str> {
        self.names
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// `(movie_id, person_id)` pairs for everyone who starred in a movie with
    /// `person_id`. The person shows up as their own co-star; the search
    /// tolerates that. Unknown ids have no neighbors.
    pub fn neighbors_for_person(&self, person_id: &str) -> BTreeSet<(String, String)> {
        let mut neighbors = BTreeSet::new();
        let Some(person) = self.people.get(person_id) else {
            return neighbors;
        };
        for movie_id in &person.movies {
            if let Some(movie) = self.movies.get(movie_id) {
                for star in &movie.stars {
                    neighbors.insert((movie_id.clone(), star.clone()));
                }
            }
        }
        neighbors
    }

    /// Shortest co-star chain between two people in this dataset.
    ///
    /// Both ids must be known, otherwise [`SearchError::InputNotFound`].
    /// `Ok(None)` means the two people are not connected.
    pub fn shortest_path(
        &self,
        source: &str,
        target: &str,
    ) -> Result<Option<Vec<PathStep>>, SearchError> {
        for person_id in [source, target] {
            if !self.contains_person(person_id) {
                return Err(SearchError::InputNotFound(person_id.to_string()));
            }
        }
        PathFinder::new(|person_id: &str| self.neighbors_for_person(person_id))
            .shortest_path(source, target)
    }
}

#[derive(Debug, Default)]
pub struct DatasetBuilder {
    people: HashMap<String, Person>,
    movies: HashMap<String, Movie>,
    names: HashMap<String, BTreeSet<String>>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a person. A replaced person loses their movie links.
    pub fn add_person(&mut self, id: &str, name: &str, birth: Option<u16>) -> &mut Self {
        self.names
            .entry(name.to_lowercase())
            .or_default()
            .insert(id.to_string());
        self.people.insert(
            id.to_string(),
            Person {
                name: name.to_string(),
                birth,
                movies: BTreeSet::new(),
            },
        );
        self
    }

    /// Adds or replaces a movie. A replaced movie loses its cast.
    pub fn add_movie(&mut self, id: &str, title: &str, year: u16) -> &mut Self {
        self.movies.insert(
            id.to_string(),
            Movie {
                title: title.to_string(),
                year,
                stars: BTreeSet::new(),
            },
        );
        self
    }

    /// Records that `person_id` starred in `movie_id`, on both sides.
    pub fn add_star(&mut self, person_id: &str, movie_id: &str) -> Result<(), DatasetError> {
        if !self.movies.contains_key(movie_id) {
            return Err(DatasetError::UnknownMovie(movie_id.to_string()));
        }
        let person = self
            .people
            .get_mut(person_id)
            .ok_or_else(|| DatasetError::UnknownPerson(person_id.to_string()))?;
        person.movies.insert(movie_id.to_string());
        if let Some(movie) = self.movies.get_mut(movie_id) {
            movie.stars.insert(person_id.to_string());
        }
        Ok(())
    }

    pub fn build(self) -> Dataset {
        // drop links to people or movies that were replaced after linking
        let Self {
            mut people,
            mut movies,
            names,
        } = self;
        for (movie_id, movie) in &mut movies {
            movie.stars.retain(|star| {
                people
                    .get(star)
                    .is_some_and(|person| person.movies.contains(movie_id))
            });
        }
        for (person_id, person) in &mut people {
            person.movies.retain(|movie_id| {
                movies
                    .get(movie_id)
                    .is_some_and(|movie| movie.stars.contains(person_id))
            });
        }
        Dataset {
            people,
            movies,
            names,
        }
    }
}
